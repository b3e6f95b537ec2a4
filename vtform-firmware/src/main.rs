//! vtform demo firmware
//!
//! Draws a VT102 test screen on a terminal attached to UART0, then runs a
//! small form: a text field and a boolean field. Tab and Shift-Tab move
//! between the fields, Enter confirms and Escape cancels. The result is
//! printed back to the terminal and logged over RTT.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vtform_core::FieldGroup;
use vtform_display::Terminal;
use vtform_hal::{IoSerial, SerialConfig};

mod demo;
mod form;
mod uart;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("vtform demo starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let line = SerialConfig::default();
    let tx_buf = TX_BUF.init([0u8; 512]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart::rp_config(&line));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART0 initialized at {} baud", line.baudrate);

    let mut term = Terminal::new(IoSerial::new(tx));
    let mut rx = IoSerial::new(rx);

    let mut group = match FieldGroup::from_config(&form::form_config()) {
        Ok(group) => group,
        Err(e) => {
            error!("Invalid form: {:?}", e);
            park().await
        }
    };

    demo::draw_screen(&mut term);
    group.draw_all(&mut term);
    term.flush();
    info!("Form shown, {} fields", group.len());

    match group.run(&mut rx, &mut term) {
        Ok(outcome) => {
            info!("Form closed: {:?}", outcome);
            demo::report(&mut term, outcome, &group);
        }
        Err(e) => warn!("UART read error: {:?}", e),
    }

    if term.dropped_writes() > 0 {
        warn!("{} terminal writes failed", term.dropped_writes());
    }

    park().await
}

/// Nothing left to do
async fn park() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}
