//! UART line setup

use embassy_rp::uart::{Config as UartConfig, DataBits as RpDataBits, Parity as RpParity, StopBits as RpStopBits};
use vtform_hal::serial::{DataBits, Parity, StopBits};
use vtform_hal::SerialConfig;

/// Translate a line description into embassy-rp's UART config
pub fn rp_config(line: &SerialConfig) -> UartConfig {
    let mut cfg = UartConfig::default();
    cfg.baudrate = line.baudrate;
    cfg.data_bits = match line.data_bits {
        DataBits::Seven => RpDataBits::DataBits7,
        DataBits::Eight => RpDataBits::DataBits8,
    };
    cfg.parity = match line.parity {
        Parity::None => RpParity::ParityNone,
        Parity::Even => RpParity::ParityEven,
        Parity::Odd => RpParity::ParityOdd,
    };
    cfg.stop_bits = match line.stop_bits {
        StopBits::One => RpStopBits::STOP1,
        StopBits::Two => RpStopBits::STOP2,
    };
    cfg
}
