//! Demo screen and result report

use core::fmt::Write as _;

use heapless::String;
use vtform_core::{FieldGroup, Outcome};
use vtform_display::{Attribute, Position, Sequence, Terminal};
use vtform_hal::SerialTx;

use crate::form::LABELS;

const TITLE: &str = "VT102 Test Screen";

/// Draw the attribute samples, the form box and the field labels
pub fn draw_screen<T: SerialTx>(term: &mut Terminal<T>) {
    term.send(Sequence::Columns80);
    term.clear_screen();
    term.home();
    term.cursor_down(1);

    // Double-height lines are drawn twice, top half then bottom half
    term.send(Sequence::DoubleHeightTop);
    term.out_str(TITLE);
    term.out_str("\r\n");
    term.send(Sequence::DoubleHeightBottom);
    term.out_str(TITLE);
    term.attrs_off();

    term.text_at(Position::new(10, 1), "Normal");
    term.write_at(Some(Position::new(11, 1)), "Bold", Some(Attribute::Bold));
    term.write_at(Some(Position::new(12, 1)), "Dim", Some(Attribute::Dim));
    term.write_at(Some(Position::new(13, 1)), "Underline", Some(Attribute::Underline));

    // Vendor logo, letters separated by vertical bars, in reverse video
    term.attr_on(Attribute::Reverse);
    term.move_to(Position::new(14, 1));
    for (i, letter) in "digital".chars().enumerate() {
        if i > 0 {
            term.alt_charset_on();
            term.out(b"x");
            term.alt_charset_off();
        }
        let mut buf = [0u8; 4];
        term.out_str(letter.encode_utf8(&mut buf));
    }
    term.attrs_off();
    term.out_str(" Reverse");

    term.write_at(Some(Position::new(15, 1)), "Blink", Some(Attribute::Blink));

    term.draw_box(Position::new(4, 10), 4, 18, None);
    for &(row, col, text) in LABELS {
        term.text_at(Position::new(row, col), text);
    }
}

/// Print how the form was closed and what it holds
pub fn report<T: SerialTx>(term: &mut Terminal<T>, outcome: Outcome, group: &FieldGroup) {
    let mut line: String<192> = String::new();

    let _ = write!(line, "The input dialog returned: {:?}\r\n", outcome);
    term.out_str(&line);

    for (i, field) in group.fields().iter().enumerate() {
        line.clear();
        let _ = match field.state() {
            Some(state) => write!(line, "Field {} was set to: {}\r\n", i, state),
            None => write!(line, "Field {} returned: {}\r\n", i, field.content()),
        };
        term.out_str(&line);
    }
    term.flush();
}
