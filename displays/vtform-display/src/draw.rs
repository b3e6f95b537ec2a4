//! Line and box drawing
//!
//! All borders use the alternate character set, which is always switched
//! back off before returning so later text renders normally.

use vtform_hal::SerialTx;

use crate::glyphs::{
    CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, CORNER_TOP_LEFT, CORNER_TOP_RIGHT, HORIZONTAL,
    TEE_LEFT, TEE_RIGHT, VERTICAL,
};
use crate::terminal::{Position, Terminal};

/// Bytes written per call when repeating a glyph
const RUN_CHUNK: usize = 16;

impl<T: SerialTx> Terminal<T> {
    /// Write `byte` `count` times
    pub fn repeat(&mut self, byte: u8, count: usize) {
        let run = [byte; RUN_CHUNK];
        let mut left = count;
        while left > 0 {
            let n = left.min(RUN_CHUNK);
            self.out(&run[..n]);
            left -= n;
        }
    }

    /// Horizontal line of `length` cells from the cursor
    pub fn hline(&mut self, length: u16) {
        self.alt_charset_on();
        self.repeat(HORIZONTAL, length as usize);
        self.alt_charset_off();
    }

    /// Vertical line of `length` cells downwards from the cursor
    ///
    /// Uses relative movement only, so the cursor ends up below the line.
    pub fn vline(&mut self, length: u16) {
        self.alt_charset_on();
        for _ in 0..length {
            self.out(&[VERTICAL]);
            self.send(vtform_protocol::Sequence::Index);
            self.cursor_back(1);
        }
        self.alt_charset_off();
    }

    /// Horizontal line starting at `at`
    pub fn hline_at(&mut self, at: Position, length: u16) {
        self.move_to(at);
        self.hline(length);
    }

    /// Vertical line starting at `at`, addressing every cell absolutely
    pub fn vline_at(&mut self, at: Position, length: u16) {
        self.alt_charset_on();
        for i in 0..length {
            self.move_to(at.offset_row(i));
            self.out(&[VERTICAL]);
        }
        self.alt_charset_off();
    }

    /// Draw a box with its top-left corner at `at`
    ///
    /// `height` and `width` include the border. A title, if given, is
    /// centred on the top border and clipped to fit between the corners.
    /// Boxes smaller than 2x2 are not drawn.
    pub fn draw_box(&mut self, at: Position, height: u16, width: u16, title: Option<&str>) {
        if height < 2 || width < 2 {
            return;
        }
        let inner = width - 2;

        self.move_to(at);
        self.border_row(CORNER_TOP_LEFT, inner, CORNER_TOP_RIGHT);
        if let Some(title) = title {
            self.title(at, width, title);
        }

        self.vline_at(at.offset_row(1), height - 2);
        self.vline_at(at.offset_row(1).offset_col(width - 1), height - 2);

        self.move_to(at.offset_row(height - 1));
        self.border_row(CORNER_BOTTOM_LEFT, inner, CORNER_BOTTOM_RIGHT);
    }

    /// Centre `text` over a border of `width` cells starting at `at`
    pub fn title(&mut self, at: Position, width: u16, text: &str) {
        let text = clip(text, width.saturating_sub(2));
        let offset = (width - text.len() as u16) / 2;
        self.alt_charset_off();
        self.text_at(at.offset_col(offset), text);
    }

    /// Centre `text` over a border, bracketed by tees: `┤text├`
    pub fn title_tee(&mut self, at: Position, width: u16, text: &str) {
        let text = clip(text, width.saturating_sub(4));
        let offset = (width - text.len() as u16) / 2;
        self.move_to(at.offset_col(offset.saturating_sub(1)));
        self.alt_charset_on();
        self.out(&[TEE_RIGHT]);
        self.alt_charset_off();
        self.out_str(text);
        self.alt_charset_on();
        self.out(&[TEE_LEFT]);
        self.alt_charset_off();
    }

    fn border_row(&mut self, left: u8, inner: u16, right: u8) {
        self.alt_charset_on();
        self.out(&[left]);
        self.repeat(HORIZONTAL, inner as usize);
        self.out(&[right]);
        self.alt_charset_off();
    }
}

/// Longest prefix of `text` that fits in `max` cells
fn clip(text: &str, max: u16) -> &str {
    let max = max as usize;
    if text.len() <= max {
        return text;
    }
    // Cut on a char boundary; titles are expected to be ASCII anyway.
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTx;

    fn sent(term: &Terminal<MockTx>) -> &[u8] {
        term.tx().sent.as_slice()
    }

    #[test]
    fn test_hline() {
        let mut term = Terminal::new(MockTx::new());
        term.hline(3);
        assert_eq!(sent(&term), b"\x1b(0qqq\x1b(B");
    }

    #[test]
    fn test_repeat_longer_than_chunk() {
        let mut term = Terminal::new(MockTx::new());
        term.repeat(b'q', 40);
        assert_eq!(sent(&term).len(), 40);
        assert!(sent(&term).iter().all(|&b| b == b'q'));
    }

    #[test]
    fn test_vline_relative() {
        let mut term = Terminal::new(MockTx::new());
        term.vline(2);
        assert_eq!(sent(&term), b"\x1b(0x\x1bD\x1b[1Dx\x1bD\x1b[1D\x1b(B");
    }

    #[test]
    fn test_vline_at() {
        let mut term = Terminal::new(MockTx::new());
        term.vline_at(Position::new(5, 10), 2);
        assert_eq!(sent(&term), b"\x1b(0\x1b[5;10Hx\x1b[6;10Hx\x1b(B");
    }

    #[test]
    fn test_draw_box() {
        let mut term = Terminal::new(MockTx::new());
        term.draw_box(Position::new(4, 10), 3, 4, None);
        assert_eq!(
            sent(&term),
            b"\x1b[4;10H\x1b(0lqqk\x1b(B\
              \x1b(0\x1b[5;10Hx\x1b(B\
              \x1b(0\x1b[5;13Hx\x1b(B\
              \x1b[6;10H\x1b(0mqqj\x1b(B"
        );
    }

    #[test]
    fn test_draw_box_with_title() {
        let mut term = Terminal::new(MockTx::new());
        term.draw_box(Position::new(1, 1), 2, 10, Some("Hi"));
        // (10 - 2) / 2 = 4 cells in from the left corner
        let out = sent(&term);
        let needle = b"\x1b(B\x1b[1;5HHi";
        assert!(out.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn test_title_is_clipped() {
        let mut term = Terminal::new(MockTx::new());
        term.title(Position::new(1, 1), 6, "Overlong");
        assert_eq!(sent(&term), b"\x1b(B\x1b[1;2HOver");
    }

    #[test]
    fn test_title_tee() {
        let mut term = Terminal::new(MockTx::new());
        term.title_tee(Position::new(2, 1), 10, "Ok");
        assert_eq!(sent(&term), b"\x1b[2;4H\x1b(0u\x1b(BOk\x1b(0t\x1b(B");
    }

    #[test]
    fn test_degenerate_box_draws_nothing() {
        let mut term = Terminal::new(MockTx::new());
        term.draw_box(Position::home(), 1, 10, Some("x"));
        term.draw_box(Position::home(), 10, 1, None);
        assert!(sent(&term).is_empty());
    }
}
