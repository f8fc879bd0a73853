//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.

use crate::encoding::encode_ascii;

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for serial receipt printers.
/// Text is encoded to ASCII as it is written, so control bytes and
/// text never mix encodings.
pub struct EscPosBuilder {
    buf: Vec<u8>,
    width: usize,
}

impl EscPosBuilder {
    /// Create a new builder with the specified paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        let mut buf = Vec::with_capacity(1024);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self { buf, width }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text (ASCII encoded)
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(&encode_ascii(s));
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(b'\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Write `count` empty lines
    pub fn blank_lines(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.newline();
        }
        self
    }

    // === Separators ===

    /// Print `len` copies of `ch`, clamped to the paper width
    pub fn rule(&mut self, ch: char, len: usize) -> &mut Self {
        let len = len.min(self.width);
        self.line(&ch.to_string().repeat(len))
    }

    // === Paper Control ===

    /// Cut after feeding `lines`
    ///
    /// GS V A n. Cheap Bluetooth printers accept this form; others may
    /// ignore it.
    pub fn cut_feed(&mut self, lines: u8) -> &mut Self {
        self.raw(&[0x1D, 0x56, 0x41, lines])
    }

    // === Raw Commands ===

    /// Write raw bytes directly
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    // === Build ===

    /// Build the final byte buffer
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_starts_with_init() {
        let b = EscPosBuilder::new(32);
        assert_eq!(b.build(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_lines_and_cut() {
        let mut b = EscPosBuilder::new(32);
        b.line("Retail Invoice").blank_lines(2).cut_feed(0x10);

        let data = b.build();
        assert_eq!(&data[2..17], b"Retail Invoice\n");
        assert_eq!(&data[17..19], b"\n\n");
        assert_eq!(&data[data.len() - 4..], &[0x1D, 0x56, 0x41, 0x10]);
    }

    #[test]
    fn test_rule_clamped_to_width() {
        let mut b = EscPosBuilder::new(10);
        b.rule('-', 24);

        let data = b.build();
        let s = String::from_utf8_lossy(&data[2..]);
        assert_eq!(s, "----------\n");
    }

    #[test]
    fn test_raw_passthrough() {
        let mut b = EscPosBuilder::default();
        assert_eq!(b.width(), 32);
        b.raw(&[0x1B, 0x61, 0x01]).line("Centered");

        let data = b.build();
        assert_eq!(&data[2..5], &[0x1B, 0x61, 0x01]);
        assert_eq!(&data[5..], b"Centered\n");
    }

    #[test]
    fn test_text_is_ascii() {
        let mut b = EscPosBuilder::new(32);
        b.line("Total: ₹560");

        let data = b.build();
        assert!(data.iter().all(u8::is_ascii));
        assert!(String::from_utf8_lossy(&data).contains("Total: Rs.560"));
    }
}
