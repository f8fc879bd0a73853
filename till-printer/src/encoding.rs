//! ASCII encoding utilities for serial receipt printers
//!
//! Cheap Bluetooth receipt printers only render the single-byte ASCII range
//! reliably. This module provides utilities for:
//! - Calculating printed string widths
//! - Truncating/padding strings to a column width
//! - Converting UTF-8 text to ASCII bytes, transliterating common symbols

/// Printed in place of characters with no ASCII rendering
const REPLACEMENT: u8 = b'?';

/// ASCII spelling of symbols that show up on receipts
fn transliterate(c: char) -> Option<&'static str> {
    match c {
        '₹' => Some("Rs."),
        '€' => Some("EUR"),
        '£' => Some("GBP"),
        '×' => Some("x"),
        '–' | '—' => Some("-"),
        '‘' | '’' => Some("'"),
        '“' | '”' => Some("\""),
        '\u{a0}' => Some(" "),
        _ => None,
    }
}

fn char_width(c: char) -> usize {
    if c.is_ascii() {
        1
    } else {
        transliterate(c).map_or(1, str::len)
    }
}

/// Get the printed width of a string once encoded
pub fn ascii_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Truncate a string to fit within a printed width
pub fn truncate_ascii(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if width + w > max_width {
            break;
        }
        result.push(c);
        width += w;
    }
    result
}

/// Pad a string to a specific printed width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_ascii(s: &str, width: usize, align_right: bool) -> String {
    let current_width = ascii_width(s);
    if current_width >= width {
        return truncate_ascii(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Encode text as printer bytes
///
/// Printable ASCII passes through untouched, known symbols are spelled
/// out and everything else becomes `?`. Control characters are replaced
/// too, so text can never carry a printer command or a line break.
pub fn encode_ascii(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_control() {
            out.push(REPLACEMENT);
        } else if c.is_ascii() {
            out.push(c as u8);
        } else if let Some(t) = transliterate(c) {
            out.extend_from_slice(t.as_bytes());
        } else {
            out.push(REPLACEMENT);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(ascii_width("hello"), 5);
        assert_eq!(ascii_width("₹600"), 6); // "Rs.600"
        assert_eq!(ascii_width("日本"), 2); // one '?' each
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_ascii("hello world", 5), "hello");
        assert_eq!(truncate_ascii("₹600", 2), "");
        assert_eq!(truncate_ascii("₹600", 4), "₹6");
    }

    #[test]
    fn test_pad_ascii() {
        assert_eq!(pad_ascii("hi", 5, false), "hi   ");
        assert_eq!(pad_ascii("hi", 5, true), "   hi");
        assert_eq!(pad_ascii("hello world", 5, false), "hello");
    }

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode_ascii("Total: ₹1160"), b"Total: Rs.1160".to_vec());
        assert_eq!(encode_ascii("café"), b"caf?".to_vec());
    }

    #[test]
    fn test_control_characters_are_replaced() {
        assert_eq!(encode_ascii("Soap\x1DVA\x10"), b"Soap?VA?".to_vec());
        assert_eq!(encode_ascii("two\nlines\t"), b"two?lines?".to_vec());
        assert_eq!(ascii_width("two\nlines"), 9);
    }
}
