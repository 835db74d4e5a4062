//! Hex/ASCII line formatting and column geometry.
//!
//! One display line is: a split 8.8-digit hex offset, sixteen hex byte
//! pairs with an extra gap before columns 0 and 8, and a sixteen-char
//! ASCII gutter split into two groups of eight.
//!
//! ```text
//! 0000 0090: 12 34 56 78 9A BC DE F0  12 34 56 78 9A BC DE F0  .4Vx.... .4Vx....
//! ```
//!
//! Everything here is pure formatting; the same column functions drive
//! both line layout and diff-highlight placement.

use crate::view::BYTES_PER_LINE;
use std::fmt::Write;

/// Screen column where the hex field starts.
pub const HEX_COLUMN: usize = 11;

/// Screen column where the ASCII gutter starts.
pub const ASCII_COLUMN: usize = 61;

/// Total width of a fully populated line.
pub const LINE_WIDTH: usize = ASCII_COLUMN + BYTES_PER_LINE + 1;

/// Screen column of the hex pair for byte column `col`.
#[inline]
pub const fn hex_column(col: usize) -> usize {
    HEX_COLUMN + 3 * col + (col > 7) as usize
}

/// Screen column of the ASCII character for byte column `col`.
#[inline]
pub const fn ascii_column(col: usize) -> usize {
    ASCII_COLUMN + col + (col > 7) as usize
}

/// The character shown for a byte in the ASCII gutter.
///
/// Printable ASCII is shown as-is; control bytes and everything past
/// 0x7E become `.`.
#[inline]
pub const fn printable(byte: u8) -> char {
    if byte >= 0x20 && byte <= 0x7E {
        byte as char
    } else {
        '.'
    }
}

/// Format a file offset as the split `XXXX XXXX:` field.
///
/// Both halves are masked to 16 bits, so the display wraps at 4 GiB.
/// The field width stays fixed either way, which is what the column
/// geometry above depends on.
pub fn format_offset(offset: u64) -> String {
    format!("{:04X} {:04X}:", (offset >> 16) & 0xFFFF, offset & 0xFFFF)
}

/// Format one full display line for `bytes` starting at `offset`.
///
/// `bytes` may be shorter than [`BYTES_PER_LINE`] (or empty) at
/// end-of-file; missing cells render as spaces. The result is always
/// exactly [`LINE_WIDTH`] characters.
pub fn format_line(offset: u64, bytes: &[u8]) -> String {
    debug_assert!(bytes.len() <= BYTES_PER_LINE);
    let mut line = String::with_capacity(LINE_WIDTH);
    line.push_str(&format_offset(offset));
    line.push(' ');

    for col in 0..BYTES_PER_LINE {
        if col == 8 {
            line.push(' ');
        }
        match bytes.get(col) {
            Some(b) => {
                let _ = write!(line, "{b:02X} ");
            }
            None => line.push_str("   "),
        }
    }

    line.push(' ');
    for col in 0..BYTES_PER_LINE {
        if col == 8 {
            line.push(' ');
        }
        match bytes.get(col) {
            Some(&b) => line.push(printable(b)),
            None => line.push(' '),
        }
    }

    debug_assert_eq!(line.len(), LINE_WIDTH);
    line
}
