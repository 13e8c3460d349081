// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Buffer inspection: hex dump formatting and buffer statistics.

use std::fmt;

/// Bytes per hex dump row.
const ROW_LEN: usize = 16;

/// Width of the hex column: two digits per byte plus separating spaces.
const HEX_COL_WIDTH: usize = ROW_LEN * 3 - 1;

/// Render a buffer as an offset-indexed hex dump.
///
/// One line per 16-byte chunk: an 8-hex-digit zero-padded offset, the byte
/// values as space-separated lowercase hex pairs, and a printable gutter where
/// bytes in `0x20..=0x7e` render as their ASCII character and everything else
/// as `.`. The hex column keeps its full width on a short final chunk so the
/// gutter stays aligned. Every line is newline-terminated; an empty buffer
/// produces an empty string.
///
/// # Example
///
/// ```
/// let dump = transcodec::hexdump(b"hello");
/// assert_eq!(dump, "00000000: 68 65 6c 6c 6f                                   hello\n");
/// ```
pub fn hexdump(buffer: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in buffer.chunks(ROW_LEN).enumerate() {
        let hex_bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        let printable: String = chunk
            .iter()
            .map(|&b| if (0x20..=0x7e).contains(&b) { b as char } else { '.' })
            .collect();
        out.push_str(&format!(
            "{:08x}: {:<width$}  {}\n",
            i * ROW_LEN,
            hex_bytes.join(" "),
            printable,
            width = HEX_COL_WIDTH
        ));
    }
    out
}

/// Summary statistics for a buffer, computed over its lossy UTF-8 view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Text lines.
    pub lines: usize,
    /// Unicode characters.
    pub chars: usize,
    /// Raw bytes.
    pub bytes: usize,
}

impl BufferStats {
    /// Compute statistics for a buffer.
    pub fn of(buffer: &[u8]) -> Self {
        let text = String::from_utf8_lossy(buffer);
        Self {
            words: text.split_whitespace().count(),
            lines: text.lines().count(),
            chars: text.chars().count(),
            bytes: buffer.len(),
        }
    }
}

impl fmt::Display for BufferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Words: {}  Lines: {}  Characters: {}  Bytes: {}",
            self.words, self.lines, self.chars, self.bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexdump_empty() {
        assert_eq!(hexdump(b""), "");
    }

    #[test]
    fn test_hexdump_single_row() {
        assert_eq!(
            hexdump(b"hi"),
            "00000000: 68 69                                            hi\n"
        );
    }

    #[test]
    fn test_hexdump_printable_gutter() {
        let dump = hexdump(&[0x41, 0x00, 0x7f, 0x80]);
        assert_eq!(
            dump,
            "00000000: 41 00 7f 80                                      A...\n"
        );
    }

    #[test]
    fn test_hexdump_two_rows_alignment() {
        let buffer: Vec<u8> = (0u8..17).map(|i| b'a' + i).collect();
        let dump = hexdump(&buffer);
        let dump_lines: Vec<&str> = dump.lines().collect();
        assert_eq!(dump_lines.len(), 2);
        assert!(dump_lines[0].starts_with("00000000: "));
        assert!(dump_lines[1].starts_with("00000010: "));
        // the short final row pads its hex column to the full width
        let gutter_col = |line: &str| line.rfind("  ").unwrap();
        assert_eq!(gutter_col(dump_lines[0]), gutter_col(dump_lines[1]));
    }

    #[test]
    fn test_hexdump_full_row_has_16_pairs() {
        let dump = hexdump(&[0u8; 16]);
        assert_eq!(
            dump,
            "00000000: 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00  ................\n"
        );
    }

    #[test]
    fn test_buffer_stats() {
        let stats = BufferStats::of("two words\nsecond line \u{20ac}".as_bytes());
        assert_eq!(stats.words, 5);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.chars, 23);
        assert_eq!(stats.bytes, 25);
    }

    #[test]
    fn test_buffer_stats_display() {
        let stats = BufferStats::of(b"abc");
        assert_eq!(stats.to_string(), "Words: 1  Lines: 1  Characters: 3  Bytes: 3");
    }
}
