//! Truecolor SGR encoding of rendered cells

use crate::cell::RenderedCell;
use image::Rgb;
use std::io::{self, Write};

/// Clears all styling
pub const RESET: &str = "\x1b[0m";

/// Emitted after every row of cells
pub const ROW_TERMINATOR: &str = "\n";

fn push_fg(buf: &mut String, color: Rgb<u8>) {
    buf.push_str(&format!("\x1b[38;2;{};{};{}m", color[0], color[1], color[2]));
}

fn push_bg(buf: &mut String, color: Rgb<u8>) {
    buf.push_str(&format!("\x1b[48;2;{};{};{}m", color[0], color[1], color[2]));
}

/// Append the escape sequence for one cell to `buf`
///
/// Foreground, background, glyph, reset. The reset is always part of the
/// sequence.
pub fn encode_cell(buf: &mut String, cell: &RenderedCell) {
    push_fg(buf, cell.foreground);
    push_bg(buf, cell.background);
    buf.push(cell.glyph);
    buf.push_str(RESET);
}

/// Write one cell to `sink` with a single `write_all`
pub fn write_cell<W: Write + ?Sized>(sink: &mut W, cell: &RenderedCell) -> io::Result<()> {
    // 2 * "\x1b[38;2;255;255;255m" + glyph + reset
    let mut buf = String::with_capacity(48);
    encode_cell(&mut buf, cell);
    sink.write_all(buf.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::BitPattern;

    fn sample() -> RenderedCell {
        RenderedCell {
            foreground: Rgb([255, 128, 0]),
            background: Rgb([1, 2, 3]),
            glyph: '\u{1CD00}',
            pattern: BitPattern(1),
        }
    }

    #[test]
    fn test_encode_cell_exact_bytes() {
        let mut buf = String::new();
        encode_cell(&mut buf, &sample());
        assert_eq!(
            buf,
            "\x1b[38;2;255;128;0m\x1b[48;2;1;2;3m\u{1CD00}\x1b[0m"
        );
    }

    #[test]
    fn test_write_cell_single_write() {
        struct CountingSink {
            writes: usize,
            bytes: Vec<u8>,
        }

        impl Write for CountingSink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.writes += 1;
                self.bytes.extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = CountingSink {
            writes: 0,
            bytes: Vec::new(),
        };
        write_cell(&mut sink, &sample()).unwrap();

        assert_eq!(sink.writes, 1);
        assert!(sink.bytes.ends_with(RESET.as_bytes()));
    }

    #[test]
    fn test_write_cell_propagates_sink_errors() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_cell(&mut BrokenSink, &sample()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
