//! Output formats for styled lines.

use glint_buffer::Line;
use glint_syntax::{Rgb, StyleRange};
use serde::Serialize;
use std::io::{self, Write};

/// How styled lines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Source text with 24-bit ANSI colors
    Ansi,
    /// One JSON object per line
    Json,
    /// One style range per row
    Ranges,
}

/// A line's styles as written by the JSON format.
#[derive(Serialize)]
struct LineRecord<'a> {
    line: usize,
    offset: usize,
    styles: &'a [StyleRange],
}

/// Writes one styled line in `format`.
pub fn write_line(
    out: &mut impl Write,
    format: Format,
    line: &Line<'_>,
    styles: &[StyleRange],
) -> io::Result<()> {
    match format {
        Format::Ansi => write_ansi(out, line, styles),
        Format::Json => {
            let record = LineRecord {
                line: line.index + 1,
                offset: line.offset,
                styles,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)
        }
        Format::Ranges => {
            for style in styles {
                writeln!(
                    out,
                    "{}:{}+{} {} {}{}",
                    line.index + 1,
                    style.start,
                    style.len,
                    style.kind,
                    style.color,
                    if style.bold { " bold" } else { "" }
                )?;
            }
            Ok(())
        }
    }
}

/// Writes the line text with each range wrapped in color escapes.
fn write_ansi(out: &mut impl Write, line: &Line<'_>, styles: &[StyleRange]) -> io::Result<()> {
    let text: &str = &line.text;
    let mut pos = 0;

    for style in styles {
        let start = style.start.min(line.end()) - line.offset;
        let end = style.end().min(line.end()) - line.offset;
        out.write_all(text[pos..start].as_bytes())?;
        write_color(out, style.color, style.bold)?;
        out.write_all(text[start..end].as_bytes())?;
        out.write_all(b"\x1b[0m")?;
        pos = end;
    }

    out.write_all(text[pos..].as_bytes())?;
    writeln!(out)
}

fn write_color(out: &mut impl Write, color: Rgb, bold: bool) -> io::Result<()> {
    if bold {
        out.write_all(b"\x1b[1m")?;
    }
    write!(out, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}
