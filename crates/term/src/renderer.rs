//! ConsoleRenderer: flushes view lines to the terminal.
//!
//! Output is queued into an internal byte buffer and written in one flush per
//! block, so a state display never appears half-drawn. Styling is applied only
//! when stdout is a terminal; piped output stays plain text.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
    QueueableCommand,
};

use crate::game_view::{Line, LineKind};

pub struct ConsoleRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let styled = stdout.is_tty();
        Self {
            stdout,
            buf: Vec::with_capacity(4 * 1024),
            styled,
        }
    }

    /// Write a block of lines and flush once.
    pub fn render(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.styled, &mut self.buf)?;
        self.flush_buf()
    }

    /// Write a prompt without a trailing newline and flush.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode lines into `out` as crossterm commands without touching stdout.
pub fn encode_lines_into(lines: &[Line], styled: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        if styled {
            if let Some(color) = kind_color(line.kind) {
                out.queue(SetForegroundColor(color))?;
            }
            if line.kind == LineKind::Heading {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            out.queue(Print(line.text.as_str()))?;
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print(line.text.as_str()))?;
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn kind_color(kind: LineKind) -> Option<Color> {
    match kind {
        LineKind::Plain | LineKind::Heading => None,
        LineKind::System => Some(Color::Cyan),
        LineKind::Success => Some(Color::Green),
        LineKind::Warning => Some(Color::Yellow),
    }
}
