//! Clock face rendering.
//!
//! The frame is built as plain text (`render_frame`) so it can be inspected and
//! compared; `ClockRenderer::paint` repaints the terminal with it.

use crate::clock::glyphs::{GLYPH_ROWS, glyph};
use crate::errors::AppResult;
use ansi_term::Colour;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub const STATUS_PAUSED: &str = "⏸️  Paused - Press 'p' to resume | 'q' to end task";
pub const STATUS_TRACKING: &str = "▶️  Tracking - Press 'p' to pause | 'q' to end task";

/// `HH:MM:SS`, hours not wrapped at 24.
pub fn format_hms(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let h = total / 3600;
    let m = (total / 60) % 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

/// The five glyph rows for `elapsed`; every symbol is followed by two spaces.
pub fn render_rows(elapsed: Duration) -> [String; GLYPH_ROWS] {
    let mut rows: [String; GLYPH_ROWS] = Default::default();
    for g in format_hms(elapsed).chars().filter_map(glyph) {
        for (row, part) in rows.iter_mut().zip(g.iter()) {
            row.push_str(part);
            row.push_str("  ");
        }
    }
    rows
}

pub fn status_line(paused: bool) -> &'static str {
    if paused {
        STATUS_PAUSED
    } else {
        STATUS_TRACKING
    }
}

/// Full frame: glyph rows, an empty line, the status line.
pub fn render_frame(elapsed: Duration, paused: bool) -> Vec<String> {
    let mut lines: Vec<String> = render_rows(elapsed).into_iter().collect();
    lines.push(String::new());
    lines.push(status_line(paused).to_string());
    lines
}

pub struct ClockRenderer<W: Write = Stdout> {
    out: W,
}

impl ClockRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ClockRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the screen and draw the clock. Lines end with `\r\n` because the
    /// terminal is in raw mode while a session runs.
    pub fn paint(&mut self, elapsed: Duration, paused: bool) -> AppResult<()> {
        let colour = if paused {
            Colour::Yellow
        } else {
            Colour::Green
        };

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for row in render_rows(elapsed) {
            write!(self.out, "{}\r\n", colour.bold().paint(row))?;
        }
        write!(self.out, "\r\n{}\r\n", status_line(paused))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
