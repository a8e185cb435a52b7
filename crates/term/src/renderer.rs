//! TerminalRenderer: flushes frames to the real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, event,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, focus reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableFocusChange)?;
        self.buf.queue(cursor::Hide)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableFocusChange)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_diff(prev, frame, &mut self.buf)?
            }
            _ => encode_full(frame, &mut self.buf)?,
        }
        self.flush()?;
        match self.last.as_mut() {
            Some(last) => last.clone_from(frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Commands that repaint the whole frame.
pub fn encode_full(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        write_run(frame, 0, y, frame.width(), &mut style, out)?;
    }
    finish(out)
}

/// Commands that repaint only the runs of glyphs that differ from `prev`.
///
/// Both frames must have the same size.
pub fn encode_diff(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        write_run(next, x, y, len, &mut style, out)?;
    }
    finish(out)
}

fn write_run(
    frame: &Frame,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<Style>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for cx in x..x + len {
        let glyph = frame.get(cx, y).unwrap_or_default();
        if *current != Some(glyph.style) {
            apply_style(glyph.style, out)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(style: Style, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// (x, y, len) of each horizontal run of differing glyphs.
fn changed_runs(prev: &Frame, next: &Frame) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
