//! TerminalRenderer: owns the terminal session and flushes framebuffers to it.
//!
//! Frames are encoded into a reusable byte buffer first and written with a
//! single `write_all`, so a frame never reaches the terminal half drawn.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: FrameBuffer,
    full_redraw: bool,
    active: bool,
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
            prev: FrameBuffer::new(0, 0),
            full_redraw: true,
            active: false,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.full_redraw = true;
        Ok(())
    }

    /// Undo everything `enter` did. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        // Leave raw mode even if the escape sequences could not be written.
        let written = self.flush_buf();
        terminal::disable_raw_mode()?;
        written
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents that the caller overwrites on
    /// the next render; no frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let resized = self.prev.width() != fb.width() || self.prev.height() != fb.height();
        if self.full_redraw || resized {
            encode_full_into(fb, &mut self.buf)?;
            self.full_redraw = false;
        } else {
            encode_diff_into(&self.prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;
        std::mem::swap(&mut self.prev, fb);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a complete repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for (y, row) in rows(fb).enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        print_cells(out, row, &mut pen)?;
    }
    finish(out)
}

/// Encode only the cells that differ between `prev` and `next`.
///
/// Both buffers must have the same dimensions; otherwise a full repaint is
/// encoded instead.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = None;
    let mut any = false;
    for (y, (old, new)) in rows(prev).zip(rows(next)).enumerate() {
        for (start, end) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y as u16))?;
            print_cells(out, &new[start..end], &mut pen)?;
            any = true;
        }
    }
    if any {
        finish(out)?;
    }
    Ok(())
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = &[Cell]> {
    let width = (fb.width() as usize).max(1);
    fb.cells().chunks(width)
}

/// Half-open column ranges where two rows differ, adjacent cells merged.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old[x] == new[x] {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old[x] != new[x] {
            x += 1;
        }
        Some((start, x))
    })
}

fn print_cells(out: &mut Vec<u8>, cells: &[Cell], pen: &mut Option<CellStyle>) -> Result<()> {
    for cell in cells {
        if *pen != Some(cell.style) {
            set_style(out, cell.style)?;
            *pen = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(text: &str) -> Vec<Cell> {
        text.chars().map(|ch| CellStyle::default().cell(ch)).collect()
    }

    #[test]
    fn test_changed_runs_merge_adjacent_cells() {
        let old = row_of("abcdefg");
        let new = row_of("aXYdeZg");
        let runs: Vec<_> = changed_runs(&old, &new).collect();
        assert_eq!(runs, vec![(1, 3), (5, 6)]);
    }

    #[test]
    fn test_identical_frames_encode_nothing() {
        let fb = FrameBuffer::new(6, 3);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_diff_is_smaller_than_full_repaint() {
        let prev = FrameBuffer::new(40, 10);
        let mut next = prev.clone();
        next.put_char(3, 4, '%', CellStyle::default());

        let mut full = Vec::new();
        encode_full_into(&next, &mut full).unwrap();
        let mut diff = Vec::new();
        encode_diff_into(&prev, &next, &mut diff).unwrap();

        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
        assert!(String::from_utf8_lossy(&diff).contains('%'));
    }

    #[test]
    fn test_size_mismatch_falls_back_to_full_repaint() {
        let prev = FrameBuffer::new(2, 2);
        let next = FrameBuffer::new(3, 2);
        let mut a = Vec::new();
        encode_diff_into(&prev, &next, &mut a).unwrap();
        let mut b = Vec::new();
        encode_full_into(&next, &mut b).unwrap();
        assert_eq!(a, b);
    }
}
