//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The wall ring of the board is drawn as a box border; every interior cell is
//! `cell_w` terminal columns wide and one row tall.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, SlotCode};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(20, 24, 20);
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

/// Panel text needs at least this many free columns to be drawn.
const MIN_PANEL_WIDTH: u16 = 18;

/// A lightweight terminal renderer for the snake board and its info panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns (1 or 2).
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, 2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the boxed board for a given board size (wall ring included).
    pub fn frame_size(&self, board_size: u16) -> (u16, u16) {
        let interior = board_size.saturating_sub(2);
        (interior * self.cell_w + 2, interior + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let size = snap.board_size();
        let (frame_w, frame_h) = self.frame_size(size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let last = size as i32 - 1;
        for row in 1..last {
            for col in 1..last {
                let slot = snap.board.get(row, col).unwrap_or_default();
                self.draw_slot(fb, start_x, start_y, Position::new(row, col), slot);
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, viewport, panel_x, start_y);

        if !snap.playable() {
            let text = if snap.won() { "YOU WIN!" } else { "GAME OVER" };
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_slot(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Position, slot: SlotCode) {
        let px = start_x + 1 + (pos.col as u16 - 1) * self.cell_w;
        let py = start_y + 1 + (pos.row as u16 - 1);
        let [left, right] = glyphs(slot);
        let style = CellStyle {
            bg: BOARD_BG,
            ..slot_style(slot)
        };
        fb.put_char(px, py, left, style);
        if self.cell_w > 1 {
            fb.put_char(px + 1, py, right, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let mut y = start_y;
        if snap.playable() {
            fb.put_str(panel_x, y, "LENGTH", LABEL);
            y = y.saturating_add(1);
            let x = fb.put_u64(panel_x, y, snap.length as u64, VALUE);
            let x = fb.put_str(x, y, " / ", VALUE);
            fb.put_u64(x, y, snap.capacity as u64, VALUE);
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "HEAD", LABEL);
            y = y.saturating_add(1);
            put_position(fb, panel_x, y, Some(snap.head));
            y = y.saturating_add(2);

            fb.put_str(panel_x, y, "PILL", LABEL);
            y = y.saturating_add(1);
            put_position(fb, panel_x, y, snap.pill);
        } else {
            let text = if snap.won() { "YOU WIN!" } else { "GAME OVER" };
            fb.put_str(panel_x, y, text, LABEL);
            y = y.saturating_add(1);
            let x = fb.put_str(panel_x, y, "Final length: ", VALUE);
            fb.put_u64(x, y, snap.length as u64, VALUE);
            y = y.saturating_add(2);
            fb.put_str(panel_x, y, "q quit  r restart", VALUE.dim());
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Two-column glyph for a slot. Single-column views use the first char.
pub fn glyphs(slot: SlotCode) -> [char; 2] {
    match slot {
        SlotCode::Empty => [' ', ' '],
        SlotCode::Pill => ['*', ' '],
        SlotCode::Head => ['%', ' '],
        SlotCode::VerticalLine => ['│', ' '],
        SlotCode::HorizontalLine => ['─', '─'],
        SlotCode::CornerLL => ['└', '─'],
        SlotCode::CornerLR => ['┘', ' '],
        SlotCode::CornerUL => ['┌', '─'],
        SlotCode::CornerUR => ['┐', ' '],
        SlotCode::Tail => ['•', ' '],
    }
}

fn slot_style(slot: SlotCode) -> CellStyle {
    match slot {
        SlotCode::Empty => CellStyle::default(),
        SlotCode::Pill => CellStyle::fg(Rgb::new(230, 80, 80)).bold(),
        SlotCode::Head => CellStyle::fg(Rgb::new(140, 240, 120)).bold(),
        SlotCode::Tail => CellStyle::fg(Rgb::new(90, 170, 90)),
        _ => CellStyle::fg(Rgb::new(110, 210, 100)),
    }
}

fn put_position(fb: &mut FrameBuffer, x: u16, y: u16, pos: Option<Position>) {
    let Some(pos) = pos else {
        fb.put_char(x, y, '-', VALUE);
        return;
    };
    let x = fb.put_str(x, y, "(", VALUE);
    let x = fb.put_u64(x, y, pos.row.max(0) as u64, VALUE);
    let x = fb.put_str(x, y, ",", VALUE);
    let x = fb.put_u64(x, y, pos.col.max(0) as u64, VALUE);
    fb.put_str(x, y, ")", VALUE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_pairs_continue_horizontal_runs() {
        // Shapes that open to the east carry a line into the second column.
        for slot in [SlotCode::HorizontalLine, SlotCode::CornerLL, SlotCode::CornerUL] {
            assert_eq!(glyphs(slot)[1], '─');
        }
        for slot in [SlotCode::VerticalLine, SlotCode::CornerLR, SlotCode::CornerUR, SlotCode::Tail] {
            assert_eq!(glyphs(slot)[1], ' ');
        }
    }

    #[test]
    fn test_frame_size() {
        let view = GameView::default();
        // 15x15 board: 13 interior cells, 2 columns each, plus the border.
        assert_eq!(view.frame_size(15), (28, 15));
        assert_eq!(GameView::new(1).frame_size(5), (5, 5));
    }
}
