//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header line (mode, match size, score), the board
//! frame with one `cell_w x cell_h` block per tile, then a footer with
//! progress, the host's status message and key help. A won board gets a
//! centered overlay with the name prompt.

use crate::core::{perfect_score, GameSnapshot, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TilePos;

const HEADER_H: u16 = 2;
const FOOTER_H: u16 = 4;
const HELP: &str = "arrows/hjkl move  space flip  r reset  q quit";

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Host-side state drawn around the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostStatusView<'a> {
    /// Tile under the keyboard cursor.
    pub cursor: Option<TilePos>,
    /// Name typed so far, while the win prompt is open.
    pub prompt: Option<&'a str>,
    pub message: Option<(&'a str, MessageKind)>,
}

/// Where the board frame lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 reads as roughly square with typical glyph aspect ratio.
        Self {
            cell_w: 5,
            cell_h: 3,
            gap_x: 2,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> BoardLayout {
        let rows = snap.board.rows();
        let columns = snap.board.columns();
        let frame_w = clamp_u16(
            2 + self.gap_x as u32 + columns * (self.cell_w + self.gap_x) as u32,
        );
        let frame_h = clamp_u16(
            2 + self.gap_y as u32 + rows * (self.cell_h + self.gap_y) as u32,
        );
        let content_h = frame_h.saturating_add(HEADER_H + FOOTER_H);

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 0,
        };
        BoardLayout {
            x,
            y: top.saturating_add(HEADER_H),
            frame_w,
            frame_h,
        }
    }

    /// Top-left terminal cell of the tile at `pos`.
    pub fn tile_origin(&self, layout: &BoardLayout, pos: TilePos) -> (u16, u16) {
        let px = layout.x as u32
            + 1
            + self.gap_x as u32
            + pos.column * (self.cell_w + self.gap_x) as u32;
        let py = layout.y as u32
            + 1
            + self.gap_y as u32
            + pos.row * (self.cell_h + self.gap_y) as u32;
        (clamp_u16(px), clamp_u16(py))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        host: &HostStatusView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap, viewport);

        self.draw_header(fb, snap, viewport, &layout);

        let bg = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        self.draw_border(fb, layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        let mismatch = snap.pending_clear_ms.is_some();
        for tile in snap.board.iter() {
            self.draw_tile(fb, &layout, tile, mismatch);
        }

        if let Some(cursor) = host.cursor.filter(|_| !snap.won) {
            self.draw_cursor(fb, &layout, cursor);
        }

        self.draw_footer(fb, snap, host, viewport, &layout);

        if snap.won {
            self.draw_win_overlay(fb, snap, host, viewport, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        host: &HostStatusView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, host, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let y = layout.y.saturating_sub(HEADER_H);
        let text = format!(
            "{}   Matches: {}   Score: {}",
            snap.config.mode, snap.config.match_size, snap.score
        );
        let style = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(0, viewport.width, y, &text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, tile: &Tile, mismatch: bool) {
        let (px, py) = self.tile_origin(layout, tile.pos());
        let mid = py + self.cell_h / 2;

        if !tile.is_face_up() {
            let style = CellStyle::new(Rgb::new(110, 110, 130), Rgb::new(60, 60, 80)).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
            return;
        }

        let style = if tile.locked {
            CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(90, 190, 110))
        } else if mismatch {
            CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(200, 60, 60)).bold()
        } else {
            CellStyle::new(value_color(tile.value), Rgb::new(235, 235, 235)).bold()
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_str_centered(px, self.cell_w, mid, &value_label(tile.value), style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, cursor: TilePos) {
        let (px, py) = self.tile_origin(layout, cursor);
        let style = CellStyle::new(Rgb::new(255, 210, 60), Rgb::new(30, 30, 40)).bold();
        let mid = py + self.cell_h / 2;
        fb.put_char(px.saturating_sub(1), mid, '▶', style);
        fb.put_char(px + self.cell_w, mid, '◀', style);
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        host: &HostStatusView<'_>,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let mut y = layout.y.saturating_add(layout.frame_h);
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let progress = format!(
            "Found {}/{}",
            snap.groups_found(),
            snap.config.group_count()
        );
        fb.put_str_centered(0, viewport.width, y, &progress, value);
        y = y.saturating_add(1);

        if let Some((text, kind)) = host.message {
            let fg = match kind {
                MessageKind::Info => Rgb::new(120, 220, 140),
                MessageKind::Error => Rgb::new(240, 80, 80),
            };
            fb.put_str_centered(0, viewport.width, y, text, CellStyle::new(fg, Rgb::new(0, 0, 0)));
        }
        y = y.saturating_add(1);

        fb.put_str_centered(0, viewport.width, y, HELP, value.dim());
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        host: &HostStatusView<'_>,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let score = format!(
            "Score: {}   Best possible: {}",
            snap.score,
            perfect_score(snap.config.group_count())
        );
        let name_line;
        let mut lines: Vec<&str> = vec!["YOU WIN!", score.as_str()];
        match host.prompt {
            Some(name) => {
                name_line = format!("Name: {name}_");
                lines.push(&name_line);
                lines.push("enter save  ctrl-r new board");
            }
            None => lines.push("r new board  q quit"),
        }

        let inner_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let w = inner_w + 4;
        let h = lines.len() as u16 + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = layout
            .y
            .saturating_add(layout.frame_h / 2)
            .saturating_sub(h / 2);

        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(20, 60, 30));
        fb.fill_rect(x, y, w, h, ' ', style);
        self.draw_border(fb, x, y, w, h, style);
        for (i, line) in lines.iter().enumerate() {
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str_centered(x, w, y + 1 + i as u16, line, line_style);
        }
    }
}

/// Face label for a group value: `A`..`Z`, then the number itself.
pub fn value_label(value: u32) -> String {
    if value < 26 {
        char::from(b'A' + value as u8).to_string()
    } else {
        value.to_string()
    }
}

fn value_color(value: u32) -> Rgb {
    const PALETTE: [Rgb; 8] = [
        Rgb::new(200, 40, 40),
        Rgb::new(30, 110, 200),
        Rgb::new(30, 140, 60),
        Rgb::new(170, 60, 180),
        Rgb::new(210, 120, 0),
        Rgb::new(0, 140, 140),
        Rgb::new(120, 80, 40),
        Rgb::new(60, 60, 60),
    ];
    PALETTE[(value as usize) % PALETTE.len()]
}

fn clamp_u16(v: u32) -> u16 {
    v.min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_labels() {
        assert_eq!(value_label(0), "A");
        assert_eq!(value_label(25), "Z");
        assert_eq!(value_label(26), "26");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(value_color(0), value_color(8));
        assert_ne!(value_color(0), value_color(1));
    }
}
