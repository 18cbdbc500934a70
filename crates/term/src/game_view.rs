//! GameView: maps the board model into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{is_at_wall, Board, GameState};
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{CellKind, Movement, Point};

const BOARD_BG: Rgb = Rgb::new(25, 30, 25);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// What the loop is currently doing, for overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStatus {
    Running,
    Paused,
    GameOver,
    /// The snake filled the board; there is nowhere left for an apple.
    BoardFull,
}

/// Side panel contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudInfo {
    pub length: usize,
    pub head: Point,
    pub heading: Movement,
    pub steps: u32,
    pub seed: u32,
    pub status: PlayStatus,
}

impl HudInfo {
    pub fn from_state(state: &GameState, seed: u32, status: PlayStatus) -> Self {
        Self {
            length: state.snake().len(),
            head: state.snake().head(),
            heading: state.heading(),
            steps: state.steps(),
            seed,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board frame lands in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame(&self, board: &Board, viewport: Viewport) -> Frame {
        let info = board.info();
        let w = info.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = info.height.saturating_mul(self.cell_h).saturating_add(2);
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    /// Render the board and HUD into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, board: &Board, hud: &HudInfo, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let frame = self.frame(board, viewport);
        self.draw_border(fb, frame);

        for p in board.points() {
            let kind = board.get(p).unwrap_or_default();
            self.draw_cell(fb, frame, p, kind);
        }

        self.draw_side_panel(fb, board, hud, viewport, frame);

        match hud.status {
            PlayStatus::Running => {}
            PlayStatus::Paused => self.draw_overlay_text(fb, frame, "PAUSED"),
            PlayStatus::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            PlayStatus::BoardFull => self.draw_overlay_text(fb, frame, "BOARD FULL"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, hud: &HudInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, hud, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of board cell `p`.
    fn cell_origin(&self, frame: Frame, p: Point) -> (u16, u16) {
        let x = (p.col - 1).saturating_mul(self.cell_w).saturating_add(frame.x + 1);
        let y = (p.row - 1).saturating_mul(self.cell_h).saturating_add(frame.y + 1);
        (x, y)
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, p: Point, kind: CellKind) {
        let (ch, style) = match kind {
            CellKind::Empty => ('·', CellStyle::new(Rgb::new(80, 90, 80), BOARD_BG).dim()),
            CellKind::Snake => ('█', CellStyle::new(Rgb::new(90, 200, 90), BOARD_BG)),
            CellKind::SnakeHead => ('█', CellStyle::new(Rgb::new(190, 255, 120), BOARD_BG).bold()),
            CellKind::Apple => ('●', CellStyle::new(Rgb::new(230, 60, 60), BOARD_BG).bold()),
        };
        let (x, y) = self.cell_origin(frame, p);
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
        for xx in x + 1..right {
            fb.put(xx, y, '─', style);
            fb.put(xx, bottom, '─', style);
        }
        for yy in y + 1..bottom {
            fb.put(x, yy, '│', style);
            fb.put(right, yy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        board: &Board,
        hud: &HudInfo,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, hud.length as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "HEADING", label);
        fb.put_str(panel_x, y + 1, hud.heading.as_str(), value);
        if is_at_wall(hud.head, hud.heading, board.info()) {
            fb.put_str(panel_x, y + 2, "wraps next", hint);
        }
        y += 3;

        fb.put_str(panel_x, y, "STEPS", label);
        fb.put_u32(panel_x, y + 1, hud.steps, value);
        y += 3;

        fb.put_str(panel_x, y, "SEED", label);
        fb.put_u32(panel_x, y + 1, hud.seed, value);
        y += 3;

        for line in ["arrows/wasd turn", "p pause", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let y = frame.y.saturating_add(frame.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}
