//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws the post-tick pose only; there is no
//! interpolation between ticks in the terminal.

use crate::core::GameSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Position;

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

/// Bot bridge status shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotStatusView {
    pub connected: bool,
    pub port: u16,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps cells roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        game: &GameSession,
        bot: Option<&BotStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let sim = game.sim();
        let board_w = (sim.grid_w().max(0) as u16).saturating_mul(self.cell_w);
        let board_h = sim.grid_h().max(0) as u16;
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            CellStyle::fg_on(Rgb::new(200, 200, 200), PANEL_BG),
        );
        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            board_w,
            board_h,
            '·',
            CellStyle::fg_on(Rgb::new(70, 70, 80), BOARD_BG),
        );

        let apple = CellStyle::fg_on(Rgb::new(220, 60, 60), BOARD_BG).bold();
        self.put_cell(fb, origin_x, origin_y, game.apple(), '●', apple);

        let body = CellStyle::fg_on(Rgb::new(80, 190, 100), BOARD_BG);
        let head = CellStyle::fg_on(Rgb::new(150, 255, 150), BOARD_BG).bold();
        // Tail first so the head is drawn on top if they ever overlap.
        for (i, &p) in sim.segments().iter().enumerate().rev() {
            let style = if i == 0 { head } else { body };
            self.put_cell(fb, origin_x, origin_y, p, '█', style);
        }

        self.draw_side_panel(fb, game, bot, viewport, origin_x + frame_w + 2, origin_y);

        let overlay = if game.you_win() {
            Some("YOU WIN")
        } else if game.game_over() {
            Some("GAME OVER")
        } else {
            None
        };
        if let Some(text) = overlay {
            let mid_y = origin_y + frame_h / 2;
            let style = CellStyle::fg_on(Rgb::new(255, 255, 255), PANEL_BG).bold();
            center_text(fb, origin_x, frame_w, mid_y, text, style);
            center_text(fb, origin_x, frame_w, mid_y + 1, "r: restart", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        game: &GameSession,
        bot: Option<&BotStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, bot, viewport, &mut fb);
        fb
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        p: Position,
        ch: char,
        style: CellStyle,
    ) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let px = origin_x + 1 + (p.x as u16).saturating_mul(self.cell_w);
        let py = origin_y + 1 + p.y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &GameSession,
        bot: Option<&BotStatusView>,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if x.saturating_add(10) > viewport.width {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::fg_on(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        let mut row = |fb: &mut FrameBuffer, name: &str, v: u32| {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        };
        row(fb, "SCORE", game.score());
        row(fb, "LENGTH", game.sim().len() as u32);
        row(fb, "TICK MS", game.tick_interval_ms());

        fb.put_str(x, y, "BOT", label);
        match bot {
            Some(st) if st.connected => fb.put_str(x, y + 1, "CONNECTED", value),
            Some(st) => {
                fb.put_str(x, y + 1, "PORT", value);
                fb.put_u32(x + 5, y + 1, st.port as u32, value);
            }
            None => fb.put_str(x, y + 1, "OFF", value),
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn center_text(fb: &mut FrameBuffer, x: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(x.saturating_add(w.saturating_sub(text_w) / 2), y, text, style);
}
