//! GameView: paints a block registry and a snapshot into a framebuffer.
//!
//! Pure; no terminal I/O happens here.

use crate::core::{BoardConfig, GameState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::registry::BlockRegistry;

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

pub struct GameView {
    cols: u16,
    rows: u16,
    /// Terminal columns per board cell
    cell_w: u16,
}

impl GameView {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            cols: config.width.max(0) as u16,
            rows: config.height.max(0) as u16,
            // 2x1 roughly squares up terminal glyphs.
            cell_w: 2,
        }
    }

    /// Board plus border, in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (self.cols * self.cell_w + 2, self.rows + 2)
    }

    pub fn render(
        &self,
        registry: &BlockRegistry,
        state: &GameState,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (frame_w, frame_h) = self.frame_size();
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        for y in 0..self.rows {
            for x in 0..self.cols {
                self.paint_cell(&mut fb, left, top, x, y, '·', empty);
            }
        }
        draw_border(&mut fb, left, top, frame_w, frame_h);

        // Blocks above row 0 are still entering and stay hidden.
        for (_, handle) in registry.iter() {
            if handle.y < 0 || handle.y >= self.rows as i32 {
                continue;
            }
            if handle.x < 0 || handle.x >= self.cols as i32 {
                continue;
            }
            let style = CellStyle::new(Rgb::from_block_color(handle.color), BOARD_BG).bold();
            self.paint_cell(&mut fb, left, top, handle.x as u16, handle.y as u16, '█', style);
        }

        self.draw_panel(&mut fb, state, left.saturating_add(frame_w).saturating_add(2), top);

        if state.game_ended {
            let text = "GAME OVER";
            let x = left + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, top + frame_h / 2, text, style);
        }

        fb
    }

    fn paint_cell(
        &self,
        fb: &mut FrameBuffer,
        left: u16,
        top: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(left + 1 + x * self.cell_w, top + 1 + y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, top, "SCORE", label);
        fb.put_str(x, top + 1, &state.score.to_string(), value);
        fb.put_str(x, top + 3, "HIGH", label);
        fb.put_str(x, top + 4, &state.high_score.to_string(), value);

        let help = ["a/d move", "w rotate", "r restart", "q quit"];
        for (i, line) in help.iter().enumerate() {
            fb.put_str(x, top + 6 + i as u16, line, value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

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
