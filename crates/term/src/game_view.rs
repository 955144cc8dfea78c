//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The simulation lives in its own unit space (960x540 by default); the view
//! stretches that space over whatever the terminal currently offers, inside a
//! one-cell border.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Letter;

/// Smallest terminal the playfield is drawn in.
pub const MIN_VIEW_WIDTH: u16 = 32;
pub const MIN_VIEW_HEIGHT: u16 = 10;

const GAME_OVER_TEXT: &str = "GAME OVER - press any key";
const QUIT_HINT: &str = "Esc to quit";
const TOO_SMALL_TEXT: &str = "terminal too small";

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

    pub fn fits_playfield(&self) -> bool {
        self.width >= MIN_VIEW_WIDTH && self.height >= MIN_VIEW_HEIGHT
    }
}

/// Colors used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Ground line and border.
    pub accent: Rgb,
    /// Letters about to land.
    pub danger: Rgb,
    /// Drop shadow under the front letter and overlay text.
    pub shadow: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(16, 18, 22),
            foreground: Rgb::new(245, 245, 245),
            accent: Rgb::new(120, 190, 255),
            danger: Rgb::new(255, 105, 97),
            shadow: Rgb::new(0, 0, 0),
        }
    }
}

/// Fraction of the fall distance (measured up from the ground) in which
/// letters switch to the danger color.
const DANGER_ZONE: f32 = 0.2;

/// A lightweight terminal renderer for the falling-letters game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

/// Maps simulation units onto terminal cells for one frame.
#[derive(Debug, Clone, Copy)]
struct Projection {
    inner_w: u16,
    inner_h: u16,
    world_w: f32,
    world_h: f32,
}

impl Projection {
    fn new(viewport: Viewport, snap: &GameSnapshot) -> Self {
        Self {
            inner_w: viewport.width.saturating_sub(2),
            inner_h: viewport.height.saturating_sub(2),
            world_w: snap.viewport_width.max(1.0),
            world_h: snap.viewport_height.max(1.0),
        }
    }

    fn col(&self, x: f32) -> u16 {
        let t = (x / self.world_w).clamp(0.0, 1.0);
        1 + (t * self.inner_w.saturating_sub(1) as f32).round() as u16
    }

    /// Row for `y`, or `None` while the letter is still above the top edge.
    fn row(&self, y: f32) -> Option<u16> {
        if y < 0.0 {
            return None;
        }
        let t = (y / self.world_h).clamp(0.0, 1.0);
        Some(1 + (t * self.inner_h.saturating_sub(1) as f32).round() as u16)
    }
}

impl GameView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: callers reuse one framebuffer
    /// across frames and it is only resized when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.base_style().cell(' '));

        if !viewport.fits_playfield() {
            fb.put_str(0, 0, TOO_SMALL_TEXT, self.base_style());
            return;
        }

        let proj = Projection::new(viewport, snap);
        let ground_row = proj.row(snap.ground_y);

        self.draw_border(fb, viewport);
        if let Some(row) = ground_row {
            self.draw_ground(fb, row, proj.inner_w);
        }

        // Back to front so the oldest letter ends up on top.
        for (i, letter) in snap.letters.iter().enumerate().rev() {
            self.draw_letter(fb, &proj, snap.ground_y, ground_row, letter, i == 0);
        }

        self.draw_hud(fb, snap);

        if snap.game_over {
            self.draw_game_over(fb, viewport, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn base_style(&self) -> CellStyle {
        CellStyle::new(self.palette.foreground, self.palette.background)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let style = CellStyle::new(self.palette.foreground, self.palette.background).dim();
        let (w, h) = (viewport.width, viewport.height);

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', style);
            fb.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }

    fn draw_ground(&self, fb: &mut FrameBuffer, row: u16, inner_w: u16) {
        let style = CellStyle::new(self.palette.accent, self.palette.background).bold();
        fb.fill_rect(1, row, inner_w, 1, '━', style);
    }

    fn draw_letter(
        &self,
        fb: &mut FrameBuffer,
        proj: &Projection,
        ground_y: f32,
        ground_row: Option<u16>,
        letter: &Letter,
        is_front: bool,
    ) {
        let Some(row) = proj.row(letter.y) else {
            return;
        };
        let col = proj.col(letter.x);

        let danger_line = ground_y * (1.0 - DANGER_ZONE);
        let fg = if letter.y >= danger_line {
            self.palette.danger
        } else {
            self.palette.foreground
        };

        if is_front {
            let (sx, sy) = (col + 1, row + 1);
            // The shadow stays inside the border and off the ground line.
            if sx <= proj.inner_w && sy <= proj.inner_h && Some(sy) != ground_row {
                let shadow = CellStyle::new(self.palette.shadow, self.palette.background);
                fb.put_char(sx, sy, letter.ch, shadow);
            }
            fb.put_char(col, row, letter.ch, CellStyle::new(fg, self.palette.background).bold());
        } else {
            fb.put_char(col, row, letter.ch, CellStyle::new(fg, self.palette.background));
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let label = self.base_style().bold();
        let value = self.base_style();

        let x = fb.put_str(2, 1, "SCORE ", label);
        fb.put_u32(x, 1, snap.score, value);

        let x = fb.put_str(2, 2, "SPEED ", label);
        let x = fb.put_u32(x, 2, snap.speed as u32, value);
        fb.put_str(x, 2, " px/s", value.dim());

        let x = fb.put_str(2, 3, "ROUND ", label);
        fb.put_u32(x, 3, snap.round, value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport, score: u32) {
        let mid_y = viewport.height / 2;
        let title = CellStyle::new(self.palette.foreground, self.palette.shadow).bold();
        let hint = CellStyle::new(self.palette.foreground, self.palette.shadow).dim();

        centered(fb, viewport, mid_y, GAME_OVER_TEXT, title);

        let score_w = 12 + digit_count(score);
        let x = viewport.width.saturating_sub(score_w) / 2;
        let x = fb.put_str(x, mid_y + 1, "final score ", hint);
        fb.put_u32(x, mid_y + 1, score, hint);

        centered(fb, viewport, mid_y + 2, QUIT_HINT, hint);
    }
}

fn centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
