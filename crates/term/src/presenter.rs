//! Glue between the simulation's render seam and the terminal.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameSnapshot, RenderSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Draws snapshots to a terminal, reusing one framebuffer across frames.
pub struct TerminalPresenter<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter for the real terminal, sized to its current dimensions.
    pub fn new(view: GameView) -> Self {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Self::with_renderer(TerminalRenderer::new(), view, Viewport::new(w, h))
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn with_renderer(renderer: TerminalRenderer<W>, view: GameView, viewport: Viewport) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// React to a terminal resize; the next frame is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        let viewport = Viewport::new(width, height);
        if viewport != self.viewport {
            log::debug!("terminal resized to {width}x{height}");
            self.viewport = viewport;
            self.renderer.invalidate();
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }
}

impl<W: Write> RenderSink for TerminalPresenter<W> {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::types::GameConfig;

    #[test]
    fn renders_snapshots_into_writer() {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        let mut presenter =
            TerminalPresenter::with_renderer(renderer, GameView::default(), Viewport::new(40, 12));

        let game = Game::new(GameConfig::default(), 3);
        presenter.render(&game.snapshot()).unwrap();
        assert!(!presenter.renderer().writer().is_empty());
    }

    #[test]
    fn resize_updates_viewport() {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        let mut presenter =
            TerminalPresenter::with_renderer(renderer, GameView::default(), Viewport::new(40, 12));
        presenter.resize(100, 30);
        assert_eq!(presenter.viewport(), Viewport::new(100, 30));
    }
}
