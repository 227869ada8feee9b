//! 2D canvas rendering
//!
//! Thin wrapper over the browser's 2d context. The whole surface is cleared
//! and every ball redrawn each frame, so nothing tracks dirty regions.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::SimState;

/// Canvas-backed drawing surface
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Wrap a canvas element. Panics when the 2d context is unavailable.
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("canvas 2d context request failed")
            .expect("canvas has no 2d context")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");
        Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        }
    }

    /// Viewport size in pixels
    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Clear the whole surface
    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Clear and redraw every ball at its current position
    pub fn draw_frame(&self, state: &SimState) {
        self.clear();
        for ball in &state.balls {
            self.ctx.begin_path();
            // arc() only errors on non-finite input
            let _ = self.ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.radius as f64,
                0.0,
                TAU,
            );
            self.ctx.set_fill_style_str(&ball.color.to_css());
            self.ctx.fill();
            self.ctx.close_path();
        }
    }
}
