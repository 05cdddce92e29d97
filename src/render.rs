//! 2D canvas painter
//!
//! Draws the whole frame from a read-only view of the session state: the
//! fading trail wash, the rain glyph columns, then the glowing squares for
//! player, agents, and sigils. Purely visual; nothing here feeds back into
//! the sim.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::RAIN_GLYPH_STEP;
use crate::sim::GameState;

const PLAYER_COLOR: &str = "#00ff41";
const AGENT_COLOR: &str = "#ff0040";
const SIGIL_COLOR: &str = "#ffaa00";
const RAIN_COLOR: &str = "rgba(0,255,65,0.7)";
/// Translucent wash that fades the previous frame instead of clearing it
const TRAIL_WASH: &str = "rgba(0,0,16,0.16)";

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    rain_enabled: bool,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement, rain_enabled: bool) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx, rain_enabled })
    }

    /// Render one frame
    pub fn draw(&self, state: &GameState) {
        let w = state.arena.width as f64;
        let h = state.arena.height as f64;

        self.ctx.set_fill_style_str(TRAIL_WASH);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        if self.rain_enabled {
            self.draw_rain(state);
        }

        self.glow_square(
            state.player.pos.x,
            state.player.pos.y,
            state.player.size,
            PLAYER_COLOR,
            25.0,
        );
        for a in &state.agents {
            self.glow_square(a.pos.x, a.pos.y, a.size, AGENT_COLOR, 20.0);
        }
        for s in &state.sigils {
            self.glow_square(s.pos.x, s.pos.y, s.size, SIGIL_COLOR, 25.0);
        }
    }

    fn draw_rain(&self, state: &GameState) {
        self.ctx.set_font("16px monospace");
        self.ctx.set_fill_style_str(RAIN_COLOR);
        for drop in &state.rain {
            for i in 0..drop.len as u32 {
                let y = drop.pos.y - i as f32 * RAIN_GLYPH_STEP;
                let _ = self.ctx.fill_text("1", drop.pos.x as f64, y as f64);
            }
        }
    }

    fn glow_square(&self, x: f32, y: f32, size: f32, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            (x - size / 2.0) as f64,
            (y - size / 2.0) as f64,
            size as f64,
            size as f64,
        );
        self.ctx.set_shadow_blur(0.0);
    }
}
