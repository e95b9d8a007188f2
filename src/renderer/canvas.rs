//! 2D canvas painter
//!
//! Executes a [`FramePlan`] against a `CanvasRenderingContext2d`. The only
//! platform-facing half of the renderer; everything it draws was decided by
//! the pure planning pass. All canvas errors degrade to a skipped layer or
//! frame, and a wrong frame self-heals on the next tick.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::compositor::FramePlan;

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
}

impl CanvasPainter {
    /// Wrap a canvas, acquiring its 2D context. `None` when the context is
    /// unavailable; the caller skips the instance (blank visual, no error).
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        Some(Self { canvas, ctx, dpr })
    }

    /// Match the backing store to the CSS size × device pixel ratio.
    /// Returns the logical (CSS pixel) surface size.
    pub fn resize_to_container(&mut self) -> Vec2 {
        if let Some(w) = web_sys::window() {
            self.dpr = w.device_pixel_ratio();
        }
        let cw = self.canvas.client_width().max(1) as f64;
        let ch = self.canvas.client_height().max(1) as f64;
        self.canvas.set_width((cw * self.dpr) as u32);
        self.canvas.set_height((ch * self.dpr) as u32);
        Vec2::new(cw as f32, ch as f32)
    }

    /// Paint one frame plan, back to front
    pub fn paint(&self, plan: &FramePlan, logical: Vec2) {
        let ctx = &self.ctx;

        // Work in logical units; the transform soaks up the pixel density
        if ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)
            .is_err()
        {
            return;
        }
        ctx.clear_rect(0.0, 0.0, logical.x as f64, logical.y as f64);

        for layer in &plan.layers {
            ctx.save();

            if layer.blur > 0.0 {
                ctx.set_filter(&format!("blur({}px)", layer.blur));
            }

            let c = layer.gradient_center;
            let r = layer.gradient_radius.max(1.0) as f64;
            let Ok(gradient) = ctx.create_radial_gradient(
                c.x as f64,
                c.y as f64,
                r * 0.05,
                c.x as f64,
                c.y as f64,
                r,
            ) else {
                ctx.restore();
                continue;
            };
            for (offset, color) in &layer.stops {
                let _ = gradient.add_color_stop(*offset, &color.to_css());
            }
            ctx.set_fill_style_canvas_gradient(&gradient);

            ctx.begin_path();
            ctx.move_to(layer.curve.start.x as f64, layer.curve.start.y as f64);
            for seg in &layer.curve.segments {
                ctx.bezier_curve_to(
                    seg.c1.x as f64,
                    seg.c1.y as f64,
                    seg.c2.x as f64,
                    seg.c2.y as f64,
                    seg.to.x as f64,
                    seg.to.y as f64,
                );
            }
            ctx.close_path();
            ctx.fill();

            ctx.restore();
        }
    }
}
