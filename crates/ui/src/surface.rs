use std::f64::consts::PI;

use portfolio_trail::{Rgba, Surface};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// [`Surface`] backed by a 2-D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub const fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64) {
        let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_stroke(&mut self, color: Rgba) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_glow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.to_css());
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_offset_x(0.0);
        self.ctx.set_shadow_offset_y(0.0);
    }
}
