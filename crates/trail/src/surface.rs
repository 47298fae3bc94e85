//! Immediate-mode 2-D drawing surface
//!
//! Mirrors the subset of `CanvasRenderingContext2d` the trail needs. The
//! browser build implements it over a real canvas; [`Recorder`] captures the
//! calls so rendering can be checked without one.

use crate::color::Rgba;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    /// Full circle outline added to the current path
    fn arc(&mut self, x: f64, y: f64, radius: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill(&mut self, color: Rgba);
    fn set_stroke(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Shadow glow with zero offset
    fn set_glow(&mut self, color: Rgba, blur: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(f64, f64),
    Save,
    Restore,
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc(f64, f64, f64),
    Fill,
    Stroke,
    FillStyle(Rgba),
    StrokeStyle(Rgba),
    LineWidth(f64),
    Glow(Rgba, f64),
}

/// Surface that records every call in order
#[derive(Debug, Default)]
pub struct Recorder {
    pub cmds: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Number of closed paths, i.e. stars drawn
    pub fn closed_paths(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::ClosePath))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.cmds.push(DrawCmd::Clear(width, height));
    }
    fn save(&mut self) {
        self.cmds.push(DrawCmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(DrawCmd::Restore);
    }
    fn begin_path(&mut self) {
        self.cmds.push(DrawCmd::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(DrawCmd::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(DrawCmd::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.cmds.push(DrawCmd::ClosePath);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64) {
        self.cmds.push(DrawCmd::Arc(x, y, radius));
    }
    fn fill(&mut self) {
        self.cmds.push(DrawCmd::Fill);
    }
    fn stroke(&mut self) {
        self.cmds.push(DrawCmd::Stroke);
    }
    fn set_fill(&mut self, color: Rgba) {
        self.cmds.push(DrawCmd::FillStyle(color));
    }
    fn set_stroke(&mut self, color: Rgba) {
        self.cmds.push(DrawCmd::StrokeStyle(color));
    }
    fn set_line_width(&mut self, width: f64) {
        self.cmds.push(DrawCmd::LineWidth(width));
    }
    fn set_glow(&mut self, color: Rgba, blur: f64) {
        self.cmds.push(DrawCmd::Glow(color, blur));
    }
}
