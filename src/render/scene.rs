//! Recording surface: keeps every primitive in draw order.

use crate::types::{Color, PtLen, Rect};

use super::surface::DrawingSurface;
use super::types::{StrokeStyle, TextRun};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: StrokeStyle },
    Line { from: PtLen, to: PtLen, stroke: StrokeStyle },
    Text(TextRun),
}

/// Display list of a rendered calendar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    ops: Vec<DrawOp>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Rectangles filled, in draw order
    pub fn filled_rects(&self) -> impl Iterator<Item = &Rect> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Rectangles outlined, in draw order
    pub fn stroked_rects(&self) -> impl Iterator<Item = &Rect> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeRect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (PtLen, PtLen)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Replay the recording onto another surface
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawOp::StrokeRect { rect, stroke } => target.stroke_rect(*rect, *stroke),
                DrawOp::Line { from, to, stroke } => target.line(*from, *to, *stroke),
                DrawOp::Text(run) => target.text(run),
            }
        }
    }
}

impl DrawingSurface for Scene {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        self.ops.push(DrawOp::StrokeRect { rect, stroke });
    }

    fn line(&mut self, from: PtLen, to: PtLen, stroke: StrokeStyle) {
        self.ops.push(DrawOp::Line { from, to, stroke });
    }

    fn text(&mut self, run: &TextRun) {
        self.ops.push(DrawOp::Text(run.clone()));
    }
}
