//! Core types for calendar rendering

use crate::types::{Angle, Color, Length, OffsetLen, PtLen};

/// Font weight; the page maps these to Helvetica / Helvetica-Bold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Font request. `size` is in the surface's type unit: points on the page,
/// pixels on the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    pub const fn normal(size: f64) -> Self {
        Font { size, weight: FontWeight::Normal }
    }

    pub const fn bold(size: f64) -> Self {
        Font { size, weight: FontWeight::Bold }
    }
}

/// Horizontal alignment of a text run relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Fraction of the run's advance width that lies before the anchor
    pub fn lead_fraction(self) -> f64 {
        match self {
            HAlign::Left => 0.0,
            HAlign::Center => 0.5,
            HAlign::Right => 1.0,
        }
    }
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: Length,
    pub color: Color,
}

impl StrokeStyle {
    pub const fn new(width: f64, color: Color) -> Self {
        StrokeStyle { width: Length::units(width), color }
    }
}

/// One line of text, anchored on its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub anchor: PtLen,
    pub align: HAlign,
    pub font: Font,
    pub color: Color,
    /// Counter-clockwise rotation about the anchor
    pub rotation: Angle,
}

/// Text placed somewhere fixed on the surface (title, footer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub font: Font,
    pub color: Color,
    /// Baseline, measured from the top of the surface
    pub baseline: Length,
}

/// Style for a run of grid labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font: Font,
    pub color: Color,
    /// Distance between the grid edge and the label anchor
    pub gap: Length,
    /// Added to a row center to get the label baseline
    pub baseline_shift: Length,
}

/// Arrowhead drawn as two strokes meeting at the tip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    pub length: Length,
    pub half_width: Length,
}

/// Reference point for an arrow caption
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptionAnchor {
    /// Relative to the grid's top-left corner
    GridOrigin(OffsetLen),
    /// Relative to the arrow tip
    ArrowTip(OffsetLen),
}

/// Directional indicator running along one edge of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisArrow {
    pub caption: &'static str,
    pub caption_anchor: CaptionAnchor,
    pub caption_align: HAlign,
    pub caption_rotation: Angle,
    pub font: Font,
    pub color: Color,
    pub stroke: StrokeStyle,
    /// Distance of the shaft outside the grid edge it follows
    pub gutter: Length,
    /// Where the shaft starts, measured from the grid origin along the arrow
    pub start: Length,
    /// The tip sits on the leading edge of this row/column
    pub span_cells: u16,
    pub head: ArrowHead,
}

/// Which way an axis arrow runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Down the left edge (age)
    Vertical,
    /// Along the top edge (week of year)
    Horizontal,
}
