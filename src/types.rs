//! Strongly-typed numeric primitives for life-calendar (zero-cost newtypes).
//!
//! Every drawing coordinate is a [`Length`] in the unit of the surface it is
//! drawn on: millimetres on the page, pixels on the raster. Origin is the
//! top-left corner of the surface and y grows downward.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Length in surface units
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length (const-friendly)
    #[inline]
    pub const fn units(val: f64) -> Length {
        Length(val)
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

// NOTE: Length / Length is intentionally NOT implemented.
// Grid math divides a length by a cell count, never by another length.

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Angle in degrees, counter-clockwise as seen on the output
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const QUARTER_TURN: Angle = Angle(90.0);

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Muted gray used for raster axis annotations (#646464)
    pub const LABEL_GRAY: Color = Color::rgb(100, 100, 100);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Channels scaled to 0.0..=1.0, as PDF color operators expect.
    pub fn unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

impl Point<Length> {
    /// Point from raw surface units
    pub fn at(x: f64, y: f64) -> Self {
        Point { x: Length(x), y: Length(y) }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

/// A displacement/offset vector (not an absolute position)
/// Use this for translations; Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset<T> {
    pub dx: T,
    pub dy: T,
}

impl<T> Offset<T> {
    pub const fn new(dx: T, dy: T) -> Self {
        Offset { dx, dy }
    }
}

impl Add<Offset<Length>> for Point<Length> {
    type Output = Point<Length>;
    fn add(self, rhs: Offset<Length>) -> Point<Length> {
        Point { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}

/// Point in surface units
pub type PtLen = Point<Length>;
/// Offset in surface units
pub type OffsetLen = Offset<Length>;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: PtLen,
    pub size: Size<Length>,
}

impl Rect {
    pub fn new(origin: PtLen, size: Size<Length>) -> Self {
        Rect { origin, size }
    }

    #[cfg(test)]
    pub(crate) fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            origin: Point::at(x, y),
            size: Size::new(Length(w), Length(h)),
        }
    }

    pub fn left(&self) -> Length { self.origin.x }
    pub fn top(&self) -> Length { self.origin.y }
    pub fn right(&self) -> Length { self.origin.x + self.size.w }
    pub fn bottom(&self) -> Length { self.origin.y + self.size.h }
    pub fn width(&self) -> Length { self.size.w }
    pub fn height(&self) -> Length { self.size.h }
}
