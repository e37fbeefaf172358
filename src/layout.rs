//! Grid layout: fits the 52 x 90 week grid into a usable area.
//!
//! One algorithm serves both output targets; only the input magnitudes
//! differ (page millimetres vs. raster pixels).

use crate::errors::RenderError;
use crate::log::debug;
use crate::types::{Length, Point, PtLen, Rect, Size};
use crate::weeks::{MAX_YEARS, WEEKS_PER_YEAR, WeekIndex};

/// Shape of the grid to lay out
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub columns: u16,
    pub rows: u16,
    /// Gap between cells as a fraction of the box size
    pub spacing_factor: f64,
}

impl GridSpec {
    /// 52 weeks x 90 years, gaps half a box wide
    pub const LIFE: GridSpec = GridSpec {
        columns: WEEKS_PER_YEAR,
        rows: MAX_YEARS,
        spacing_factor: 0.5,
    };

    fn validate(&self) -> Result<(), RenderError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(RenderError::InvalidGrid {
                reason: "grid needs at least one row and one column",
            });
        }
        if !self.spacing_factor.is_finite() || self.spacing_factor < 0.0 {
            return Err(RenderError::InvalidGrid {
                reason: "spacing factor must be a finite, non-negative ratio",
            });
        }
        Ok(())
    }

    /// Box sizes needed along an axis with `count` cells
    fn span_units(&self, count: u16) -> f64 {
        let n = f64::from(count);
        n + (n - 1.0) * self.spacing_factor
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::LIFE
    }
}

/// Space reserved around the grid, in surface units
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margins {
    pub left: Length,
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
}

impl Margins {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Margins {
            left: Length::units(left),
            top: Length::units(top),
            right: Length::units(right),
            bottom: Length::units(bottom),
        }
    }

    /// Area left for the grid once the margins are taken off `surface`.
    /// May have a non-positive size; [`layout`] rejects that.
    pub fn usable_area(&self, surface: Size<Length>) -> Rect {
        Rect::new(
            Point::new(self.left, self.top),
            Size::new(
                surface.w - self.left - self.right,
                surface.h - self.top - self.bottom,
            ),
        )
    }
}

/// Resolved grid placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub box_size: Length,
    pub spacing: Length,
    /// Top-left corner of cell (0, 0)
    pub origin: PtLen,
    pub columns: u16,
    pub rows: u16,
}

/// Fit `spec` into `usable`, centered.
///
/// The box size is the smaller of the width- and height-constrained
/// candidates, so the grid never overflows either axis.
pub fn layout(usable: Rect, spec: GridSpec) -> Result<GridGeometry, RenderError> {
    spec.validate()?;

    let (w, h) = (usable.width(), usable.height());
    let finite = w.is_finite()
        && h.is_finite()
        && usable.origin.x.is_finite()
        && usable.origin.y.is_finite();
    if !finite
        || w <= Length::ZERO
        || h <= Length::ZERO
    {
        return Err(RenderError::DegenerateGeometry {
            width: w.raw(),
            height: h.raw(),
        });
    }

    let box_from_width = w / spec.span_units(spec.columns);
    let box_from_height = h / spec.span_units(spec.rows);
    let box_size = box_from_width.min(box_from_height);
    let spacing = box_size * spec.spacing_factor;

    let mut geometry = GridGeometry {
        box_size,
        spacing,
        origin: usable.origin,
        columns: spec.columns,
        rows: spec.rows,
    };
    let extent = geometry.extent();
    geometry.origin = Point::new(
        usable.origin.x + (w - extent.w) / 2.0,
        usable.origin.y + (h - extent.h) / 2.0,
    );

    debug!(
        box_size = box_size.raw(),
        spacing = spacing.raw(),
        x = geometry.origin.x.raw(),
        y = geometry.origin.y.raw(),
        "grid laid out"
    );
    Ok(geometry)
}

impl GridGeometry {
    /// Distance from one cell's top-left to the next one's
    pub fn pitch(&self) -> Length {
        self.box_size + self.spacing
    }

    /// Size of the whole grid, edge to edge
    pub fn extent(&self) -> Size<Length> {
        Size::new(self.span(self.columns), self.span(self.rows))
    }

    fn span(&self, count: u16) -> Length {
        if count == 0 {
            return Length::ZERO;
        }
        self.pitch() * f64::from(count) - self.spacing
    }

    /// Bounds of the whole grid
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin, self.extent())
    }

    /// Left edge of `column`; columns past the grid extrapolate.
    pub fn column_x(&self, column: u16) -> Length {
        self.origin.x + self.pitch() * f64::from(column)
    }

    /// Top edge of `row`; rows past the grid extrapolate.
    pub fn row_y(&self, row: u16) -> Length {
        self.origin.y + self.pitch() * f64::from(row)
    }

    pub fn column_center_x(&self, column: u16) -> Length {
        self.column_x(column) + self.box_size / 2.0
    }

    pub fn row_center_y(&self, row: u16) -> Length {
        self.row_y(row) + self.box_size / 2.0
    }

    /// Box of the cell at (`row`, `column`)
    pub fn cell_rect(&self, row: u16, column: u16) -> Rect {
        Rect::new(
            Point::new(self.column_x(column), self.row_y(row)),
            Size::new(self.box_size, self.box_size),
        )
    }

    /// Every cell with its box, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (WeekIndex, Rect)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| {
                let index = WeekIndex::new(row, column, self.columns);
                (index, self.cell_rect(row, column))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn area(w: f64, h: f64) -> Rect {
        Rect::from_xywh(0.0, 0.0, w, h)
    }

    #[test]
    fn fits_inside_for_many_areas() {
        let areas = [(160.0, 247.0), (1889.0, 2858.0), (1.0, 1000.0), (1000.0, 1.0), (0.5, 0.5)];
        for (w, h) in areas {
            let g = layout(area(w, h), GridSpec::LIFE).unwrap();
            let extent = g.extent();
            assert!(g.box_size > Length::ZERO);
            assert!(extent.w.raw() <= w + EPS, "{w}x{h}: width {}", extent.w);
            assert!(extent.h.raw() <= h + EPS, "{w}x{h}: height {}", extent.h);
            // the binding axis is filled exactly
            assert!((extent.w.raw() - w).abs() < EPS || (extent.h.raw() - h).abs() < EPS);
        }
    }

    #[test]
    fn slack_is_split_evenly() {
        let usable = Rect::from_xywh(35.0, 35.0, 160.0, 247.0);
        let g = layout(usable, GridSpec::LIFE).unwrap();
        let left = g.origin.x - usable.left();
        let right = usable.right() - g.bounds().right();
        assert!((left - right).raw().abs() < EPS);
        let top = g.origin.y - usable.top();
        let bottom = usable.bottom() - g.bounds().bottom();
        assert!((top - bottom).raw().abs() < EPS);
    }

    #[test]
    fn page_geometry() {
        let usable = Rect::from_xywh(35.0, 35.0, 160.0, 247.0);
        let g = layout(usable, GridSpec::LIFE).unwrap();
        // height binds: 247 / 134.5
        assert!((g.box_size.raw() - 247.0 / 134.5).abs() < EPS);
        assert!((g.spacing.raw() - g.box_size.raw() * 0.5).abs() < EPS);
        assert!((g.origin.y.raw() - 35.0).abs() < EPS);
        assert!(g.origin.x.raw() > 35.0);
    }

    #[test]
    fn rejects_non_positive_area() {
        for (w, h) in [(0.0, 100.0), (100.0, -5.0), (f64::NAN, 10.0)] {
            let err = layout(area(w, h), GridSpec::LIFE).unwrap_err();
            assert!(matches!(err, RenderError::DegenerateGeometry { .. }), "{w}x{h}");
        }
    }

    #[test]
    fn rejects_bad_spec() {
        let spec = GridSpec { columns: 0, ..GridSpec::LIFE };
        assert!(matches!(layout(area(10.0, 10.0), spec), Err(RenderError::InvalidGrid { .. })));
        let spec = GridSpec { spacing_factor: -0.1, ..GridSpec::LIFE };
        assert!(matches!(layout(area(10.0, 10.0), spec), Err(RenderError::InvalidGrid { .. })));
    }

    #[test]
    fn margins_larger_than_surface_are_degenerate() {
        let margins = Margins::new(150.0, 10.0, 100.0, 10.0);
        let usable = margins.usable_area(Size::new(Length(210.0), Length(297.0)));
        let err = layout(usable, GridSpec::LIFE).unwrap_err();
        assert!(matches!(err, RenderError::DegenerateGeometry { .. }));
    }

    #[test]
    fn cells_are_row_major() {
        let g = layout(area(155.0, 268.0), GridSpec::LIFE).unwrap();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), 4680);
        assert_eq!(cells[1].0.raw(), 1);
        assert!(cells[1].1.left() > cells[0].1.left());
        assert_eq!(cells[52].1.left(), cells[0].1.left());
        assert!((cells[52].1.top() - cells[0].1.top() - g.pitch()).raw().abs() < EPS);
        assert_eq!(cells[4679].0.raw(), 4679);
    }

    #[test]
    fn cell_indices_follow_grid_width() {
        let spec = GridSpec { columns: 10, rows: 3, spacing_factor: 0.5 };
        let g = layout(area(100.0, 100.0), spec).unwrap();
        let cells: Vec<_> = g.cells().collect();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells[11].0.raw(), 11);
        assert_eq!(cells[11].1, g.cell_rect(1, 1));
        assert_eq!(cells[29].1, g.cell_rect(2, 9));
    }
}
