//! Calendar rendering
//!
//! This module is organized into submodules:
//! - `defaults`: surface profiles for the page and the raster
//! - `types`: fonts, strokes, text runs and arrow descriptions
//! - `geometry`: arrow placement and text alignment
//! - `metrics`: Helvetica advance widths
//! - `surface`: the `DrawingSurface` capability and the `Surface` dispatcher
//! - `pdf`, `raster`, `scene`: the surface implementations
//! - `svg`: text overlay used by the raster surface

pub mod defaults;
pub mod geometry;
pub mod metrics;
pub mod pdf;
pub mod raster;
pub mod scene;
pub mod surface;
pub mod svg;
pub mod types;

pub use defaults::{PAGE, RASTER, SurfaceProfile};
pub use scene::{DrawOp, Scene};
pub use surface::{DrawingSurface, Surface};
pub use types::*;

use crate::layout::GridGeometry;
use crate::log::debug;
use crate::types::{Angle, Point};
use crate::weeks::{MAX_YEARS, WEEKS_PER_YEAR};
use defaults::{FOOTER_TEXT, LABEL_INTERVAL};
use geometry::{axis_arrow_path, caption_anchor};

/// Rows that carry an age label, with their text: "0", "5", ... "85" on the
/// grid plus "90" one row past the last.
pub fn age_label_rows() -> impl Iterator<Item = (u16, String)> {
    (0..=MAX_YEARS)
        .step_by(usize::from(LABEL_INTERVAL))
        .map(|row| (row, row.to_string()))
}

/// Columns that carry a week label. Column 0 reads "1"; the rest show their
/// index, so the sequence is 1, 5, 10, ... 50.
pub fn week_label_columns() -> impl Iterator<Item = (u16, String)> {
    (0..WEEKS_PER_YEAR)
        .step_by(usize::from(LABEL_INTERVAL))
        .map(|col| (col, if col == 0 { "1".to_string() } else { col.to_string() }))
}

/// Paint a full calendar onto `surface`.
///
/// Cells with an index below `weeks_lived` are filled; counts past the end
/// of the grid simply fill every cell.
pub fn draw_calendar<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    profile: &SurfaceProfile,
    geometry: &GridGeometry,
    weeks_lived: u32,
    title: &str,
) {
    debug!(profile = profile.name, weeks_lived, "drawing calendar");

    draw_block(surface, profile, title, &profile.title);
    draw_cells(surface, profile, geometry, weeks_lived);
    draw_age_labels(surface, profile, geometry);
    draw_week_labels(surface, profile, geometry);
    draw_arrow(surface, &profile.age_arrow, Axis::Vertical, geometry);
    draw_arrow(surface, &profile.week_arrow, Axis::Horizontal, geometry);
    draw_block(surface, profile, FOOTER_TEXT, &profile.footer);
}

fn draw_block<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    profile: &SurfaceProfile,
    text: &str,
    block: &TextBlock,
) {
    surface.text(&TextRun {
        text: text.to_string(),
        anchor: Point::new(profile.center_x(), block.baseline),
        align: HAlign::Center,
        font: block.font,
        color: block.color,
        rotation: Angle::ZERO,
    });
}

fn draw_cells<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    profile: &SurfaceProfile,
    geometry: &GridGeometry,
    weeks_lived: u32,
) {
    for (index, rect) in geometry.cells() {
        if index.is_lived(weeks_lived) {
            surface.fill_rect(rect, profile.cell_fill);
        }
        surface.stroke_rect(rect, profile.cell_stroke);
    }
}

fn draw_age_labels<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    profile: &SurfaceProfile,
    geometry: &GridGeometry,
) {
    let style = &profile.age_labels;
    let x = geometry.origin.x - style.gap;
    for (row, text) in age_label_rows() {
        surface.text(&TextRun {
            text,
            anchor: Point::new(x, geometry.row_center_y(row) + style.baseline_shift),
            align: HAlign::Right,
            font: style.font,
            color: style.color,
            rotation: Angle::ZERO,
        });
    }
}

fn draw_week_labels<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    profile: &SurfaceProfile,
    geometry: &GridGeometry,
) {
    let style = &profile.week_labels;
    let y = geometry.origin.y - style.gap;
    for (column, text) in week_label_columns() {
        surface.text(&TextRun {
            text,
            anchor: Point::new(geometry.column_center_x(column), y),
            align: HAlign::Center,
            font: style.font,
            color: style.color,
            rotation: Angle::ZERO,
        });
    }
}

fn draw_arrow<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    arrow: &AxisArrow,
    axis: Axis,
    geometry: &GridGeometry,
) {
    let path = axis_arrow_path(arrow, axis, geometry);
    surface.line(path.tail, path.tip, arrow.stroke);
    for barb in path.barbs {
        surface.line(path.tip, barb, arrow.stroke);
    }
    surface.text(&TextRun {
        text: arrow.caption.to_string(),
        anchor: caption_anchor(arrow, &path, geometry),
        align: arrow.caption_align,
        font: arrow.font,
        color: arrow.color,
        rotation: arrow.caption_rotation,
    });
}
