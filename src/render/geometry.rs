//! Arrow geometry

use glam::{DVec2, dvec2};

use crate::layout::GridGeometry;
use crate::types::{Angle, Length, Point, PtLen};

use super::types::{ArrowHead, Axis, AxisArrow, CaptionAnchor, HAlign};

/// Resolved strokes of an axis arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPath {
    pub tail: PtLen,
    pub tip: PtLen,
    /// The two arrowhead strokes run from the tip to these points
    pub barbs: [PtLen; 2],
}

fn to_vec(p: PtLen) -> DVec2 {
    dvec2(p.x.raw(), p.y.raw())
}

fn from_vec(v: DVec2) -> PtLen {
    Point::at(v.x, v.y)
}

/// Barb endpoints for an arrowhead at `tip`, pointing away from `tail`.
/// A zero-length shaft has no direction and yields barbs at the tip.
pub fn arrowhead_barbs(tail: PtLen, tip: PtLen, head: ArrowHead) -> [PtLen; 2] {
    let tip_v = to_vec(tip);
    let Some(dir) = (tip_v - to_vec(tail)).try_normalize() else {
        return [tip, tip];
    };
    let back = tip_v - dir * head.length.raw();
    let side = dir.perp() * head.half_width.raw();
    [from_vec(back + side), from_vec(back - side)]
}

/// Place `arrow` along the grid edge for `axis`.
pub fn axis_arrow_path(arrow: &AxisArrow, axis: Axis, grid: &GridGeometry) -> ArrowPath {
    let (tail, tip) = match axis {
        Axis::Vertical => {
            let x = grid.origin.x - arrow.gutter;
            (
                Point::new(x, grid.origin.y + arrow.start),
                Point::new(x, grid.row_y(arrow.span_cells)),
            )
        }
        Axis::Horizontal => {
            let y = grid.origin.y - arrow.gutter;
            (
                Point::new(grid.origin.x + arrow.start, y),
                Point::new(grid.column_x(arrow.span_cells), y),
            )
        }
    };
    ArrowPath {
        tail,
        tip,
        barbs: arrowhead_barbs(tail, tip, arrow.head),
    }
}

/// Baseline anchor of the arrow's caption
pub fn caption_anchor(arrow: &AxisArrow, path: &ArrowPath, grid: &GridGeometry) -> PtLen {
    match arrow.caption_anchor {
        CaptionAnchor::GridOrigin(offset) => grid.origin + offset,
        CaptionAnchor::ArrowTip(offset) => path.tip + offset,
    }
}

/// Shift a baseline anchor so a run of `advance` width honors `align`.
///
/// The shift follows the text direction, so rotated runs stay aligned
/// along their own baseline. y grows downward.
pub fn aligned_origin(anchor: PtLen, advance: Length, align: HAlign, rotation: Angle) -> PtLen {
    let lead = advance.raw() * align.lead_fraction();
    if lead == 0.0 {
        return anchor;
    }
    let theta = rotation.0.to_radians();
    let dir = dvec2(theta.cos(), -theta.sin());
    from_vec(to_vec(anchor) - dir * lead)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridSpec, layout};
    use crate::render::defaults::PAGE;
    use crate::types::Rect;

    const EPS: f64 = 1e-9;

    fn close(a: PtLen, x: f64, y: f64) -> bool {
        (a.x.raw() - x).abs() < EPS && (a.y.raw() - y).abs() < EPS
    }

    #[test]
    fn barbs_point_back_from_tip() {
        let head = ArrowHead { length: Length(2.0), half_width: Length(1.0) };
        // pointing down (y grows downward)
        let [a, b] = arrowhead_barbs(Point::at(0.0, 0.0), Point::at(0.0, 10.0), head);
        assert!(close(a, -1.0, 8.0) || close(a, 1.0, 8.0));
        assert!(close(b, -1.0, 8.0) || close(b, 1.0, 8.0));
        assert_ne!(a, b);

        // pointing right
        let [a, b] = arrowhead_barbs(Point::at(0.0, 5.0), Point::at(10.0, 5.0), head);
        assert!(close(a, 8.0, 6.0) || close(a, 8.0, 4.0));
        assert!(close(b, 8.0, 6.0) || close(b, 8.0, 4.0));
    }

    #[test]
    fn zero_length_shaft_has_no_head() {
        let head = ArrowHead { length: Length(2.0), half_width: Length(1.0) };
        let p = Point::at(3.0, 3.0);
        assert_eq!(arrowhead_barbs(p, p, head), [p, p]);
    }

    #[test]
    fn arrows_span_expected_cells() {
        let grid = layout(Rect::from_xywh(35.0, 35.0, 160.0, 247.0), GridSpec::LIFE).unwrap();
        let age = axis_arrow_path(&PAGE.age_arrow, Axis::Vertical, &grid);
        assert_eq!(age.tip.y, grid.row_y(15));
        assert_eq!(age.tail.x, grid.origin.x - Length(10.0));
        let week = axis_arrow_path(&PAGE.week_arrow, Axis::Horizontal, &grid);
        assert_eq!(week.tip.x, grid.column_x(25));
        assert_eq!(week.tail.y, grid.origin.y - Length(12.0));
    }

    #[test]
    fn alignment_follows_rotation() {
        let anchor = Point::at(50.0, 50.0);
        let centered = aligned_origin(anchor, Length(10.0), HAlign::Center, Angle::ZERO);
        assert!(close(centered, 45.0, 50.0));
        let right = aligned_origin(anchor, Length(10.0), HAlign::Right, Angle::QUARTER_TURN);
        // text runs upward, so the start sits below the anchor
        assert!(close(right, 50.0, 60.0));
        assert_eq!(aligned_origin(anchor, Length(10.0), HAlign::Left, Angle::QUARTER_TURN), anchor);
    }
}
