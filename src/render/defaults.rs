//! Surface profiles: every constant that differs between the page and the
//! raster. The page is in millimetres with font sizes in points; the raster
//! is in pixels at roughly 300 DPI.

use crate::errors::RenderError;
use crate::layout::{GridGeometry, GridSpec, Margins, layout};
use crate::types::{Angle, Color, Length, Offset, Size};

use super::types::*;

pub const FOOTER_TEXT: &str =
    "Each box represents one week of your life. Black boxes are weeks you've lived.";

/// Every fifth row and column gets a label
pub const LABEL_INTERVAL: u16 = 5;

/// Everything needed to lay out and decorate one output target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceProfile {
    pub name: &'static str,
    pub size: Size<Length>,
    /// Outer margins plus label gutters
    pub margins: Margins,
    pub grid: GridSpec,
    pub title: TextBlock,
    pub footer: TextBlock,
    pub cell_fill: Color,
    pub cell_stroke: StrokeStyle,
    pub age_labels: LabelStyle,
    pub week_labels: LabelStyle,
    pub age_arrow: AxisArrow,
    pub week_arrow: AxisArrow,
    /// Font families tried in order for raster text
    pub font_family: &'static str,
}

impl SurfaceProfile {
    /// Lay out the grid inside this profile's usable area
    pub fn layout(&self) -> Result<GridGeometry, RenderError> {
        layout(self.margins.usable_area(self.size), self.grid)
    }

    pub fn center_x(&self) -> Length {
        self.size.w / 2.0
    }
}

const PAGE_MARGIN: f64 = 15.0;
const PAGE_LABEL_GUTTER: f64 = 20.0;

/// A4 portrait, 210 x 297 mm
pub const PAGE: SurfaceProfile = SurfaceProfile {
    name: "page",
    size: Size { w: Length::units(210.0), h: Length::units(297.0) },
    margins: Margins::new(
        PAGE_MARGIN + PAGE_LABEL_GUTTER,
        PAGE_MARGIN + PAGE_LABEL_GUTTER,
        PAGE_MARGIN,
        PAGE_MARGIN,
    ),
    grid: GridSpec::LIFE,
    title: TextBlock {
        font: Font::bold(16.0),
        color: Color::BLACK,
        baseline: Length::units(PAGE_MARGIN),
    },
    footer: TextBlock {
        font: Font::normal(8.0),
        color: Color::BLACK,
        baseline: Length::units(297.0 - PAGE_MARGIN + 5.0),
    },
    cell_fill: Color::BLACK,
    cell_stroke: StrokeStyle::new(0.1, Color::BLACK),
    age_labels: LabelStyle {
        font: Font::normal(7.0),
        color: Color::BLACK,
        gap: Length::units(5.0),
        baseline_shift: Length::units(1.0),
    },
    week_labels: LabelStyle {
        font: Font::normal(7.0),
        color: Color::BLACK,
        gap: Length::units(2.0),
        baseline_shift: Length::ZERO,
    },
    age_arrow: AxisArrow {
        caption: "Age",
        caption_anchor: CaptionAnchor::GridOrigin(Offset::new(Length::units(-12.0), Length::ZERO)),
        caption_align: HAlign::Left,
        caption_rotation: Angle::QUARTER_TURN,
        font: Font::bold(9.0),
        color: Color::BLACK,
        stroke: StrokeStyle::new(0.35, Color::BLACK),
        gutter: Length::units(10.0),
        start: Length::units(10.0),
        span_cells: 15,
        head: ArrowHead { length: Length::units(2.0), half_width: Length::units(1.0) },
    },
    week_arrow: AxisArrow {
        caption: "Week of Year",
        caption_anchor: CaptionAnchor::GridOrigin(Offset::new(Length::ZERO, Length::units(-10.0))),
        caption_align: HAlign::Left,
        caption_rotation: Angle::ZERO,
        font: Font::bold(9.0),
        color: Color::BLACK,
        stroke: StrokeStyle::new(0.35, Color::BLACK),
        gutter: Length::units(12.0),
        start: Length::units(27.0),
        span_cells: 25,
        head: ArrowHead { length: Length::units(2.0), half_width: Length::units(1.0) },
    },
    font_family: "Helvetica",
};

/// A4 at ~300 DPI, 2480 x 3508 px
pub const RASTER: SurfaceProfile = SurfaceProfile {
    name: "raster",
    size: Size { w: Length::units(2480.0), h: Length::units(3508.0) },
    margins: Margins::new(414.0, 473.0, 177.0, 177.0),
    grid: GridSpec::LIFE,
    title: TextBlock {
        font: Font::bold(60.0),
        color: Color::BLACK,
        baseline: Length::units(236.0),
    },
    footer: TextBlock {
        font: Font::normal(30.0),
        color: Color::BLACK,
        baseline: Length::units(3508.0 - 95.0),
    },
    cell_fill: Color::BLACK,
    cell_stroke: StrokeStyle::new(1.0, Color::BLACK),
    age_labels: LabelStyle {
        font: Font::normal(26.0),
        color: Color::LABEL_GRAY,
        gap: Length::units(95.0),
        // centers the digits on the row
        baseline_shift: Length::units(26.0 * 0.35),
    },
    week_labels: LabelStyle {
        font: Font::normal(26.0),
        color: Color::LABEL_GRAY,
        gap: Length::units(36.0),
        baseline_shift: Length::ZERO,
    },
    age_arrow: AxisArrow {
        caption: "Age",
        caption_anchor: CaptionAnchor::ArrowTip(Offset::new(Length::ZERO, Length::units(59.0))),
        caption_align: HAlign::Center,
        caption_rotation: Angle::ZERO,
        font: Font::normal(30.0),
        color: Color::LABEL_GRAY,
        stroke: StrokeStyle::new(2.0, Color::LABEL_GRAY),
        gutter: Length::units(177.0),
        start: Length::ZERO,
        span_cells: 15,
        head: ArrowHead { length: Length::units(24.0), half_width: Length::units(12.0) },
    },
    week_arrow: AxisArrow {
        caption: "Week",
        caption_anchor: CaptionAnchor::ArrowTip(Offset::new(
            Length::units(36.0),
            Length::units(12.0),
        )),
        caption_align: HAlign::Left,
        caption_rotation: Angle::ZERO,
        font: Font::normal(30.0),
        color: Color::LABEL_GRAY,
        stroke: StrokeStyle::new(2.0, Color::LABEL_GRAY),
        gutter: Length::units(95.0),
        start: Length::ZERO,
        span_cells: 25,
        head: ArrowHead { length: Length::units(24.0), half_width: Length::units(12.0) },
    },
    font_family: "Arial, Helvetica, 'Liberation Sans', 'DejaVu Sans', sans-serif",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_usable_area() {
        let usable = PAGE.margins.usable_area(PAGE.size);
        assert_eq!(usable.width(), Length(160.0));
        assert_eq!(usable.height(), Length(247.0));
        assert_eq!(usable.left(), Length(35.0));
    }

    #[test]
    fn raster_usable_area() {
        let usable = RASTER.margins.usable_area(RASTER.size);
        assert_eq!(usable.width(), Length(1889.0));
        assert_eq!(usable.height(), Length(2858.0));
    }

    #[test]
    fn both_profiles_lay_out() {
        for profile in [PAGE, RASTER] {
            let g = profile.layout().unwrap();
            let usable = profile.margins.usable_area(profile.size);
            assert!(g.bounds().right() <= usable.right() + Length(1e-9), "{}", profile.name);
            assert!(g.bounds().bottom() <= usable.bottom() + Length(1e-9), "{}", profile.name);
        }
    }
}
