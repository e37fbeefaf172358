use chrono::NaiveDate;
use life_calendar::render::{DrawOp, PAGE, RASTER};
use life_calendar::types::Rect;
use life_calendar::{
    LifeCalendarRequest, Margins, OutputFormat, RenderError, TOTAL_WEEKS, compose_scene,
    render_page, render_raster, render_with,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2000-01-01 to 2024-01-01 is 8766 days, 1252 whole weeks
fn request() -> LifeCalendarRequest {
    request_titled("Test Life")
}

fn request_titled(title: &str) -> LifeCalendarRequest {
    LifeCalendarRequest::new(date(2000, 1, 1), title, date(2024, 1, 1)).unwrap()
}

/// Pixel coordinates of a cell's center
fn center(rect: Rect) -> (u32, u32) {
    let x = rect.left() + rect.width() / 2.0;
    let y = rect.top() + rect.height() / 2.0;
    (x.raw() as u32, y.raw() as u32)
}

#[test]
fn raster_cells_match_weeks_lived() {
    let req = request();
    assert_eq!(req.weeks_lived(), 1252);

    let artifact = render_raster(&req).unwrap();
    assert_eq!(artifact.format, OutputFormat::Png);
    assert_eq!(artifact.media_type(), "image/png");
    assert_eq!(artifact.filename, "life_calendar_2000-01-01.png");

    let img = image::load_from_memory_with_format(&artifact.bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8();
    assert_eq!(img.dimensions(), (2480, 3508));

    // background outside the grid
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255]);

    let geometry = RASTER.layout().unwrap();
    let pixel = |row: u16, col: u16| {
        let (x, y) = center(geometry.cell_rect(row, col));
        img.get_pixel(x, y).0
    };

    // 1252 = 24 * 52 + 4
    assert_eq!(pixel(0, 0), [0, 0, 0]);
    assert_eq!(pixel(24, 3), [0, 0, 0]);
    assert_eq!(pixel(24, 4), [255, 255, 255]);
    assert_eq!(pixel(89, 51), [255, 255, 255]);
}

#[test]
fn raster_for_newborn_is_all_empty() {
    let req = LifeCalendarRequest::new(date(2024, 1, 1), "", date(2024, 1, 1)).unwrap();
    let artifact = render_raster(&req).unwrap();
    let img = image::load_from_memory(&artifact.bytes).unwrap().to_rgb8();

    let geometry = RASTER.layout().unwrap();
    for (_, rect) in geometry.cells().step_by(97) {
        let (x, y) = center(rect);
        assert_eq!(img.get_pixel(x, y).0, [255, 255, 255]);
    }
}

#[test]
fn raster_accepts_control_characters_in_title() {
    let artifact = render_raster(&request_titled("My\u{1}Life\u{1f}")).unwrap();
    let img = image::load_from_memory(&artifact.bytes).unwrap();
    assert_eq!((img.width(), img.height()), (2480, 3508));
}

#[test]
fn page_is_a_pdf() {
    let artifact = render_page(&request()).unwrap();
    assert_eq!(artifact.format, OutputFormat::Pdf);
    assert_eq!(artifact.media_type(), "application/pdf");
    assert_eq!(artifact.filename, "life_calendar_2000-01-01.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF"));
}

#[test]
fn scene_reflects_request() {
    let scene = compose_scene(&request(), OutputFormat::Pdf).unwrap();
    assert_eq!(scene.filled_rects().count(), 1252);
    assert_eq!(scene.stroked_rects().count(), usize::from(TOTAL_WEEKS));

    let texts: Vec<_> = scene.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts.first(), Some(&"Test Life"));
    assert!(texts.contains(&"Week of Year"));
    assert!(texts.contains(&"Age"));

    let raster = compose_scene(&request(), OutputFormat::Png).unwrap();
    assert!(raster.texts().any(|t| t.text == "Week"));
}

#[test]
fn old_age_fills_the_whole_grid() {
    let req = LifeCalendarRequest::new(date(1920, 1, 1), "", date(2024, 1, 1)).unwrap();
    assert!(req.weeks_lived() > u32::from(TOTAL_WEEKS));
    let scene = compose_scene(&req, OutputFormat::Png).unwrap();
    assert_eq!(scene.filled_rects().count(), usize::from(TOTAL_WEEKS));
}

#[test]
fn degenerate_profile_fails_before_drawing() {
    let mut profile = PAGE;
    profile.margins = Margins::new(150.0, 35.0, 100.0, 15.0);
    let err = render_with(&request(), OutputFormat::Pdf, &profile).unwrap_err();
    assert!(matches!(err, RenderError::DegenerateGeometry { .. }), "{err:?}");
}

#[test]
fn replayed_scene_matches_direct_draw() {
    let scene = compose_scene(&request(), OutputFormat::Pdf).unwrap();
    let mut copy = life_calendar::Scene::new();
    scene.replay(&mut copy);
    assert_eq!(copy, scene);
    assert!(matches!(copy.ops()[0], DrawOp::Text(_)));
}
