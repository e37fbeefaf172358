//! Life calendar renderer.
//!
//! Draws one box per week of a 90-year life, shading the weeks already lived,
//! and encodes the result as a single-page A4 PDF or a 2480x3508 PNG.
//!
//! ```no_run
//! use life_calendar::{LifeCalendarRequest, OutputFormat, parse_birthdate, render};
//!
//! let birthdate = parse_birthdate("1990-05-15")?;
//! let request = LifeCalendarRequest::today(birthdate, "")?;
//! let artifact = render(&request, OutputFormat::Pdf)?;
//! std::fs::write(&artifact.filename, &artifact.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod artifact;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;
pub mod request;
pub mod types;
pub mod weeks;

pub use artifact::{OutputFormat, RenderArtifact};
pub use errors::{RenderError, RequestError};
pub use layout::{GridGeometry, GridSpec, Margins, layout};
pub use render::{DrawingSurface, Scene, Surface, SurfaceProfile, draw_calendar};
pub use request::{DEFAULT_TITLE, LifeCalendarRequest, parse_birthdate};
pub use weeks::{LifeSummary, TOTAL_WEEKS, WeekIndex, weeks_lived};

use crate::log::info;

/// Render `request` in `format` with that format's standard profile.
pub fn render(
    request: &LifeCalendarRequest,
    format: OutputFormat,
) -> Result<RenderArtifact, RenderError> {
    render_with(request, format, format.profile())
}

/// Render `request` in `format` using a custom surface profile.
///
/// Layout runs before any surface is allocated, so a degenerate profile
/// fails without producing partial output.
pub fn render_with(
    request: &LifeCalendarRequest,
    format: OutputFormat,
    profile: &SurfaceProfile,
) -> Result<RenderArtifact, RenderError> {
    let geometry = profile.layout()?;
    let weeks_lived = request.weeks_lived();

    let mut surface = Surface::new(format, profile)?;
    draw_calendar(&mut surface, profile, &geometry, weeks_lived, request.title());
    let bytes = surface.finish()?;

    let filename = request.artifact_filename(format);
    info!(%filename, %format, bytes = bytes.len(), weeks_lived, "calendar rendered");
    Ok(RenderArtifact {
        filename,
        format,
        bytes,
    })
}

/// Single-page A4 PDF
pub fn render_page(request: &LifeCalendarRequest) -> Result<RenderArtifact, RenderError> {
    render(request, OutputFormat::Pdf)
}

/// 2480x3508 PNG
pub fn render_raster(request: &LifeCalendarRequest) -> Result<RenderArtifact, RenderError> {
    render(request, OutputFormat::Png)
}

/// Record the draw calls for `format` without encoding anything.
pub fn compose_scene(
    request: &LifeCalendarRequest,
    format: OutputFormat,
) -> Result<Scene, RenderError> {
    let profile = format.profile();
    let geometry = profile.layout()?;
    let mut scene = Scene::new();
    draw_calendar(&mut scene, profile, &geometry, request.weeks_lived(), request.title());
    Ok(scene)
}
