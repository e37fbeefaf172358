//! The drawing capability the renderer paints through.

use enum_dispatch::enum_dispatch;

use crate::artifact::OutputFormat;
use crate::errors::RenderError;
use crate::types::{Color, PtLen, Rect};

use super::defaults::SurfaceProfile;
use super::pdf::PageSurface;
use super::raster::RasterSurface;
use super::types::{StrokeStyle, TextRun};

/// Primitive drawing operations, in surface units with a top-left origin.
///
/// Implementations own all backend state; nothing is shared between calls.
#[enum_dispatch]
pub trait DrawingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle);

    fn line(&mut self, from: PtLen, to: PtLen, stroke: StrokeStyle);

    fn text(&mut self, run: &TextRun);
}

/// Surface for one of the output formats
#[enum_dispatch(DrawingSurface)]
pub enum Surface {
    Page(PageSurface),
    Raster(RasterSurface),
}

impl Surface {
    pub fn new(format: OutputFormat, profile: &SurfaceProfile) -> Result<Self, RenderError> {
        Ok(match format {
            OutputFormat::Pdf => Surface::Page(PageSurface::new(profile)?),
            OutputFormat::Png => Surface::Raster(RasterSurface::new(profile)?),
        })
    }

    /// Encode everything drawn so far
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        match self {
            Surface::Page(page) => page.finish(),
            Surface::Raster(raster) => raster.finish(),
        }
    }
}
