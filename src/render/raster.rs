//! Raster surface: tiny-skia pixmap encoded as PNG.
//!
//! Shapes go straight into the pixmap. Text is collected into an SVG overlay
//! and rasterized with resvg when the surface finishes; with no system fonts
//! the overlay renders nothing and the image carries shapes only.

use std::sync::{Arc, OnceLock};

use tiny_skia::{Paint, PathBuilder, Pixmap, Rect as SkRect, Stroke, Transform};
use usvg::fontdb::Database;

use crate::errors::RenderError;
use crate::log::{debug, warn};
use crate::types::{Color, Length, PtLen, Rect};

use super::defaults::SurfaceProfile;
use super::surface::DrawingSurface;
use super::svg::TextOverlay;
use super::types::{StrokeStyle, TextRun};

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn sk_rect(rect: Rect) -> Option<SkRect> {
    SkRect::from_xywh(
        rect.left().raw() as f32,
        rect.top().raw() as f32,
        rect.width().raw() as f32,
        rect.height().raw() as f32,
    )
}

/// System fonts, scanned once per process
fn system_fonts() -> Arc<Database> {
    static FONTS: OnceLock<Arc<Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            debug!(faces = db.len(), "system fonts loaded");
            if db.len() == 0 {
                warn!("no system fonts found; raster text will be missing");
            }
            Arc::new(db)
        })
        .clone()
}

fn sk_stroke(stroke: StrokeStyle) -> Stroke {
    Stroke {
        width: stroke.width.raw() as f32,
        ..Stroke::default()
    }
}

/// Drawing surface backed by a white pixmap
pub struct RasterSurface {
    pixmap: Pixmap,
    overlay: TextOverlay,
    width: Length,
    height: Length,
    font_family: &'static str,
}

impl RasterSurface {
    pub fn new(profile: &SurfaceProfile) -> Result<Self, RenderError> {
        let width = profile.size.w.raw().round() as u32;
        let height = profile.size.h.raw().round() as u32;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::SurfaceAllocation { width, height })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(RasterSurface {
            pixmap,
            overlay: TextOverlay::default(),
            width: profile.size.w,
            height: profile.size.h,
            font_family: profile.font_family,
        })
    }

    fn render_overlay(&mut self) -> Result<(), RenderError> {
        if self.overlay.is_empty() {
            return Ok(());
        }
        let svg = self.overlay.to_svg(self.width, self.height, self.font_family);

        let options = usvg::Options {
            fontdb: system_fonts(),
            ..usvg::Options::default()
        };

        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|e| RenderError::encoding("text overlay", e))?;
        resvg::render(&tree, Transform::identity(), &mut self.pixmap.as_mut());
        debug!(runs = self.overlay.len(), "text overlay rendered");
        Ok(())
    }

    fn stroke(&mut self, path: &tiny_skia::Path, stroke: StrokeStyle) {
        let ink = paint(stroke.color);
        self.pixmap
            .stroke_path(path, &ink, &sk_stroke(stroke), Transform::identity(), None);
    }

    /// Rasterize pending text and encode the pixmap as PNG
    pub fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        self.render_overlay()?;
        let bytes = self
            .pixmap
            .encode_png()
            .map_err(|e| RenderError::encoding("PNG", e))?;
        debug!(bytes = bytes.len(), "raster encoded");
        Ok(bytes)
    }
}

impl DrawingSurface for RasterSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = sk_rect(rect) else {
            warn!(?rect, "skipping empty fill");
            return;
        };
        self.pixmap.fill_rect(r, &paint(color), Transform::identity(), None);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        let Some(r) = sk_rect(rect) else {
            warn!(?rect, "skipping empty outline");
            return;
        };
        let path = PathBuilder::from_rect(r);
        self.stroke(&path, stroke);
    }

    fn line(&mut self, from: PtLen, to: PtLen, stroke: StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x.raw() as f32, from.y.raw() as f32);
        pb.line_to(to.x.raw() as f32, to.y.raw() as f32);
        let Some(path) = pb.finish() else {
            return;
        };
        self.stroke(&path, stroke);
    }

    fn text(&mut self, run: &TextRun) {
        self.overlay.push(run);
    }
}
