//! Page surface: a single A4 PDF page through printpdf.
//!
//! Callers draw in millimetres from the top-left corner; PDF space starts at
//! the bottom-left, so every y is flipped against the page height here.

use std::io::{BufWriter, Write};

use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point as PdfPoint, Pt, Rgb, TextMatrix,
};

use crate::errors::RenderError;
use crate::log::debug;
use crate::types::{Color, Length, PtLen, Rect};

use super::defaults::SurfaceProfile;
use super::geometry::aligned_origin;
use super::metrics::text_width_pt;
use super::surface::DrawingSurface;
use super::types::{FontWeight, StrokeStyle, TextRun};

const MM_PER_PT: f64 = 25.4 / 72.0;

fn pdf_color(color: Color) -> PdfColor {
    let (r, g, b) = color.unit_rgb();
    PdfColor::Rgb(Rgb::new(r, g, b, None))
}

fn mm_to_pt(len: Length) -> f64 {
    len.raw() / MM_PER_PT
}

/// Drawing surface backed by a printpdf document
pub struct PageSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    height: Length,
}

impl PageSurface {
    pub fn new(profile: &SurfaceProfile) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            "Life Calendar",
            Mm(profile.size.w.raw()),
            Mm(profile.size.h.raw()),
            "Calendar",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::encoding("PDF", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::encoding("PDF", e))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(PageSurface {
            doc,
            layer,
            regular,
            bold,
            height: profile.size.h,
        })
    }

    fn point(&self, p: PtLen) -> PdfPoint {
        PdfPoint::new(Mm(p.x.raw()), Mm((self.height - p.y).raw()))
    }

    fn rect_outline(&self, rect: Rect) -> Vec<(PdfPoint, bool)> {
        [
            PtLen::new(rect.left(), rect.top()),
            PtLen::new(rect.right(), rect.top()),
            PtLen::new(rect.right(), rect.bottom()),
            PtLen::new(rect.left(), rect.bottom()),
        ]
        .into_iter()
        .map(|p| (self.point(p), false))
        .collect()
    }

    fn font(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Serialize the document
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            self.doc
                .save(&mut writer)
                .map_err(|e| RenderError::encoding("PDF", e))?;
            writer.flush().map_err(|e| RenderError::encoding("PDF", e))?;
        }
        debug!(bytes = bytes.len(), "page encoded");
        Ok(bytes)
    }
}

impl DrawingSurface for PageSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer.add_shape(Line {
            points: self.rect_outline(rect),
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: StrokeStyle) {
        self.layer.set_outline_color(pdf_color(stroke.color));
        self.layer.set_outline_thickness(mm_to_pt(stroke.width));
        self.layer.add_shape(Line {
            points: self.rect_outline(rect),
            is_closed: true,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    fn line(&mut self, from: PtLen, to: PtLen, stroke: StrokeStyle) {
        self.layer.set_outline_color(pdf_color(stroke.color));
        self.layer.set_outline_thickness(mm_to_pt(stroke.width));
        self.layer.add_shape(Line {
            points: vec![(self.point(from), false), (self.point(to), false)],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });
    }

    fn text(&mut self, run: &TextRun) {
        let advance = Length(text_width_pt(&run.text, run.font.weight, run.font.size) * MM_PER_PT);
        let origin = aligned_origin(run.anchor, advance, run.align, run.rotation);
        let font = self.font(run.font.weight);
        let x = Mm(origin.x.raw());
        let y = Mm((self.height - origin.y).raw());

        self.layer.set_fill_color(pdf_color(run.color));
        if run.rotation.is_zero() {
            self.layer.use_text(run.text.clone(), run.font.size, x, y, font);
        } else {
            self.layer.begin_text_section();
            self.layer.set_font(font, run.font.size);
            let matrix = TextMatrix::TranslateRotate(Pt::from(x), Pt::from(y), run.rotation.0);
            self.layer.set_text_matrix(matrix);
            self.layer.write_text(run.text.clone(), font);
            self.layer.end_text_section();
        }
    }
}
