//! SVG text overlay for the raster surface.
//!
//! tiny-skia has no text support, so text runs are collected into an SVG
//! document sized like the canvas and rasterized on top of the shapes.

use std::fmt::Write;

use crate::types::Length;

use super::types::{FontWeight, HAlign, TextRun};

/// Characters XML 1.0 allows in a document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape text content and attribute values for SVG output.
///
/// Unlike pass-through entity handling, every `&` is escaped: titles come
/// from users and are never pre-encoded. Characters XML cannot carry at all
/// (C0 controls, U+FFFE, U+FFFF) are dropped.
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

fn text_anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn font_weight(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Normal => "normal",
        FontWeight::Bold => "bold",
    }
}

/// Collected text runs awaiting rasterization
#[derive(Debug, Clone, Default)]
pub struct TextOverlay {
    runs: Vec<TextRun>,
}

impl TextOverlay {
    pub fn push(&mut self, run: &TextRun) {
        self.runs.push(run.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Serialize as a standalone SVG document of `width` x `height` px.
    pub fn to_svg(&self, width: Length, height: Length, font_family: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            w = width,
            h = height,
        );
        let family = escape_xml(font_family);
        for run in &self.runs {
            let x = run.anchor.x;
            let y = run.anchor.y;
            let _ = write!(
                out,
                concat!(
                    r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" "#,
                    r#"font-weight="{weight}" text-anchor="{anchor}" fill="{fill}""#
                ),
                x = x,
                y = y,
                family = family,
                size = run.font.size,
                weight = font_weight(run.font.weight),
                anchor = text_anchor(run.align),
                fill = run.color,
            );
            if !run.rotation.is_zero() {
                // SVG rotates clockwise with y pointing down
                let _ = write!(out, r#" transform="rotate({} {x} {y})""#, -run.rotation.0);
            }
            let _ = writeln!(out, ">{}</text>", escape_xml(&run.text));
        }
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::Font;
    use crate::types::{Angle, Color, Point};

    fn run(text: &str, align: HAlign, rotation: Angle) -> TextRun {
        TextRun {
            text: text.to_string(),
            anchor: Point::at(10.0, 20.0),
            align,
            font: Font::bold(30.0),
            color: Color::LABEL_GRAY,
            rotation,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"Tom & "Jerry" <3"#), "Tom &amp; &quot;Jerry&quot; &lt;3");
        assert_eq!(escape_xml("you've"), "you&apos;ve");
    }

    #[test]
    fn serializes_runs() {
        let mut overlay = TextOverlay::default();
        overlay.push(&run("Age", HAlign::Center, Angle::ZERO));
        overlay.push(&run("Week", HAlign::Right, Angle::QUARTER_TURN));
        let svg = overlay.to_svg(Length(100.0), Length(50.0), "Arial, 'DejaVu Sans'");

        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50""#
        ));
        assert!(svg.contains(r#"font-family="Arial, &apos;DejaVu Sans&apos;""#));
        assert!(svg.contains(r#"text-anchor="middle" fill="rgb(100,100,100)">Age</text>"#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(r#"transform="rotate(-90 10 20)">Week</text>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn drops_characters_xml_cannot_carry() {
        assert_eq!(escape_xml("My\u{1}Life\u{1b}"), "MyLife");
        assert_eq!(escape_xml("tab\tnl\n\u{FFFF}"), "tab\tnl\n");
        assert_eq!(escape_xml("caf\u{e9} \u{1F600}"), "caf\u{e9} \u{1F600}");
    }

    #[test]
    fn control_characters_still_parse() {
        let mut overlay = TextOverlay::default();
        let title = "My\u{1}\u{8}\u{b}\u{c}\u{e}\u{1f}Life";
        overlay.push(&run(title, HAlign::Center, Angle::ZERO));
        let svg = overlay.to_svg(Length(100.0), Length(50.0), "sans-serif");
        assert!(svg.contains(">MyLife</text>"));
        usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    }
}
