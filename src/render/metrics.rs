//! Helvetica advance widths for aligning text on the page.
//!
//! The page uses the PDF builtin fonts, which carry no metrics in the file,
//! so centered and right-aligned runs are measured here. Widths are in
//! thousandths of the font size, from the Adobe core font metrics.

use super::types::FontWeight;

/// Helvetica, ' ' (0x20) through '~' (0x7E)
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 278, 278, 584, 584, 584, 556,
   1015, 667, 667, 722, 722, 667, 611, 778,
    722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722,
    500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold, ' ' (0x20) through '~' (0x7E)
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778,
    722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611,
    611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778,
    556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside printable ASCII
const FALLBACK_WIDTH: u16 = 556;

/// Sum of advance widths, in thousandths of the font size.
pub fn text_units(text: &str, weight: FontWeight) -> u32 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    text.chars()
        .map(|c| {
            let width = match c {
                ' '..='~' => table[(c as usize) - 0x20],
                _ => FALLBACK_WIDTH,
            };
            u32::from(width)
        })
        .sum()
}

/// Advance width of `text` in points at `size_pt`.
pub fn text_width_pt(text: &str, weight: FontWeight, size_pt: f64) -> f64 {
    f64::from(text_units(text, weight)) * size_pt / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_uniform() {
        assert_eq!(text_units("0", FontWeight::Normal), 556);
        assert_eq!(text_units("85", FontWeight::Normal), 1112);
        assert_eq!(text_units("85", FontWeight::Bold), 1112);
    }

    #[test]
    fn bold_is_wider() {
        let caption = "Week of Year";
        assert!(text_units(caption, FontWeight::Bold) > text_units(caption, FontWeight::Normal));
    }

    #[test]
    fn width_scales_with_size() {
        assert!((text_width_pt("Age", FontWeight::Normal, 10.0) - 17.79).abs() < 1e-9);
        assert_eq!(text_units("é", FontWeight::Normal), 556);
    }
}
