//! Text measurement for the Helvetica standard fonts
//!
//! Widths come from Adobe's AFM files so text can be centered in cells
//! before it is drawn.

use printpdf::BuiltinFont;

/// Points to millimetres
pub const PT_TO_MM: f32 = 0.3528;

/// Text measurer for the Helvetica family
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    /// Character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        // Builtin fonts are Win-1252; anything else gets an average width
        if !c.is_ascii() {
            return 556;
        }

        let table = match self.font {
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                &HELVETICA_BOLD_WIDTHS
            }
            _ => &HELVETICA_WIDTHS,
        };
        table.get(c as usize).copied().unwrap_or(278)
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        let total: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total as f32 / 1000.0) * font_size * PT_TO_MM
    }

    /// Cap height in mm
    pub fn cap_height_mm(&self, font_size: f32) -> f32 {
        (718.0 / 1000.0) * font_size * PT_TO_MM
    }

    /// Left edge that centers `text` on `center_x`
    pub fn centered_x(&self, text: &str, font_size: f32, center_x: f32) -> f32 {
        center_x - self.measure_width_mm(text, font_size) / 2.0
    }

    /// Baseline that vertically centers capitals on `center_y`
    pub fn centered_baseline(&self, font_size: f32, center_y: f32) -> f32 {
        center_y - self.cap_height_mm(font_size) / 2.0
    }

    /// Largest size not above `max_size` at which `text` fits in `width`
    pub fn fit_font_size(&self, text: &str, max_size: f32, width: f32) -> f32 {
        let at_max = self.measure_width_mm(text, max_size);
        if at_max <= width || at_max <= 0.0 {
            max_size
        } else {
            max_size * width / at_max
        }
    }
}

/// Get a measurer for Helvetica
pub fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

/// Get a measurer for Helvetica-Bold
pub fn get_helvetica_bold_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
}

// Adobe AFM widths, ASCII subset (indices 0-127, only 32-126 are valid)

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_share_a_width() {
        let m = get_helvetica_measurer();
        let one = m.measure_width_mm("11", 12.0);
        let eight = m.measure_width_mm("88", 12.0);
        assert!((one - eight).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider() {
        let regular = get_helvetica_measurer().measure_width_mm("FREE", 12.0);
        let bold = get_helvetica_bold_measurer().measure_width_mm("FREE", 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_centering() {
        let m = get_helvetica_measurer();
        let width = m.measure_width_mm("42", 10.0);
        let x = m.centered_x("42", 10.0, 50.0);
        assert!((x + width / 2.0 - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_fit_font_size_shrinks_long_text() {
        let m = get_helvetica_measurer();
        let size = m.fit_font_size("A rather long participant name", 12.0, 20.0);
        assert!(size < 12.0);
        assert!((m.measure_width_mm("A rather long participant name", size) - 20.0).abs() < 0.01);
        assert_eq!(m.fit_font_size("Bo", 12.0, 20.0), 12.0);
    }
}
