use printpdf::{Color, Rgb};

/// Standard colors
pub const BLACK: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

pub const GRAY: Rgb = Rgb {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    icc_profile: None,
};

/// Build a fill/stroke color from a settings tuple
pub fn rgb(color: (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(color.0, color.1, color.2, None))
}
