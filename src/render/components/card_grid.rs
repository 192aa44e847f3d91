//! A single bingo card: outline, label, column header and numbered grid

use printpdf::{BuiltinFont, Color, Mm, PaintMode};

use crate::config::Settings;
use crate::model::{column_letters, Cell, Participant};
use crate::render::helpers::colors::{rgb, BLACK};
use crate::render::helpers::layer::LayerBuilder;
use crate::render::helpers::text_metrics::{
    get_helvetica_bold_measurer, get_helvetica_measurer, PT_TO_MM,
};

/// Inner padding around the label, in mm
const LABEL_PADDING: f32 = 2.0;

/// Label band height as a multiple of the label font height
const LABEL_BAND_LINES: f32 = 1.8;

/// Largest share of a cell's height a glyph may take
const MAX_GLYPH_FILL: f32 = 0.55;

/// Renders one card into a rectangle on the page
pub struct CardRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> CardRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Height of the band holding "Card N: Name"
    pub fn label_band_height(&self) -> f32 {
        self.settings.label_font_size * PT_TO_MM * LABEL_BAND_LINES
    }

    /// Cell (width, height) for a card of `size` with `height` mm available
    pub fn cell_dimensions(&self, size: usize, width: f32, height: f32) -> (f32, f32) {
        let rows = (size + 1) as f32; // header row + grid rows
        let grid_height = height - self.label_band_height();
        (width / size as f32, grid_height / rows)
    }

    /// Draw the card with its lower-left corner at (x, y)
    pub fn render(
        &self,
        layer: &mut LayerBuilder,
        participant: &Participant,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) {
        let card = &participant.card;
        let size = card.size();
        let top = y + height;
        let (cell_w, cell_h) = self.cell_dimensions(size, width, height);

        // Outline
        layer.set_outline_color(rgb(self.settings.border_color));
        layer.set_outline_thickness(self.settings.border_thickness);
        layer.add_rect(Mm(x), Mm(y), Mm(x + width), Mm(top), PaintMode::Stroke);

        self.render_label(layer, &participant.card_label(), x, top, width);

        let header_top = top - self.label_band_height();
        self.render_header(layer, size, x, header_top, cell_w, cell_h);

        let number_size = self.glyph_size(self.settings.number_font_size, cell_h);
        for (row_idx, row) in card.rows().iter().enumerate() {
            let cell_y = header_top - (row_idx as f32 + 2.0) * cell_h;
            for (col_idx, cell) in row.iter().enumerate() {
                let cell_x = x + col_idx as f32 * cell_w;
                self.render_cell(layer, *cell, cell_x, cell_y, cell_w, cell_h, number_size);
            }
        }
    }

    fn render_label(&self, layer: &mut LayerBuilder, label: &str, x: f32, top: f32, width: f32) {
        let measurer = get_helvetica_bold_measurer();
        let available = width - 2.0 * LABEL_PADDING;
        let size = measurer.fit_font_size(label, self.settings.label_font_size, available);
        let baseline = top - LABEL_PADDING - measurer.cap_height_mm(self.settings.label_font_size);

        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text_builtin(
            label,
            size,
            Mm(x + LABEL_PADDING),
            Mm(baseline),
            BuiltinFont::HelveticaBold,
        );
    }

    fn render_header(
        &self,
        layer: &mut LayerBuilder,
        size: usize,
        x: f32,
        top: f32,
        cell_w: f32,
        cell_h: f32,
    ) {
        let bottom = top - cell_h;

        layer.set_outline_color(Color::Rgb(BLACK));
        layer.set_outline_thickness(self.settings.grid_thickness);
        for col in 0..size {
            let cell_x = x + col as f32 * cell_w;
            layer.add_rect(
                Mm(cell_x),
                Mm(bottom),
                Mm(cell_x + cell_w),
                Mm(top),
                PaintMode::Stroke,
            );
        }

        let Some(letters) = column_letters(size) else {
            return;
        };

        let measurer = get_helvetica_bold_measurer();
        let font_size = self.glyph_size(self.settings.header_font_size, cell_h);
        let baseline = measurer.centered_baseline(font_size, bottom + cell_h / 2.0);
        layer.set_fill_color(Color::Rgb(BLACK));
        for (col, letter) in letters.iter().enumerate() {
            let center = x + (col as f32 + 0.5) * cell_w;
            layer.use_text_builtin(
                *letter,
                font_size,
                Mm(measurer.centered_x(letter, font_size, center)),
                Mm(baseline),
                BuiltinFont::HelveticaBold,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_cell(
        &self,
        layer: &mut LayerBuilder,
        cell: Cell,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        font_size: f32,
    ) {
        if cell.is_free() {
            layer.set_fill_color(rgb(self.settings.free_cell_color));
            layer.add_rect(Mm(x), Mm(y), Mm(x + w), Mm(y + h), PaintMode::Fill);
        }

        layer.set_outline_color(rgb(self.settings.grid_color));
        layer.set_outline_thickness(self.settings.grid_thickness);
        layer.add_rect(Mm(x), Mm(y), Mm(x + w), Mm(y + h), PaintMode::Stroke);

        let text = cell.to_string();
        let (font, measurer) = if cell.is_free() {
            (BuiltinFont::HelveticaBold, get_helvetica_bold_measurer())
        } else {
            (BuiltinFont::Helvetica, get_helvetica_measurer())
        };
        let size = measurer.fit_font_size(&text, font_size, w * 0.9);

        layer.set_fill_color(Color::Rgb(BLACK));
        layer.use_text_builtin(
            text.as_str(),
            size,
            Mm(measurer.centered_x(&text, size, x + w / 2.0)),
            Mm(measurer.centered_baseline(size, y + h / 2.0)),
            font,
        );
    }

    /// Requested size, shrunk so glyphs stay inside a cell of height `cell_h`
    fn glyph_size(&self, requested: f32, cell_h: f32) -> f32 {
        requested.min(cell_h * MAX_GLYPH_FILL / PT_TO_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BingoCard;
    use printpdf::Op;

    fn participant(size: usize) -> Participant {
        let mut n = 0;
        let rows = (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| {
                        if (r, c) == (size / 2, size / 2) {
                            Cell::Free
                        } else {
                            n += 1;
                            Cell::Number(n)
                        }
                    })
                    .collect()
            })
            .collect();
        Participant::new(1, Some("Alice".to_string()), BingoCard::from_rows(1, rows).unwrap())
    }

    fn text_sections(layer: &LayerBuilder) -> usize {
        layer
            .ops()
            .iter()
            .filter(|op| matches!(op, Op::StartTextSection))
            .count()
    }

    #[test]
    fn test_classic_card_draws_every_glyph() {
        let settings = Settings::default();
        let renderer = CardRenderer::new(&settings);
        let mut layer = LayerBuilder::new();
        renderer.render(&mut layer, &participant(5), 0.0, 0.0, 100.0, 130.0);

        // label + 5 letters + 25 cells
        assert_eq!(text_sections(&layer), 31);
    }

    #[test]
    fn test_other_sizes_have_no_letters() {
        let settings = Settings::default();
        let renderer = CardRenderer::new(&settings);
        let mut layer = LayerBuilder::new();
        renderer.render(&mut layer, &participant(3), 0.0, 0.0, 100.0, 130.0);

        // label + 9 cells
        assert_eq!(text_sections(&layer), 10);
    }

    #[test]
    fn test_grid_fills_card_below_label() {
        let settings = Settings::default();
        let renderer = CardRenderer::new(&settings);
        let (w, h) = renderer.cell_dimensions(5, 100.0, 130.0);
        assert!((w * 5.0 - 100.0).abs() < 1e-3);
        assert!((h * 6.0 + renderer.label_band_height() - 130.0).abs() < 1e-3);
    }
}
