use crate::cli::{Args, PageSize};

use super::defaults::*;

/// Runtime settings for PDF generation
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions (mm)
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub card_spacing: f32,

    // Grid of cards on each page
    pub cards_per_row: usize,
    pub cards_per_column: usize,

    /// Append the caller's sheet after the cards
    pub call_sheet: bool,

    // Typography (points)
    pub label_font_size: f32,
    pub header_font_size: f32,
    pub number_font_size: f32,
    pub footer_font_size: f32,

    // Lines (points)
    pub border_thickness: f32,
    pub grid_thickness: f32,

    // Colors (RGB 0.0-1.0)
    pub border_color: (f32, f32, f32),
    pub grid_color: (f32, f32, f32),
    pub free_cell_color: (f32, f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        let (page_width, page_height) = PageSize::Letter.dimensions_mm();
        Self {
            page_width,
            page_height,
            margin: DEFAULT_PAGE_MARGIN,
            card_spacing: DEFAULT_CARD_SPACING,

            cards_per_row: DEFAULT_CARDS_PER_ROW,
            cards_per_column: DEFAULT_CARDS_PER_COLUMN,

            call_sheet: false,

            label_font_size: DEFAULT_LABEL_FONT_SIZE,
            header_font_size: DEFAULT_HEADER_FONT_SIZE,
            number_font_size: DEFAULT_NUMBER_FONT_SIZE,
            footer_font_size: DEFAULT_FOOTER_FONT_SIZE,

            border_thickness: DEFAULT_BORDER_THICKNESS,
            grid_thickness: DEFAULT_GRID_THICKNESS,

            border_color: BORDER_COLOR,
            grid_color: GRID_COLOR,
            free_cell_color: FREE_CELL_COLOR,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let (page_width, page_height) = args.page_size.dimensions_mm();
        Self {
            page_width,
            page_height,
            call_sheet: args.call_sheet,
            ..Default::default()
        }
    }

    pub fn cards_per_page(&self) -> usize {
        self.cards_per_row * self.cards_per_column
    }

    /// Get the width of one card
    pub fn card_width(&self) -> f32 {
        let cols = self.cards_per_row as f32;
        (self.page_width - 3.0 * self.margin - (cols - 1.0) * self.card_spacing) / cols
    }

    /// Get the height of one card
    pub fn card_height(&self) -> f32 {
        let rows = self.cards_per_column as f32;
        (self.page_height - 3.0 * self.margin - (rows - 1.0) * self.card_spacing) / rows
    }

    /// Lower-left corner of the card at `slot` (0-based, row-major within a page)
    pub fn card_origin(&self, slot: usize) -> (f32, f32) {
        let col = (slot % self.cards_per_row) as f32;
        let row = (slot / self.cards_per_row) as f32;
        let x = self.margin + col * (self.card_width() + self.card_spacing);
        let y = self.page_height - self.margin - (row + 1.0) * (self.card_height() + self.card_spacing);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_cards_fit_on_letter() {
        let settings = Settings::default();
        assert_eq!(settings.cards_per_page(), 4);

        for slot in 0..4 {
            let (x, y) = settings.card_origin(slot);
            assert!(x >= settings.margin - 0.01);
            assert!(y >= 0.0);
            assert!(x + settings.card_width() <= settings.page_width - settings.margin + 0.01);
            assert!(y + settings.card_height() <= settings.page_height - settings.margin + 0.01);
        }
    }

    #[test]
    fn test_slots_do_not_overlap() {
        let settings = Settings::default();
        let (x0, y0) = settings.card_origin(0);
        let (x1, _) = settings.card_origin(1);
        let (_, y2) = settings.card_origin(2);
        assert!(x1 >= x0 + settings.card_width());
        assert!(y0 >= y2 + settings.card_height());
    }
}
