/// Default page margin in mm (0.1 inch)
pub const DEFAULT_PAGE_MARGIN: f32 = 2.54;

/// Default gap between cards in mm (0.05 inch)
pub const DEFAULT_CARD_SPACING: f32 = 1.27;

/// Cards across and down each page
pub const DEFAULT_CARDS_PER_ROW: usize = 2;
pub const DEFAULT_CARDS_PER_COLUMN: usize = 2;

/// Card label ("Card 3: Alice") font size in points
pub const DEFAULT_LABEL_FONT_SIZE: f32 = 12.0;

/// Column letter font size in points
pub const DEFAULT_HEADER_FONT_SIZE: f32 = 20.0;

/// Cell number font size in points
pub const DEFAULT_NUMBER_FONT_SIZE: f32 = 16.0;

/// Footer summary font size in points
pub const DEFAULT_FOOTER_FONT_SIZE: f32 = 8.0;

/// Card outline thickness in points
pub const DEFAULT_BORDER_THICKNESS: f32 = 2.0;

/// Cell grid line thickness in points
pub const DEFAULT_GRID_THICKNESS: f32 = 0.5;

/// RGB color for the card outline
pub const BORDER_COLOR: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// RGB color for the cell grid
pub const GRID_COLOR: (f32, f32, f32) = (0.7, 0.7, 0.7);

/// RGB fill for the free cell
pub const FREE_CELL_COLOR: (f32, f32, f32) = (0.9, 0.9, 0.9);
