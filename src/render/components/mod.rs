//! Rendering components for PDF generation

pub mod call_sheet;
pub mod card_grid;

pub use call_sheet::{call_entries, CallEntry, CallSheetRenderer};
pub use card_grid::CardRenderer;
