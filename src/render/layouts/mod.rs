//! Page layout renderers

pub mod card_sheet;

pub use card_sheet::{CardSheetRenderer, RunSummary};
