//! PDF rendering modules

pub mod components;
pub mod helpers;
pub mod layouts;

// Re-export commonly used items for convenience
pub use helpers::LayerBuilder;
pub use layouts::{CardSheetRenderer, RunSummary};
