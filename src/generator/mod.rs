//! Card generation, dealing and draw planning

pub mod cards;
pub mod deck;
pub mod draws;

pub use cards::{generate_card, generate_cards};
pub use deck::{deal_participants, UNIQUE_ATTEMPTS_PER_CARD};
pub use draws::{plan_draws, DrawPlan};
