pub mod card;
pub mod layout;
pub mod participant;

pub use card::{column_letters, BingoCard, Cell, Line, BINGO_LETTERS};
pub use layout::{span_len, CardLayout, MAX_GRID_SIZE};
pub use participant::Participant;
