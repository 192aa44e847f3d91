//! Random card generation
//!
//! Numbers are drawn without replacement per card. Cards are independent of
//! each other; see [`super::deck`] for dealing a deck of distinct cards.

use rand::seq::index;
use rand::Rng;

use crate::error::ConfigError;
use crate::model::{BingoCard, CardLayout, Cell};

/// Generate `participant_count` independently randomized cards.
///
/// Card ids run from 1 to `participant_count`.
pub fn generate_cards<R: Rng + ?Sized>(
    participant_count: usize,
    layout: &CardLayout,
    rng: &mut R,
) -> Result<Vec<BingoCard>, ConfigError> {
    if participant_count == 0 {
        return Err(ConfigError::NoParticipants);
    }
    layout.validate()?;

    Ok((1..=participant_count)
        .map(|id| draw_card(id, layout, rng))
        .collect())
}

/// Generate a single card after checking the layout
pub fn generate_card<R: Rng + ?Sized>(
    id: usize,
    layout: &CardLayout,
    rng: &mut R,
) -> Result<BingoCard, ConfigError> {
    layout.validate()?;
    Ok(draw_card(id, layout, rng))
}

/// Fill a grid for a layout that has already passed `validate`
pub(crate) fn draw_card<R: Rng + ?Sized>(id: usize, layout: &CardLayout, rng: &mut R) -> BingoCard {
    let size = layout.grid_size;
    let free = layout.free_cell();

    let columns: Vec<Vec<u32>> = if layout.banded {
        (0..size)
            .map(|col| {
                let (start, len) = layout.column_band(col);
                sample_values(rng, start, len, layout.cells_in_column(col))
            })
            .collect()
    } else {
        let (start, len) = layout.column_band(0);
        let mut picked = sample_values(rng, start, len, layout.numbers_per_card()).into_iter();
        (0..size)
            .map(|col| picked.by_ref().take(layout.cells_in_column(col)).collect())
            .collect()
    };

    let mut grid = vec![vec![Cell::Free; size]; size];
    for (col, values) in columns.into_iter().enumerate() {
        let rows = (0..size).filter(|&row| (row, col) != free);
        for (row, n) in rows.zip(values) {
            grid[row][col] = Cell::Number(n);
        }
    }

    log::debug!("Generated card {}: {:?}", id, grid);
    BingoCard::from_square_grid(id, grid)
}

/// `amount` distinct values from `start..start + len`, in random order.
///
/// Only the picked indices are held in memory, so `len` may span the whole
/// `u32` range. Callers keep `amount <= len`.
pub(crate) fn sample_values<R: Rng + ?Sized>(
    rng: &mut R,
    start: u32,
    len: usize,
    amount: usize,
) -> Vec<u32> {
    index::sample(rng, len, amount)
        .into_iter()
        .map(|i| start + i as u32)
        .collect()
}
