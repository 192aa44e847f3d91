use std::ops::RangeInclusive;

use crate::error::ConfigError;

/// Largest grid side length we will generate
pub const MAX_GRID_SIZE: usize = 15;

/// Count of values in an inclusive range, without walking it
pub fn span_len(range: &RangeInclusive<u32>) -> usize {
    if range.is_empty() {
        0
    } else {
        (*range.end() - *range.start()) as usize + 1
    }
}

/// Shape of the cards in a run and the pool their numbers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub grid_size: usize,
    pub number_range: RangeInclusive<u32>,
    /// Restrict each column to its own slice of the range (B 1-15, I 16-30, ...)
    pub banded: bool,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            grid_size: 5,
            number_range: 1..=75,
            banded: true,
        }
    }
}

impl CardLayout {
    pub fn new(grid_size: usize, number_range: RangeInclusive<u32>) -> Self {
        Self {
            grid_size,
            number_range,
            banded: true,
        }
    }

    pub fn unbanded(mut self) -> Self {
        self.banded = false;
        self
    }

    /// (row, col) of the free cell
    pub fn free_cell(&self) -> (usize, usize) {
        (self.grid_size / 2, self.grid_size / 2)
    }

    /// Count of numbered cells on each card
    pub fn numbers_per_card(&self) -> usize {
        self.grid_size * self.grid_size - 1
    }

    /// Count of distinct values in the number range
    pub fn range_len(&self) -> usize {
        span_len(&self.number_range)
    }

    /// First value and length of the band column `col` draws from.
    ///
    /// Bands are contiguous and differ in length by at most one; an
    /// unbanded layout returns the whole range for every column.
    pub fn column_band(&self, col: usize) -> (u32, usize) {
        let start = *self.number_range.start();
        let len = self.range_len() as u64;
        if !self.banded || self.grid_size == 0 {
            return (start, len as usize);
        }
        let size = self.grid_size as u64;
        let col = col as u64;
        let lo = col * len / size;
        let hi = (col + 1) * len / size;
        if lo >= len {
            return (start, 0);
        }
        (start + lo as u32, (hi - lo) as usize)
    }

    /// Column whose band holds `number`; None when unbanded or out of range
    pub fn column_of(&self, number: u32) -> Option<usize> {
        if !self.banded || self.grid_size == 0 || !self.number_range.contains(&number) {
            return None;
        }
        let offset = (number - *self.number_range.start()) as u64;
        let len = self.range_len() as u64;
        let size = self.grid_size as u64;
        // Band c covers offsets [c * len / size, (c + 1) * len / size)
        (0..size)
            .find(|c| offset < (c + 1) * len / size)
            .map(|c| c as usize)
    }

    /// Cells that column `col` must fill with numbers
    pub fn cells_in_column(&self, col: usize) -> usize {
        if col == self.free_cell().1 {
            self.grid_size - 1
        } else {
            self.grid_size
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }

        let needed = self.numbers_per_card();
        let available = self.range_len();
        if available < needed {
            return Err(ConfigError::NumberRangeTooSmall { needed, available });
        }

        if self.banded {
            for col in 0..self.grid_size {
                let (_, available) = self.column_band(col);
                let needed = self.cells_in_column(col);
                if available < needed {
                    return Err(ConfigError::ColumnBandTooNarrow {
                        column: col + 1,
                        needed,
                        available,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_values(layout: &CardLayout, col: usize) -> Vec<u32> {
        let (start, len) = layout.column_band(col);
        (0..len as u32).map(|i| start + i).collect()
    }

    #[test]
    fn test_classic_bands() {
        let layout = CardLayout::default();
        assert_eq!(layout.column_band(0), (1, 15));
        assert_eq!(layout.column_band(1), (16, 15));
        assert_eq!(layout.column_band(2), (31, 15));
        assert_eq!(layout.column_band(3), (46, 15));
        assert_eq!(layout.column_band(4), (61, 15));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_uneven_bands_cover_range() {
        let layout = CardLayout::new(3, 1..=10);
        let covered: Vec<u32> = (0..3).flat_map(|c| band_values(&layout, c)).collect();
        assert_eq!(covered, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_column_of_matches_bands() {
        let layout = CardLayout::default();
        assert_eq!(layout.column_of(1), Some(0));
        assert_eq!(layout.column_of(15), Some(0));
        assert_eq!(layout.column_of(16), Some(1));
        assert_eq!(layout.column_of(75), Some(4));
        assert_eq!(layout.column_of(76), None);
        assert_eq!(layout.clone().unbanded().column_of(10), None);

        let uneven = CardLayout::new(3, 1..=10);
        for col in 0..3 {
            for n in band_values(&uneven, col) {
                assert_eq!(uneven.column_of(n), Some(col));
            }
        }
    }

    #[test]
    fn test_unbanded_uses_whole_range() {
        let layout = CardLayout::new(3, 1..=10).unbanded();
        assert_eq!(layout.column_band(2), (1, 10));
    }

    #[test]
    fn test_bands_of_full_u32_range() {
        let layout = CardLayout::new(5, 0..=u32::MAX);
        assert_eq!(layout.range_len(), 1usize << 32);
        let (start, len) = layout.column_band(4);
        assert_eq!(start as usize + len - 1, u32::MAX as usize);
        assert_eq!(layout.column_of(u32::MAX), Some(4));
        assert!(layout.validate().is_ok());
        assert_eq!(span_len(&(7..=7)), 1);
    }

    #[test]
    fn test_free_cell_is_centered() {
        assert_eq!(CardLayout::default().free_cell(), (2, 2));
        assert_eq!(CardLayout::new(4, 1..=60).free_cell(), (2, 2));
        assert_eq!(CardLayout::new(1, 1..=1).free_cell(), (0, 0));
    }

    #[test]
    fn test_range_too_small() {
        let layout = CardLayout::new(5, 1..=23);
        assert_eq!(
            layout.validate(),
            Err(ConfigError::NumberRangeTooSmall {
                needed: 24,
                available: 23
            })
        );
    }

    #[test]
    fn test_band_too_narrow() {
        // 24 values is enough overall, but five columns of four or five values
        // cannot hold five numbers each.
        let layout = CardLayout::new(5, 1..=24);
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::ColumnBandTooNarrow { .. })
        ));
        assert!(layout.unbanded().validate().is_ok());
    }

    #[test]
    fn test_grid_size_bounds() {
        assert!(CardLayout::new(0, 1..=75).validate().is_err());
        assert!(CardLayout::new(16, 1..=1000).validate().is_err());
    }

    #[test]
    fn test_empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let layout = CardLayout::new(3, 10..=1);
        assert_eq!(layout.range_len(), 0);
        assert!(layout.validate().is_err());
    }
}
