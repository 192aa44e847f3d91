use std::collections::HashSet;
use std::fmt;

/// Column letters for the classic 5x5 card
pub const BINGO_LETTERS: [&str; 5] = ["B", "I", "N", "G", "O"];

/// A single square on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Number(u32),
    Free,
}

impl Cell {
    pub fn number(&self) -> Option<u32> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Free => None,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    /// Whether the cell is marked given the numbers drawn so far
    pub fn is_marked(&self, drawn: &HashSet<u32>) -> bool {
        match self {
            Cell::Number(n) => drawn.contains(n),
            Cell::Free => true,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Free => write!(f, "FREE"),
        }
    }
}

/// A complete row, column or diagonal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

/// A square bingo grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BingoCard {
    /// 1-based card number printed on the sheet
    pub id: usize,
    grid: Vec<Vec<Cell>>,
}

impl BingoCard {
    /// Build a card from row-major cells; None unless the grid is square
    pub fn from_rows(id: usize, grid: Vec<Vec<Cell>>) -> Option<Self> {
        if grid.iter().all(|row| row.len() == grid.len()) {
            Some(Self { id, grid })
        } else {
            None
        }
    }

    /// For grids the generator built square
    pub(crate) fn from_square_grid(id: usize, grid: Vec<Vec<Cell>>) -> Self {
        Self { id, grid }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// All numbers on the card in row-major order
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.grid.iter().flatten().filter_map(Cell::number)
    }

    pub fn free_cell_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_free()).count()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Numbers in a row, skipping the free cell
    pub fn row_numbers(&self, row: usize) -> Vec<u32> {
        self.grid
            .get(row)
            .map(|r| r.iter().filter_map(Cell::number).collect())
            .unwrap_or_default()
    }

    /// Cells making up a line, in order
    pub fn line_cells(&self, line: Line) -> Vec<Cell> {
        let n = self.size();
        match line {
            Line::Row(r) => self.grid.get(r).cloned().unwrap_or_default(),
            Line::Column(c) => self.grid.iter().filter_map(|row| row.get(c).copied()).collect(),
            Line::Diagonal => (0..n).map(|i| self.grid[i][i]).collect(),
            Line::AntiDiagonal => (0..n).map(|i| self.grid[i][n - 1 - i]).collect(),
        }
    }

    /// Every line that can win on this card
    pub fn lines(&self) -> Vec<Line> {
        let n = self.size();
        let mut lines: Vec<Line> = (0..n).map(Line::Row).collect();
        lines.extend((0..n).map(Line::Column));
        lines.push(Line::Diagonal);
        lines.push(Line::AntiDiagonal);
        lines
    }

    /// Lines fully marked by the drawn numbers
    pub fn completed_lines(&self, drawn: &HashSet<u32>) -> Vec<Line> {
        self.lines()
            .into_iter()
            .filter(|line| self.line_cells(*line).iter().all(|c| c.is_marked(drawn)))
            .collect()
    }

    pub fn has_line(&self, drawn: &HashSet<u32>) -> bool {
        self.lines()
            .into_iter()
            .any(|line| self.line_cells(line).iter().all(|c| c.is_marked(drawn)))
    }
}

/// Column header letters for a grid size, if it has any
pub fn column_letters(size: usize) -> Option<&'static [&'static str]> {
    if size == BINGO_LETTERS.len() {
        Some(&BINGO_LETTERS[..])
    } else {
        None
    }
}
