use crate::models::{Direction, EMPTY_CELL};

/// A filled cell. The flags record which runs pass through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub horizontal: bool,
    pub vertical: bool,
}

impl Cell {
    /// Whether a placement running in `direction` already covers this cell
    pub fn is_run(&self, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.horizontal,
            Direction::Vertical => self.vertical,
        }
    }
}

/// Square letter grid owned by the generator.
///
/// Coordinates are taken as `isize` so candidate positions computed from an
/// intersection can fall off the top or left edge without wrapping.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Cell>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Cell content, `None` when empty or outside the grid
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// True for empty cells and for positions past the edge
    pub fn is_vacant(&self, row: isize, col: isize) -> bool {
        self.cell(row, col).is_none()
    }

    /// Write a run of letters. Callers validate the run first.
    pub fn write(&mut self, letters: &[char], row: usize, col: usize, direction: Direction) {
        let (row_step, col_step) = direction.step();
        for (i, &letter) in letters.iter().enumerate() {
            let r = row + row_step as usize * i;
            let c = col + col_step as usize * i;
            let slot = &mut self.cells[r * self.size + c];
            let cell = slot.get_or_insert(Cell {
                letter,
                horizontal: false,
                vertical: false,
            });
            match direction {
                Direction::Horizontal => cell.horizontal = true,
                Direction::Vertical => cell.vertical = true,
            }
        }
    }

    /// The grid as rows of letters, empty cells shown as [`EMPTY_CELL`]
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY_CELL, |c| c.letter))
                    .collect()
            })
            .collect()
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
