use serde::{Deserialize, Serialize};

/// Marker written into grid cells that hold no letter
pub const EMPTY_CELL: char = '#';

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Direction {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Row and column offset between consecutive letters of a run
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

/// A word supplied by the caller together with its clue
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct WordEntry {
    pub word: String,
    pub clue: Option<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, clue: Option<String>) -> Self {
        Self {
            word: word.into(),
            clue,
        }
    }
}

/// A word committed to the grid.
///
/// `number` stays `None` on the generator's own records; it is filled in on
/// the copies handed out by the numbering pass.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub number: Option<u32>,
}

impl Placement {
    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Every cell the word occupies, as `(row, col, letter)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (row_step, col_step) = match self.direction {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        };
        self.word
            .chars()
            .enumerate()
            .map(move |(i, letter)| (self.row + row_step * i, self.col + col_step * i, letter))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ClueEntry {
    pub number: u32,
    pub clue: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct ClueList {
    pub horizontal: Vec<ClueEntry>,
    pub vertical: Vec<ClueEntry>,
}

/// Finished puzzle: the letter grid, the clue lists and the numbered placements
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Crossword {
    pub grid: Vec<Vec<char>>,
    pub clues: ClueList,
    pub placed_words: Vec<Placement>,
}

impl Crossword {
    /// Render the grid as text, one row per line
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
