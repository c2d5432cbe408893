pub mod crossword;

pub use crossword::{
    // Input
    WordEntry,
    // Placement records
    Direction, Placement,
    // Finished puzzle
    ClueEntry, ClueList, Crossword, EMPTY_CELL,
};
