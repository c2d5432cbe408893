//! Error types for building crosswords and loading word lists.
//!
//! Words that cannot be placed are not errors: the generator drops them and
//! reports them through [`CrosswordGenerator::unplaced`]. Only inputs that
//! would make the grid itself invalid are rejected up front.
//!
//! [`CrosswordGenerator::unplaced`]: crate::generator::CrosswordGenerator::unplaced

use thiserror::Error;

/// Invalid construction input for the crossword generator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("grid size must be at least 1")]
    InvalidGridSize,

    #[error("word list contains an empty word")]
    EmptyWord,

    #[error("word {word:?} contains invalid character {ch:?}")]
    InvalidCharacter { word: String, ch: char },

    #[error("word {word:?} appears more than once")]
    DuplicateWord { word: String },

    #[error("seed word {word:?} has {len} letters but the grid is only {grid_size} cells wide")]
    SeedWordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },
}

/// Failure while reading a `{word: clue}` list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON word list must be an object mapping words to clues")]
    NotAnObject,

    #[error("malformed entry on line {line}: expected `word;clue`")]
    MalformedLine { line: usize },
}
