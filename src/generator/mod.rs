// Crossword placement engine

pub mod board;
pub mod engine;
pub mod numbering;
pub mod validator;

pub use engine::{CrosswordGenerator, GeneratorOptions, DEFAULT_GRID_SIZE};
pub use numbering::NumberingScheme;
pub use validator::{AdjacencyRule, PlacementValidator};

use crate::errors::GeneratorError;
use crate::models::{Crossword, WordEntry};

/// Build a crossword in one step: validate, place, number.
pub fn generate_crossword(
    entries: impl IntoIterator<Item = WordEntry>,
    options: GeneratorOptions,
) -> Result<Crossword, GeneratorError> {
    let mut generator = CrosswordGenerator::new(entries, options)?;
    generator.generate();
    Ok(generator.get_crossword())
}
