//! Crossword puzzle generator.
//!
//! Lays a `{word: clue}` list onto a square grid with a greedy first-fit
//! strategy: the longest word is centered horizontally, each following word
//! takes the first valid perpendicular crossing with a word already on the
//! grid, and words with no valid crossing are dropped. Clues are numbered in
//! placement order.
//!
//! ```
//! use crossword_generator::generator::{generate_crossword, GeneratorOptions};
//! use crossword_generator::models::WordEntry;
//!
//! let crossword = generate_crossword(
//!     vec![WordEntry::new("senado", Some("Câmara alta".to_string()))],
//!     GeneratorOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(crossword.placed_words[0].word, "SENADO");
//! assert_eq!(crossword.placed_words[0].number, Some(1));
//! ```

pub mod config;
pub mod errors;
pub mod generator;
pub mod models;
pub mod words;
