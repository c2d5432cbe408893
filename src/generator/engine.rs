use std::collections::{HashMap, HashSet};

use super::board::Board;
use super::numbering::number_in_commit_order;
use super::validator::{AdjacencyRule, PlacementValidator};
use crate::errors::GeneratorError;
use crate::models::{Crossword, Direction, Placement, WordEntry};

/// Side length of the grid when the caller does not pick one
pub const DEFAULT_GRID_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GeneratorOptions {
    pub grid_size: usize,
    pub adjacency: AdjacencyRule,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            adjacency: AdjacencyRule::Strict,
        }
    }
}

/// A normalized word waiting in the placement queue
#[derive(Debug, Clone)]
struct QueuedWord {
    text: String,
    letters: Vec<char>,
}

/// Position a word would take when crossing an already placed word
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Candidate {
    row: isize,
    col: isize,
    direction: Direction,
}

impl Candidate {
    /// Perpendicular position putting letter `i` of the new word on letter
    /// `j` of `anchor`
    fn crossing(anchor: &Placement, i: usize, j: usize) -> Self {
        let (row, col) = (anchor.row as isize, anchor.col as isize);
        let (i, j) = (i as isize, j as isize);
        match anchor.direction {
            Direction::Horizontal => Self {
                row: row - i,
                col: col + j,
                direction: Direction::Vertical,
            },
            Direction::Vertical => Self {
                row: row + j,
                col: col - i,
                direction: Direction::Horizontal,
            },
        }
    }
}

/// Greedy first-fit crossword builder.
///
/// Words are queued longest first (ties keep input order). The first word is
/// laid horizontally across the middle of the grid; every later word takes
/// the first valid crossing with an already placed word, or is dropped.
pub struct CrosswordGenerator {
    queue: Vec<QueuedWord>,
    clues: HashMap<String, String>,
    board: Board,
    validator: PlacementValidator,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl CrosswordGenerator {
    /// Build a generator from words in caller order.
    ///
    /// Words are trimmed and uppercased. Fails when the grid size is zero,
    /// a word is empty, contains a character other than a letter or digit,
    /// repeats another word, or when the longest word does not fit the grid.
    pub fn new(
        entries: impl IntoIterator<Item = WordEntry>,
        options: GeneratorOptions,
    ) -> Result<Self, GeneratorError> {
        if options.grid_size == 0 {
            return Err(GeneratorError::InvalidGridSize);
        }

        let mut queue = Vec::new();
        let mut clues = HashMap::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let word = entry.word.trim();
            if word.is_empty() {
                return Err(GeneratorError::EmptyWord);
            }
            if let Some(ch) = word.chars().find(|c| !c.is_alphanumeric()) {
                return Err(GeneratorError::InvalidCharacter {
                    word: word.to_string(),
                    ch,
                });
            }

            let text = word.to_uppercase();
            if !seen.insert(text.clone()) {
                return Err(GeneratorError::DuplicateWord { word: text });
            }
            if let Some(clue) = entry.clue {
                clues.insert(text.clone(), clue);
            }
            queue.push(QueuedWord {
                letters: text.chars().collect(),
                text,
            });
        }

        // Stable sort keeps input order among words of equal length
        queue.sort_by(|a, b| b.letters.len().cmp(&a.letters.len()));

        if let Some(seed) = queue.first() {
            if seed.letters.len() > options.grid_size {
                return Err(GeneratorError::SeedWordTooLong {
                    word: seed.text.clone(),
                    len: seed.letters.len(),
                    grid_size: options.grid_size,
                });
            }
        }

        Ok(Self {
            queue,
            clues,
            board: Board::new(options.grid_size),
            validator: PlacementValidator::new(options.adjacency),
            placements: Vec::new(),
            unplaced: Vec::new(),
        })
    }

    /// Build a generator from a word set and a separate clue lookup.
    ///
    /// Clues are looked up by the word as given, then by its uppercase form.
    pub fn with_clues<I, S>(
        words: I,
        clues: &HashMap<String, String>,
        options: GeneratorOptions,
    ) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words.into_iter().map(|word| {
            let word = word.as_ref();
            let clue = clues
                .get(word)
                .or_else(|| clues.get(&word.to_uppercase()))
                .cloned();
            WordEntry::new(word, clue)
        });
        Self::new(entries, options)
    }

    pub fn grid_size(&self) -> usize {
        self.board.size()
    }

    pub fn adjacency(&self) -> AdjacencyRule {
        self.validator.rule()
    }

    /// Committed placements in commit order, not yet numbered
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words the last `generate` call could not place, in queue order
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Lay out every queued word. Starts from an empty grid on each call.
    pub fn generate(&mut self) {
        self.board = Board::new(self.board.size());
        self.placements.clear();
        self.unplaced.clear();

        let queue = std::mem::take(&mut self.queue);
        for word in &queue {
            if self.placements.is_empty() {
                self.place_seed(word);
                continue;
            }

            let found = Self::candidates(&self.placements, &word.letters).find(|candidate| {
                self.validator.can_place(
                    &self.board,
                    &word.letters,
                    candidate.row,
                    candidate.col,
                    candidate.direction,
                )
            });

            match found {
                Some(candidate) => self.commit(
                    word,
                    candidate.row as usize,
                    candidate.col as usize,
                    candidate.direction,
                ),
                None => {
                    tracing::warn!("Could not place word: {}", word.text);
                    self.unplaced.push(word.text.clone());
                }
            }
        }
        self.queue = queue;

        tracing::info!(
            "Generated {}x{} crossword: {} placed, {} unplaced",
            self.board.size(),
            self.board.size(),
            self.placements.len(),
            self.unplaced.len()
        );
    }

    /// Number the placements and build the clue lists
    pub fn get_crossword(&self) -> Crossword {
        let (placed_words, clues) = number_in_commit_order(&self.placements, &self.clues);
        Crossword {
            grid: self.board.rows(),
            clues,
            placed_words,
        }
    }

    /// Seed word goes horizontally across the center row. Construction
    /// guarantees it fits.
    fn place_seed(&mut self, word: &QueuedWord) {
        let size = self.board.size();
        let row = size / 2;
        let col = size / 2 - word.letters.len() / 2;
        self.commit(word, row, col, Direction::Horizontal);
    }

    fn commit(&mut self, word: &QueuedWord, row: usize, col: usize, direction: Direction) {
        self.board.write(&word.letters, row, col, direction);
        tracing::debug!(
            "Placed {} at ({}, {}) {:?}",
            word.text,
            row,
            col,
            direction
        );
        self.placements.push(Placement {
            word: word.text.clone(),
            row,
            col,
            direction,
            number: None,
        });
    }

    /// Every crossing position for `letters`, lazily, in search order:
    /// placed words in commit order, then letters of the new word, then
    /// letters of the placed word.
    fn candidates<'a>(
        placements: &'a [Placement],
        letters: &'a [char],
    ) -> impl Iterator<Item = Candidate> + 'a {
        placements.iter().flat_map(move |anchor| {
            letters.iter().enumerate().flat_map(move |(i, &letter)| {
                anchor
                    .word
                    .chars()
                    .enumerate()
                    .filter(move |&(_, existing)| existing == letter)
                    .map(move |(j, _)| Candidate::crossing(anchor, i, j))
            })
        })
    }
}
