use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ClueEntry, ClueList, Crossword, Direction, Placement};

/// How clue numbers are assigned in the output
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NumberingScheme {
    /// 1..K in the order words were committed
    #[default]
    Placement,
    /// Published-crossword convention: word starts numbered in reading order
    Grid,
}

impl FromStr for NumberingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placement" | "commit" => Ok(NumberingScheme::Placement),
            "grid" => Ok(NumberingScheme::Grid),
            other => Err(format!("unknown numbering scheme {other:?}")),
        }
    }
}

/// Number placements 1..K in commit order and bucket their clues by
/// direction.
pub fn number_in_commit_order(
    placements: &[Placement],
    clues: &HashMap<String, String>,
) -> (Vec<Placement>, ClueList) {
    let mut numbered = Vec::with_capacity(placements.len());
    let mut list = ClueList::default();

    for (number, placement) in (1u32..).zip(placements) {
        let entry = ClueEntry {
            number,
            clue: clues.get(&placement.word).cloned(),
        };
        match placement.direction {
            Direction::Horizontal => list.horizontal.push(entry),
            Direction::Vertical => list.vertical.push(entry),
        }
        numbered.push(Placement {
            number: Some(number),
            ..placement.clone()
        });
    }

    (numbered, list)
}

impl Crossword {
    /// Re-derive clue numbers from grid coordinates.
    ///
    /// Word starts are numbered in row-major order; an across and a down
    /// word starting on the same cell share a number. Placements keep their
    /// commit order, clue lists are sorted by the new numbers.
    pub fn renumbered_by_grid(&self) -> Crossword {
        let numbers_by_start: BTreeMap<(usize, usize), u32> = self
            .placed_words
            .iter()
            .map(|p| ((p.row, p.col), 0))
            .collect::<BTreeMap<_, _>>()
            .into_keys()
            .zip(1u32..)
            .collect();

        let old_clues: HashMap<u32, Option<String>> = self
            .clues
            .horizontal
            .iter()
            .chain(&self.clues.vertical)
            .map(|entry| (entry.number, entry.clue.clone()))
            .collect();

        let mut list = ClueList::default();
        let placed_words: Vec<Placement> = self
            .placed_words
            .iter()
            .map(|placement| {
                let number = numbers_by_start[&(placement.row, placement.col)];
                let clue = placement
                    .number
                    .and_then(|old| old_clues.get(&old).cloned())
                    .flatten();
                let entry = ClueEntry { number, clue };
                match placement.direction {
                    Direction::Horizontal => list.horizontal.push(entry),
                    Direction::Vertical => list.vertical.push(entry),
                }
                Placement {
                    number: Some(number),
                    ..placement.clone()
                }
            })
            .collect();

        list.horizontal.sort_by_key(|entry| entry.number);
        list.vertical.sort_by_key(|entry| entry.number);

        Crossword {
            grid: self.grid.clone(),
            clues: list,
            placed_words,
        }
    }
}
