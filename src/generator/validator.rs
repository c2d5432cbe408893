use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::models::Direction;

/// How the perpendicular-neighbor check treats cells a word would share
/// with an existing placement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum AdjacencyRule {
    /// Both perpendicular neighbors must be empty at every letter of the
    /// run, shared cells included.
    #[default]
    Strict,
    /// Shared cells belonging to a perpendicular word skip the neighbor
    /// check; sharing a cell with a word running the same way is refused.
    AllowCrossings,
}

impl FromStr for AdjacencyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(AdjacencyRule::Strict),
            "allow-crossings" | "allow_crossings" | "crossings" => Ok(AdjacencyRule::AllowCrossings),
            other => Err(format!("unknown adjacency rule {other:?}")),
        }
    }
}

pub struct PlacementValidator {
    rule: AdjacencyRule,
}

impl PlacementValidator {
    pub fn new(rule: AdjacencyRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> AdjacencyRule {
        self.rule
    }

    /// Check whether `letters` can be written at `(row, col)` running in
    /// `direction`.
    ///
    /// A run is accepted when it lies inside the grid, every cell is empty or
    /// already holds the same letter, the cells on either side of the run are
    /// empty, and the cells just before its start and just after its end are
    /// empty.
    pub fn can_place(
        &self,
        board: &Board,
        letters: &[char],
        row: isize,
        col: isize,
        direction: Direction,
    ) -> bool {
        if letters.is_empty() {
            return false;
        }

        let (row_step, col_step) = direction.step();
        let last = letters.len() as isize - 1;
        let (end_row, end_col) = (row + row_step * last, col + col_step * last);
        if !board.in_bounds(row, col) || !board.in_bounds(end_row, end_col) {
            return false;
        }

        let (side_row, side_col) = direction.perpendicular().step();
        for (i, &letter) in letters.iter().enumerate() {
            let r = row + row_step * i as isize;
            let c = col + col_step * i as isize;

            let shared = match board.cell(r, c) {
                Some(cell) if cell.letter != letter => return false,
                Some(cell) => {
                    if self.rule == AdjacencyRule::AllowCrossings && cell.is_run(direction) {
                        return false;
                    }
                    true
                }
                None => false,
            };

            let check_sides = match self.rule {
                AdjacencyRule::Strict => true,
                AdjacencyRule::AllowCrossings => !shared,
            };
            if check_sides
                && (!board.is_vacant(r - side_row, c - side_col)
                    || !board.is_vacant(r + side_row, c + side_col))
            {
                return false;
            }
        }

        board.is_vacant(row - row_step, col - col_step)
            && board.is_vacant(end_row + row_step, end_col + col_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn board_with_cat() -> Board {
        // Row 3: . C A T .
        let mut board = Board::new(7);
        board.write(&letters("CAT"), 3, 1, Direction::Horizontal);
        board
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(5);
        let validator = PlacementValidator::new(AdjacencyRule::Strict);

        assert!(validator.can_place(&board, &letters("HELLO"), 0, 0, Direction::Horizontal));
        assert!(!validator.can_place(&board, &letters("HELLO"), 0, 1, Direction::Horizontal));
        assert!(!validator.can_place(&board, &letters("HELLO"), 1, 0, Direction::Vertical));
        assert!(!validator.can_place(&board, &letters("HI"), -1, 0, Direction::Vertical));
        assert!(!validator.can_place(&board, &letters("HI"), 0, -1, Direction::Horizontal));
    }

    #[test]
    fn test_letter_conflict_rejected() {
        let board = board_with_cat();
        let validator = PlacementValidator::new(AdjacencyRule::AllowCrossings);

        // O would land on the A of CAT
        assert!(!validator.can_place(&board, &letters("BOX"), 2, 2, Direction::Vertical));
        assert!(validator.can_place(&board, &letters("BAT"), 2, 2, Direction::Vertical));
    }

    #[test]
    fn test_strict_rejects_crossing_with_neighbors() {
        let board = board_with_cat();
        let validator = PlacementValidator::new(AdjacencyRule::Strict);

        // Crossing the A puts C and T beside the shared cell
        assert!(!validator.can_place(&board, &letters("BAT"), 2, 2, Direction::Vertical));
    }

    #[test]
    fn test_parallel_neighbor_rejected() {
        let board = board_with_cat();

        for rule in [AdjacencyRule::Strict, AdjacencyRule::AllowCrossings] {
            let validator = PlacementValidator::new(rule);
            // Directly above CAT, touching it along the whole run
            assert!(!validator.can_place(&board, &letters("DOG"), 2, 1, Direction::Horizontal));
            // One row further up is clear
            assert!(validator.can_place(&board, &letters("DOG"), 1, 1, Direction::Horizontal));
        }
    }

    #[test]
    fn test_end_to_end_contact_rejected() {
        let board = board_with_cat();
        let validator = PlacementValidator::new(AdjacencyRule::Strict);

        // Would start right after the T of CAT on the same row
        assert!(!validator.can_place(&board, &letters("OW"), 3, 4, Direction::Horizontal));
        // Would end right before the C of CAT
        assert!(!validator.can_place(&board, &letters("I"), 3, 0, Direction::Horizontal));
        assert!(validator.can_place(&board, &letters("OW"), 3, 5, Direction::Horizontal));
    }

    #[test]
    fn test_vertical_end_caps() {
        let mut board = Board::new(7);
        board.write(&letters("SUN"), 4, 3, Direction::Horizontal);
        let validator = PlacementValidator::new(AdjacencyRule::Strict);

        // Ends at row 2 with an empty cell between it and SUN
        assert!(validator.can_place(&board, &letters("GO"), 1, 3, Direction::Vertical));
        // Ends at row 3, directly on top of the U
        assert!(!validator.can_place(&board, &letters("GO"), 2, 4, Direction::Vertical));
    }

    #[test]
    fn test_same_direction_overlap_refused_with_crossings() {
        let board = board_with_cat();
        let validator = PlacementValidator::new(AdjacencyRule::AllowCrossings);

        // Would swallow CAT: ends are clear but every shared cell already runs horizontally
        assert!(!validator.can_place(&board, &letters("SCATS"), 3, 0, Direction::Horizontal));
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!("strict".parse::<AdjacencyRule>(), Ok(AdjacencyRule::Strict));
        assert_eq!(
            "Allow-Crossings".parse::<AdjacencyRule>(),
            Ok(AdjacencyRule::AllowCrossings)
        );
        assert!("loose".parse::<AdjacencyRule>().is_err());
    }
}
