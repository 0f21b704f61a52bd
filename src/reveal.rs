//! Reveal controller: one activation advances one clue by one step.

use crate::game::{Board, CellCoord, RevealState};
use crate::grid::{CellContent, Grid};
use tracing::{debug, instrument};

/// Result of activating a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RevealOutcome {
    /// The question is now showing.
    ShowedQuestion,
    /// The answer is now showing.
    ShowedAnswer,
    /// Nothing changed.
    Ignored,
}

/// Advances the clue at `coord` and updates its grid cell.
///
/// `Hidden` shows the uppercased question, `ShowingQuestion` shows the
/// uppercased answer, `ShowingAnswer` is left untouched.
#[instrument(skip(board, grid))]
pub fn reveal(board: &mut Board, grid: &mut Grid, coord: CellCoord) -> RevealOutcome {
    let Some(clue) = board.clue_mut(coord) else {
        return RevealOutcome::Ignored;
    };

    match clue.advance() {
        Some(RevealState::ShowingQuestion) => {
            grid.update(coord, CellContent::Question(clue.question().to_uppercase()));
            debug!("Showing question");
            RevealOutcome::ShowedQuestion
        }
        Some(RevealState::ShowingAnswer) => {
            grid.update(coord, CellContent::Answer(clue.answer().to_uppercase()));
            debug!("Showing answer");
            RevealOutcome::ShowedAnswer
        }
        Some(RevealState::Hidden) | None => {
            debug!("Answer already showing, ignoring");
            RevealOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Category, Clue, NUM_CATEGORIES};

    fn board() -> Board {
        Board::new(std::array::from_fn::<_, NUM_CATEGORIES, _>(|col| {
            Category::new(
                format!("cat{}", col),
                std::array::from_fn(|row| Clue::new(format!("q{}{}", row, col), format!("a{}{}", row, col))),
            )
        }))
    }

    #[test]
    fn test_only_the_clicked_cell_changes() {
        let mut board = board();
        let mut grid = Grid::build(&board);
        let coord = CellCoord::new(2, 3).unwrap();

        assert_eq!(reveal(&mut board, &mut grid, coord), RevealOutcome::ShowedQuestion);
        assert_eq!(grid.cell(coord).content, CellContent::Question("Q23".to_string()));
        assert_eq!(board.clue(coord).reveal_state(), RevealState::ShowingQuestion);

        let others = CellCoord::all().filter(|c| *c != coord);
        for other in others {
            assert_eq!(grid.cell(other).content, CellContent::Unrevealed);
            assert_eq!(board.clue(other).reveal_state(), RevealState::Hidden);
        }
    }

    #[test]
    fn test_third_click_is_ignored() {
        let mut board = board();
        let mut grid = Grid::build(&board);
        let coord = CellCoord::new(0, 0).unwrap();

        reveal(&mut board, &mut grid, coord);
        assert_eq!(reveal(&mut board, &mut grid, coord), RevealOutcome::ShowedAnswer);
        let before = grid.clone();
        assert_eq!(reveal(&mut board, &mut grid, coord), RevealOutcome::Ignored);
        assert_eq!(grid, before);
        assert_eq!(board.clue(coord).reveal_state(), RevealState::ShowingAnswer);
    }
}
