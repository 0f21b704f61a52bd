mod board;
mod category;
mod clue;

pub use board::{Board, CellCoord, NUM_CATEGORIES};
pub use category::{CLUES_PER_CATEGORY, Category};
pub use clue::{Clue, RevealState};
