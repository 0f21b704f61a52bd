//! A titled column of clues.

use super::clue::Clue;
use serde::{Deserialize, Serialize};

/// Number of clues in every category.
pub const CLUES_PER_CATEGORY: usize = 5;

/// A titled group of exactly [`CLUES_PER_CATEGORY`] clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Category {
    /// Title as delivered by the API.
    title: String,
    /// Clues, position-significant (index is the board row).
    clues: [Clue; CLUES_PER_CATEGORY],
}

impl Category {
    /// Creates a category from its title and clues.
    pub fn new(title: impl Into<String>, clues: [Clue; CLUES_PER_CATEGORY]) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Returns the clue at `row`.
    pub fn clue(&self, row: usize) -> Option<&Clue> {
        self.clues.get(row)
    }

    pub(crate) fn clue_mut(&mut self, row: usize) -> Option<&mut Clue> {
        self.clues.get_mut(row)
    }
}
