//! The 6×5 board of categories and cell coordinates.

use super::category::{CLUES_PER_CATEGORY, Category};
use super::clue::Clue;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of categories (columns) on the board.
pub const NUM_CATEGORIES: usize = 6;

/// A cell on the board: `row` picks the clue, `column` picks the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct CellCoord {
    row: usize,
    column: usize,
}

/// Unchecked wire form of a [`CellCoord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    column: usize,
}

impl TryFrom<RawCoord> for CellCoord {
    type Error = String;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.column).ok_or_else(|| {
            format!(
                "cell ({}, {}) is outside the {}x{} board",
                raw.row, raw.column, CLUES_PER_CATEGORY, NUM_CATEGORIES
            )
        })
    }
}

impl CellCoord {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Creates a coordinate, or `None` if it lies outside the 5×6 body.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < CLUES_PER_CATEGORY && column < NUM_CATEGORIES).then_some(Self { row, column })
    }

    /// Clue index within the category.
    pub fn row(self) -> usize {
        self.row
    }

    /// Category index.
    pub fn column(self) -> usize {
        self.column
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CLUES_PER_CATEGORY)
            .flat_map(|row| (0..NUM_CATEGORIES).map(move |column| Self { row, column }))
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The categories currently in play, indexed by column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: [Category; NUM_CATEGORIES],
}

impl Board {
    /// Creates a board from exactly [`NUM_CATEGORIES`] categories.
    #[instrument(skip(categories))]
    pub fn new(categories: [Category; NUM_CATEGORIES]) -> Self {
        debug!("Creating board");
        Self { categories }
    }

    /// Returns all categories in column order.
    pub fn categories(&self) -> &[Category; NUM_CATEGORIES] {
        &self.categories
    }

    /// Returns the clue at the given coordinate.
    pub fn clue(&self, coord: CellCoord) -> &Clue {
        &self.categories[coord.column].clues()[coord.row]
    }

    pub(crate) fn clue_mut(&mut self, coord: CellCoord) -> Option<&mut Clue> {
        self.categories
            .get_mut(coord.column)
            .and_then(|category| category.clue_mut(coord.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_rejects_out_of_range() {
        assert!(CellCoord::new(0, 0).is_some());
        assert!(CellCoord::new(4, 5).is_some());
        assert!(CellCoord::new(5, 0).is_none());
        assert!(CellCoord::new(0, 6).is_none());
    }

    #[test]
    fn test_all_coords_cover_body() {
        let coords: Vec<_> = CellCoord::all().collect();
        assert_eq!(coords.len(), 30);
        assert_eq!(coords[0], CellCoord::new(0, 0).unwrap());
        assert_eq!(coords[6], CellCoord::new(1, 0).unwrap());
        assert_eq!(coords[29], CellCoord::new(4, 5).unwrap());
    }

    #[test]
    fn test_deserialize_checks_range() {
        let coord: CellCoord = serde_json::from_str(r#"{"row":4,"column":5}"#).unwrap();
        assert_eq!(coord, CellCoord::new(4, 5).unwrap());

        let err = serde_json::from_str::<CellCoord>(r#"{"row":9,"column":2}"#).unwrap_err();
        assert!(err.to_string().contains("outside the 5x6 board"));
        assert!(serde_json::from_str::<CellCoord>(r#"{"row":0,"column":6}"#).is_err());
    }
}
