//! Render model for the board: header row plus body cells tagged by coordinate.
//!
//! The grid is what a presentation layer draws. It never looks at the
//! network and is rebuilt wholesale whenever a new board arrives.

use crate::game::{Board, CLUES_PER_CATEGORY, CellCoord, NUM_CATEGORIES};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Marker shown on a cell whose clue is still hidden.
pub const UNREVEALED_MARKER: &str = "?";

/// Visual treatment of a body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum CellStyle {
    /// Neutral placeholder.
    Placeholder,
    /// Question text.
    Question,
    /// Answer text.
    Answer,
}

/// What a body cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    /// Clue not revealed yet.
    Unrevealed,
    /// Uppercased question text.
    Question(String),
    /// Uppercased answer text.
    Answer(String),
}

impl CellContent {
    /// Text to draw in the cell.
    pub fn text(&self) -> &str {
        match self {
            Self::Unrevealed => UNREVEALED_MARKER,
            Self::Question(text) | Self::Answer(text) => text,
        }
    }

    /// Style to draw the cell with.
    pub fn style(&self) -> CellStyle {
        match self {
            Self::Unrevealed => CellStyle::Placeholder,
            Self::Question(_) => CellStyle::Question,
            Self::Answer(_) => CellStyle::Answer,
        }
    }
}

/// Header cell naming a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Column this header sits above.
    pub column: usize,
    /// Uppercased category title.
    pub title: String,
}

/// Body cell tagged with its coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyCell {
    /// Which clue this cell shows.
    pub coord: CellCoord,
    /// Current content.
    pub content: CellContent,
}

/// Header row plus a 5×6 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    headers: Vec<HeaderCell>,
    rows: Vec<Vec<BodyCell>>,
}

impl Grid {
    /// Builds a fresh grid for `board` with every body cell unrevealed.
    #[instrument(skip(board))]
    pub fn build(board: &Board) -> Self {
        let headers: Vec<HeaderCell> = board
            .categories()
            .iter()
            .enumerate()
            .map(|(column, category)| HeaderCell {
                column,
                title: category.title().to_uppercase(),
            })
            .collect();

        let rows = (0..CLUES_PER_CATEGORY)
            .map(|row| {
                (0..NUM_CATEGORIES)
                    .filter_map(|column| CellCoord::new(row, column))
                    .map(|coord| BodyCell {
                        coord,
                        content: CellContent::Unrevealed,
                    })
                    .collect()
            })
            .collect();

        debug!(headers = headers.len(), "Built grid");
        Self { headers, rows }
    }

    /// Header cells in column order.
    pub fn headers(&self) -> &[HeaderCell] {
        &self.headers
    }

    /// Body rows, each in column order.
    pub fn rows(&self) -> &[Vec<BodyCell>] {
        &self.rows
    }

    /// Iterates all body cells in row-major order.
    pub fn body_cells(&self) -> impl Iterator<Item = &BodyCell> {
        self.rows.iter().flatten()
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: CellCoord) -> &BodyCell {
        &self.rows[coord.row()][coord.column()]
    }

    /// Formats the grid as plain text, one line per row.
    pub fn display(&self) -> String {
        let header = self
            .headers
            .iter()
            .map(|h| h.title.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        let rule = "-".repeat(header.chars().count().max(3));

        let mut lines = vec![header, rule];
        for row in &self.rows {
            lines.push(
                row.iter()
                    .map(|cell| cell.content.text())
                    .collect::<Vec<_>>()
                    .join(" | "),
            );
        }
        lines.join("\n")
    }

    /// Replaces the content of the cell at `coord`.
    #[instrument(skip(self, content), fields(style = %content.style()))]
    pub fn update(&mut self, coord: CellCoord, content: CellContent) {
        self.rows[coord.row()][coord.column()].content = content;
    }
}
