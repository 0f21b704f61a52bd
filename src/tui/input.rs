//! Cursor movement for keyboard navigation.

use crate::game::CellCoord;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: CellCoord, key: KeyCode) -> CellCoord {
    let (row, column) = (cursor.row(), cursor.column());

    let moved = match key {
        KeyCode::Right => CellCoord::new(row, column + 1),
        KeyCode::Left => column.checked_sub(1).and_then(|c| CellCoord::new(row, c)),
        KeyCode::Down => CellCoord::new(row + 1, column),
        KeyCode::Up => row.checked_sub(1).and_then(|r| CellCoord::new(r, column)),
        _ => None,
    };

    // No change for other keys or edge cases
    moved.unwrap_or(cursor)
}
