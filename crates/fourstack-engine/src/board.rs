//! The board model: seven append-only column stacks.
//!
//! A token dropped into a column lands on top of that column's stack;
//! entries are never removed or reordered within a game. The only capacity
//! rule is vertical: a column holds at most [`ROWS`] tokens.

use fourstack_protocol::{BoardColumns, ColumnIndex, PlayerId};

use crate::{RuleError, SnapshotError};

/// Number of columns.
pub const COLUMNS: usize = 7;

/// Maximum tokens per column.
pub const ROWS: usize = 6;

/// The in-engine board: one bottom-to-top stack per column.
///
/// Invariant: no stack ever exceeds [`ROWS`] entries. Construction from a
/// wire snapshot validates this; [`Board::drop_token`] preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    columns: [Vec<PlayerId>; COLUMNS],
}

impl Board {
    /// Builds a board from the wire state, validating column heights.
    ///
    /// # Errors
    /// [`SnapshotError::OversizedColumn`] if any stack exceeds [`ROWS`] —
    /// an upstream contract violation, not a game condition.
    pub fn from_columns(state: &BoardColumns) -> Result<Self, SnapshotError> {
        let mut board = Self::default();
        for column in ColumnIndex::all() {
            let stack = state.column(column);
            if stack.len() > ROWS {
                return Err(SnapshotError::OversizedColumn {
                    column,
                    len: stack.len(),
                });
            }
            board.columns[column.as_usize()] = stack.clone();
        }
        Ok(board)
    }

    /// Converts back to the wire state for the commit delta.
    pub fn to_columns(&self) -> BoardColumns {
        let mut state = BoardColumns::default();
        for column in ColumnIndex::all() {
            *state.column_mut(column) = self.columns[column.as_usize()].clone();
        }
        state
    }

    /// The stack for a column. Bottom of stack = first element.
    pub fn column(&self, index: ColumnIndex) -> &[PlayerId] {
        &self.columns[index.as_usize()]
    }

    /// The owner of the cell at (column, row), if occupied. Row 0 is the
    /// bottom.
    pub fn cell(&self, column: ColumnIndex, row: usize) -> Option<PlayerId> {
        self.column(column).get(row).copied()
    }

    /// Returns `true` if the column can take another token.
    pub fn has_room(&self, index: ColumnIndex) -> bool {
        self.column(index).len() < ROWS
    }

    /// Returns `true` when all 42 cells are occupied.
    pub fn is_full(&self) -> bool {
        self.columns.iter().all(|stack| stack.len() >= ROWS)
    }

    /// Total tokens on the board.
    pub fn token_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Appends `player`'s token on top of the column, returning the row it
    /// landed in.
    ///
    /// # Errors
    /// [`RuleError::ColumnFull`] if the stack already holds [`ROWS`]
    /// tokens. The board is unchanged on error.
    pub fn drop_token(
        &mut self,
        index: ColumnIndex,
        player: PlayerId,
    ) -> Result<usize, RuleError> {
        if !self.has_room(index) {
            return Err(RuleError::ColumnFull(index));
        }
        let stack = &mut self.columns[index.as_usize()];
        stack.push(player);
        Ok(stack.len() - 1)
    }
}

// =========================================================================
// Tests
// =========================================================================
