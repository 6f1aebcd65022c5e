//! Four-direction alignment detection over a per-player bitmask.
//!
//! Cell `(column, row)` maps to bit `7 * column + row` of a `u64`. Rows
//! only run 0..=5, so bit `7 * column + 6` is never set; that spare bit per
//! column is the guard that keeps the vertical and diagonal strides from
//! carrying a run across the column seam: any run that would continue from
//! the top of one column into the bottom of the next must pass through a
//! guard bit, which is always zero.
//!
//! A run of four along a direction with stride `s` survives folding the
//! mask against itself: `m = b & (b >> s)` marks pairs, and
//! `m & (m >> 2s)` marks pairs of pairs, i.e. four consecutive occupied
//! cells. Any surviving bit is a win. This is the three-fold shift-AND
//! formulation collapsed to two ANDs; 42 cells fit a `u64` with room to
//! spare, so no wider representation is needed.

use fourstack_protocol::{ColumnIndex, PlayerId};

use crate::Board;

/// Direction strides in bit-index space: vertical (within a column),
/// horizontal (column to column), diagonal ↗, diagonal ↖.
const STRIDES: [u32; 4] = [1, 7, 8, 6];

/// Returns `true` if `player` has four or more tokens in an unbroken
/// straight line on `board`.
///
/// Pure function of its inputs: evaluating twice on an unmodified board
/// always agrees.
pub fn is_winning_board(board: &Board, player: PlayerId) -> bool {
    let mask = occupancy_mask(board, player);
    STRIDES.iter().any(|&stride| has_run_of_four(mask, stride))
}

/// The 42-cell occupancy bitmask for one player.
fn occupancy_mask(board: &Board, player: PlayerId) -> u64 {
    let mut mask = 0u64;
    for column in ColumnIndex::all() {
        for (row, owner) in board.column(column).iter().enumerate() {
            if *owner == player {
                mask |= 1u64 << (7 * column.as_usize() + row);
            }
        }
    }
    mask
}

/// Folds the mask against itself along one stride. Out-of-range shifted
/// positions fall off the high end as zeros, never wrapping.
fn has_run_of_four(mask: u64, stride: u32) -> bool {
    let pairs = mask & (mask >> stride);
    pairs & (pairs >> (2 * stride)) != 0
}

// =========================================================================
// Tests
// =========================================================================
