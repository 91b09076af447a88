//! Global constants

use crate::types::Score;

/// Width of the board in cells.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Maximum possible score (disc difference).
pub const SCORE_MAX: Score = 64;

/// Minimum possible score (disc difference).
pub const SCORE_MIN: Score = -64;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 30000;
