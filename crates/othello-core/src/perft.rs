//! Move-path enumeration used to anchor the capture rule in tests and
//! benches.

use crate::board::Board;
use crate::disc::Disc;
use crate::types::Depth;

/// Executes a perft run starting from the initial position with Black to
/// move.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand. A depth of `1` counts the
///   immediate legal moves; larger values walk the tree recursively.
///
/// # Returns
///
/// The number of leaves the walk visits.
pub fn perft_root(depth: Depth) -> u64 {
    perft(&Board::new(), Disc::Black, depth)
}

/// Counts the leaves of the move tree `depth` plies deep from `board` with
/// `side` to move. A position where the side to move has no legal move is a
/// leaf.
pub fn perft(board: &Board, side: Disc, depth: Depth) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(side);
    if moves.is_empty() {
        return 1;
    }

    let mut nodes = 0;
    for sq in &moves {
        let mut next = *board;
        next.make_move(sq, side);
        nodes += perft(&next, side.opponent(), depth - 1);
    }
    nodes
}
