//! Board representation and the orthogonal capture rule.
//!
//! A move outflanks along the four orthogonal directions only: a diagonal
//! run never qualifies a cell and never flips. Legality and flipping share
//! the same line-walk, so the two can never disagree about a direction.

use std::cmp::Ordering;
use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};
use crate::disc::Disc;
use crate::move_list::MoveList;
use crate::square::Square;

/// Capture directions: up, down, left, right.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Longest possible walk from a placed disc to the board edge.
const MAX_RUN: usize = BOARD_SIZE - 1;

/// An 8x8 Othello board.
///
/// Cells are stored row-major. The live game mutates a single board in
/// place through [`Board::make_move`]; the search explores hypothetical
/// futures on copies (the type is `Copy`, so a clone is a plain memcpy and
/// sibling branches never observe each other's moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Disc; BOARD_SQUARES],
}

impl Default for Board {
    /// Creates a board with the starting position.
    ///
    /// The initial position has:
    /// - Black discs on (3,4) and (4,3)
    /// - White discs on (3,3) and (4,4)
    fn default() -> Self {
        let mut cells = [Disc::Empty; BOARD_SQUARES];
        cells[Square::new(3, 3).index()] = Disc::White;
        cells[Square::new(3, 4).index()] = Disc::Black;
        cells[Square::new(4, 3).index()] = Disc::Black;
        cells[Square::new(4, 4).index()] = Disc::White;
        Board { cells }
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a `Board` from a 64-character literal.
    ///
    /// Characters are read in row-major order: `'X'` for Black, `'O'` for
    /// White, `'-'` for an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the literal is not exactly 64 characters or
    /// contains an unknown character.
    pub fn from_string(board_string: &str) -> Result<Board, String> {
        let mut cells = [Disc::Empty; BOARD_SQUARES];
        let mut len = 0;
        for (i, c) in board_string.chars().enumerate() {
            if i >= BOARD_SQUARES {
                return Err(format!(
                    "board literal longer than {BOARD_SQUARES} characters"
                ));
            }
            cells[i] = Disc::from_char(c).ok_or_else(|| format!("invalid board character: {c:?}"))?;
            len += 1;
        }
        if len != BOARD_SQUARES {
            return Err(format!(
                "board literal must be {BOARD_SQUARES} characters, got {len}"
            ));
        }
        Ok(Board { cells })
    }

    /// Returns the disc at `sq`.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        self.cells[sq.index()]
    }

    /// Checks if a given cell is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.disc_at(sq) == Disc::Empty
    }

    /// Counts the discs on the board.
    ///
    /// # Returns
    ///
    /// A `(black_count, white_count)` tuple.
    pub fn count_discs(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for disc in self.cells {
            match disc {
                Disc::Black => black += 1,
                Disc::White => white += 1,
                Disc::Empty => {}
            }
        }
        (black, white)
    }

    /// Returns the number of empty cells on the board.
    pub fn count_empty(&self) -> u32 {
        self.cells.iter().filter(|&&d| d == Disc::Empty).count() as u32
    }

    /// Computes all legal moves for `side`.
    ///
    /// An empty cell is legal when at least one orthogonal direction steps
    /// onto an opposing disc and the continued walk reaches a disc of
    /// `side` before an empty cell or the edge of the board.
    pub fn legal_moves(&self, side: Disc) -> MoveList {
        MoveList::new(self, side)
    }

    /// Checks if placing a disc of `side` on `sq` is legal.
    pub fn is_legal_move(&self, sq: Square, side: Disc) -> bool {
        self.is_square_empty(sq) && DIRECTIONS.iter().any(|&dir| self.outflanks(sq, side, dir))
    }

    /// Checks if `side` has any legal moves.
    pub fn has_legal_moves(&self, side: Disc) -> bool {
        Square::iter().any(|sq| self.is_legal_move(sq, side))
    }

    /// Checks if the game is over (neither side can make a move).
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Disc::Black) && !self.has_legal_moves(Disc::White)
    }

    /// Returns the winning color by strict disc majority.
    ///
    /// # Returns
    ///
    /// `Some(color)` of the side with more discs, `None` when the counts
    /// are equal. Only meaningful once [`Board::is_game_over`] holds.
    pub fn winner(&self) -> Option<Disc> {
        let (black, white) = self.count_discs();
        match black.cmp(&white) {
            Ordering::Greater => Some(Disc::Black),
            Ordering::Less => Some(Disc::White),
            Ordering::Equal => None,
        }
    }

    /// Places a disc of `side` on `sq` and flips every outflanked run.
    ///
    /// Each of the four directions is examined independently and flips
    /// accumulate across directions. The caller must only pass a legal move
    /// for `side`; [`crate::game_state::GameState::make_move`] is the
    /// validating entry point.
    pub fn make_move(&mut self, sq: Square, side: Disc) {
        debug_assert!(side != Disc::Empty, "cannot move for Disc::Empty");
        debug_assert!(self.is_square_empty(sq), "target cell is not empty: {sq}");

        self.cells[sq.index()] = side;
        for dir in DIRECTIONS {
            self.outflank(sq, side, dir);
        }
    }

    /// Walks from `sq` along `(dr, dc)` and reports whether the line
    /// outflanks at least one opposing disc: the first step must land on
    /// the opponent and the walk must reach a disc of `side` before an
    /// empty cell or the edge.
    fn outflanks(&self, sq: Square, side: Disc, (dr, dc): (i32, i32)) -> bool {
        let opponent = side.opponent();
        let Some(first) = sq.step(dr, dc) else {
            return false;
        };
        if self.disc_at(first) != opponent {
            return false;
        }

        let mut cur = first;
        loop {
            let disc = self.disc_at(cur);
            if disc == Disc::Empty {
                return false;
            }
            if disc == side {
                return true;
            }
            match cur.step(dr, dc) {
                Some(next) => cur = next,
                None => return false,
            }
        }
    }

    /// Flips the contiguous opposing run starting one step from `sq` along
    /// `(dr, dc)`, provided the run is bounded by a disc of `side`. A run
    /// that meets an empty cell or the edge flips nothing.
    fn outflank(&mut self, sq: Square, side: Disc, (dr, dc): (i32, i32)) {
        let opponent = side.opponent();
        let mut run: ArrayVec<Square, MAX_RUN> = ArrayVec::new();

        let mut cur = sq.step(dr, dc);
        while let Some(s) = cur {
            if self.disc_at(s) != opponent {
                break;
            }
            run.push(s);
            cur = s.step(dr, dc);
        }

        if let Some(terminator) = cur
            && self.disc_at(terminator) == side
        {
            for s in run {
                self.cells[s.index()] = side;
            }
        }
    }
}

impl fmt::Display for Board {
    /// Formats the board as eight rows of `X`/`O`/`-` characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.disc_at(Square::new(row, col)).to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.disc_at(sq(3, 3)), Disc::White);
        assert_eq!(board.disc_at(sq(3, 4)), Disc::Black);
        assert_eq!(board.disc_at(sq(4, 3)), Disc::Black);
        assert_eq!(board.disc_at(sq(4, 4)), Disc::White);
        assert_eq!(board.count_discs(), (2, 2));
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn test_new_board() {
        assert_eq!(Board::new(), Board::default());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string(
            "--------\
             --------\
             --------\
             ---OX---\
             ---XO---\
             --------\
             --------\
             --------",
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_from_string_errors() {
        assert!(Board::from_string("---").is_err());
        assert!(Board::from_string(&"-".repeat(65)).is_err());
        assert!(Board::from_string(&"?".repeat(64)).is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let board = Board::new();
        let text: String = board.to_string().split('\n').collect();
        assert_eq!(Board::from_string(&text).unwrap(), board);
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();

        let black = board.legal_moves(Disc::Black);
        assert_eq!(black.count(), 4);
        for mv in [sq(2, 3), sq(3, 2), sq(4, 5), sq(5, 4)] {
            assert!(black.contains(mv), "missing {mv}");
        }

        let white = board.legal_moves(Disc::White);
        assert_eq!(white.count(), 4);
        for mv in [sq(2, 4), sq(3, 5), sq(4, 2), sq(5, 3)] {
            assert!(white.contains(mv), "missing {mv}");
        }
    }

    #[test]
    fn test_occupied_cells_are_never_legal() {
        let board = Board::new();
        for mv in [sq(3, 3), sq(3, 4), sq(4, 3), sq(4, 4)] {
            assert!(!board.is_legal_move(mv, Disc::Black));
            assert!(!board.is_legal_move(mv, Disc::White));
        }
    }

    #[test]
    fn test_diagonal_outflank_is_not_legal() {
        // Black bounds a white disc on the a1-h8 diagonal only. Diagonal
        // runs never capture, so Black has no legal move here.
        let mut board = Board::from_string(&"-".repeat(64)).unwrap();
        board.cells[sq(1, 1).index()] = Disc::White;
        board.cells[sq(2, 2).index()] = Disc::Black;
        assert!(board.legal_moves(Disc::Black).is_empty());
    }

    #[test]
    fn test_empty_gap_kills_direction() {
        // Row 0: X - O O . . . .  A walk left from (0,4) crosses the two
        // white discs but meets the gap at (0,1) before reaching Black.
        let mut board = Board::from_string(&"-".repeat(64)).unwrap();
        board.cells[sq(0, 0).index()] = Disc::Black;
        board.cells[sq(0, 2).index()] = Disc::White;
        board.cells[sq(0, 3).index()] = Disc::White;
        assert!(!board.is_legal_move(sq(0, 4), Disc::Black));
        assert!(board.legal_moves(Disc::Black).is_empty());
    }

    #[test]
    fn test_make_move_flips_single_run() {
        let mut board = Board::new();
        board.make_move(sq(2, 3), Disc::Black);

        // (2,3) outflanks (3,3) down toward the black disc on (4,3).
        assert_eq!(board.disc_at(sq(2, 3)), Disc::Black);
        assert_eq!(board.disc_at(sq(3, 3)), Disc::Black);
        assert_eq!(board.count_discs(), (4, 1));
    }

    #[test]
    fn test_make_move_flips_cumulative_directions() {
        // Row 2: X O O . O X - -  Playing (2,3) flips both the run to the
        // left and the run to the right.
        let mut board = Board::from_string(&"-".repeat(64)).unwrap();
        board.cells[sq(2, 0).index()] = Disc::Black;
        board.cells[sq(2, 1).index()] = Disc::White;
        board.cells[sq(2, 2).index()] = Disc::White;
        board.cells[sq(2, 4).index()] = Disc::White;
        board.cells[sq(2, 5).index()] = Disc::Black;

        assert!(board.is_legal_move(sq(2, 3), Disc::Black));
        board.make_move(sq(2, 3), Disc::Black);

        for col in 0..6 {
            assert_eq!(board.disc_at(sq(2, col)), Disc::Black);
        }
        assert_eq!(board.count_discs(), (6, 0));
    }

    #[test]
    fn test_discs_beyond_terminator_are_untouched() {
        // Column 3, rows 1-6: X O O . X O  The white disc at (6,3) sits
        // beyond the terminating black disc and must not flip.
        let mut board = Board::from_string(&"-".repeat(64)).unwrap();
        board.cells[sq(1, 3).index()] = Disc::Black;
        board.cells[sq(2, 3).index()] = Disc::White;
        board.cells[sq(3, 3).index()] = Disc::White;
        board.cells[sq(5, 3).index()] = Disc::Black;
        board.cells[sq(6, 3).index()] = Disc::White;

        board.make_move(sq(4, 3), Disc::Black);

        assert_eq!(board.disc_at(sq(2, 3)), Disc::Black);
        assert_eq!(board.disc_at(sq(3, 3)), Disc::Black);
        assert_eq!(board.disc_at(sq(6, 3)), Disc::White);
        assert_eq!(board.count_discs(), (5, 1));
    }

    #[test]
    fn test_run_to_edge_without_terminator_flips_nothing() {
        // Row 0: . O O O O O O O  The walk right from (0,0) runs off the
        // board without meeting a black disc.
        let mut board = Board::from_string(&"-".repeat(64)).unwrap();
        for col in 1..8 {
            board.cells[sq(0, col).index()] = Disc::White;
        }
        assert!(!board.is_legal_move(sq(0, 0), Disc::Black));
    }

    #[test]
    fn test_disc_conservation() {
        let mut board = Board::new();
        board.make_move(sq(2, 3), Disc::Black);
        board.make_move(sq(2, 4), Disc::White);

        let (black, white) = board.count_discs();
        assert_eq!(black + white + board.count_empty(), 64);
    }

    #[test]
    fn test_is_game_over() {
        assert!(!Board::new().is_game_over());

        // Full board: rows 0-4 black, rows 5-7 white.
        let full = Board::from_string(&("X".repeat(40) + &"O".repeat(24))).unwrap();
        assert!(full.is_game_over());
        assert_eq!(full.count_discs(), (40, 24));
        assert_eq!(full.winner(), Some(Disc::Black));

        // One empty cell but no opposing discs anywhere: neither side can
        // outflank, so the game is over with empties remaining.
        let blocked = Board::from_string(&("-".to_string() + &"X".repeat(63))).unwrap();
        assert!(blocked.is_game_over());
        assert_eq!(blocked.winner(), Some(Disc::Black));
    }

    #[test]
    fn test_winner_draw() {
        let board = Board::from_string(&("X".repeat(32) + &"O".repeat(32))).unwrap();
        assert_eq!(board.winner(), None);
    }
}
