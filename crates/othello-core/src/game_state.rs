//! Game state management.
//!
//! `GameState` maintains the live board and the side to move, and is the
//! validating layer between a driver (UI, tests) and the board: illegal
//! move requests fail fast here, while the board itself only asserts its
//! preconditions. Passing is explicit — the driver observes an empty move
//! set and calls [`GameState::make_pass`]; the state never passes on its
//! own.

use crate::board::Board;
use crate::disc::Disc;
use crate::move_list::MoveList;
use crate::square::Square;

/// Represents the state of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Disc,
    /// The last move played; `None` after a pass or before the first move.
    last_move: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Disc::Black,
            last_move: None,
        }
    }

    /// Creates a game state from an existing position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from.
    /// * `side_to_move` - Which player moves next.
    pub fn from_board(board: Board, side_to_move: Disc) -> Self {
        Self {
            board,
            side_to_move,
            last_move: None,
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.side_to_move
    }

    /// Returns the last move played, `None` after a pass or at game start.
    pub fn last_move(&self) -> Option<Square> {
        self.last_move
    }

    /// Computes the legal moves for the side to move.
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.side_to_move)
    }

    /// Executes a move for the side to move and switches players.
    ///
    /// # Errors
    ///
    /// Returns an error string if the move is not legal on the current
    /// board; the state is left unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<(), String> {
        if !self.board.is_legal_move(sq, self.side_to_move) {
            return Err(format!("Illegal move: {sq}"));
        }

        self.board.make_move(sq, self.side_to_move);
        self.last_move = Some(sq);
        self.side_to_move = self.side_to_move.opponent();
        Ok(())
    }

    /// Passes the turn without placing a disc.
    ///
    /// # Errors
    ///
    /// Returns an error string if the side to move has legal moves
    /// available.
    pub fn make_pass(&mut self) -> Result<(), String> {
        if self.board.has_legal_moves(self.side_to_move) {
            return Err("Cannot pass when legal moves are available".to_string());
        }

        self.last_move = None;
        self.side_to_move = self.side_to_move.opponent();
        Ok(())
    }

    /// Checks if the game has ended (neither side can move).
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn get_score(&self) -> (u32, u32) {
        self.board.count_discs()
    }

    /// Returns the winner by strict disc majority, `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        self.board.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.get_score(), (2, 2));
        assert_eq!(game.last_move(), None);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_make_move() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::new(2, 3)).is_ok());
        assert_eq!(game.side_to_move(), Disc::White);
        assert_eq!(game.last_move(), Some(Square::new(2, 3)));
        assert_eq!(game.get_score(), (4, 1));
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut game = GameState::new();
        let before = game.clone();

        let result = game.make_move(Square::new(0, 0));
        assert_eq!(result, Err("Illegal move: a1".to_string()));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.side_to_move(), before.side_to_move());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut game = GameState::new();
        assert!(game.make_move(Square::new(3, 3)).is_err());
    }

    #[test]
    fn test_double_application_is_rejected() {
        let mut game = GameState::new();
        game.make_move(Square::new(2, 3)).unwrap();
        // The cell is no longer empty, so the same move must now fail for
        // either side.
        assert!(game.make_move(Square::new(2, 3)).is_err());
    }

    #[test]
    fn test_pass_requires_no_moves() {
        let mut game = GameState::new();
        assert!(game.make_pass().is_err());
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_pass_switches_side() {
        // White to move with no white disc on the board: nothing to
        // outflank with, so White must pass.
        let board = Board::from_string(&("-".to_string() + &"X".repeat(63))).unwrap();
        let mut game = GameState::from_board(board, Disc::White);
        assert!(game.make_pass().is_ok());
        assert_eq!(game.side_to_move(), Disc::Black);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut game = GameState::new();
        game.make_move(Square::new(2, 3)).unwrap();
        assert_eq!(game.side_to_move(), Disc::White);
        game.make_move(Square::new(2, 4)).unwrap();
        assert_eq!(game.side_to_move(), Disc::Black);
    }

    #[test]
    fn test_terminal_scores() {
        let board = Board::from_string(&("X".repeat(40) + &"O".repeat(24))).unwrap();
        let game = GameState::from_board(board, Disc::Black);
        assert!(game.is_game_over());
        assert_eq!(game.get_score(), (40, 24));
        assert_eq!(game.winner(), Some(Disc::Black));
    }
}
