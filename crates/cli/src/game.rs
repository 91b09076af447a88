//! Game state wrapper with terminal display.
//!
//! A thin layer over the core `GameState` that renders the board with
//! colored output: discs, legal-move hints for the side to move, live disc
//! counts and the result banner once the game is over.

use colored::Colorize;
use othello_core::{board::Board, disc::Disc, game_state, square::Square};

/// The state of a game, plus CLI display.
pub struct GameState {
    core: game_state::GameState,
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
            core: game_state::GameState::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        self.core.board()
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.core.side_to_move()
    }

    /// Executes a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns an error string if the move is illegal; the game is left
    /// unchanged.
    pub fn make_move(&mut self, sq: Square) -> Result<(), String> {
        self.core.make_move(sq)
    }

    /// Passes the turn. Only valid when the side to move has no legal
    /// moves.
    pub fn make_pass(&mut self) -> Result<(), String> {
        self.core.make_pass()
    }

    /// Checks whether the side to move has at least one legal move.
    pub fn has_legal_moves(&self) -> bool {
        !self.core.legal_moves().is_empty()
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn get_score(&self) -> (u32, u32) {
        self.core.get_score()
    }

    /// Returns the winner by strict disc majority, `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        self.core.winner()
    }

    /// Prints the colored board to the terminal.
    ///
    /// Legal moves for the side to move are marked with a dot; the last
    /// move is highlighted.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let legal = self.core.legal_moves();

        // Header
        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for row in 0..8 {
            print!("  {} │", row + 1);

            for col in 0..8 {
                let sq = Square::new(row, col);
                let is_last_move = Some(sq) == last_move;

                let symbol = match board.disc_at(sq) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if legal.contains(sq) => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            // Side information
            let (black_count, white_count) = self.core.get_score();
            match row {
                2 => {
                    let turn = match side_to_move {
                        Disc::Black => "Black's turn (X)".bright_green(),
                        Disc::White => "White's turn (O)".bright_yellow(),
                        Disc::Empty => unreachable!(),
                    };
                    println!("   {turn}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 => {
                    if self.core.is_game_over() {
                        match self.core.winner() {
                            Some(Disc::Black) => println!("   {}", "Black wins!".bright_green()),
                            Some(Disc::White) => println!("   {}", "White wins!".bright_yellow()),
                            _ => println!("   {}", "It's a tie".bright_cyan()),
                        }
                    } else {
                        println!();
                    }
                }
                7 => {
                    if self.core.is_game_over() {
                        println!("   {}", "*** Game Over ***".bright_red());
                    } else {
                        println!();
                    }
                }
                _ => println!(),
            }

            if row < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        // Footer
        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}
