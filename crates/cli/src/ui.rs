//! Interactive prompt loop.
//!
//! Line-oriented shell: the human enters moves in algebraic notation and a
//! handful of commands; computer moves run the search on a worker thread
//! and come back over a channel, so an interrupted session only discards
//! the result.

use std::sync::mpsc;
use std::thread;

use othello_core::disc::Disc;
use othello_core::level;
use othello_core::search::Search;
use othello_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;

/// Which sides the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameMode {
    /// Human plays Black, computer plays White
    HumanVsComputer,
    /// Computer plays Black, human plays White
    ComputerVsHuman,
    /// Computer plays both sides
    ComputerVsComputer,
    /// Human plays both sides
    HumanVsHuman,
}

impl GameMode {
    /// Returns whether the computer should play for the given side.
    fn is_computer_turn(self, side: Disc) -> bool {
        matches!(
            (self, side),
            (GameMode::HumanVsComputer, Disc::White)
                | (GameMode::ComputerVsHuman, Disc::Black)
                | (GameMode::ComputerVsComputer, _)
        )
    }

    fn from_index(index: usize) -> Option<GameMode> {
        match index {
            0 => Some(GameMode::HumanVsComputer),
            1 => Some(GameMode::ComputerVsHuman),
            2 => Some(GameMode::ComputerVsComputer),
            3 => Some(GameMode::HumanVsHuman),
            _ => None,
        }
    }
}

/// Main interactive loop.
///
/// # Arguments
///
/// * `initial_level` - Level index for the computer opponent (see
///   `othello_core::level::get_level`).
pub fn ui_loop(initial_level: usize) {
    let mut rl = DefaultEditor::new().unwrap();
    let mut game = GameState::new();
    let mut lv = initial_level;
    let mut mode = GameMode::HumanVsComputer;

    loop {
        game.print();
        println!();

        if !game.is_game_over() {
            let side = game.side_to_move();

            if !game.has_legal_moves() {
                println!("No available moves for {side}.\n");
                game.make_pass().unwrap();
                continue;
            }

            if mode.is_computer_turn(side) {
                let sq = compute_move(&game, side, lv);
                game.make_move(sq).expect("search returned an illegal move");
                println!("Computer plays {sq}\n");
                continue;
            }
        }

        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let mut parts = line.split_whitespace();
                let Some(cmd) = parts.next() else {
                    continue;
                };
                println!();

                match cmd {
                    "new" | "n" => {
                        game = GameState::new();
                    }
                    "level" | "l" => {
                        if let Some(lv_str) = parts.next() {
                            match lv_str.parse::<usize>() {
                                Ok(new_lv) if new_lv <= 2 => lv = new_lv,
                                _ => println!("Invalid level. Valid range is 0-2."),
                            }
                        } else {
                            println!("Current level: {lv}");
                        }
                    }
                    "mode" | "m" => {
                        if let Some(mode_str) = parts.next() {
                            match mode_str.parse::<usize>().ok().and_then(GameMode::from_index)
                            {
                                Some(new_mode) => mode = new_mode,
                                None => {
                                    println!("Invalid mode. Please specify a value between 0-3.")
                                }
                            }
                        } else {
                            println!("0: Black-Human, White-Computer");
                            println!("1: Black-Computer, White-Human");
                            println!("2: Computer vs Computer");
                            println!("3: Human vs Human");
                        }
                    }
                    "quit" | "q" => break,
                    _ => match cmd.parse::<Square>() {
                        Ok(sq) => {
                            if game.is_game_over() {
                                println!("The game is over. Type 'new' to start another.\n");
                            } else if let Err(err) = game.make_move(sq) {
                                println!("{err}\n");
                            }
                        }
                        Err(_) => println!("Unknown command: {cmd}\n"),
                    },
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        }
    }
}

/// Runs the search for `side` on a worker thread and waits for the result.
///
/// The board is copied onto the worker, so the live game never races the
/// search. Only called for positions with at least one legal move.
fn compute_move(game: &GameState, side: Disc, lv: usize) -> Square {
    let board = *game.board();
    let level = level::get_level(lv);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut search = Search::new();
        let _ = tx.send(search.run(&board, side, level));
    });

    let result = rx.recv().expect("search thread terminated unexpectedly");
    result
        .best_move
        .expect("search must find a move when legal moves exist")
}
