mod game;
mod ui;

use clap::{Parser, ValueEnum};

/// Play Othello in the terminal against a minimax opponent.
#[derive(Parser, Debug)]
struct Cli {
    /// Computer strength.
    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,
}

/// Named strength presets, mapped onto the engine's level table.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Difficulty {
    /// 1-ply search
    Easy,
    /// 3-ply search
    Medium,
    /// 5-ply search
    Hard,
}

impl Difficulty {
    /// Level index understood by `othello_core::level::get_level`.
    fn level(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

fn main() {
    let args = Cli::parse();
    ui::ui_loop(args.difficulty.level());
}
