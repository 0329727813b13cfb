//! Terminal front end: two people share the keyboard and take turns.

#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_rs::{Game, GameConfig, GameStatus, Gameboard, Outcome, Player};

/// Two people play Connect Four in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with the board `width` and `height`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns, overrides the config file
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows, overrides the config file
    #[arg(long)]
    height: Option<usize>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("cannot use config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Command {
    /// Zero-based column.
    Drop(usize),
    Restart,
    Quit,
}

/// Columns are entered one-based, as printed below the board.
fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "restart" => Some(Command::Restart),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|col| col.checked_sub(1))
            .map(Command::Drop),
    }
}

const fn symbol(cell: Option<Player>) -> char {
    match cell {
        None => ' ',
        Some(Player::Player1) => 'X',
        Some(Player::Player2) => 'O',
    }
}

fn print_board(board: &Gameboard) {
    for row in board.rows() {
        for &cell in row {
            print!("{},", symbol(cell));
        }
        println!();
    }

    for _ in 0..board.width() {
        print!("--");
    }
    println!();

    for col_id in (0..board.width()).map(|i| i + 1) {
        print!("{col_id},");
    }
    println!();
}

fn print_prompt(game: &Game) {
    match game.status() {
        GameStatus::InProgress(player) => {
            print!("{player} ({}), choose your column: ", symbol(Some(player)));
            for col in game.board().available_columns_iter().map(|x| x + 1) {
                print!("{col},");
            }
            println!(" (r: restart, q: quit)");
        }
        GameStatus::Won(_) | GameStatus::Tied => {
            println!("Game over. r: restart, q: quit");
        }
    }
}

/// Drops a coin and returns what to tell the players. The board itself is
/// redrawn by the main loop.
fn play_column(game: &mut Game, col: usize) -> Option<String> {
    match game.drop_piece(col) {
        Outcome::Continued => None,
        Outcome::Rejected(e) => Some(format!("Cannot drop into column {}: {e}", col + 1)),
        outcome @ (Outcome::Win(_) | Outcome::Tie) => Some(outcome.to_string()),
    }
}

fn main() -> Result<()> {
    let env = env_logger::Env::default().filter_or("C4_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let args = Args::parse();
    let config = args.game_config()?;
    log::debug!("starting with {config:?}");
    let mut game = Game::from_config(&config);

    println!("Let's play Connect Four.");
    let mut lines = io::stdin().lock().lines();
    loop {
        println!("----------------");
        print_board(game.board());
        println!();
        print_prompt(&game);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("cannot read from stdin")?;

        match parse_command(&line) {
            None => println!("Unknown input {:?}", line.trim()),
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game.restart();
                println!("New game.");
            }
            Some(Command::Drop(col)) => {
                if let Some(message) = play_column(&mut game, col) {
                    println!("{message}");
                }
            }
        }
    }

    Ok(())
}
