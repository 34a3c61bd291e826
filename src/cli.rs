//! Interactive shell: command-token parsing and the synchronous turn loop.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::board::Board;
use crate::common::{GameStatus, RevealResult};

/// A parsed player command, carrying 0-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the mine mark on a cell.
    Flag { row: usize, column: usize },
    /// Claim a cell as free.
    Reveal { row: usize, column: usize },
}

/// Parse a `<x> <y> mine|free` line (1-based, column first).
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let (x, y, word) = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), Some(word)) => (x, y, word),
        _ => return Err("Expected: <x> <y> mine|free (e.g., 3 5 free)".to_string()),
    };
    if parts.next().is_some() {
        return Err("Too many tokens - expected: <x> <y> mine|free".to_string());
    }
    let x: usize = x
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", x))?;
    let y: usize = y
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", y))?;
    if x == 0 || y == 0 {
        return Err("Coordinates start at 1".to_string());
    }
    // Input is column-first; the board is addressed (row, column).
    let (row, column) = (y - 1, x - 1);
    match word {
        "mine" => Ok(Command::Flag { row, column }),
        "free" => Ok(Command::Reveal { row, column }),
        _ => Err("Unknown Command try again".to_string()),
    }
}

/// Run the game loop on stdin until the board reaches a terminal status
/// or input is exhausted. One command is fully applied before the next
/// is read.
pub fn run<R: Rng>(board: &mut Board, rng: &mut R) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    println!("{}", board.render_text());
    while board.status() == GameStatus::Active {
        print!("Set/unset mine marks or claim a cell as free: > ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = match parse_command(line.trim()) {
            Ok(command) => command,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        let result = match command {
            Command::Flag { row, column } => {
                board.toggle_flag(row, column).map(|()| RevealResult::Safe)
            }
            Command::Reveal { row, column } => board.reveal(row, column, rng),
        };
        match result {
            Ok(RevealResult::Safe) => println!("{}", board.render_text()),
            Ok(RevealResult::Detonated) => {
                println!("{}", board.render_text());
                println!("You stepped on a mine and failed!");
            }
            Err(err) => {
                println!("{}. Try another", err);
                continue;
            }
        }
        if board.status() == GameStatus::Won {
            println!("Congratulations! You found all the mines!");
        }
    }
    Ok(())
}
