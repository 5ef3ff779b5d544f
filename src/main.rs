//! Terminal front end for the tic-tac-toe engine
//!
//! Drives a [`GameSession`]: prints the board, reads human moves from
//! stdin, and lets the engine play any computer-controlled mark.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tictactoe::{Board, Difficulty, GameConfig, GameOutcome, GameSession, PlayerKind, Pos};

#[derive(Debug, Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// Board side length (minimum 3)
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// AI difficulty: easy, medium, or hard
    #[arg(long, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Who controls X: human or computer
    #[arg(long, default_value_t = PlayerKind::Human)]
    player_x: PlayerKind,

    /// Who controls O: human or computer
    #[arg(long, default_value_t = PlayerKind::Computer)]
    player_o: PlayerKind,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig {
        size: args.size,
        player_x: args.player_x,
        player_o: args.player_o,
        difficulty: args.difficulty,
    };
    let mut session = GameSession::new(config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render(session.board()));

        match session.outcome() {
            GameOutcome::Win(winner) => {
                println!("Player {winner} wins!");
                print_scores(&session);
                if !ask_play_again(&mut lines)? {
                    break;
                }
                session.restart();
                continue;
            }
            GameOutcome::Draw => {
                println!("It's a draw!");
                print_scores(&session);
                if !ask_play_again(&mut lines)? {
                    break;
                }
                session.restart();
                continue;
            }
            GameOutcome::InProgress => {}
        }

        if session.is_computer_turn() {
            let mark = session.current_player();
            let (pos, _) = session.play_computer()?;
            println!("Computer ({mark}) plays {pos}");
        } else {
            let mark = session.current_player();
            print!("Player {mark}, enter row and column: ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("reading move")?;
            match parse_move(&line) {
                Some(pos) => {
                    if let Err(err) = session.play_at(pos) {
                        println!("{err}");
                    }
                }
                None => println!("Enter a move as two numbers, e.g. '0 2'"),
            }
        }
    }

    Ok(())
}

/// Parse "row col" (whitespace or comma separated) into a position
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|p| !p.is_empty());
    let row: u8 = parts.next()?.parse().ok()?;
    let col: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn render(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..size {
        out.push_str(&format!("{c} "));
    }
    out.push('\n');
    for r in 0..size {
        out.push_str(&format!("{r}  "));
        for c in 0..size {
            let mark = board.get(Pos::new(r as u8, c as u8));
            out.push_str(&format!("{mark} "));
        }
        out.push('\n');
    }
    out
}

fn print_scores(session: &GameSession) {
    let scores = session.scores();
    println!("Score: X {} - O {}", scores.x, scores.o);
}

fn ask_play_again(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line.context("reading answer")?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
