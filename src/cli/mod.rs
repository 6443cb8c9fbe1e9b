//! Terminal front-end: the human plays White against the AI.
//!
//! Reads commands line by line and writes the board and replies as text.
//! It drives the same public API a graphical front-end would.

pub mod command;

use std::io::{self, BufRead, Write};

use crate::board::{Color, Piece};
use crate::game::GameState;
use crate::search::Ai;

use command::{parse_command, Command};

const HELP: &str = "\
commands:
  e2e4, e7e8q   move (promotion letter q, r, b or n; queen if omitted)
  board         show the board
  moves         list legal moves
  history       list moves played so far
  resign        give up the game
  new           start a new game
  depth N       set the AI search depth
  help          show this text
  quit          leave";

/// Run an interactive session until `quit` or end of input.
///
/// Returns the final game state.
pub fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, mut ai: Ai) -> io::Result<GameState> {
    let mut game = GameState::new();
    writeln!(out, "{}", game.board())?;
    writeln!(out, "You play White. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Move { mv, promotion } => {
                if game.is_game_over() {
                    writeln!(out, "The game is over ({}). Type 'new' to play again.", game.result())?;
                    continue;
                }
                match game.make_move(mv.from, mv.to) {
                    Ok(_) => {
                        if let Some(square) = game.pending_promotion() {
                            if let Err(err) = game.promote(square, promotion.unwrap_or(Piece::Queen)) {
                                writeln!(out, "Promotion failed: {err}")?;
                            }
                        }
                        if let Some(record) = game.history().last() {
                            writeln!(out, "You played {record}")?;
                        }
                        reply(&mut game, &ai, out)?;
                    }
                    Err(err) => writeln!(out, "Illegal move: {err}")?,
                }
            }
            Command::Board => writeln!(out, "{}", game.board())?,
            Command::Moves => {
                let moves: Vec<String> = game
                    .legal_moves(game.current_turn())
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::History => {
                for (i, pair) in game.history().chunks(2).enumerate() {
                    let black = pair.get(1).map(ToString::to_string).unwrap_or_default();
                    writeln!(out, "{}. {} {}", i + 1, pair[0], black)?;
                }
            }
            Command::Resign => {
                if !game.is_game_over() {
                    game.resign(Color::White);
                }
                writeln!(out, "Game over: {}", game.result())?;
            }
            Command::New => {
                game.restart();
                writeln!(out, "{}", game.board())?;
            }
            Command::Depth(Some(depth)) => {
                ai.set_depth(depth);
                writeln!(out, "Search depth set to {}", ai.config().depth)?;
            }
            Command::Depth(None) => writeln!(out, "Search depth is {}", ai.config().depth)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown { input, error } => {
                writeln!(out, "Unknown command '{input}': {error}")?;
            }
        }
    }

    Ok(game)
}

/// Let the AI answer and report the outcome.
fn reply<W: Write>(game: &mut GameState, ai: &Ai, out: &mut W) -> io::Result<()> {
    if !game.is_game_over() {
        if ai.make_move(game) {
            if let Some(record) = game.history().last() {
                writeln!(out, "Black plays {record}")?;
            }
        } else {
            writeln!(out, "Black could not move")?;
        }
    }
    writeln!(out, "{}", game.board())?;
    if game.is_game_over() {
        writeln!(out, "Game over: {}", game.result())?;
    }
    Ok(())
}
