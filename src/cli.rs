#![cfg(feature = "std")]

//! Hot-seat terminal loop.
//!
//! Reads one command per line and writes prompts, signals and boards to any
//! writer, so the loop runs the same against a terminal or a test buffer.

use std::io::{BufRead, Write};

use crate::{
    game::{GameSession, SessionState},
    target::Command,
};

/// Blank lines written by `hide` to push a board off screen.
pub const HIDE_LINES: usize = 50;

fn welcome<W: Write>(session: &GameSession, out: &mut W) -> std::io::Result<()> {
    let dims = session.board(crate::PlayerId::One).dimensions();
    writeln!(out, "Welcome to another game of Submarines!")?;
    writeln!(
        out,
        "The shape of the board is ({}, {}, {}).",
        dims.rows, dims.columns, dims.levels
    )?;
    writeln!(
        out,
        "Type 'show' to show your board, 'hide' to clear it, and 'quit' to exit the game prematurely."
    )?;
    writeln!(out, "The pieces were set (randomly), let the game begin!")
}

/// Drive `session` from `input` until someone wins, quits, or input runs out.
///
/// Returns the final session state. End of input counts as quitting.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<SessionState> {
    welcome(session, out)?;
    while let Some(player) = session.active_player() {
        write!(
            out,
            "{}, what is the coordinate you're targeting (x, y, z)? ",
            player
        )?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            writeln!(out, "quitting...")?;
            session.quit();
            break;
        }
        match line.parse::<Command>() {
            Ok(Command::Show) => write!(out, "{}", session.board(player))?,
            Ok(Command::Hide) => write!(out, "{}", "\n".repeat(HIDE_LINES))?,
            Ok(Command::Quit) => {
                writeln!(out, "quitting...")?;
                session.quit();
            }
            Ok(Command::Fire(target)) => match session.fire_at(target) {
                Ok(turn) => {
                    writeln!(out, "{}", turn.signal)?;
                    if let SessionState::GameOver { winner } = turn.state {
                        writeln!(out, "The game is over! The winner is {}", winner)?;
                    }
                }
                Err(e) => writeln!(out, "{}.", e)?,
            },
            Err(e) => writeln!(out, "{}.", e)?,
        }
    }
    Ok(session.state())
}
