use anyhow::{bail, Result};
use chess_rules::{parse_coordinate_move, Coord, PieceKind};
use game_session::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Send(Command),
    Board,
    Help,
    Quit,
}

/// One line typed by the player.
pub fn parse_line(line: &str) -> Result<Option<Input>> {
    let word = line.trim().to_ascii_lowercase();
    let input = match word.as_str() {
        "" => return Ok(None),
        "quit" | "exit" => Input::Quit,
        "help" | "?" => Input::Help,
        "board" => Input::Board,
        "reset" | "new" => Input::Send(Command::Reset),
        _ => Input::Send(parse_command(&word)?),
    };
    Ok(Some(input))
}

fn parse_command(word: &str) -> Result<Command> {
    match word.len() {
        1 => {
            let kind = word.chars().next().and_then(PieceKind::from_letter);
            match kind {
                Some(kind) if kind.is_promotion_target() => Ok(Command::Promote(kind)),
                _ => bail!("promote to q, r, b or n"),
            }
        }
        2 => match Coord::parse(word) {
            Some(at) => Ok(Command::Click(at)),
            None => bail!("not a square: {word}"),
        },
        _ => match parse_coordinate_move(word) {
            Ok(mv) => Ok(Command::Play(mv)),
            Err(err) => bail!("{err}"),
        },
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
