//! Command parsing.

use moveguard_core::{Move, Position};

use crate::error::ProtoError;

/// A session option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Include the rejection code in `illegal` replies.
    Reasons(bool),
    /// Reject positions that fail the well-formedness checks.
    Strict(bool),
}

/// A parsed command.
#[derive(Debug)]
pub enum Command {
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- back to the starting position.
    NewGame,
    /// `position` -- replace the live position, with any listed moves applied.
    Position(Position),
    /// `check <move>` -- report whether a move is legal.
    Check(String),
    /// `play <move>` -- like `check`, then advance on a legal move.
    Play(String),
    /// `setoption name <Name> value <v>`.
    SetOption(SessionOption),
    /// `d` -- print the board.
    Display,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtoError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "d" => Ok(Command::Display),
        "quit" => Ok(Command::Quit),
        "check" => move_argument(args, "check").map(Command::Check),
        "play" => move_argument(args, "play").map(Command::Play),
        "position" => parse_position(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

fn move_argument(args: &[&str], command: &'static str) -> Result<String, ProtoError> {
    args.first()
        .map(|mv| mv.to_string())
        .ok_or(ProtoError::MissingMove { command })
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves ...]`
/// - `position board <snapshot> [moves ...]`
///
/// Listed moves must each be legal in turn.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtoError> {
    let (&source, rest) = tokens.split_first().ok_or(ProtoError::MalformedPosition)?;
    let setup_len = rest
        .iter()
        .position(|&t| t == "moves")
        .unwrap_or(rest.len());
    let (setup, moves) = rest.split_at(setup_len);

    let mut position = match source {
        "startpos" => Position::starting_position(),
        "fen" => setup.join(" ").parse::<Position>()?,
        "board" => Position::from_snapshot(setup.iter().copied())?,
        _ => return Err(ProtoError::MalformedPosition),
    };

    for text in moves.iter().skip(1) {
        let illegal = |reason| ProtoError::IllegalMove {
            mv: text.to_string(),
            reason,
        };
        let mv = Move::parse(text).map_err(illegal)?;
        position.validate_move(mv).map_err(illegal)?;
        position = position.make_move(mv);
    }

    Ok(Command::Position(position))
}

/// Parse `setoption name <Name> value <v>`. Names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtoError> {
    if tokens.first() != Some(&"name") {
        return Err(ProtoError::MalformedOption);
    }
    let value_at = tokens
        .iter()
        .position(|&t| t == "value")
        .unwrap_or(tokens.len());
    let name = tokens[1..value_at].join(" ");
    if name.is_empty() {
        return Err(ProtoError::MalformedOption);
    }
    let value = tokens.get(value_at + 1..).unwrap_or_default().join(" ");

    let option = match name.to_ascii_lowercase().as_str() {
        "reasons" => SessionOption::Reasons(parse_bool(&name, &value)?),
        "strict" => SessionOption::Strict(parse_bool(&name, &value)?),
        _ => return Err(ProtoError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ProtoError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ProtoError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
