//! Protocol errors.

use moveguard_core::{BoardError, FenError, Rejection, SnapshotError};

/// Errors that can occur while parsing or executing a protocol command.
#[derive(Debug, thiserror::Error)]
pub enum ProtoError {
    /// The `position` command is missing `startpos`, `fen` or `board`.
    #[error("malformed position command: expected startpos, fen or board")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        #[from]
        source: FenError,
    },

    /// Failed to parse a board snapshot.
    #[error("invalid board snapshot: {source}")]
    InvalidSnapshot {
        #[from]
        source: SnapshotError,
    },

    /// Strict mode rejected a position that parsed but is not well formed.
    #[error("rejected position: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },

    /// A move listed after `moves` is not legal where it was played.
    #[error("illegal move in position command: {mv} ({reason})")]
    IllegalMove {
        /// The move text as given.
        mv: String,
        reason: Rejection,
    },

    /// `check` or `play` without a move.
    #[error("{command} needs a move")]
    MissingMove { command: &'static str },

    /// `setoption` without a `name`.
    #[error("malformed setoption command: missing name")]
    MalformedOption,

    /// `setoption` for an option this session does not have.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    /// An option value that does not fit the option's type.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue { name: String, value: String },

    /// An I/O error on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
