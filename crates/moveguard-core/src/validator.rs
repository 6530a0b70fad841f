//! A validator owning one live position.

use tracing::{debug, trace};

use crate::chess_move::MoveKind;
use crate::error::{Rejection, SnapshotError};
use crate::position::Position;

/// Holds the current board and answers legality queries against it.
///
/// The position is replaced wholesale on [`update`](MoveValidator::update);
/// queries never modify it, so a validator can be cloned freely and the
/// clones checked independently.
#[derive(Debug, Clone, Default)]
pub struct MoveValidator {
    position: Position,
}

impl MoveValidator {
    pub fn new(position: Position) -> MoveValidator {
        MoveValidator { position }
    }

    /// Build a validator from a board snapshot string.
    pub fn from_snapshot(snapshot: &str) -> Result<MoveValidator, SnapshotError> {
        Position::from_snapshot_str(snapshot).map(MoveValidator::new)
    }

    /// Replace the live position.
    pub fn update(&mut self, position: Position) {
        trace!(fen = %position, "position replaced");
        self.position = position;
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Validate `text` against the live position.
    pub fn check(&self, text: &str) -> Result<MoveKind, Rejection> {
        let verdict = self.position.check(text);
        match verdict {
            Ok(kind) => trace!(mv = text, %kind, "move accepted"),
            Err(reason) => debug!(mv = text, reason = reason.code(), "move rejected"),
        }
        verdict
    }

    pub fn is_legal_move(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }
}
