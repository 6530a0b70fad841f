//! Attack detection: which squares a side currently threatens.
//!
//! A mailbox scan rather than precomputed tables: each piece of the attacking
//! side is asked whether its movement shape reaches the target. Turn order and
//! the target's occupant play no part.

use crate::color::Color;
use crate::geometry::{fits_shape, pawn_threatens};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if the piece on `from` threatens `target`.
    ///
    /// Sliders need a clear path; pawns threaten only diagonally forward;
    /// kings threaten adjacent squares only (castling never attacks).
    pub fn threatens(&self, from: Square, target: Square) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        match piece.kind() {
            PieceKind::Pawn => pawn_threatens(piece.color(), from, target),
            kind if kind.is_slider() => {
                fits_shape(kind, from, target) && !self.is_obstructed(from, target)
            }
            kind => fits_shape(kind, from, target),
        }
    }

    /// Return `true` if any piece of `by_color` threatens `sq`.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.pieces_of(by_color)
            .any(|(from, _)| self.threatens(from, sq))
    }

    /// Return the squares of `by_color`'s pieces that threaten `sq`.
    pub fn attackers_of(&self, sq: Square, by_color: Color) -> Vec<Square> {
        self.pieces_of(by_color)
            .filter(|&(from, _)| self.threatens(from, sq))
            .map(|(from, _)| from)
            .collect()
    }

    /// Return `true` if a king of `color` is attacked by the other side.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_squares(color)
            .any(|king| self.is_square_attacked(king, color.flip()))
    }

    /// Return `true` if `color` has at least one king and none is attacked.
    ///
    /// A side without a king is never considered safe, so malformed
    /// positions fail closed.
    pub fn is_king_safe(&self, color: Color) -> bool {
        let mut kings = self.king_squares(color).peekable();
        kings.peek().is_some() && kings.all(|king| !self.is_square_attacked(king, color.flip()))
    }
}
