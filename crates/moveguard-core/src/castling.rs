//! Castling legality.

use crate::between::between;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::error::Rejection;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Position {
    /// Check whether `color` may castle toward `side` in this position.
    ///
    /// The king is assumed to stand on its home square; the caller has
    /// already matched the move against [`CastleSide::from_king_move`].
    pub fn check_castle(&self, color: Color, side: CastleSide) -> Result<(), Rejection> {
        let them = color.flip();
        let king_from = CastleSide::king_origin(color);
        let rook_from = side.rook_origin(color);

        let rook = Piece::new(PieceKind::Rook, color);
        if !self.castling().has(color, side) || self.piece_at(rook_from) != Some(rook) {
            return Err(Rejection::CastlingRightsAbsent);
        }

        if self.is_square_attacked(king_from, them) {
            return Err(Rejection::CastlingThroughCheck);
        }

        if between(king_from, rook_from).any(|sq| self.is_occupied(sq)) {
            return Err(Rejection::CastlingPathBlocked);
        }

        let crossed = [side.king_transit(color), side.king_target(color)];
        if crossed.iter().any(|&sq| self.is_square_attacked(sq, them)) {
            return Err(Rejection::CastlingThroughCheck);
        }

        Ok(())
    }
}
