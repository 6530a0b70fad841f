//! The move legality engine.
//!
//! Validation runs cheapest check first: parse, origin and turn, capture
//! target, movement shape and path, promotion letter, and finally a
//! simulation of the move to make sure the mover's king is not left
//! attacked.

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::error::Rejection;
use crate::geometry::{PawnShape, fits_shape, pawn_shape};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Parse and validate a move in coordinate notation.
    pub fn check(&self, text: &str) -> Result<MoveKind, Rejection> {
        let mv = Move::parse(text)?;
        self.validate_move(mv)
    }

    /// Return `true` if `text` is a legal move in this position.
    pub fn is_legal(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }

    /// Validate a move and, if legal, return the position after it.
    pub fn play(&self, text: &str) -> Result<(MoveKind, Position), Rejection> {
        let mv = Move::parse(text)?;
        let kind = self.validate_move(mv)?;
        Ok((kind, self.make_move(mv)))
    }

    /// Validate an already parsed move.
    pub fn validate_move(&self, mv: Move) -> Result<MoveKind, Rejection> {
        let (from, to) = (mv.from(), mv.to());

        let piece = self.piece_at(from).ok_or(Rejection::NoPieceAtOrigin)?;
        let us = piece.color();
        if us != self.side_to_move() {
            return Err(Rejection::WrongTurn);
        }
        if self.piece_at(to).is_some_and(|target| target.color() == us) {
            return Err(Rejection::OwnPieceAtDestination);
        }

        let castle = self.check_movement(piece, from, to)?;
        let kind = promotion_kind(piece, to, mv, castle)?;

        if !self.make_move(mv).is_king_safe(us) {
            return Err(Rejection::KingLeftInCheck);
        }

        Ok(kind)
    }

    /// Shape and path checks. Returns the castling side for a castling move.
    fn check_movement(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
    ) -> Result<Option<CastleSide>, Rejection> {
        match piece.kind() {
            PieceKind::Pawn => self.check_pawn_move(piece, from, to).map(|()| None),
            PieceKind::King if !fits_shape(PieceKind::King, from, to) => {
                let side = CastleSide::from_king_move(piece.color(), from, to)
                    .ok_or(Rejection::InvalidGeometry)?;
                self.check_castle(piece.color(), side)?;
                Ok(Some(side))
            }
            kind => {
                if !fits_shape(kind, from, to) {
                    return Err(Rejection::InvalidGeometry);
                }
                if kind.is_slider() && self.is_obstructed(from, to) {
                    return Err(Rejection::PathObstructed);
                }
                Ok(None)
            }
        }
    }

    fn check_pawn_move(&self, pawn: Piece, from: Square, to: Square) -> Result<(), Rejection> {
        match pawn_shape(pawn.color(), from, to) {
            Some(PawnShape::Push) if self.is_occupied(to) => Err(Rejection::PathObstructed),
            Some(PawnShape::DoublePush)
                if self.is_occupied(to) || self.is_obstructed(from, to) =>
            {
                Err(Rejection::PathObstructed)
            }
            Some(PawnShape::Push | PawnShape::DoublePush) => Ok(()),
            // Own pieces on `to` were rejected earlier, so any occupant is a capture.
            Some(PawnShape::Diagonal) if self.is_occupied(to) => Ok(()),
            Some(PawnShape::Diagonal) | None => Err(Rejection::InvalidGeometry),
        }
    }
}

/// A pawn landing on its last rank needs a promotion letter; nothing else may carry one.
fn promotion_kind(
    piece: Piece,
    to: Square,
    mv: Move,
    castle: Option<CastleSide>,
) -> Result<MoveKind, Rejection> {
    let promotes =
        piece.kind() == PieceKind::Pawn && to.rank() == piece.color().promotion_rank();
    match (promotes, mv.promotion()) {
        (true, Some(promo)) => Ok(MoveKind::Promotion(promo)),
        (false, None) => Ok(castle.map_or(MoveKind::Normal, MoveKind::Castling)),
        _ => Err(Rejection::PromotionMismatch),
    }
}
