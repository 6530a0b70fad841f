//! Move execution via copy-make.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

impl Position {
    /// Apply a move and return the resulting position. Copy-make: `self` is
    /// not modified.
    ///
    /// Meant for moves that validation accepted. The piece on the origin is
    /// moved (a capture simply overwrites the destination), a promotion
    /// letter on a pawn move replaces the pawn, a king stepping two files
    /// from its home square brings its rook along, castling rights touched
    /// by the move are revoked, and the side to move flips.
    ///
    /// If the origin square is empty the position is returned unchanged.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let (from, to) = (mv.from(), mv.to());

        let Some(piece) = self.piece_at(from) else {
            return next;
        };
        let color = piece.color();

        let placed = match mv.promotion() {
            Some(promo) if piece.kind() == PieceKind::Pawn => {
                Piece::new(promo.to_piece_kind(), color)
            }
            _ => piece,
        };
        next.set_piece(from, None);
        next.set_piece(to, Some(placed));

        if piece.kind() == PieceKind::King
            && let Some(side) = CastleSide::from_king_move(color, from, to)
        {
            let rook_from = side.rook_origin(color);
            let rook = Piece::new(PieceKind::Rook, color);
            if next.piece_at(rook_from) == Some(rook) {
                next.set_piece(rook_from, None);
                next.set_piece(side.rook_target(color), Some(rook));
            }
        }

        let castling = self
            .castling()
            .remove(CastleRights::revoked_by(from))
            .remove(CastleRights::revoked_by(to));
        next.set_castling(castling);
        next.set_side_to_move(self.side_to_move().flip());

        next
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::CastleRights;
    use crate::chess_move::{Move, PromotionPiece};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::parse(s).unwrap()
    }

    #[test]
    fn pawn_push_leaves_original_untouched() {
        let before = Position::starting_position();
        let after = before.make_move(mv("e2e4"));

        assert_eq!(after.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(after.piece_at(sq("e2")), None);
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(before, Position::starting_position());
    }

    #[test]
    fn capture_overwrites() {
        let after = Position::starting_position()
            .make_move(mv("e2e4"))
            .make_move(mv("d7d5"))
            .make_move(mv("e4d5"));
        assert_eq!(after.piece_at(sq("d5")), Some(Piece::WHITE_PAWN));
        assert_eq!(after.pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn promotion_replaces_pawn() {
        let position: Position = "3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let after = position.make_move(Move::new_promotion(
            sq("e7"),
            sq("d8"),
            PromotionPiece::Knight,
        ));
        assert_eq!(after.piece_at(sq("d8")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(after.piece_at(sq("e7")), None);
    }

    #[test]
    fn castling_moves_rook() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();

        let kingside = position.make_move(mv("e1g1"));
        assert_eq!(kingside.piece_at(Square::G1), Some(Piece::WHITE_KING));
        assert_eq!(kingside.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
        assert_eq!(kingside.piece_at(Square::H1), None);
        assert_eq!(
            kingside.castling(),
            CastleRights::BLACK_KING.insert(CastleRights::BLACK_QUEEN)
        );

        let queenside = kingside.make_move(mv("e8c8"));
        assert_eq!(queenside.piece_at(Square::C8), Some(Piece::BLACK_KING));
        assert_eq!(queenside.piece_at(Square::D8), Some(Piece::BLACK_ROOK));
        assert_eq!(queenside.piece_at(Square::A8), None);
        assert!(queenside.castling().is_empty());
    }

    #[test]
    fn rook_moves_and_captures_revoke_rights() {
        let position: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let after = position.make_move(mv("a1a8"));
        assert!(!after.castling().has(Color::White, crate::CastleSide::QueenSide));
        assert!(!after.castling().has(Color::Black, crate::CastleSide::QueenSide));
        assert!(after.castling().has(Color::White, crate::CastleSide::KingSide));
        assert!(after.castling().has(Color::Black, crate::CastleSide::KingSide));
    }

    #[test]
    fn empty_origin_is_noop() {
        let position = Position::starting_position();
        assert_eq!(position.make_move(mv("e4e5")), position);
    }
}
