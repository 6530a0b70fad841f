//! Proposed moves in coordinate notation ("e2e4", "e7e8q").

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleSide;
use crate::error::Rejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Parse a promotion letter (`q`, `r`, `b`, `n`, any case).
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase coordinate-notation letter.
    pub const fn letter(self) -> char {
        self.to_piece_kind().letter()
    }
}

/// What an accepted move turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or capture.
    Normal,
    /// A pawn reaching the last rank.
    Promotion(PromotionPiece),
    /// King and rook castling together.
    Castling(CastleSide),
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Normal => write!(f, "normal"),
            MoveKind::Promotion(piece) => write!(f, "promotion {}", piece.letter()),
            MoveKind::Castling(CastleSide::KingSide) => write!(f, "castling kingside"),
            MoveKind::Castling(CastleSide::QueenSide) => write!(f, "castling queenside"),
        }
    }
}

/// A proposed move: origin, destination and an optional promotion piece.
///
/// Both squares are range-checked at construction, so a parsed move can
/// index the board directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without promotion.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting move.
    pub const fn new_promotion(from: Square, to: Square, piece: PromotionPiece) -> Move {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Parse 4- or 5-character coordinate notation.
    pub fn parse(text: &str) -> Result<Move, Rejection> {
        let (from, to, promotion) = match text.as_bytes() {
            &[f1, r1, f2, r2] => (Square::from_chars(f1, r1), Square::from_chars(f2, r2), None),
            &[f1, r1, f2, r2, promo] => {
                let piece = PromotionPiece::from_letter(promo as char)
                    .ok_or(Rejection::MalformedMove)?;
                (Square::from_chars(f1, r1), Square::from_chars(f2, r2), Some(piece))
            }
            _ => return Err(Rejection::MalformedMove),
        };
        match (from, to) {
            (Some(from), Some(to)) => Ok(Move { from, to, promotion }),
            _ => Err(Rejection::MalformedMove),
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }
}

impl FromStr for Move {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Move, Rejection> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, PromotionPiece};
    use crate::castle_rights::CastleSide;
    use crate::error::Rejection;
    use crate::square::Square;

    #[test]
    fn parse_plain_move() {
        let mv = Move::parse("e2e4").unwrap();
        assert_eq!(mv.from(), Square::from_algebraic("e2").unwrap());
        assert_eq!(mv.to(), Square::from_algebraic("e4").unwrap());
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_promotion_any_case() {
        for (text, piece) in [
            ("e7e8q", PromotionPiece::Queen),
            ("e7e8Q", PromotionPiece::Queen),
            ("a2a1n", PromotionPiece::Knight),
            ("h7g8R", PromotionPiece::Rook),
            ("b7b8b", PromotionPiece::Bishop),
        ] {
            assert_eq!(Move::parse(text).unwrap().promotion(), Some(piece), "{text}");
        }
        assert_eq!(Move::parse("e7e8Q").unwrap().to_string(), "e7e8q");
    }

    #[test]
    fn malformed_strings_rejected() {
        for bad in [
            "", "e2", "e2e", "e2e4qq", "e2e4k", "e2e4p", "i2e4", "e0e4", "e2e9", "E2E4", "e2-e4",
            "é2e4", "e2e4 ",
        ] {
            assert_eq!(Move::parse(bad), Err(Rejection::MalformedMove), "{bad:?}");
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let mv: Move = "g1f3".parse().unwrap();
        assert_eq!(mv, Move::new(Square::G1, Square::from_algebraic("f3").unwrap()));
    }

    #[test]
    fn move_kind_display() {
        assert_eq!(MoveKind::Normal.to_string(), "normal");
        assert_eq!(MoveKind::Promotion(PromotionPiece::Knight).to_string(), "promotion n");
        assert_eq!(MoveKind::Castling(CastleSide::QueenSide).to_string(), "castling queenside");
    }
}
