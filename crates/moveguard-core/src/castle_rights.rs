//! Castling rights and the fixed squares each castling move touches.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File the king starts on for either side.
    const KING_FILE: u8 = 4;

    /// Classify a king move as castling: two files along the home rank,
    /// starting from the e-file.
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        if from != Self::king_origin(color) || to.rank() != from.rank() {
            return None;
        }
        match to.file() {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// The king's square before castling (e1 / e8).
    pub fn king_origin(color: Color) -> Square {
        home_square(color, Self::KING_FILE)
    }

    /// The king's square after castling (g-file or c-file).
    pub fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => home_square(color, 6),
            CastleSide::QueenSide => home_square(color, 2),
        }
    }

    /// The square the king crosses on its way (f-file or d-file).
    pub fn king_transit(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => home_square(color, 5),
            CastleSide::QueenSide => home_square(color, 3),
        }
    }

    /// The rook's corner square before castling.
    pub fn rook_origin(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => home_square(color, 7),
            CastleSide::QueenSide => home_square(color, 0),
        }
    }

    /// The rook's square after castling; the square the king passed over.
    pub fn rook_target(self, color: Color) -> Square {
        self.king_transit(color)
    }
}

/// A square on `color`'s home rank. Files passed in are always 0..8.
fn home_square(color: Color, file: u8) -> Square {
    let rank_start = match color {
        Color::White => Square::A1,
        Color::Black => Square::A8,
    };
    rank_start.offset(file as i8, 0).unwrap_or(rank_start)
}

/// Castling rights as four flags: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights. Also the default when a snapshot omits the field.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return the single flag for a color and side.
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side).0 != 0
    }

    /// Return rights with the flags of `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return rights with the flags of `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Rights lost when a piece leaves or lands on `sq`: the king's home
    /// square clears both flags of that color, a rook corner clears one.
    pub fn revoked_by(sq: Square) -> CastleRights {
        let mut revoked = CastleRights::NONE;
        for color in Color::ALL {
            if sq == CastleSide::king_origin(color) {
                revoked = revoked
                    .insert(Self::flag(color, CastleSide::KingSide))
                    .insert(Self::flag(color, CastleSide::QueenSide));
            }
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                if sq == side.rook_origin(color) {
                    revoked = revoked.insert(Self::flag(color, side));
                }
            }
        }
        revoked
    }

    /// Parse the castling field ("KQkq", "Kq", "-", ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        if s.is_empty() {
            return Err(FenError::InvalidCastling { found: s.to_string() });
        }

        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastling { found: s.to_string() }),
            };
            Ok(rights.insert(flag))
        })
    }

    /// Serialize to the castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ]
        .into_iter()
        .filter(|(flag, _)| self.0 & flag.0 != 0)
        .map(|(_, c)| c)
        .collect()
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        CastleRights::NONE
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
