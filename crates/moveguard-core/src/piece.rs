//! Colored chess pieces and their one-character codes.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Code used for an empty square in board snapshots.
pub const EMPTY_CODE: char = '0';

/// A colored chess piece. Empty squares are `None` in an `Option<Piece>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a piece letter: uppercase is White, lowercase is Black.
    pub fn from_code(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Parse a snapshot square code, where [`EMPTY_CODE`] means no piece.
    ///
    /// The outer `Option` is `None` for an unrecognized character.
    pub fn from_square_code(c: char) -> Option<Option<Piece>> {
        if c == EMPTY_CODE {
            Some(None)
        } else {
            Piece::from_code(c).map(Some)
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the piece letter, uppercase for White.
    pub fn code(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    /// Return the snapshot code of a square's content.
    pub fn square_code(content: Option<Piece>) -> char {
        content.map_or(EMPTY_CODE, Piece::code)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind.letter().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::{EMPTY_CODE, Piece};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn code_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_code(piece.code()), Some(piece));
            }
        }
    }

    #[test]
    fn case_selects_color() {
        assert_eq!(Piece::from_code('K'), Some(Piece::WHITE_KING));
        assert_eq!(Piece::from_code('k'), Some(Piece::BLACK_KING));
        assert_eq!(Piece::from_code('N'), Some(Piece::WHITE_KNIGHT));
        assert_eq!(Piece::from_code('q'), Some(Piece::BLACK_QUEEN));
        assert_eq!(Piece::from_code('Z'), None);
        assert_eq!(Piece::from_code(' '), None);
    }

    #[test]
    fn square_codes() {
        assert_eq!(Piece::from_square_code(EMPTY_CODE), Some(None));
        assert_eq!(Piece::from_square_code('p'), Some(Some(Piece::BLACK_PAWN)));
        assert_eq!(Piece::from_square_code('.'), None);
        assert_eq!(Piece::square_code(None), '0');
        assert_eq!(Piece::square_code(Some(Piece::WHITE_ROOK)), 'R');
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Piece::WHITE_PAWN), "WP");
        assert_eq!(format!("{:?}", Piece::BLACK_BISHOP), "BB");
    }
}
