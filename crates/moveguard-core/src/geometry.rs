//! Occupancy-independent movement shapes.
//!
//! Everything here looks only at the two squares involved (and, for pawns,
//! the mover's color). Whether the path is clear or the destination is
//! occupied is decided by the callers.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Signed displacement between two squares. Positive ranks point toward rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub files: i8,
    pub ranks: i8,
}

impl Delta {
    /// Displacement from `from` to `to`.
    #[inline]
    pub const fn between(from: Square, to: Square) -> Delta {
        Delta {
            files: to.file() as i8 - from.file() as i8,
            ranks: to.rank() as i8 - from.rank() as i8,
        }
    }

    /// Absolute file distance.
    #[inline]
    pub const fn dx(self) -> u8 {
        self.files.unsigned_abs()
    }

    /// Absolute rank distance.
    #[inline]
    pub const fn dy(self) -> u8 {
        self.ranks.unsigned_abs()
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.files == 0 && self.ranks == 0
    }

    /// Same diagonal, distinct squares.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_null() && self.dx() == self.dy()
    }

    /// Same rank or same file, distinct squares.
    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.files == 0) != (self.ranks == 0)
    }

    #[inline]
    pub const fn is_knight_jump(self) -> bool {
        matches!((self.dx(), self.dy()), (1, 2) | (2, 1))
    }

    /// One square in any direction.
    #[inline]
    pub const fn is_king_step(self) -> bool {
        !self.is_null() && self.dx() <= 1 && self.dy() <= 1
    }

    /// Unit step along this line, or `None` if the squares are not aligned.
    pub const fn unit_step(self) -> Option<(i8, i8)> {
        if self.is_diagonal() || self.is_orthogonal() {
            Some((self.files.signum(), self.ranks.signum()))
        } else {
            None
        }
    }
}

/// The shape a pawn move takes, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnShape {
    /// One square straight ahead.
    Push,
    /// Two squares straight ahead from the start rank.
    DoublePush,
    /// One square diagonally ahead.
    Diagonal,
}

/// Classify a pawn move for `color`; `None` if no pawn move has this shape.
pub fn pawn_shape(color: Color, from: Square, to: Square) -> Option<PawnShape> {
    let delta = Delta::between(from, to);
    let forward = color.pawn_direction();

    if delta.ranks == forward {
        match delta.dx() {
            0 => Some(PawnShape::Push),
            1 => Some(PawnShape::Diagonal),
            _ => None,
        }
    } else if delta.ranks == 2 * forward
        && delta.files == 0
        && from.rank() == color.pawn_start_rank()
    {
        Some(PawnShape::DoublePush)
    } else {
        None
    }
}

/// Return `true` if a pawn of `color` on `from` threatens `to`.
///
/// Pawns threaten diagonally forward whether or not the target is occupied.
#[inline]
pub fn pawn_threatens(color: Color, from: Square, to: Square) -> bool {
    pawn_shape(color, from, to) == Some(PawnShape::Diagonal)
}

/// Return `true` if a non-pawn piece of `kind` can move from `from` to `to`
/// on an empty board. Castling is not a shape and is never matched here.
///
/// Pawns depend on color and occupancy, so this always returns `false` for
/// them; use [`pawn_shape`] instead.
pub fn fits_shape(kind: PieceKind, from: Square, to: Square) -> bool {
    let delta = Delta::between(from, to);
    match kind {
        PieceKind::Pawn => false,
        PieceKind::Knight => delta.is_knight_jump(),
        PieceKind::Bishop => delta.is_diagonal(),
        PieceKind::Rook => delta.is_orthogonal(),
        PieceKind::Queen => delta.is_diagonal() || delta.is_orthogonal(),
        PieceKind::King => delta.is_king_step(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Delta, PawnShape, fits_shape, pawn_shape, pawn_threatens};
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn delta_distances() {
        let d = Delta::between(sq("b1"), sq("c3"));
        assert_eq!((d.files, d.ranks), (1, 2));
        assert!(d.is_knight_jump());
        let d = Delta::between(sq("h8"), sq("a1"));
        assert_eq!((d.files, d.ranks), (-7, -7));
        assert!(d.is_diagonal());
        assert_eq!(d.unit_step(), Some((-1, -1)));
        assert_eq!(Delta::between(sq("a1"), sq("b3")).unit_step(), None);
    }

    #[test]
    fn knight_shapes_symmetric() {
        for a in Square::all() {
            for b in Square::all() {
                assert_eq!(
                    fits_shape(PieceKind::Knight, a, b),
                    fits_shape(PieceKind::Knight, b, a),
                    "{a} <-> {b}"
                );
            }
        }
        let from_center = Square::all()
            .filter(|&to| fits_shape(PieceKind::Knight, sq("e4"), to))
            .count();
        assert_eq!(from_center, 8);
        let from_corner = Square::all()
            .filter(|&to| fits_shape(PieceKind::Knight, sq("a1"), to))
            .count();
        assert_eq!(from_corner, 2);
    }

    #[test]
    fn slider_shapes() {
        assert!(fits_shape(PieceKind::Bishop, sq("c1"), sq("h6")));
        assert!(!fits_shape(PieceKind::Bishop, sq("c1"), sq("c4")));
        assert!(fits_shape(PieceKind::Rook, sq("a1"), sq("a8")));
        assert!(fits_shape(PieceKind::Rook, sq("a1"), sq("h1")));
        assert!(!fits_shape(PieceKind::Rook, sq("a1"), sq("b2")));
        assert!(fits_shape(PieceKind::Queen, sq("d1"), sq("h5")));
        assert!(fits_shape(PieceKind::Queen, sq("d1"), sq("d8")));
        assert!(!fits_shape(PieceKind::Queen, sq("d1"), sq("e3")));
    }

    #[test]
    fn no_piece_moves_to_its_own_square() {
        for kind in PieceKind::ALL {
            assert!(!fits_shape(kind, sq("d4"), sq("d4")), "{kind:?}");
        }
    }

    #[test]
    fn king_shapes() {
        let count = Square::all()
            .filter(|&to| fits_shape(PieceKind::King, sq("e4"), to))
            .count();
        assert_eq!(count, 8);
        assert!(!fits_shape(PieceKind::King, Square::E1, Square::G1));
    }

    #[test]
    fn pawn_shapes() {
        assert_eq!(pawn_shape(Color::White, sq("e2"), sq("e3")), Some(PawnShape::Push));
        assert_eq!(pawn_shape(Color::White, sq("e2"), sq("e4")), Some(PawnShape::DoublePush));
        assert_eq!(pawn_shape(Color::White, sq("e3"), sq("e5")), None);
        assert_eq!(pawn_shape(Color::White, sq("e2"), sq("d3")), Some(PawnShape::Diagonal));
        assert_eq!(pawn_shape(Color::White, sq("e3"), sq("e2")), None);
        assert_eq!(pawn_shape(Color::Black, sq("e7"), sq("e5")), Some(PawnShape::DoublePush));
        assert_eq!(pawn_shape(Color::Black, sq("e7"), sq("f6")), Some(PawnShape::Diagonal));
        assert_eq!(pawn_shape(Color::Black, sq("e2"), sq("e3")), None);
        assert_eq!(pawn_shape(Color::White, sq("a2"), sq("c3")), None);
    }

    #[test]
    fn pawn_threats_point_forward() {
        assert!(pawn_threatens(Color::White, sq("e4"), sq("d5")));
        assert!(pawn_threatens(Color::White, sq("e4"), sq("f5")));
        assert!(!pawn_threatens(Color::White, sq("e4"), sq("e5")));
        assert!(!pawn_threatens(Color::White, sq("e4"), sq("d3")));
        assert!(pawn_threatens(Color::Black, sq("e4"), sq("d3")));
        assert!(!pawn_threatens(Color::Black, sq("a4"), sq("h3")));
    }
}
