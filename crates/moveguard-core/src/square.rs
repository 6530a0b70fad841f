//! Board squares in top-down, rank-major order.

use std::fmt;

/// A square on the chess board.
///
/// Index = row * 8 + file, where row 0 is rank 8 and row 7 is rank 1, so
/// a8 = 0, h8 = 7, a1 = 56 and h1 = 63. This is the order in which board
/// snapshots list their squares. The index is always in `0..64`; every
/// constructor is checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);

    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);

    /// Create a square from a snapshot index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from zero-based file (0 = a) and rank (0 = rank 1).
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square((7 - rank) * 8 + file))
        } else {
            None
        }
    }

    /// Parse a file letter and rank digit, e.g. "e4".
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            &[file, rank] => Square::from_chars(file, rank),
            _ => None,
        }
    }

    /// Build a square from a file byte (`a`..=`h`) and a rank byte (`1`..=`8`).
    pub(crate) fn from_chars(file: u8, rank: u8) -> Option<Square> {
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::from_coords(file - b'a', rank - b'1')
    }

    /// Return the snapshot index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file, 0 = a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank, 0 = rank 1.
    #[inline]
    pub const fn rank(self) -> u8 {
        7 - self.0 / 8
    }

    /// Shift by whole files and ranks; `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, files: i8, ranks: i8) -> Option<Square> {
        let file = self.file() as i8 + files;
        let rank = self.rank() as i8 + ranks;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::from_coords(file as u8, rank as u8)
    }

    /// Iterate over all 64 squares in snapshot order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        write!(f, "{}{}", file, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
