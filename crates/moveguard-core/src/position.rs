//! The position: piece placement, side to move and castling rights.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece codes of the standard starting position in snapshot order (a8..h1).
const STARTING_CODES: &[u8; 64] =
    b"rnbqkbnrpppppppp00000000000000000000000000000000PPPPPPPPRNBQKBNR";

/// A chess position as seen by the validator.
///
/// A plain value: validation borrows it immutably and simulation works on a
/// copy, so a `Position` handed to the validator never changes underneath it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Square contents in snapshot order, a8 first.
    squares: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Current castling rights.
    castling: CastleRights,
}

impl Position {
    /// An empty board with White to move and no castling rights.
    pub fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
        }
    }

    /// Return the standard starting position, with all castling rights.
    pub fn starting_position() -> Position {
        let mut position = Position::empty();
        for (sq, &code) in Square::all().zip(STARTING_CODES.iter()) {
            position.squares[sq.index()] = Piece::from_code(code as char);
        }
        position.castling = CastleRights::ALL;
        position
    }

    /// Construct a position from its parts.
    pub fn from_parts(
        squares: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        castling: CastleRights,
    ) -> Position {
        Position {
            squares,
            side_to_move,
            castling,
        }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if `sq` holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Iterate over occupied squares of `color` with their pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color() == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Iterate over the squares holding a king of `color`.
    ///
    /// Well-formed positions yield exactly one square; malformed snapshots may
    /// yield none or several, and callers must cope with both.
    pub fn king_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Place `piece` on `sq`, or clear it with `None`.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Set the castling rights.
    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Check that each side has exactly one king and no pawn stands on a back rank.
    ///
    /// The legality engine does not require this; it is for consumers that
    /// want to refuse malformed snapshots up front.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.king_squares(color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }

        let pawn_on_back_rank = Square::all()
            .filter(|sq| sq.rank() == 0 || sq.rank() == 7)
            .filter_map(|sq| self.piece_at(sq))
            .any(|piece| piece.kind() == PieceKind::Pawn);
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for sq in Square::all() {
            if sq.file() == 0 {
                write!(f, "{}  ", sq.rank() + 1)?;
            }
            let c = position.piece_at(sq).map_or('.', Piece::code);
            if sq.file() < 7 {
                write!(f, "{c} ")?;
            } else {
                writeln!(f, "{c}")?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}
