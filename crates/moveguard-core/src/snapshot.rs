//! Board-exchange snapshots: 64 square codes, side to move, and optional
//! castling and en passant fields.
//!
//! ```text
//! r n b q k b n r p p p p p p p p 0 0 ... P P P P P P P P R N B Q K B N R w [KQkq] [-]
//! ```
//!
//! Squares run from a8 to h1. Only the first character of each square field
//! is read, so longer tokens such as "K1" are accepted as their first letter.
//! A snapshot without a castling field grants no castling rights.

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::SnapshotError;
use crate::fen::parse_en_passant;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Number of mandatory fields: 64 squares plus the side to move.
pub const SNAPSHOT_FIELDS: usize = Square::COUNT + 1;

impl Position {
    /// Build a position from snapshot fields.
    pub fn from_snapshot<'a, I>(fields: I) -> Result<Position, SnapshotError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();
        if !(SNAPSHOT_FIELDS..=SNAPSHOT_FIELDS + 2).contains(&fields.len()) {
            return Err(SnapshotError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut position = Position::empty();
        for (sq, field) in Square::all().zip(&fields) {
            let content = field
                .chars()
                .next()
                .and_then(Piece::from_square_code)
                .ok_or_else(|| SnapshotError::InvalidPieceCode {
                    index: sq.index(),
                    field: field.to_string(),
                })?;
            position.set_piece(sq, content);
        }

        let side_field = fields[Square::COUNT];
        let side = Color::from_side_field(side_field).ok_or_else(|| {
            SnapshotError::InvalidSideToMove {
                found: side_field.to_string(),
            }
        })?;
        position.set_side_to_move(side);

        if let Some(castling) = fields.get(SNAPSHOT_FIELDS) {
            position.set_castling(CastleRights::from_fen(castling)?);
        }
        if let Some(en_passant) = fields.get(SNAPSHOT_FIELDS + 1) {
            parse_en_passant(en_passant)?;
        }

        Ok(position)
    }

    /// Build a position from a whitespace-separated snapshot string.
    pub fn from_snapshot_str(snapshot: &str) -> Result<Position, SnapshotError> {
        Position::from_snapshot(snapshot.split_whitespace())
    }

    /// Serialize as a snapshot, including the castling field.
    pub fn to_snapshot(&self) -> String {
        let mut out = String::with_capacity(2 * SNAPSHOT_FIELDS + 5);
        for sq in Square::all() {
            out.push(Piece::square_code(self.piece_at(sq)));
            out.push(' ');
        }
        out.push_str(&format!("{} {}", self.side_to_move(), self.castling()));
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::CastleRights;
    use crate::color::Color;
    use crate::error::SnapshotError;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    const START_SQUARES: &str = "r n b q k b n r p p p p p p p p \
        0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 \
        P P P P P P P P R N B Q K B N R";

    #[test]
    fn starting_snapshot_without_castling_field() {
        let position = Position::from_snapshot_str(&format!("{START_SQUARES} w")).unwrap();
        let mut expected = Position::starting_position();
        expected.set_castling(CastleRights::NONE);
        assert_eq!(position, expected);
    }

    #[test]
    fn optional_fields_consumed() {
        let position = Position::from_snapshot_str(&format!("{START_SQUARES} b KQk e3")).unwrap();
        assert_eq!(position.side_to_move(), Color::Black);
        assert!(position.castling().has(Color::Black, crate::CastleSide::KingSide));
        assert!(!position.castling().has(Color::Black, crate::CastleSide::QueenSide));
    }

    #[test]
    fn first_character_only() {
        let mut fields: Vec<&str> = START_SQUARES.split_whitespace().collect();
        fields[4] = "king";
        fields[60] = "Kx";
        fields.push("w");
        let position = Position::from_snapshot(fields).unwrap();
        assert_eq!(position.piece_at(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(position.piece_at(Square::E1), Some(Piece::WHITE_KING));
    }

    #[test]
    fn snapshot_roundtrip() {
        let position = Position::starting_position();
        let text = position.to_snapshot();
        assert!(text.ends_with(" w KQkq"));
        assert_eq!(Position::from_snapshot_str(&text).unwrap(), position);
    }

    #[test]
    fn errors() {
        assert_eq!(
            Position::from_snapshot_str(START_SQUARES),
            Err(SnapshotError::WrongFieldCount { found: 64 })
        );
        assert_eq!(
            Position::from_snapshot_str(&format!("{START_SQUARES} w - - extra")),
            Err(SnapshotError::WrongFieldCount { found: 68 })
        );
        assert!(matches!(
            Position::from_snapshot_str(&format!("{START_SQUARES} white")),
            Err(SnapshotError::InvalidSideToMove { .. })
        ));
        assert!(matches!(
            Position::from_snapshot_str(&format!("{START_SQUARES} w KQkx")),
            Err(SnapshotError::InvalidOptionalField { .. })
        ));
        assert!(matches!(
            Position::from_snapshot_str(&format!("{START_SQUARES} w - z9")),
            Err(SnapshotError::InvalidOptionalField { .. })
        ));

        let bad_square = START_SQUARES.replacen("0", ".", 1);
        assert_eq!(
            Position::from_snapshot_str(&format!("{bad_square} w")),
            Err(SnapshotError::InvalidPieceCode {
                index: 16,
                field: ".".to_string()
            })
        );
    }
}
