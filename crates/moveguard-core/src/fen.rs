//! FEN parsing and serialization for [`Position`].

use std::fmt;
use std::str::FromStr;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse an en passant field. The square is checked and then dropped:
/// en passant captures are not validated.
pub(crate) fn parse_en_passant(field: &str) -> Result<(), FenError> {
    if field == "-" || Square::from_algebraic(field).is_some() {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        })
    }
}

impl FromStr for Position {
    type Err = FenError;

    /// Parse a FEN string. The move counters may be omitted; when present
    /// they must be numbers but are not kept.
    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut position = Position::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first, the same order as snapshot rows.
            let rank = 7 - rank_index as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file += skip as u8;
                    if file > 8 {
                        return Err(FenError::BadRankLength {
                            rank_index,
                            length: file as usize,
                        });
                    }
                    continue;
                }

                let piece =
                    Piece::from_code(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let sq = Square::from_coords(file, rank).ok_or(FenError::BadRankLength {
                    rank_index,
                    length: file as usize + 1,
                })?;
                position.set_piece(sq, Some(piece));
                file += 1;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file as usize,
                });
            }
        }

        let side = Color::from_side_field(fields[1]).ok_or_else(|| FenError::InvalidColor {
            found: fields[1].to_string(),
        })?;
        position.set_side_to_move(side);
        position.set_castling(CastleRights::from_fen(fields[2])?);
        parse_en_passant(fields[3])?;

        for (field, name) in fields[4..].iter().zip(["halfmove clock", "fullmove number"]) {
            field
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field: name,
                    found: field.to_string(),
                })?;
        }

        Ok(position)
    }
}

impl fmt::Display for Position {
    /// Write the position as FEN. En passant is always "-" and the move
    /// counters are always "0 1", since the position does not track them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut empty_run = 0u8;
        for sq in Square::all() {
            match self.piece_at(sq) {
                Some(piece) => {
                    if empty_run > 0 {
                        write!(f, "{empty_run}")?;
                        empty_run = 0;
                    }
                    write!(f, "{}", piece.code())?;
                }
                None => empty_run += 1,
            }

            if sq.file() == 7 {
                if empty_run > 0 {
                    write!(f, "{empty_run}")?;
                    empty_run = 0;
                }
                if sq.rank() > 0 {
                    write!(f, "/")?;
                }
            }
        }

        write!(f, " {} {} - 0 1", self.side_to_move(), self.castling())
    }
}
