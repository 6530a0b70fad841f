//! Core chess types and move legality: board representation, snapshot and
//! FEN parsing, attack detection, and the validation pipeline.

mod attacks;
mod between;
mod castle_rights;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod geometry;
mod legality;
mod make_move;
mod piece;
mod piece_kind;
mod position;
mod snapshot;
mod square;
mod validator;

pub use between::{Between, between};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError, Rejection, SnapshotError};
pub use fen::STARTING_FEN;
pub use geometry::{Delta, PawnShape, fits_shape, pawn_shape, pawn_threatens};
pub use piece::{EMPTY_CODE, Piece};
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use snapshot::SNAPSHOT_FIELDS;
pub use square::Square;
pub use validator::MoveValidator;
