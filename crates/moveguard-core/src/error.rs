//! Move rejections and position construction errors.

/// Why a proposed move was rejected.
///
/// Rejection is an ordinary outcome of validation, not a failure of the
/// validator; every variant is cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Rejection {
    /// The move text is not 4 or 5 characters of coordinate notation.
    #[error("malformed move string")]
    MalformedMove,
    /// The origin square is empty.
    #[error("no piece to move")]
    NoPieceAtOrigin,
    /// The origin piece belongs to the side not on move.
    #[error("wrong turn")]
    WrongTurn,
    /// The destination holds a piece of the moving side.
    #[error("cannot capture own piece")]
    OwnPieceAtDestination,
    /// The piece cannot move in this shape.
    #[error("invalid movement for this piece")]
    InvalidGeometry,
    /// A square between origin and destination is occupied.
    #[error("path is obstructed")]
    PathObstructed,
    /// A promotion letter is missing on a last-rank pawn move, or present on any other move.
    #[error("missing or extraneous promotion")]
    PromotionMismatch,
    /// The move would leave the moving side's king attacked.
    #[error("king left in check")]
    KingLeftInCheck,
    /// The castling flag is cleared or the rook is not on its corner.
    #[error("no castling rights")]
    CastlingRightsAbsent,
    /// A square between king and rook is occupied.
    #[error("castling path is blocked")]
    CastlingPathBlocked,
    /// The king is in check or would pass through or land on an attacked square.
    #[error("cannot castle out of, through or into check")]
    CastlingThroughCheck,
}

impl Rejection {
    /// Stable machine-readable identifier, used by the text protocol.
    pub const fn code(self) -> &'static str {
        match self {
            Rejection::MalformedMove => "malformed-move",
            Rejection::NoPieceAtOrigin => "no-piece-at-origin",
            Rejection::WrongTurn => "wrong-turn",
            Rejection::OwnPieceAtDestination => "own-piece-at-destination",
            Rejection::InvalidGeometry => "invalid-geometry",
            Rejection::PathObstructed => "path-obstructed",
            Rejection::PromotionMismatch => "promotion-mismatch",
            Rejection::KingLeftInCheck => "king-left-in-check",
            Rejection::CastlingRightsAbsent => "castling-rights-absent",
            Rejection::CastlingPathBlocked => "castling-path-blocked",
            Rejection::CastlingThroughCheck => "castling-through-check",
        }
    }
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than 4 or more than 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// The castling field is not "-" or a combination of "KQkq".
    #[error("invalid castling rights: \"{found}\"")]
    InvalidCastling {
        /// The invalid field.
        found: String,
    },
    /// The en passant field is not "-" or an algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
    /// A move counter is not a number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The invalid field.
        found: String,
    },
}

/// Errors from parsing a board-exchange snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Fewer than 65 or more than 67 fields.
    #[error("expected 65 to 67 snapshot fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A square field does not start with a piece letter or the empty code.
    #[error("invalid piece code {field:?} for square {index}")]
    InvalidPieceCode {
        /// Snapshot index of the square (0 = a8).
        index: usize,
        /// The offending field.
        field: String,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove {
        /// The invalid field.
        found: String,
    },
    /// The optional castling or en passant field is malformed.
    #[error("invalid optional field: {source}")]
    InvalidOptionalField {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },
}

/// Errors from structural validation of a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
