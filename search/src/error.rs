use thiserror::Error;
use utils::PositionError;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The rules engine reported no legal moves for a position it does not
    /// consider finished.
    #[error("no legal moves in non-terminal position {fen}")]
    NoLegalMoves { fen: String },

    #[error("search depth must be at least 1")]
    InvalidDepth,

    #[error(transparent)]
    Position(#[from] PositionError),
}
