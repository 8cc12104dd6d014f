use std::time::Duration;

use chess_rules::{Move, MoveError};
use thiserror::Error;

/// Why a move source produced no usable move. None of these are fatal to a
/// game: the adapter falls back to the local mover.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("search request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("search service answered with status {0}")]
    Status(u16),

    #[error("no answer within {0:?}")]
    Timeout(Duration),

    #[error("unreadable search response: {0}")]
    Malformed(String),

    /// Well-formed but not playable in the position
    #[error("search proposed {mv}: {reason}")]
    Rejected { mv: Move, reason: MoveError },
}
