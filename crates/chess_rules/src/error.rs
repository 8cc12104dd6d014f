//! Error types for move validation and notation parsing.

use thiserror::Error;

use crate::types::{Coord, Move};

/// Why a move was refused. Refusal never changes any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has reached a terminal status
    #[error("the game is over")]
    GameOver,

    #[error("no piece on {0}")]
    NoPiece(Coord),

    #[error("the piece on {0} does not belong to the side on move")]
    NotYourPiece(Coord),

    /// Not a pseudo-legal destination for the piece
    #[error("{mv} is not a reachable move")]
    Unreachable { mv: Move },

    #[error("{mv} would leave the king in check")]
    ExposesKing { mv: Move },

    /// Legal pawn move onto the far row with no piece chosen yet
    #[error("{from}{to} needs a promotion piece")]
    PromotionRequired { from: Coord, to: Coord },

    #[error("{mv} carries an invalid promotion")]
    InvalidPromotion { mv: Move },
}

/// Malformed square, move or position notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square: {0:?}")]
    Square(String),

    #[error("invalid move notation: {0:?}")]
    Move(String),

    #[error("invalid position notation: {reason}")]
    Position { reason: String },
}

impl NotationError {
    pub(crate) fn position(reason: impl Into<String>) -> Self {
        NotationError::Position {
            reason: reason.into(),
        }
    }
}
