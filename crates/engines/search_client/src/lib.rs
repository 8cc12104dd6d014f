//! Move Source Adapter
//!
//! Obtains a move for the side on move from an external search service and
//! never lets a bad answer through. A [`MoveSource`] produces candidates;
//! [`SearchAdapter`] bounds the wait, re-validates whatever comes back and
//! degrades to a local [`MovePicker`] on any failure.

mod adapter;
mod error;
mod labels;
mod remote;

use std::time::Duration;

use async_trait::async_trait;
use chess_rules::{Move, Position};

pub use adapter::SearchAdapter;
pub use chess_rules::MovePicker;
pub use error::SourceError;
pub use labels::{SideLabel, SideLabels};
pub use remote::{extract_move, RemoteSearch};

/// One question for a move source.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub position: Position,
    /// Thinking time the source is asked to respect.
    pub budget: Duration,
}

/// Anything that can propose a move for a position.
///
/// Answers are candidates only: the adapter validates them against the rules
/// before they reach the game.
#[async_trait]
pub trait MoveSource: Send + Sync {
    async fn request_move(&self, request: &SearchRequest) -> Result<Move, SourceError>;

    fn name(&self) -> &str;
}
