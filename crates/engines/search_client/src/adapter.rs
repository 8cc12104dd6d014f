use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chess_rules::{Move, MoveError, MovePicker, PieceKind, Position};
use tracing::{debug, warn};

use crate::error::SourceError;
use crate::{MoveSource, SearchRequest};

/// Answers "what does the engine play here?" for the game session.
///
/// The remote source, when configured, gets `budget + grace` to answer. Its
/// move is re-validated against the position; a move that fails, like any
/// network error, timeout or unreadable response, is logged and replaced by
/// the local picker's choice. The only `None` is a position with no legal
/// move at all.
pub struct SearchAdapter {
    source: Option<Box<dyn MoveSource>>,
    fallback: Mutex<Box<dyn MovePicker>>,
    grace: Duration,
}

impl SearchAdapter {
    pub fn new(source: Box<dyn MoveSource>, fallback: Box<dyn MovePicker>, grace: Duration) -> Self {
        Self {
            source: Some(source),
            fallback: Mutex::new(fallback),
            grace,
        }
    }

    /// An adapter that never leaves the process.
    pub fn local(fallback: Box<dyn MovePicker>) -> Self {
        Self {
            source: None,
            fallback: Mutex::new(fallback),
            grace: Duration::ZERO,
        }
    }

    pub fn has_remote(&self) -> bool {
        self.source.is_some()
    }

    pub async fn request_move(&self, pos: &Position, budget: Duration) -> Option<Move> {
        if !pos.has_legal_move() {
            debug!(side = %pos.side_to_move, "no legal move to search for");
            return None;
        }

        if let Some(source) = &self.source {
            match self.ask(source.as_ref(), pos, budget).await {
                Ok(mv) => return Some(mv),
                Err(err) => warn!(source = source.name(), error = %err, "falling back to local mover"),
            }
        }
        self.fallback_move(pos)
    }

    async fn ask(&self, source: &dyn MoveSource, pos: &Position, budget: Duration) -> Result<Move, SourceError> {
        let request = SearchRequest {
            position: pos.clone(),
            budget,
        };
        let limit = budget + self.grace;
        let mv = tokio::time::timeout(limit, source.request_move(&request))
            .await
            .map_err(|_| SourceError::Timeout(limit))??;
        vet(pos, mv)
    }

    /// The local picker's move, checked like any other.
    pub fn fallback_move(&self, pos: &Position) -> Option<Move> {
        let mut picker = self.fallback.lock().unwrap_or_else(PoisonError::into_inner);
        match picker.pick(pos) {
            Some(mv) if pos.is_legal(mv) => {
                debug!(picker = picker.name(), %mv, "fallback move");
                Some(mv)
            }
            Some(mv) => {
                warn!(picker = picker.name(), %mv, "local picker proposed an illegal move");
                pos.legal_moves().into_iter().next()
            }
            None => None,
        }
    }
}

/// Accept `mv` only if the rules do. A far-rank pawn move with no promotion
/// piece is read as a queen promotion.
fn vet(pos: &Position, mv: Move) -> Result<Move, SourceError> {
    match pos.validate(mv) {
        Ok(_) => Ok(mv),
        Err(MoveError::PromotionRequired { .. }) => {
            let queen = mv.with_promotion(PieceKind::Queen);
            pos.validate(queen)
                .map(|_| queen)
                .map_err(|reason| SourceError::Rejected { mv: queen, reason })
        }
        Err(reason) => Err(SourceError::Rejected { mv, reason }),
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod adapter_tests;
