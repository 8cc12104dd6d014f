use chrono::{DateTime, Utc};
use chess_rules::Side;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::{GameState, Status};

/// Result from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// `None` while the game is still running.
    pub fn for_side(status: Status, side: Side) -> Option<Outcome> {
        if !status.is_terminal() {
            return None;
        }
        Some(match status.winner() {
            Some(winner) if winner == side => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        })
    }
}

/// A finished game, handed to whatever stores results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub human_side: Side,
    pub first_to_move: Side,
    pub outcome: Outcome,
    pub status: Status,
    /// Coordinate notation, in play order
    pub moves: Vec<String>,
    pub notation: Vec<String>,
}

impl GameRecord {
    /// `None` if `game` has not finished.
    pub fn from_game(
        id: Uuid,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        human_side: Side,
        game: &GameState,
    ) -> Option<Self> {
        let outcome = Outcome::for_side(game.status(), human_side)?;
        Some(Self {
            id,
            started_at,
            finished_at,
            human_side,
            first_to_move: game.first_mover(),
            outcome,
            status: game.status(),
            moves: game.history().iter().map(ToString::to_string).collect(),
            notation: game.notation().to_vec(),
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
