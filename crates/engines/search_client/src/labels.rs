//! Side labelling for the position notation sent to a search service.
//!
//! The service thinks in terms of a `w` side that starts on ranks 1-2 and
//! moves up the board. When side A is meant to be the service's `b` side,
//! the position is mirrored before encoding and moves are mirrored back
//! after decoding.

use chess_rules::{parse_coordinate_move, Move, Position, Side};
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideLabel {
    #[default]
    #[serde(rename = "w")]
    W,
    #[serde(rename = "b")]
    B,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideLabels {
    /// How the service should name side A
    pub side_a: SideLabel,
}

impl SideLabels {
    pub fn new(side_a: SideLabel) -> Self {
        Self { side_a }
    }

    fn mirrors(&self) -> bool {
        self.side_a == SideLabel::B
    }

    /// Position notation in the service's orientation.
    ///
    /// When mirrored, the move counter follows the service's `b` side (our
    /// side A): it advances after side A moves instead of side B.
    pub fn encode(&self, pos: &Position) -> String {
        if !self.mirrors() {
            return pos.to_fen();
        }
        let mut theirs = pos.mirrored();
        if pos.side_to_move == Side::A {
            theirs.fullmove_number = pos.fullmove_number.saturating_sub(1).max(1);
        }
        theirs.to_fen()
    }

    /// Parse the service's coordinate move into board coordinates.
    pub fn decode(&self, txt: &str) -> Result<Move, SourceError> {
        let mv = parse_coordinate_move(txt).map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(self.to_board(mv))
    }

    /// Map a move expressed in the service's orientation onto the board.
    pub fn to_board(&self, mv: Move) -> Move {
        if self.mirrors() {
            mv.mirrored()
        } else {
            mv
        }
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod labels_tests;
