//! Single-game state: position, status, move list and turn clock.

use std::time::{Duration, Instant};

use chess_rules::{is_promotion_square, Coord, Move, MoveError, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::Clock;

/// Where the game stands. Every variant except `Active` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Active,
    Checkmate { winner: Side },
    Stalemate,
    TimedOut { loser: Side },
    /// A king disappeared from the board. Only reachable from a corrupted
    /// position; the side that still has its king is awarded the game.
    KingLost { winner: Side },
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Status::Checkmate { winner } | Status::KingLost { winner } => Some(winner),
            Status::TimedOut { loser } => Some(loser.other()),
            Status::Active | Status::Stalemate => None,
        }
    }
}

/// Result of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub side: Side,
    pub mv: Move,
    pub san: String,
    /// The side now on move is in check
    pub check: bool,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct GameState {
    position: Position,
    status: Status,
    first_mover: Side,
    history: Vec<Move>,
    notation: Vec<String>,
    clock: Clock,
}

impl GameState {
    pub fn new(first_mover: Side, turn: Duration, now: Instant) -> Self {
        Self::from_position(Position::startpos_with_first_mover(first_mover), turn, now)
    }

    /// Start from an arbitrary position. Its status is evaluated right away,
    /// so a position that is already decided starts out terminal.
    pub fn from_position(position: Position, turn: Duration, now: Instant) -> Self {
        let status = evaluate(&position);
        Self {
            first_mover: position.side_to_move,
            position,
            status,
            history: Vec::new(),
            notation: Vec::new(),
            clock: Clock::start(turn, now),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Short algebraic string for every applied move, in order.
    pub fn notation(&self) -> &[String] {
        &self.notation
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.clock.remaining(now)
    }

    /// Squares the piece on `from` may move to. Empty once the game is over.
    pub fn legal_destinations(&self, from: Coord) -> Vec<Coord> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.position.legal_destinations(from)
    }

    /// The move `from`→`to` is legal but cannot complete without a
    /// promotion piece.
    pub fn needs_promotion(&self, from: Coord, to: Coord) -> bool {
        match self.position.board.piece_at(from) {
            Some(pc) if pc.side == self.side_to_move() && is_promotion_square(pc, to) => {
                self.legal_destinations(from).contains(&to)
            }
            _ => false,
        }
    }

    /// Validate and apply `mv` for the side on move. On error nothing changes.
    ///
    /// The deadline restarts from `now` in the same step, so an expiry check
    /// can never observe the new position with the old deadline.
    ///
    /// A move arriving at or after the deadline is refused and ends the game
    /// as a timeout for the side on move, even if no clock sample has been
    /// taken yet.
    pub fn apply(&mut self, mv: Move, now: Instant) -> Result<Applied, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.clock.is_expired(now) {
            self.expire();
            return Err(MoveError::GameOver);
        }
        let next = self.position.play(mv)?;
        let san = self.position.san(mv);
        let side = self.position.side_to_move;

        self.position = next;
        self.history.push(mv);
        self.notation.push(san.clone());
        self.clock.reset(now);
        self.status = evaluate(&self.position);

        let check = self.position.in_check(self.position.side_to_move);
        debug!(%side, %mv, %san, ply = self.history.len(), "move applied");
        if self.status.is_terminal() {
            info!(status = ?self.status, ply = self.history.len(), "game over");
        }

        Ok(Applied {
            side,
            mv,
            san,
            check,
            status: self.status,
        })
    }

    /// Observe the clock. Returns the new status only on the call that ends
    /// the game; later calls, and calls on a finished game, return `None`.
    pub fn check_timeout(&mut self, now: Instant) -> Option<Status> {
        if self.status.is_terminal() || !self.clock.is_expired(now) {
            return None;
        }
        self.expire();
        Some(self.status)
    }

    fn expire(&mut self) {
        self.status = Status::TimedOut {
            loser: self.side_to_move(),
        };
        info!(status = ?self.status, ply = self.history.len(), "turn clock expired");
    }
}

fn evaluate(pos: &Position) -> Status {
    let missing: Vec<Side> = Side::BOTH
        .into_iter()
        .filter(|&side| pos.board.king_coord(side).is_none())
        .collect();
    match missing.as_slice() {
        [] => {}
        [lost] => {
            warn!(side = %lost, "king missing from the board");
            return Status::KingLost {
                winner: lost.other(),
            };
        }
        _ => {
            warn!("both kings missing from the board");
            return Status::KingLost {
                winner: pos.side_to_move.other(),
            };
        }
    }

    if pos.has_legal_move() {
        Status::Active
    } else if pos.in_check(pos.side_to_move) {
        Status::Checkmate {
            winner: pos.side_to_move.other(),
        }
    } else {
        Status::Stalemate
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
