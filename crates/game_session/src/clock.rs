use std::time::{Duration, Instant};

/// Per-turn countdown: one deadline, `last move + turn`.
///
/// Time is always passed in, never read, so the owner decides which clock
/// (wall or test) drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    turn: Duration,
    deadline: Instant,
}

impl Clock {
    pub fn start(turn: Duration, now: Instant) -> Self {
        Self {
            turn,
            deadline: now + turn,
        }
    }

    /// Restart the countdown. Called in the same step that applies a move.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = now + self.turn;
    }

    pub fn turn(&self) -> Duration {
        self.turn
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
