//! Text rendering of session events.

use std::time::Duration;

use chess_rules::{Position, Side};
use game_session::{Event, Outcome, Status};

/// Keeps a copy of the position so the board can be redrawn from events.
pub struct View {
    human: Side,
    position: Position,
    ply: usize,
}

impl View {
    pub fn new(human: Side) -> Self {
        Self {
            human,
            position: Position::startpos(),
            ply: 0,
        }
    }

    pub fn board(&self) -> String {
        format!("{}\n{} to move", self.position.board, self.position.side_to_move)
    }

    /// Text to print for `event`, if any.
    pub fn describe(&mut self, event: &Event) -> Option<String> {
        match event {
            Event::Started { game, human, first } => {
                self.human = *human;
                self.position = Position::startpos_with_first_mover(*first);
                self.ply = 0;
                Some(format!(
                    "game {game}: you play {human} (uppercase pieces are side A)\n{}",
                    self.board()
                ))
            }
            Event::Selected { from, targets } => {
                let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
                Some(if list.is_empty() {
                    format!("{from}: no legal moves")
                } else {
                    format!("{from} -> {}", list.join(" "))
                })
            }
            Event::SelectionCleared => None,
            Event::PromotionNeeded { from, to } => {
                Some(format!("{from}{to}: promote to q, r, b or n?"))
            }
            Event::Rejected { mv, reason } => Some(format!("{mv} rejected: {reason}")),
            Event::Moved { side, mv, san, check } => {
                if let Ok(next) = self.position.play(*mv) {
                    self.position = next;
                }
                self.ply += 1;
                let who = if *side == self.human { "you" } else { "engine" };
                let check = if *check { " (check)" } else { "" };
                Some(format!("{}. {who}: {san}{check}\n{}", self.ply, self.board()))
            }
            Event::Clock { side, remaining } => {
                announce_clock(*remaining).then(|| format!("{side}: {} left", clock_text(*remaining)))
            }
            Event::Finished { status, record } => {
                let verdict = match record.outcome {
                    Outcome::Win => "you win",
                    Outcome::Loss => "you lose",
                    Outcome::Draw => "draw",
                };
                Some(format!("{} - {verdict}", status_text(*status)))
            }
        }
    }
}

fn announce_clock(remaining: Duration) -> bool {
    let secs = remaining.as_secs();
    secs <= 10 || secs % 60 == 0
}

pub fn clock_text(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn status_text(status: Status) -> String {
    match status {
        Status::Active => "in progress".to_string(),
        Status::Checkmate { winner } => format!("checkmate, {winner} wins"),
        Status::Stalemate => "stalemate".to_string(),
        Status::TimedOut { loser } => format!("{loser} ran out of time"),
        Status::KingLost { winner } => format!("king lost, {winner} wins"),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
