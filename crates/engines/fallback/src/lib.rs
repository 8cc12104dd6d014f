//! Fallback Move Picker
//!
//! A local mover that needs no network and always answers instantly.
//! It enumerates every legal move for the side to move, splits them into
//! quiet moves and captures, and with probability `quiet_bias` plays a
//! uniformly random quiet move. Otherwise it plays a capture drawn with
//! weight proportional to the value of the captured piece.
//!
//! Candidates come from [`Position::legal_moves`], so a chosen move can never
//! leave the mover's own king in check.

use chess_rules::{Move, MoveKind, MovePicker, PieceKind, Position};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;


pub const DEFAULT_QUIET_BIAS: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct FallbackMover<R = StdRng> {
    rng: R,
    quiet_bias: f64,
}

impl FallbackMover<StdRng> {
    pub fn new(quiet_bias: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), quiet_bias)
    }

    /// Deterministic mover for tests and replays.
    pub fn seeded(seed: u64, quiet_bias: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), quiet_bias)
    }
}

impl Default for FallbackMover<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_BIAS)
    }
}

impl<R: Rng> FallbackMover<R> {
    pub fn with_rng(rng: R, quiet_bias: f64) -> Self {
        let quiet_bias = if quiet_bias.is_finite() {
            quiet_bias.clamp(0.0, 1.0)
        } else {
            DEFAULT_QUIET_BIAS
        };
        Self { rng, quiet_bias }
    }

    pub fn quiet_bias(&self) -> f64 {
        self.quiet_bias
    }

    /// Pick a move for the side to move, or `None` if it has no legal move.
    pub fn choose(&mut self, pos: &Position) -> Option<Move> {
        let mut quiet = Vec::new();
        let mut captures = Vec::new();
        for mv in pos.legal_moves() {
            // Under-promotions are never worth a random pick
            if matches!(mv.promotion, Some(kind) if kind != PieceKind::Queen) {
                continue;
            }
            let Some(pc) = pos.board.piece_at(mv.from) else {
                continue;
            };
            match pos.classify(mv, pc) {
                MoveKind::Capture(victim) => captures.push((mv, victim.value().max(1))),
                MoveKind::EnPassant => captures.push((mv, PieceKind::Pawn.value())),
                _ => quiet.push(mv),
            }
        }

        let prefer_quiet = !quiet.is_empty()
            && (captures.is_empty() || self.rng.gen_bool(self.quiet_bias));

        let picked = if prefer_quiet {
            quiet.choose(&mut self.rng).copied()
        } else {
            let weights = captures.iter().map(|&(_, w)| w);
            match WeightedIndex::new(weights) {
                Ok(dist) => Some(captures[dist.sample(&mut self.rng)].0),
                Err(_) => captures.first().map(|&(mv, _)| mv),
            }
        };

        debug!(
            quiet = quiet.len(),
            captures = captures.len(),
            picked = ?picked.map(|m| m.to_string()),
            "fallback pick"
        );
        picked
    }
}

impl<R: Rng + Send> MovePicker for FallbackMover<R> {
    fn pick(&mut self, pos: &Position) -> Option<Move> {
        self.choose(pos)
    }

    fn name(&self) -> &str {
        "fallback"
    }
}
