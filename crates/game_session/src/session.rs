//! Turn orchestration between a human player and the engine.
//!
//! [`Session`] is a plain state machine: feed it a [`Command`] with the
//! current time, get back the resulting [`Event`]s and at most one
//! [`EngineRequest`]. It never waits on anything itself; the async driver in
//! [`crate::runtime`] runs requests and feeds replies back in.

use std::time::{Duration, Instant};

use chess_rules::{Coord, Move, MoveError, PieceKind, Position, Side};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::record::GameRecord;
use crate::state::{Applied, GameState, Status};

/// Identifies one engine turn. A reply is only applied if its ticket is
/// the one the session is still waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub game: u64,
    pub ply: usize,
}

#[derive(Debug, Clone)]
pub struct EngineRequest {
    pub ticket: Ticket,
    pub position: Position,
    pub budget: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The human clicked a square
    Click(Coord),
    /// The human entered a whole move; selection state is ignored
    Play(Move),
    /// Answer to [`Event::PromotionNeeded`]
    Promote(PieceKind),
    /// Abandon the current game and start a fresh one
    Reset,
    /// Periodic clock sample
    Tick,
    EngineReply { ticket: Ticket, mv: Option<Move> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Started { game: u64, human: Side, first: Side },
    Selected { from: Coord, targets: Vec<Coord> },
    SelectionCleared,
    PromotionNeeded { from: Coord, to: Coord },
    Rejected { mv: Move, reason: MoveError },
    Moved { side: Side, mv: Move, san: String, check: bool },
    Clock { side: Side, remaining: Duration },
    Finished { status: Status, record: Box<GameRecord> },
}

/// Everything one command produced.
#[derive(Debug, Default)]
pub struct Output {
    pub events: Vec<Event>,
    pub request: Option<EngineRequest>,
    /// The engine request that was outstanding before this command will
    /// never be applied; any search still running for it can be stopped.
    pub cancelled: bool,
}

/// Fixed parameters of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub human: Side,
    pub first_to_move: Side,
    pub turn: Duration,
    pub engine_budget: Duration,
}

impl From<&SessionConfig> for SessionSettings {
    fn from(config: &SessionConfig) -> Self {
        Self {
            human: config.human_side,
            first_to_move: config.first_to_move,
            turn: config.turn(),
            engine_budget: config.search.budget(),
        }
    }
}

pub struct Session {
    settings: SessionSettings,
    game_id: u64,
    record_id: Uuid,
    started_at: DateTime<Utc>,
    state: GameState,
    selected: Option<Coord>,
    pending_promotion: Option<(Coord, Coord)>,
    outstanding: Option<Ticket>,
}

impl Session {
    /// Start the first game from the standard layout.
    pub fn new(settings: SessionSettings, now: Instant) -> (Self, Output) {
        let state = GameState::new(settings.first_to_move, settings.turn, now);
        Self::start(settings, state, 0)
    }

    /// Start from an arbitrary position; side on move is taken from it.
    pub fn from_position(settings: SessionSettings, position: Position, now: Instant) -> (Self, Output) {
        let state = GameState::from_position(position, settings.turn, now);
        Self::start(settings, state, 0)
    }

    fn start(settings: SessionSettings, state: GameState, game_id: u64) -> (Self, Output) {
        let mut session = Session {
            settings,
            game_id,
            record_id: Uuid::new_v4(),
            started_at: Utc::now(),
            state,
            selected: None,
            pending_promotion: None,
            outstanding: None,
        };
        info!(game = game_id, human = %settings.human, first = %session.state.first_mover(), "game started");

        let mut out = Output::default();
        out.events.push(Event::Started {
            game: game_id,
            human: settings.human,
            first: session.state.first_mover(),
        });
        session.after_turn_change(&mut out);
        (session, out)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn pending_promotion(&self) -> Option<(Coord, Coord)> {
        self.pending_promotion
    }

    /// The engine turn currently being waited on, if any.
    pub fn outstanding(&self) -> Option<Ticket> {
        self.outstanding
    }

    pub fn handle(&mut self, cmd: Command, now: Instant) -> Output {
        let mut out = Output::default();
        match cmd {
            Command::Click(at) => self.on_click(at, now, &mut out),
            Command::Play(mv) => self.on_play(mv, now, &mut out),
            Command::Promote(kind) => self.on_promote(kind, now, &mut out),
            Command::Reset => self.on_reset(now, &mut out),
            Command::Tick => self.on_tick(now, &mut out),
            Command::EngineReply { ticket, mv } => self.on_reply(ticket, mv, now, &mut out),
        }
        out
    }

    fn humans_turn(&self) -> bool {
        !self.state.status().is_terminal() && self.state.side_to_move() == self.settings.human
    }

    fn on_click(&mut self, at: Coord, now: Instant, out: &mut Output) {
        if !self.humans_turn() {
            debug!(square = %at, "click ignored: not the human's turn");
            return;
        }
        self.pending_promotion = None;

        let own_piece = self
            .state
            .position()
            .board
            .piece_at(at)
            .is_some_and(|pc| pc.side == self.settings.human);

        match self.selected {
            Some(from) if from == at => self.clear_selection(out),
            _ if own_piece => {
                self.selected = Some(at);
                out.events.push(Event::Selected {
                    from: at,
                    targets: self.state.legal_destinations(at),
                });
            }
            Some(from) => {
                if self.state.needs_promotion(from, at) {
                    self.pending_promotion = Some((from, at));
                    out.events.push(Event::PromotionNeeded { from, to: at });
                } else {
                    self.try_human_move(Move::new(from, at), now, out);
                }
            }
            None => {}
        }
    }

    fn on_play(&mut self, mv: Move, now: Instant, out: &mut Output) {
        if !self.humans_turn() {
            debug!(%mv, "move ignored: not the human's turn");
            return;
        }
        self.pending_promotion = None;
        if mv.promotion.is_none() && self.state.needs_promotion(mv.from, mv.to) {
            self.selected = Some(mv.from);
            self.pending_promotion = Some((mv.from, mv.to));
            out.events.push(Event::PromotionNeeded {
                from: mv.from,
                to: mv.to,
            });
            return;
        }
        self.try_human_move(mv, now, out);
    }

    fn on_promote(&mut self, kind: PieceKind, now: Instant, out: &mut Output) {
        let Some((from, to)) = self.pending_promotion else {
            debug!(?kind, "promotion choice without a pending move");
            return;
        };
        let mv = Move::new(from, to).with_promotion(kind);
        if !kind.is_promotion_target() {
            // Keep waiting for a usable choice
            out.events.push(Event::Rejected {
                mv,
                reason: MoveError::InvalidPromotion { mv },
            });
            return;
        }
        self.pending_promotion = None;
        self.try_human_move(mv, now, out);
    }

    fn try_human_move(&mut self, mv: Move, now: Instant, out: &mut Output) {
        match self.state.apply(mv, now) {
            Ok(applied) => {
                self.selected = None;
                self.record_move(applied, out);
                self.after_turn_change(out);
            }
            Err(MoveError::GameOver) if self.state.status().is_terminal() => {
                debug!(%mv, "human move arrived after the deadline");
                self.end_on_clock(out);
            }
            Err(reason) => {
                debug!(%mv, %reason, "human move rejected");
                out.events.push(Event::Rejected { mv, reason });
                self.clear_selection(out);
            }
        }
    }

    fn on_reply(&mut self, ticket: Ticket, mv: Option<Move>, now: Instant, out: &mut Output) {
        if self.outstanding != Some(ticket) {
            warn!(?ticket, outstanding = ?self.outstanding, "discarding stale engine reply");
            return;
        }
        self.outstanding = None;

        let Some(mv) = mv else {
            warn!(?ticket, "engine produced no move; turn stalls");
            return;
        };
        match self.state.apply(mv, now) {
            Ok(applied) => {
                self.record_move(applied, out);
                self.after_turn_change(out);
            }
            Err(MoveError::GameOver) if self.state.status().is_terminal() => {
                warn!(%mv, "engine move arrived after the deadline");
                self.end_on_clock(out);
            }
            Err(reason) => {
                warn!(%mv, %reason, "engine move rejected; turn stalls");
                out.events.push(Event::Rejected { mv, reason });
            }
        }
    }

    fn on_tick(&mut self, now: Instant, out: &mut Output) {
        if self.state.check_timeout(now).is_some() {
            self.end_on_clock(out);
        } else if !self.state.status().is_terminal() {
            out.events.push(Event::Clock {
                side: self.state.side_to_move(),
                remaining: self.state.remaining(now),
            });
        }
    }

    fn on_reset(&mut self, now: Instant, out: &mut Output) {
        let state = GameState::new(self.settings.first_to_move, self.settings.turn, now);
        let abandoned = self.outstanding.is_some();
        let (session, started) = Self::start(self.settings, state, self.game_id + 1);
        *self = session;
        out.events.extend(started.events);
        out.request = started.request;
        out.cancelled = abandoned;
    }

    fn record_move(&mut self, applied: Applied, out: &mut Output) {
        out.events.push(Event::Moved {
            side: applied.side,
            mv: applied.mv,
            san: applied.san,
            check: applied.check,
        });
    }

    /// Finish the game or hand the turn to the engine, as the new status and
    /// side on move dictate.
    fn after_turn_change(&mut self, out: &mut Output) {
        if self.state.status().is_terminal() {
            self.finish(out);
            return;
        }
        if self.state.side_to_move() == self.settings.human || self.outstanding.is_some() {
            return;
        }
        let ticket = Ticket {
            game: self.game_id,
            ply: self.state.ply(),
        };
        self.outstanding = Some(ticket);
        debug!(?ticket, "requesting engine move");
        out.request = Some(EngineRequest {
            ticket,
            position: self.state.position().clone(),
            budget: self.settings.engine_budget,
        });
    }

    fn end_on_clock(&mut self, out: &mut Output) {
        if self.outstanding.take().is_some() {
            out.cancelled = true;
        }
        self.selected = None;
        self.pending_promotion = None;
        self.finish(out);
    }

    fn finish(&mut self, out: &mut Output) {
        let status = self.state.status();
        let record = GameRecord::from_game(
            self.record_id,
            self.started_at,
            Utc::now(),
            self.settings.human,
            &self.state,
        );
        match record {
            Some(record) => out.events.push(Event::Finished {
                status,
                record: Box::new(record),
            }),
            None => warn!(?status, "finish requested for a running game"),
        }
    }

    fn clear_selection(&mut self, out: &mut Output) {
        if self.selected.take().is_some() {
            out.events.push(Event::SelectionCleared);
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
