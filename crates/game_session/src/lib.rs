//! Game Session
//!
//! Everything between a front end and the rules engine for one human
//! playing against an engine:
//!
//! - [`GameState`]: position, status, move list and the turn clock, with
//!   check, checkmate, stalemate and timeout transitions
//! - [`Session`]: square clicks, promotion choice, engine turns guarded by
//!   [`Ticket`]s, resets, clock ticks
//! - [`runtime::drive`]: the async loop that owns a session
//! - [`SessionConfig`]: TOML settings
//! - [`GameRecord`]: what a finished game looks like to a results store

pub mod clock;
pub mod config;
pub mod error;
pub mod record;
pub mod runtime;
pub mod session;
pub mod state;

pub use clock::Clock;
pub use config::{FallbackConfig, SearchConfig, SessionConfig};
pub use error::ConfigError;
pub use record::{GameRecord, Outcome};
pub use session::{Command, EngineRequest, Event, Output, Session, SessionSettings, Ticket};
pub use state::{Applied, GameState, Status};
