//! Async driver for a [`Session`].
//!
//! One task owns the session and is the only place it is mutated. Commands
//! from the front end, a one-second clock tick and engine replies are
//! serialized through a single `select!` loop. Engine searches run on a
//! spawned task and come back as [`Command::EngineReply`], so the session
//! never waits on the network.

use std::sync::Arc;
use std::time::Duration;

use search_client::SearchAdapter;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::session::{Command, EngineRequest, Event, Output, Session};

pub const TICK: Duration = Duration::from_secs(1);

/// Current time on the runtime's clock, as the session expects it.
pub fn now() -> std::time::Instant {
    Instant::now().into_std()
}

struct Dispatcher {
    adapter: Arc<SearchAdapter>,
    events: mpsc::UnboundedSender<Event>,
    replies: mpsc::UnboundedSender<Command>,
    in_flight: Option<JoinHandle<()>>,
}

impl Dispatcher {
    fn dispatch(&mut self, out: Output) {
        if out.cancelled {
            self.abort_search();
        }
        for event in out.events {
            if self.events.send(event).is_err() {
                debug!("event receiver dropped");
            }
        }
        if let Some(request) = out.request {
            self.spawn_search(request);
        }
    }

    fn spawn_search(&mut self, request: EngineRequest) {
        // A new request means the old one can no longer be applied
        self.abort_search();
        let adapter = Arc::clone(&self.adapter);
        let replies = self.replies.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let mv = adapter.request_move(&request.position, request.budget).await;
            let reply = Command::EngineReply {
                ticket: request.ticket,
                mv,
            };
            if replies.send(reply).is_err() {
                debug!(ticket = ?request.ticket, "driver gone before engine reply");
            }
        }));
    }

    fn abort_search(&mut self) {
        if let Some(task) = self.in_flight.take() {
            debug!("aborting engine search");
            task.abort();
        }
    }
}

/// Run `session` until the command channel closes, then hand it back.
///
/// `initial` is the output returned when the session was created; its
/// events and engine request are dispatched first.
pub async fn drive(
    mut session: Session,
    initial: Output,
    adapter: Arc<SearchAdapter>,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<Event>,
) -> Session {
    let (replies_tx, mut replies) = mpsc::unbounded_channel();
    let mut dispatcher = Dispatcher {
        adapter,
        events,
        replies: replies_tx,
        in_flight: None,
    };
    dispatcher.dispatch(initial);

    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let cmd = tokio::select! {
            cmd = commands.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
            Some(reply) = replies.recv() => reply,
            _ = ticker.tick() => Command::Tick,
        };
        let out = session.handle(cmd, now());
        dispatcher.dispatch(out);
    }

    dispatcher.abort_search();
    info!(game = session.game_id(), status = ?session.state().status(), "session driver stopped");
    session
}
