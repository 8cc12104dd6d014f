//! Play the engine from a terminal.
//!
//! Type a square to select a piece, a square again to move it, or a whole
//! move such as `e2e4`. `help` lists the rest.

mod input;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chess_rules::Side;
use clap::Parser;
use game_session::{runtime, Event, Session, SessionConfig, SessionSettings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::{parse_line, Input};
use crate::render::View;

#[derive(Parser, Debug)]
#[command(name = "chess", version, about = "Play chess against a search engine in the terminal")]
struct Args {
    /// TOML session config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Remote search endpoint (overrides the config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Play without the remote search service
    #[arg(long, conflicts_with = "endpoint")]
    offline: bool,

    /// Side you play: a or b
    #[arg(long, value_parser = parse_side)]
    human: Option<Side>,

    /// Side that opens the game: a or b
    #[arg(long, value_parser = parse_side)]
    first: Option<Side>,

    /// Seconds allowed per move
    #[arg(long)]
    turn_seconds: Option<u64>,

    /// Print the finished game record as JSON
    #[arg(long)]
    record: bool,
}

fn parse_side(txt: &str) -> Result<Side, String> {
    match txt.to_ascii_lowercase().as_str() {
        "a" => Ok(Side::A),
        "b" => Ok(Side::B),
        other => Err(format!("unknown side {other:?}, expected a or b")),
    }
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = Some(endpoint.clone());
        }
        if self.offline {
            config.search.endpoint = None;
        }
        if let Some(side) = self.human {
            config.human_side = side;
        }
        if let Some(side) = self.first {
            config.first_to_move = side;
        }
        if let Some(secs) = self.turn_seconds {
            config.turn_seconds = secs;
        }
        config.validate()?;
        Ok(config)
    }
}

const HELP: &str = "\
commands:
  e2        select a piece (again to deselect)
  e4        move the selected piece there
  e2e4      play a move directly (e7e8q to promote)
  q r b n   answer a promotion question
  board     show the board
  new       start a new game
  quit      leave";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.session_config()?;
    let adapter = config.build_adapter().context("setting up the move source")?;
    info!(
        endpoint = config.search.endpoint.as_deref().unwrap_or("none"),
        human = %config.human_side,
        "starting session"
    );

    let settings = SessionSettings::from(&config);
    let (session, initial) = Session::new(settings, runtime::now());
    let (commands, command_rx) = mpsc::channel(32);
    let (event_tx, mut events) = mpsc::unbounded_channel();
    let driver = tokio::spawn(runtime::drive(
        session,
        initial,
        Arc::new(adapter),
        command_rx,
        event_tx,
    ));

    println!("{HELP}");
    let mut view = View::new(settings.human);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading input")? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(Some(Input::Quit)) => break,
                    Ok(Some(Input::Help)) => println!("{HELP}"),
                    Ok(Some(Input::Board)) => println!("{}", view.board()),
                    Ok(Some(Input::Send(cmd))) => {
                        commands.send(cmd).await.context("session stopped")?;
                    }
                    Ok(None) => {}
                    Err(err) => println!("{err}"),
                }
            }
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };
                if let Some(text) = view.describe(&event) {
                    println!("{text}");
                }
                if let Event::Finished { record, .. } = &event {
                    if args.record {
                        println!("{}", serde_json::to_string_pretty(record)?);
                    }
                    println!("type `new` to play again or `quit` to leave");
                }
            }
        }
    }

    drop(commands);
    let session = driver.await.context("session task failed")?;
    info!(moves = session.state().ply(), status = ?session.state().status(), "bye");
    Ok(())
}
