use async_trait::async_trait;
use chess_rules::{parse_coordinate_move, Move};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;
use crate::labels::SideLabels;
use crate::{MoveSource, SearchRequest};

/// Response fields that may carry the move, in lookup order.
const MOVE_FIELDS: [&str; 3] = ["move", "bestmove", "bestMove"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchBody {
    pub fen: String,
    pub depth: u8,
    pub max_thinking_time: u64,
}

/// HTTP client for a position-in, move-out search service.
///
/// Posts `{"fen", "depth", "maxThinkingTime"}` as JSON and reads the move
/// from the response (see [`extract_move`]). The request itself has no
/// deadline; [`crate::SearchAdapter`] gives it the budget plus a grace margin.
#[derive(Debug, Clone)]
pub struct RemoteSearch {
    client: reqwest::Client,
    endpoint: String,
    depth: u8,
    labels: SideLabels,
}

impl RemoteSearch {
    pub fn new(endpoint: impl Into<String>, depth: u8, labels: SideLabels) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            depth,
            labels,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub(crate) fn body(&self, request: &SearchRequest) -> SearchBody {
        SearchBody {
            fen: self.labels.encode(&request.position),
            depth: self.depth,
            max_thinking_time: u64::try_from(request.budget.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[async_trait]
impl MoveSource for RemoteSearch {
    async fn request_move(&self, request: &SearchRequest) -> Result<Move, SourceError> {
        let body = self.body(request);
        debug!(endpoint = %self.endpoint, fen = %body.fen, "requesting move");

        // No client-side timeout: the caller bounds the whole exchange
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let text = response.text().await?;
        let mv = self.labels.to_board(extract_move(&text)?);
        debug!(%mv, "search answered");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "remote"
    }
}

/// Pull a coordinate move out of a search response.
///
/// Accepts a JSON object with a `move`, `bestmove` or `bestMove` string, or a
/// bare text line. Engine-style lines such as `bestmove e2e4 ponder e7e5` are
/// fine: the first token that reads as a coordinate move wins.
pub fn extract_move(body: &str) -> Result<Move, SourceError> {
    let text = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => MOVE_FIELDS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .ok_or_else(|| SourceError::Malformed(format!("no move field in {body}")))?,
        Ok(Value::String(s)) => s,
        Ok(other) => return Err(SourceError::Malformed(format!("unexpected response {other}"))),
        Err(_) => body.to_string(),
    };

    text.split_whitespace()
        .find_map(|token| parse_coordinate_move(token).ok())
        .ok_or_else(|| SourceError::Malformed(format!("no move in {text:?}")))
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod remote_tests;
