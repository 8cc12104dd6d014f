use std::time::Duration;

use super::*;
use crate::labels::SideLabel;
use chess_rules::Position;

#[test]
fn test_extract_plain_move_field() {
    assert_eq!(extract_move(r#"{"move":"e2e4"}"#).unwrap().to_string(), "e2e4");
}

#[test]
fn test_extract_engine_style_line() {
    let body = r#"{"success":true,"bestmove":"bestmove e7e8q ponder a7a6"}"#;
    assert_eq!(extract_move(body).unwrap().to_string(), "e7e8q");
}

#[test]
fn test_extract_bare_text() {
    assert_eq!(extract_move("bestmove g1f3\n").unwrap().to_string(), "g1f3");
    assert_eq!(extract_move(r#""d2d4""#).unwrap().to_string(), "d2d4");
}

#[test]
fn test_extract_rejects_unusable_bodies() {
    for body in [
        r#"{"success":false}"#,
        r#"{"move":42}"#,
        r#"{"bestmove":"(none)"}"#,
        "[1,2,3]",
        "",
        "service unavailable",
    ] {
        assert!(
            matches!(extract_move(body), Err(SourceError::Malformed(_))),
            "accepted {body:?}"
        );
    }
}

#[test]
fn test_request_body_shape() {
    let remote = RemoteSearch::new("http://localhost:9/search", 12, SideLabels::default()).unwrap();
    let request = SearchRequest {
        position: Position::startpos(),
        budget: Duration::from_millis(1500),
    };
    let json = serde_json::to_value(remote.body(&request)).unwrap();
    assert_eq!(json["fen"], Position::startpos().to_fen());
    assert_eq!(json["depth"], 12);
    assert_eq!(json["maxThinkingTime"], 1500);
}

#[test]
fn test_huge_budget_saturates_thinking_time() {
    let remote = RemoteSearch::new("http://localhost:9/search", 12, SideLabels::default()).unwrap();
    let request = SearchRequest {
        position: Position::startpos(),
        budget: Duration::MAX,
    };
    assert_eq!(remote.body(&request).max_thinking_time, u64::MAX);
}

#[test]
fn test_request_body_uses_labels() {
    let labels = SideLabels::new(SideLabel::B);
    let remote = RemoteSearch::new("http://localhost:9/search", 4, labels).unwrap();
    let request = SearchRequest {
        position: Position::startpos(),
        budget: Duration::from_secs(1),
    };
    assert!(remote.body(&request).fen.contains(" b KQkq "));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_an_error() {
    // Port 9 (discard) is not listening in test environments
    let remote = RemoteSearch::new("http://127.0.0.1:9/search", 4, SideLabels::default()).unwrap();
    let request = SearchRequest {
        position: Position::startpos(),
        budget: Duration::from_millis(500),
    };
    assert!(remote.request_move(&request).await.is_err());
}
