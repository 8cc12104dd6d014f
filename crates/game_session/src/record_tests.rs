use std::time::{Duration, Instant};

use super::*;
use chess_rules::parse_coordinate_move;

#[test]
fn test_outcome_for_each_status() {
    let mate = Status::Checkmate { winner: Side::A };
    assert_eq!(Outcome::for_side(mate, Side::A), Some(Outcome::Win));
    assert_eq!(Outcome::for_side(mate, Side::B), Some(Outcome::Loss));

    let flag = Status::TimedOut { loser: Side::A };
    assert_eq!(Outcome::for_side(flag, Side::A), Some(Outcome::Loss));
    assert_eq!(Outcome::for_side(flag, Side::B), Some(Outcome::Win));

    assert_eq!(Outcome::for_side(Status::Stalemate, Side::B), Some(Outcome::Draw));
    assert_eq!(Outcome::for_side(Status::Active, Side::A), None);
}

#[test]
fn test_record_of_finished_game() {
    let mut game = GameState::new(Side::A, Duration::from_secs(60), Instant::now());
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.apply(parse_coordinate_move(m).unwrap(), Instant::now()).unwrap();
    }
    let now = Utc::now();
    let record = GameRecord::from_game(Uuid::new_v4(), now, now, Side::A, &game).unwrap();
    assert_eq!(record.outcome, Outcome::Loss);
    assert_eq!(record.moves, vec!["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(record.notation.last().map(String::as_str), Some("Qh4#"));

    let json = record.to_json().unwrap();
    assert!(json.contains(r#""outcome":"loss""#));
    let back: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_no_record_while_active() {
    let game = GameState::new(Side::A, Duration::from_secs(60), Instant::now());
    let now = Utc::now();
    assert!(GameRecord::from_game(Uuid::new_v4(), now, now, Side::A, &game).is_none());
}
