use super::*;
use chess_rules::{parse_coordinate_move, Board, Piece, PieceKind};

const TURN: Duration = Duration::from_secs(30);

fn mv(txt: &str) -> Move {
    parse_coordinate_move(txt).unwrap()
}

fn play_all(game: &mut GameState, moves: &[&str], now: Instant) {
    for m in moves {
        game.apply(mv(m), now).unwrap();
    }
}

#[test]
fn test_apply_records_move() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    let applied = game.apply(mv("g1f3"), t0).unwrap();
    assert_eq!(applied.side, Side::A);
    assert_eq!(applied.san, "Nf3");
    assert!(!applied.check);
    assert_eq!(game.history(), &[mv("g1f3")]);
    assert_eq!(game.notation(), &["Nf3".to_string()]);
    assert_eq!(game.last_move(), Some(mv("g1f3")));
    assert_eq!(game.side_to_move(), Side::B);
    assert_eq!(game.status(), Status::Active);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    let before = game.position().clone();
    assert_eq!(
        game.apply(mv("e7e5"), t0 + Duration::from_secs(5)),
        Err(MoveError::NotYourPiece(Coord::parse("e7").unwrap()))
    );
    assert_eq!(game.position(), &before);
    assert!(game.history().is_empty());
    assert_eq!(game.clock().deadline(), t0 + TURN);
}

#[test]
fn test_fools_mate_is_checkmate() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    play_all(&mut game, &["f2f3", "e7e5", "g2g4"], t0);
    let last = game.apply(mv("d8h4"), t0).unwrap();
    assert_eq!(last.san, "Qh4#");
    assert!(last.check);
    assert_eq!(game.status(), Status::Checkmate { winner: Side::B });
    assert_eq!(game.status().winner(), Some(Side::B));
}

#[test]
fn test_terminal_state_is_idempotent() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"], t0);
    let before = game.position().clone();
    assert_eq!(game.apply(mv("a2a3"), t0), Err(MoveError::GameOver));
    assert_eq!(game.position(), &before);
    assert_eq!(game.ply(), 4);
    assert_eq!(game.check_timeout(t0 + TURN * 10), None);
    assert_eq!(game.status(), Status::Checkmate { winner: Side::B });
    assert!(game.legal_destinations(Coord::parse("a2").unwrap()).is_empty());
}

#[test]
fn test_stalemate_transition() {
    let t0 = Instant::now();
    let pos = Position::from_fen("k7/8/8/2Q5/8/8/8/1K6 w - - 0 1").unwrap();
    let mut game = GameState::from_position(pos, TURN, t0);
    let applied = game.apply(mv("c5b6"), t0).unwrap();
    assert!(!applied.check);
    assert_eq!(game.status(), Status::Stalemate);
    assert_eq!(game.status().winner(), None);
}

#[test]
fn test_timeout_fires_once() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    assert_eq!(game.check_timeout(t0 + TURN - Duration::from_millis(1)), None);
    assert_eq!(
        game.check_timeout(t0 + TURN),
        Some(Status::TimedOut { loser: Side::A })
    );
    for extra in 1..5 {
        assert_eq!(game.check_timeout(t0 + TURN * extra), None);
    }
    assert_eq!(game.status(), Status::TimedOut { loser: Side::A });
    assert_eq!(game.status().winner(), Some(Side::B));
}

#[test]
fn test_move_resets_deadline() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    let moved_at = t0 + Duration::from_secs(25);
    game.apply(mv("e2e4"), moved_at).unwrap();
    assert_eq!(game.clock().deadline(), moved_at + TURN);
    assert_eq!(game.check_timeout(t0 + TURN + Duration::from_secs(1)), None);
    assert_eq!(
        game.check_timeout(moved_at + TURN),
        Some(Status::TimedOut { loser: Side::B })
    );
}

#[test]
fn test_move_after_deadline_is_refused() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, Duration::from_secs(10), t0);
    let late = t0 + Duration::from_millis(10_500);
    assert_eq!(game.apply(mv("e2e4"), late), Err(MoveError::GameOver));
    assert_eq!(game.status(), Status::TimedOut { loser: Side::A });
    assert_eq!(game.ply(), 0);
    assert_eq!(game.clock().deadline(), t0 + Duration::from_secs(10));
    // Already reported through the refused move
    assert_eq!(game.check_timeout(late), None);
}

#[test]
fn test_move_just_before_deadline_is_accepted() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::A, TURN, t0);
    let just_in = t0 + TURN - Duration::from_millis(1);
    game.apply(mv("e2e4"), just_in).unwrap();
    assert_eq!(game.status(), Status::Active);
    assert_eq!(game.clock().deadline(), just_in + TURN);
}

#[test]
fn test_side_b_can_open() {
    let t0 = Instant::now();
    let mut game = GameState::new(Side::B, TURN, t0);
    assert_eq!(game.first_mover(), Side::B);
    assert_eq!(game.side_to_move(), Side::B);
    game.apply(mv("e7e5"), t0).unwrap();
    assert_eq!(game.side_to_move(), Side::A);
}

#[test]
fn test_missing_king_ends_game() {
    let board = Board::from_pieces([
        (Coord::parse("e1").unwrap(), Piece::new(Side::A, PieceKind::King)),
        (Coord::parse("d8").unwrap(), Piece::new(Side::B, PieceKind::Queen)),
    ]);
    let game = GameState::from_position(Position::from_board(board, Side::B), TURN, Instant::now());
    assert_eq!(game.status(), Status::KingLost { winner: Side::A });
}

#[test]
fn test_promotion_query() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let game = GameState::from_position(pos, TURN, Instant::now());
    let a7 = Coord::parse("a7").unwrap();
    assert!(game.needs_promotion(a7, Coord::parse("a8").unwrap()));
    assert!(!game.needs_promotion(a7, Coord::parse("b8").unwrap()));
    assert!(!game.needs_promotion(Coord::parse("e1").unwrap(), Coord::parse("e2").unwrap()));
}

#[test]
fn test_status_serializes_tagged() {
    let json = serde_json::to_string(&Status::TimedOut { loser: Side::B }).unwrap();
    assert_eq!(json, r#"{"status":"timed_out","loser":"b"}"#);
}
