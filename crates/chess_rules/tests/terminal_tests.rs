//! Checkmate and stalemate detection from constructed positions.

use chess_rules::{Position, Side};

fn assert_mated(fen: &str, side: Side) {
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.side_to_move, side);
    assert!(pos.in_check(side), "mated side must be in check");
    assert!(pos.legal_moves().is_empty(), "mated side must have no moves");
    assert!(pos.is_checkmate());
}

fn assert_stalemated(fen: &str) {
    let pos = Position::from_fen(fen).unwrap();
    assert!(pos.legal_moves().is_empty(), "stalemate has no legal moves");
    assert!(!pos.in_check(pos.side_to_move), "stalemate means no check");
    assert!(pos.is_stalemate());
}

// =============================================================================
// Checkmate
// =============================================================================

#[test]
fn test_queen_mate_with_king_support() {
    assert_mated("k7/1Q6/1K6/8/8/8/8/8 b - - 0 1", Side::B);
}

#[test]
fn test_back_rank_mate_with_queen() {
    // Queen on the back rank, own pawns box the king in
    assert_mated("3Q2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", Side::B);
}

#[test]
fn test_fools_mate() {
    assert_mated(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        Side::A,
    );
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 w - - 0 1").unwrap();
    let after = pos
        .play(chess_rules::parse_coordinate_move("b6b7").unwrap())
        .unwrap();
    // Queen on b7 unprotected: the king takes it
    assert!(after.in_check(Side::B));
    assert!(!after.is_checkmate());
    assert_eq!(after.legal_moves().len(), 1);
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    assert_stalemated("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
}

#[test]
fn test_stalemate_queen_alone() {
    assert_stalemated("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1");
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    assert_stalemated("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
}

#[test]
fn test_stalemate_with_blocked_pawns() {
    // Side A's only pawn is blocked and its king has nowhere to go
    assert_stalemated("8/8/8/8/8/p7/P1k5/K7 w - - 0 1");
}
