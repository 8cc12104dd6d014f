use super::*;

fn sq(txt: &str) -> Coord {
    Coord::parse(txt).unwrap()
}

#[test]
fn test_pawn_attacks_follow_side_direction() {
    let pos = Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").unwrap();
    // Side A pawns advance toward rank 8
    assert!(pos.is_square_attacked(sq("d5"), Side::A));
    assert!(pos.is_square_attacked(sq("f5"), Side::A));
    assert!(!pos.is_square_attacked(sq("e5"), Side::A));
    assert!(!pos.is_square_attacked(sq("d3"), Side::A));

    let pos = Position::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.is_square_attacked(sq("d4"), Side::B));
    assert!(!pos.is_square_attacked(sq("d6"), Side::B));
}

#[test]
fn test_knight_and_king_attacks() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    assert!(pos.is_square_attacked(sq("b3"), Side::A));
    assert!(pos.is_square_attacked(sq("c2"), Side::A));
    assert!(!pos.is_square_attacked(sq("c3"), Side::A));
    // King adjacency
    assert!(pos.is_square_attacked(sq("d2"), Side::A));
    assert!(pos.is_square_attacked(sq("d7"), Side::B));
}

#[test]
fn test_sliders_stop_at_blockers() {
    let pos = Position::from_fen("4k3/8/8/8/R2p4/8/8/4K3 w - - 0 1").unwrap();
    assert!(pos.is_square_attacked(sq("c4"), Side::A));
    assert!(pos.is_square_attacked(sq("d4"), Side::A));
    assert!(!pos.is_square_attacked(sq("e4"), Side::A));
    assert!(pos.is_square_attacked(sq("a8"), Side::A));
}

#[test]
fn test_in_check_detection() {
    let pos = Position::from_fen("4k3/8/8/1B6/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(pos.in_check(Side::B));
    assert!(!pos.in_check(Side::A));

    let blocked = Position::from_fen("4k3/3p4/8/1B6/8/8/8/4K3 b - - 0 1").unwrap();
    assert!(!blocked.in_check(Side::B));
}

#[test]
fn test_missing_king_is_not_in_check() {
    let board = Board::from_pieces([(sq("a1"), Piece::new(Side::A, PieceKind::Queen))]);
    assert!(!board.is_in_check(Side::B));
    assert!(board.king_coord(Side::B).is_none());
}
