use super::*;

#[test]
fn test_algebraic_mapping() {
    let a8 = Coord::new(0, 0).unwrap();
    let h1 = Coord::new(7, 7).unwrap();
    assert_eq!(a8.to_string(), "a8");
    assert_eq!(h1.to_string(), "h1");
    assert_eq!(Coord::parse("e2"), Coord::new(6, 4));
    assert_eq!(Coord::parse("e2").unwrap().to_string(), "e2");
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(Coord::parse("i1").is_none());
    assert!(Coord::parse("a9").is_none());
    assert!(Coord::parse("a").is_none());
    assert!(Coord::parse("e2e4").is_none());
}

#[test]
fn test_on_board_bounds() {
    assert!(is_on_board(0, 0));
    assert!(is_on_board(7, 7));
    assert!(!is_on_board(-1, 3));
    assert!(!is_on_board(3, 8));
    assert!(Coord::new(8, 0).is_none());

    let corner = Coord::new(0, 0).unwrap();
    assert!(corner.offset(-1, 0).is_none());
    assert_eq!(corner.offset(1, 2), Coord::new(1, 2));
}

#[test]
fn test_side_geometry() {
    assert_eq!(Side::A.home_row(), 7);
    assert_eq!(Side::B.home_row(), 0);
    assert_eq!(Side::A.promotion_row(), 0);
    assert_eq!(Side::B.promotion_row(), 7);
    assert_eq!(Side::A.other(), Side::B);
}

#[test]
fn test_move_display() {
    let mv = Move::new(Coord::parse("b7").unwrap(), Coord::parse("b8").unwrap())
        .with_promotion(PieceKind::Knight);
    assert_eq!(mv.to_string(), "b7b8n");
}

#[test]
fn test_mirrored_coord_and_move() {
    let e2 = Coord::parse("e2").unwrap();
    assert_eq!(e2.mirrored(), Coord::parse("e7").unwrap());
    assert_eq!(e2.mirrored().mirrored(), e2);

    let mv = Move::new(Coord::parse("a7").unwrap(), Coord::parse("a8").unwrap())
        .with_promotion(PieceKind::Rook);
    assert_eq!(mv.mirrored().to_string(), "a2a1r");
}
