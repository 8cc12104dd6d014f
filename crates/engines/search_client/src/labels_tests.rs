use super::*;
use chess_rules::Side;

#[test]
fn test_default_labels_encode_as_is() {
    let labels = SideLabels::default();
    let pos = Position::startpos();
    assert_eq!(labels.encode(&pos), pos.to_fen());
    assert_eq!(labels.decode("e2e4").unwrap().to_string(), "e2e4");
}

#[test]
fn test_side_a_as_b_mirrors_the_board() {
    let labels = SideLabels::new(SideLabel::B);
    let pos = Position::startpos_with_first_mover(Side::B);
    assert_eq!(
        labels.encode(&pos),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );

    // The service moves its own king pawn; for us that is side B's e7 pawn
    let mv = labels.decode("e2e4").unwrap();
    assert_eq!(mv.to_string(), "e7e5");
    assert!(pos.is_legal(mv));
}

#[test]
fn test_mirrored_move_counter_follows_their_b_side() {
    let labels = SideLabels::new(SideLabel::B);
    let mut pos = Position::startpos_with_first_mover(Side::B);
    let counter = |pos: &Position| {
        let fen = labels.encode(pos);
        fen.rsplit(' ').next().unwrap().to_string()
    };
    assert_eq!(counter(&pos), "1");

    // Their w side (our B) opens, then their b side (our A) answers
    let mut seen = Vec::new();
    for txt in ["e7e5", "e2e4", "g8f6", "g1f3"] {
        pos = pos.play(parse_coordinate_move(txt).unwrap()).unwrap();
        seen.push(counter(&pos));
    }
    assert_eq!(seen, ["1", "2", "2", "3"]);
}

#[test]
fn test_mirrored_promotion_keeps_piece() {
    let labels = SideLabels::new(SideLabel::B);
    assert_eq!(labels.decode("g7g8n").unwrap().to_string(), "g2g1n");
}

#[test]
fn test_decode_rejects_garbage() {
    let labels = SideLabels::default();
    for bad in ["", "e2", "e9e4", "e2e4k", "hello"] {
        assert!(matches!(labels.decode(bad), Err(SourceError::Malformed(_))));
    }
}

#[test]
fn test_label_serde_names() {
    let labels: Vec<SideLabel> = serde_json::from_str(r#"["w","b"]"#).unwrap();
    assert_eq!(labels, vec![SideLabel::W, SideLabel::B]);
}
