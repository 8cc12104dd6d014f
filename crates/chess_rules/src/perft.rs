use crate::position::Position;

/// Count leaf positions reachable in exactly `depth` plies.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = pos.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .filter_map(|mv| pos.play(mv).ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}
