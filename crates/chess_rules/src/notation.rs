//! Move notation: four/five character coordinate moves for engine interop and
//! short algebraic strings for the move list.

use crate::error::NotationError;
use crate::execute::MoveKind;
use crate::movegen::is_promotion_square;
use crate::position::Position;
use crate::types::*;

/// Parse coordinate notation (`e2e4`, `e7e8q`). Only the syntax is checked;
/// legality is the position's business.
pub fn parse_coordinate_move(txt: &str) -> Result<Move, NotationError> {
    let txt = txt.trim();
    let bad = || NotationError::Move(txt.to_string());
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(bad());
    }
    let from = Coord::parse(&txt[0..2]).ok_or_else(bad)?;
    let to = Coord::parse(&txt[2..4]).ok_or_else(bad)?;
    let mut mv = Move::new(from, to);
    if let Some(ch) = txt[4..].chars().next() {
        let kind = PieceKind::from_letter(ch)
            .filter(|k| k.is_promotion_target())
            .ok_or_else(bad)?;
        mv = mv.with_promotion(kind);
    }
    Ok(mv)
}

impl Position {
    /// Short algebraic notation for `mv`, which must be legal here.
    /// Falls back to coordinate notation otherwise.
    pub fn san(&self, mv: Move) -> String {
        let Ok(pc) = self.validate(mv) else {
            return mv.to_string();
        };
        let kind = self.classify(mv, pc);

        let mut san = match kind {
            MoveKind::Castle(Wing::Kingside) => "O-O".to_string(),
            MoveKind::Castle(Wing::Queenside) => "O-O-O".to_string(),
            _ => {
                let mut s = String::new();
                let capture = matches!(kind, MoveKind::Capture(_) | MoveKind::EnPassant);
                if pc.kind == PieceKind::Pawn {
                    if capture {
                        s.push(mv.from.file_char());
                    }
                } else {
                    s.push(pc.kind.letter());
                    s.push_str(&self.disambiguation(mv, pc));
                }
                if capture {
                    s.push('x');
                }
                s.push_str(&mv.to.to_string());
                if is_promotion_square(pc, mv.to)
                    && let Some(promo) = mv.promotion
                {
                    s.push('=');
                    s.push(promo.letter());
                }
                s
            }
        };

        let next = self.apply_unchecked(mv, pc);
        if next.in_check(next.side_to_move) {
            san.push(if next.has_legal_move() { '+' } else { '#' });
        }
        san
    }

    /// File, rank or both, when another piece of the same kind could also
    /// legally reach the destination.
    fn disambiguation(&self, mv: Move, pc: Piece) -> String {
        let rivals: Vec<Coord> = self
            .board
            .pieces(pc.side)
            .filter(|&(at, other)| at != mv.from && other.kind == pc.kind)
            .filter(|&(at, _)| self.legal_destinations(at).contains(&mv.to))
            .map(|(at, _)| at)
            .collect();
        if rivals.is_empty() {
            return String::new();
        }
        let same_file = rivals.iter().any(|r| r.col() == mv.from.col());
        let same_rank = rivals.iter().any(|r| r.row() == mv.from.row());
        match (same_file, same_rank) {
            (false, _) => mv.from.file_char().to_string(),
            (true, false) => mv.from.rank_char().to_string(),
            (true, true) => mv.from.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
