//! Square attack detection.
//!
//! Attacks are traced outward from the target square, so this never consults
//! the check-exposure filter and cannot recurse into legal move generation.

use crate::board::Board;
use crate::position::Position;
use crate::types::*;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Whether any piece of `by` could capture on `target` (pseudo-legally).
    pub fn is_square_attacked(&self, target: Coord, by: Side) -> bool {
        let holds = |at: Option<Coord>, kinds: &[PieceKind]| -> bool {
            match at.and_then(|s| self.piece_at(s)) {
                Some(pc) => pc.side == by && kinds.contains(&pc.kind),
                None => false,
            }
        };

        // A pawn of `by` attacks one step forward diagonally, so look one step back.
        let back = -by.pawn_dir();
        for dc in [-1, 1] {
            if holds(target.offset(back, dc), &[PieceKind::Pawn]) {
                return true;
            }
        }

        for (dr, dc) in KNIGHT_DELTAS {
            if holds(target.offset(dr, dc), &[PieceKind::Knight]) {
                return true;
            }
        }

        for (dr, dc) in KING_DELTAS {
            if holds(target.offset(dr, dc), &[PieceKind::King]) {
                return true;
            }
        }

        let rays = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for &(dr, dc) in dirs {
                let mut cur = target.offset(dr, dc);
                while let Some(at) = cur {
                    if let Some(pc) = self.piece_at(at) {
                        if pc.side == by && sliders.contains(&pc.kind) {
                            return true;
                        }
                        break;
                    }
                    cur = at.offset(dr, dc);
                }
            }
        }

        false
    }

    /// `side`'s king stands on an attacked square. A board without that king
    /// reports `false`; the missing king is handled by the game layer.
    pub fn is_in_check(&self, side: Side) -> bool {
        match self.king_coord(side) {
            Some(k) => self.is_square_attacked(k, side.other()),
            None => false,
        }
    }
}

impl Position {
    pub fn in_check(&self, side: Side) -> bool {
        self.board.is_in_check(side)
    }

    pub fn is_square_attacked(&self, target: Coord, by: Side) -> bool {
        self.board.is_square_attacked(target, by)
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
