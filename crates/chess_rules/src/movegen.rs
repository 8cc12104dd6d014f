use crate::attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::error::MoveError;
use crate::position::Position;
use crate::types::*;

const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

impl Position {
    /// Squares the piece on `from` could reach ignoring whether its own king
    /// would be left in check. Castling destinations are included.
    pub fn pseudo_destinations(&self, from: Coord, pc: Piece, out: &mut Vec<Coord>) {
        match pc.kind {
            PieceKind::Pawn => self.gen_pawn(from, pc.side, out),
            PieceKind::Knight => self.gen_step(from, pc.side, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => self.gen_slider(from, pc.side, &DIAGONALS, out),
            PieceKind::Rook => self.gen_slider(from, pc.side, &ORTHOGONALS, out),
            PieceKind::Queen => self.gen_slider(from, pc.side, &QUEEN_DIRS, out),
            PieceKind::King => {
                self.gen_step(from, pc.side, &KING_DELTAS, out);
                if from == Self::king_home(pc.side) {
                    for wing in Wing::BOTH {
                        if let Some(to) = self.castle_destination(pc.side, wing) {
                            out.push(to);
                        }
                    }
                }
            }
        }
    }

    fn gen_pawn(&self, from: Coord, side: Side, out: &mut Vec<Coord>) {
        let dir = side.pawn_dir();

        if let Some(one) = from.offset(dir, 0)
            && self.board.is_empty_at(one)
        {
            out.push(one);
            if from.row() == side.pawn_start_row()
                && let Some(two) = from.offset(2 * dir, 0)
                && self.board.is_empty_at(two)
            {
                out.push(two);
            }
        }

        for dc in [-1, 1] {
            let Some(to) = from.offset(dir, dc) else {
                continue;
            };
            match self.board.piece_at(to) {
                Some(target) if target.side != side => out.push(to),
                Some(_) => {}
                None => {
                    if self.is_en_passant_capture(from, to, side) {
                        out.push(to);
                    }
                }
            }
        }
    }

    /// The diagonal step onto the empty `to` captures a pawn that just
    /// double-stepped past it. The victim sits beside the mover, on
    /// `from`'s row and `to`'s column.
    pub(crate) fn is_en_passant_capture(&self, from: Coord, to: Coord, side: Side) -> bool {
        if self.en_passant != Some(to) || !self.board.is_empty_at(to) {
            return false;
        }
        let beside = from.offset(0, to.col() as i8 - from.col() as i8);
        matches!(
            beside.and_then(|at| self.board.piece_at(at)),
            Some(Piece { side: victim, kind: PieceKind::Pawn }) if victim != side
        )
    }

    fn gen_step(&self, from: Coord, side: Side, deltas: &[(i8, i8)], out: &mut Vec<Coord>) {
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                match self.board.piece_at(to) {
                    Some(pc) if pc.side == side => {}
                    _ => out.push(to),
                }
            }
        }
    }

    fn gen_slider(&self, from: Coord, side: Side, dirs: &[(i8, i8)], out: &mut Vec<Coord>) {
        for &(dr, dc) in dirs {
            let mut cur = from.offset(dr, dc);
            while let Some(to) = cur {
                match self.board.piece_at(to) {
                    None => out.push(to),
                    Some(pc) if pc.side != side => {
                        out.push(to);
                        break;
                    }
                    _ => break,
                }
                cur = to.offset(dr, dc);
            }
        }
    }

    /// King destination for castling `side` toward `wing`, if every castling
    /// condition holds: unmoved king and rook, an empty path between them,
    /// and no attacked square among the king's start, transit and landing.
    pub fn castle_destination(&self, side: Side, wing: Wing) -> Option<Coord> {
        if !self.castling_available(side, wing) {
            return None;
        }
        let king = Self::king_home(side);
        let rook = Self::rook_home(side, wing);
        let step = wing.step();

        let mut between = king.offset(0, step)?;
        while between != rook {
            if !self.board.is_empty_at(between) {
                return None;
            }
            between = between.offset(0, step)?;
        }

        let enemy = side.other();
        for k in 0..=2 {
            if self.board.is_square_attacked(king.offset(0, k * step)?, enemy) {
                return None;
            }
        }
        king.offset(0, 2 * step)
    }

    /// Playing `from -> to` would leave the mover's own king attacked.
    /// Simulated on a throwaway copy.
    pub(crate) fn exposes_own_king(&self, from: Coord, to: Coord, pc: Piece) -> bool {
        let next = self.apply_unchecked(Move::new(from, to), pc);
        next.board.is_in_check(pc.side)
    }

    /// Fully legal destinations for the piece on `from`. Empty when the square
    /// is empty or holds a piece of the side not on move. Promotion choices
    /// collapse into a single destination.
    pub fn legal_destinations(&self, from: Coord) -> Vec<Coord> {
        let Some(pc) = self.board.piece_at(from) else {
            return Vec::new();
        };
        if pc.side != self.side_to_move {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(28);
        self.pseudo_destinations(from, pc, &mut out);
        out.retain(|&to| !self.exposes_own_king(from, to, pc));
        out
    }

    /// All legal moves for the side to move, one per promotion kind where a
    /// pawn reaches the far row.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        for (from, pc) in self.board.pieces(self.side_to_move) {
            for to in self.legal_destinations(from) {
                if is_promotion_square(pc, to) {
                    for kind in PieceKind::PROMOTIONS {
                        out.push(Move::new(from, to).with_promotion(kind));
                    }
                } else {
                    out.push(Move::new(from, to));
                }
            }
        }
        out
    }

    pub fn has_legal_move(&self) -> bool {
        let mut buf = Vec::with_capacity(28);
        self.board.pieces(self.side_to_move).any(|(from, pc)| {
            buf.clear();
            self.pseudo_destinations(from, pc, &mut buf);
            buf.iter().any(|&to| !self.exposes_own_king(from, to, pc))
        })
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && !self.has_legal_move()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && !self.has_legal_move()
    }

    /// Check `mv` against the position, returning the moving piece.
    ///
    /// Rejections are ordered so that a move is only asked for a promotion
    /// piece once it is otherwise legal.
    pub fn validate(&self, mv: Move) -> Result<Piece, MoveError> {
        let pc = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPiece(mv.from))?;
        if pc.side != self.side_to_move {
            return Err(MoveError::NotYourPiece(mv.from));
        }

        let mut dests = Vec::with_capacity(28);
        self.pseudo_destinations(mv.from, pc, &mut dests);
        if !dests.contains(&mv.to) {
            return Err(MoveError::Unreachable { mv });
        }
        if self.exposes_own_king(mv.from, mv.to, pc) {
            return Err(MoveError::ExposesKing { mv });
        }

        match (is_promotion_square(pc, mv.to), mv.promotion) {
            (true, None) => Err(MoveError::PromotionRequired {
                from: mv.from,
                to: mv.to,
            }),
            (true, Some(kind)) if !kind.is_promotion_target() => {
                Err(MoveError::InvalidPromotion { mv })
            }
            (false, Some(_)) => Err(MoveError::InvalidPromotion { mv }),
            _ => Ok(pc),
        }
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }
}

/// A pawn of `pc`'s side landing on `to` must promote.
pub fn is_promotion_square(pc: Piece, to: Coord) -> bool {
    pc.kind == PieceKind::Pawn && to.row() == pc.side.promotion_row()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
