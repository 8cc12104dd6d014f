use tracing::warn;

use crate::error::MoveError;
use crate::movegen::is_promotion_square;
use crate::position::Position;
use crate::types::*;

/// How a move touches the board beyond lifting and placing one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(PieceKind),
    DoubleStep,
    EnPassant,
    Castle(Wing),
}

impl Position {
    /// Classify `mv` for the piece `pc` standing on `mv.from`.
    pub fn classify(&self, mv: Move, pc: Piece) -> MoveKind {
        let dcol = mv.to.col() as i8 - mv.from.col() as i8;
        let drow = mv.to.row() as i8 - mv.from.row() as i8;
        match pc.kind {
            PieceKind::King if dcol.abs() == 2 => {
                if dcol > 0 {
                    MoveKind::Castle(Wing::Kingside)
                } else {
                    MoveKind::Castle(Wing::Queenside)
                }
            }
            PieceKind::Pawn if dcol != 0 && self.is_en_passant_capture(mv.from, mv.to, pc.side) => {
                MoveKind::EnPassant
            }
            PieceKind::Pawn if drow.abs() == 2 => MoveKind::DoubleStep,
            _ => match self.board.piece_at(mv.to) {
                Some(victim) => MoveKind::Capture(victim.kind),
                None => MoveKind::Quiet,
            },
        }
    }

    /// Validate `mv` and return the position after it. `self` is untouched.
    pub fn play(&self, mv: Move) -> Result<Position, MoveError> {
        let pc = self.validate(mv)?;
        Ok(self.apply_unchecked(mv, pc))
    }

    /// Produce the next position without any legality check. A pawn reaching
    /// the far row without a promotion kind becomes a queen, which only
    /// matters for internal simulations: [`Position::play`] refuses such moves.
    pub(crate) fn apply_unchecked(&self, mv: Move, pc: Piece) -> Position {
        let side = pc.side;
        let kind = self.classify(mv, pc);

        let placed = if is_promotion_square(pc, mv.to) {
            Piece::new(side, mv.promotion.unwrap_or(PieceKind::Queen))
        } else {
            pc
        };
        let captured = self.board.piece_at(mv.to);
        let mut board = self.board.clone_with_move(mv.from, mv.to, placed);

        match kind {
            MoveKind::Castle(wing) => {
                let rook_from = Self::rook_home(side, wing);
                let rook_to = Self::king_home(side).offset(0, wing.step());
                if let (Some(rook), Some(rook_to)) = (board.piece_at(rook_from), rook_to) {
                    if let Some(occupant) = board.piece_at(rook_to) {
                        warn!(?occupant, square = %rook_to, "vacating rook transit square");
                    }
                    board = board.clone_with_move(rook_from, rook_to, rook);
                }
            }
            MoveKind::EnPassant => {
                if let Some(victim) = mv.from.offset(0, mv.to.col() as i8 - mv.from.col() as i8) {
                    board.set(victim, None);
                }
            }
            _ => {}
        }

        let mut castling = self.castling;
        match pc.kind {
            PieceKind::King => castling.mark_king_moved(side),
            PieceKind::Rook => {
                for wing in Wing::BOTH {
                    if mv.from == Self::rook_home(side, wing) {
                        castling.mark_rook_moved(side, wing);
                    }
                }
            }
            _ => {}
        }
        if let Some(victim) = captured
            && victim.kind == PieceKind::Rook
        {
            for wing in Wing::BOTH {
                if mv.to == Self::rook_home(victim.side, wing) {
                    castling.mark_rook_moved(victim.side, wing);
                }
            }
        }

        let en_passant = match kind {
            MoveKind::DoubleStep => mv.from.offset(side.pawn_dir(), 0),
            _ => None,
        };

        let resets_clock = pc.kind == PieceKind::Pawn || captured.is_some();

        Position {
            board,
            side_to_move: side.other(),
            castling,
            en_passant,
            halfmove_clock: if resets_clock {
                0
            } else {
                self.halfmove_clock + 1
            },
            fullmove_number: if side == Side::B {
                self.fullmove_number + 1
            } else {
                self.fullmove_number
            },
        }
    }
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod execute_tests;
