use crate::board::Board;
use crate::types::*;

/// Per-side castling memory. Flags only ever go from `false` to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SideCastling {
    pub king_moved: bool,
    pub queenside_rook_moved: bool,
    pub kingside_rook_moved: bool,
}

impl SideCastling {
    pub fn rook_moved(&self, wing: Wing) -> bool {
        match wing {
            Wing::Queenside => self.queenside_rook_moved,
            Wing::Kingside => self.kingside_rook_moved,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    sides: [SideCastling; 2],
}

impl CastlingRights {
    /// Nothing has moved yet.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Every king and rook is marked as moved.
    pub fn spent() -> Self {
        let all = SideCastling {
            king_moved: true,
            queenside_rook_moved: true,
            kingside_rook_moved: true,
        };
        Self { sides: [all; 2] }
    }

    pub fn side(&self, side: Side) -> &SideCastling {
        &self.sides[side.idx()]
    }

    /// Neither the king nor the rook of `wing` has moved.
    pub fn allows(&self, side: Side, wing: Wing) -> bool {
        let s = self.side(side);
        !s.king_moved && !s.rook_moved(wing)
    }

    pub fn mark_king_moved(&mut self, side: Side) {
        self.sides[side.idx()].king_moved = true;
    }

    pub fn mark_rook_moved(&mut self, side: Side, wing: Wing) {
        let s = &mut self.sides[side.idx()];
        match wing {
            Wing::Queenside => s.queenside_rook_moved = true,
            Wing::Kingside => s.kingside_rook_moved = true,
        }
    }

    // Only used while building a position from notation.
    pub(crate) fn restore(&mut self, side: Side, wing: Wing) {
        let s = &mut self.sides[side.idx()];
        match wing {
            Wing::Queenside => s.queenside_rook_moved = false,
            Wing::Kingside => s.kingside_rook_moved = false,
        }
    }

    pub(crate) fn restore_king(&mut self, side: Side) {
        self.sides[side.idx()].king_moved = false;
    }
}

/// Everything move legality depends on: board, mover, castling memory and
/// the en passant square. The two counters only feed position notation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Side,
    pub castling: CastlingRights,
    /// Square skipped by a pawn double-step on the immediately preceding move.
    pub en_passant: Option<Coord>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Position {
    pub fn startpos() -> Self {
        Self::startpos_with_first_mover(Side::A)
    }

    pub fn startpos_with_first_mover(first: Side) -> Self {
        Self::from_board(Board::standard(), first)
    }

    /// Wrap an arbitrary board with fresh castling memory and no en passant
    /// square. Castling is still gated on the king and rook standing on their
    /// home squares.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Position {
            board,
            side_to_move,
            castling: CastlingRights::fresh(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Rook home square for `side` on `wing`.
    pub fn rook_home(side: Side, wing: Wing) -> Coord {
        Coord::from_index(side.home_row() as usize * 8 + wing.rook_col() as usize)
    }

    pub fn king_home(side: Side) -> Coord {
        Coord::from_index(side.home_row() as usize * 8 + Wing::KING_COL as usize)
    }

    /// Castling memory allows `wing` and the king and rook still stand on
    /// their home squares. Attack and path conditions are not considered.
    pub fn castling_available(&self, side: Side, wing: Wing) -> bool {
        let king = Piece::new(side, PieceKind::King);
        let rook = Piece::new(side, PieceKind::Rook);
        self.castling.allows(side, wing)
            && self.board.piece_at(Self::king_home(side)) == Some(king)
            && self.board.piece_at(Self::rook_home(side, wing)) == Some(rook)
    }
}

impl Position {
    /// The same game seen from the other side of the board: ranks reflected,
    /// piece ownership swapped and the other side on move. Applying it twice
    /// gives back the original position.
    pub fn mirrored(&self) -> Position {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for (at, pc) in self.board.pieces(side) {
                board.set(at.mirrored(), Some(Piece::new(side.other(), pc.kind)));
            }
        }

        let mut castling = CastlingRights::fresh();
        for side in Side::BOTH {
            let theirs = self.castling.side(side);
            if theirs.king_moved {
                castling.mark_king_moved(side.other());
            }
            for wing in Wing::BOTH {
                if theirs.rook_moved(wing) {
                    castling.mark_rook_moved(side.other(), wing);
                }
            }
        }

        Position {
            board,
            side_to_move: self.side_to_move.other(),
            castling,
            en_passant: self.en_passant.map(Coord::mirrored),
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
