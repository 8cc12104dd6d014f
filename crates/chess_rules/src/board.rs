use std::fmt;

use crate::types::*;

/// Contents of a single square.
pub type Cell = Option<Piece>;

/// The 8x8 grid, stored row-major from rank 8 down to rank 1.
///
/// Boards are plain values: every mutation helper returns or operates on an
/// owned copy, so historical snapshots never alias each other.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard initial layout with side A on rows 6-7 and side B on rows 0-1.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for side in Side::BOTH {
            let home = side.home_row() as usize;
            let pawns = side.pawn_start_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.cells[home * 8 + col] = Some(Piece::new(side, kind));
                board.cells[pawns * 8 + col] = Some(Piece::new(side, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.piece_at(at).is_none()
    }

    /// A copy with `placed` on `to` and `from` cleared. Castling and en
    /// passant side effects are layered on top by move execution.
    pub fn clone_with_move(&self, from: Coord, to: Coord, placed: Piece) -> Board {
        let mut next = self.clone();
        next.set(from, None);
        next.set(to, Some(placed));
        next
    }

    /// Every occupied square belonging to `side`.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| match cell {
            Some(pc) if pc.side == side => Some((Coord::from_index(idx), *pc)),
            _ => None,
        })
    }

    pub fn king_coord(&self, side: Side) -> Option<Coord> {
        self.pieces(side)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(at, _)| at)
    }

    pub fn count(&self, side: Side, kind: PieceKind) -> usize {
        self.pieces(side).filter(|(_, pc)| pc.kind == kind).count()
    }

    /// Build a board from `(square, piece)` pairs. Handy for constructed positions.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Coord, Piece)>) -> Board {
        let mut board = Board::empty();
        for (at, pc) in pieces {
            board.set(at, Some(pc));
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Side A renders in uppercase, side B in lowercase, rank 8 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = match Coord::new(row, col).and_then(|at| self.piece_at(at)) {
                    Some(pc) if pc.side == Side::A => pc.kind.letter(),
                    Some(pc) => pc.kind.letter().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
