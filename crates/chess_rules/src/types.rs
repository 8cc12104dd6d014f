use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `A` starts on row 7 (rank 1) and advances toward row 0; `B` starts on
/// row 0 (rank 8) and advances toward row 7. Neither side is inherently
/// "white": colour labels only exist at the notation boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    /// Row holding this side's king and rooks at the start.
    pub fn home_row(self) -> u8 {
        match self {
            Side::A => 7,
            Side::B => 0,
        }
    }

    /// Row delta of a single pawn step.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Side::A => -1,
            Side::B => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Side::A => 6,
            Side::B => 1,
        }
    }

    /// Far row where this side's pawns promote.
    pub fn promotion_row(self) -> u8 {
        self.other().home_row()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "side A"),
            Side::B => write!(f, "side B"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may become on the far row.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Material value in pawns. The king has no exchange value.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }
}

/// True when both components fall inside the 8x8 grid.
pub fn is_on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// A square on the board. Row 0 is rank 8, row 7 is rank 1; col 0 is file a.
///
/// Construction goes through [`Coord::new`] or [`Coord::offset`], so a
/// `Coord` value is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if row < 8 && col < 8 {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub(crate) const fn from_index(idx: usize) -> Coord {
        Coord {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    pub fn offset(self, drow: i8, dcol: i8) -> Option<Coord> {
        let row = self.row as i8 + drow;
        let col = self.col as i8 + dcol;
        if is_on_board(row, col) {
            Coord::new(row as u8, col as u8)
        } else {
            None
        }
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Parse algebraic notation such as `e4`: file = 'a' + col, rank = 8 - row.
    pub fn parse(txt: &str) -> Option<Coord> {
        let b = txt.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Coord::new(b'8' - r, f - b'a')
    }

    /// Reflect across the horizontal midline: rank 1 becomes rank 8.
    pub const fn mirrored(self) -> Coord {
        Coord {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// Iterate all 64 squares, row by row starting from rank 8.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// Castling direction, shared by both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wing {
    Queenside,
    Kingside,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::Kingside, Wing::Queenside];

    /// Column of the king before castling, for both wings and sides.
    pub const KING_COL: u8 = 4;

    pub fn rook_col(self) -> u8 {
        match self {
            Wing::Queenside => 0,
            Wing::Kingside => 7,
        }
    }

    pub fn king_to_col(self) -> u8 {
        match self {
            Wing::Queenside => 2,
            Wing::Kingside => 6,
        }
    }

    pub fn rook_to_col(self) -> u8 {
        match self {
            Wing::Queenside => 3,
            Wing::Kingside => 5,
        }
    }

    /// Column step from the king toward the rook.
    pub fn step(self) -> i8 {
        match self {
            Wing::Queenside => -1,
            Wing::Kingside => 1,
        }
    }
}

/// A candidate move. Whether it is legal depends on the full position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    pub fn mirrored(self) -> Self {
        Self {
            from: self.from.mirrored(),
            to: self.to.mirrored(),
            ..self
        }
    }
}

/// Coordinate notation: origin, destination and an optional lowercase
/// promotion letter (`e2e4`, `b7b8n`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
