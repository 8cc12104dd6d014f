//! Forsyth-Edwards position notation.
//!
//! Side A is written as the uppercase, `w` side and side B as the lowercase,
//! `b` side. Relabelling for a collaborator that wants the opposite mapping
//! happens before encoding (see `search_client`).

use crate::board::Board;
use crate::error::NotationError;
use crate::position::{CastlingRights, Position};
use crate::types::*;

impl Position {
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for row in 0..8u8 {
            let mut run = 0;
            for col in 0..8u8 {
                match Coord::new(row, col).and_then(|at| self.board.piece_at(at)) {
                    Some(pc) => {
                        if run > 0 {
                            out.push(char::from(b'0' + run));
                            run = 0;
                        }
                        out.push(piece_char(pc));
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push(char::from(b'0' + run));
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Side::A => 'w',
            Side::B => 'b',
        });

        out.push(' ');
        let before = out.len();
        for (side, wing, ch) in [
            (Side::A, Wing::Kingside, 'K'),
            (Side::A, Wing::Queenside, 'Q'),
            (Side::B, Wing::Kingside, 'k'),
            (Side::B, Wing::Queenside, 'q'),
        ] {
            if self.castling_available(side, wing) {
                out.push(ch);
            }
        }
        if out.len() == before {
            out.push('-');
        }

        out.push(' ');
        match self.en_passant {
            Some(at) => out.push_str(&at.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    /// Parse a position. The two trailing counters are optional.
    pub fn from_fen(fen: &str) -> Result<Position, NotationError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(NotationError::position("expected at least 4 fields"));
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(NotationError::position("board must have 8 ranks"));
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(NotationError::position(format!("bad empty run {ch}")));
                    }
                    col += d as u8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| {
                        NotationError::position(format!("bad piece letter {ch}"))
                    })?;
                    let side = if ch.is_ascii_uppercase() {
                        Side::A
                    } else {
                        Side::B
                    };
                    let at = Coord::new(row as u8, col).ok_or_else(|| {
                        NotationError::position(format!("rank {} overflows", 8 - row))
                    })?;
                    board.set(at, Some(Piece::new(side, kind)));
                    col += 1;
                }
                if col > 8 {
                    return Err(NotationError::position(format!(
                        "rank {} overflows",
                        8 - row
                    )));
                }
            }
            if col != 8 {
                return Err(NotationError::position(format!(
                    "rank {} is short",
                    8 - row
                )));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Side::A,
            "b" => Side::B,
            other => {
                return Err(NotationError::position(format!(
                    "bad side to move {other}"
                )));
            }
        };

        let mut castling = CastlingRights::spent();
        if parts[2] != "-" {
            let mut fresh = [false; 2];
            for ch in parts[2].chars() {
                let (side, wing) = match ch {
                    'K' => (Side::A, Wing::Kingside),
                    'Q' => (Side::A, Wing::Queenside),
                    'k' => (Side::B, Wing::Kingside),
                    'q' => (Side::B, Wing::Queenside),
                    _ => {
                        return Err(NotationError::position(format!(
                            "bad castling flag {ch}"
                        )));
                    }
                };
                fresh[side.idx()] = true;
                castling.restore(side, wing);
            }
            for side in Side::BOTH {
                if fresh[side.idx()] {
                    castling.restore_king(side);
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            sq => Some(Coord::parse(sq).ok_or_else(|| NotationError::Square(sq.to_string()))?),
        };

        let counter = |idx: usize, default: u32| -> Result<u32, NotationError> {
            match parts.get(idx) {
                Some(txt) => txt
                    .parse()
                    .map_err(|_| NotationError::position(format!("bad counter {txt}"))),
                None => Ok(default),
            }
        };

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock: counter(4, 0)?,
            fullmove_number: counter(5, 1)?,
        })
    }
}

fn piece_char(pc: Piece) -> char {
    match pc.side {
        Side::A => pc.kind.letter(),
        Side::B => pc.kind.letter().to_ascii_lowercase(),
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
