pub mod attacks;
pub mod board;
pub mod error;
pub mod execute;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod position;
pub mod types;

pub use board::*;
pub use error::*;
pub use execute::MoveKind;
pub use movegen::is_promotion_square;
pub use notation::parse_coordinate_move;
pub use perft::perft;
pub use position::*;
pub use types::*;

// =============================================================================
// Move picker trait: implemented by local, synchronous move sources
// =============================================================================

/// Something that chooses a move for the side to move in a position.
///
/// Implementations must only ever return moves that pass
/// [`Position::validate`]; `None` means the side has no legal move.
pub trait MovePicker: Send {
    fn pick(&mut self, pos: &Position) -> Option<Move>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}
