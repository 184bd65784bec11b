use thiserror::Error;

use crate::coord::Move;

/// Errors raised by the board model.
///
/// The move errors are invariant self-checks for moves constructed outside
/// of [`GameState::legal_moves`](crate::game_state::GameState::legal_moves);
/// moves obtained from it never trigger them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Hole index outside `1..=row` at coordinate construction time.
    #[error("hole {hole} does not exist on row {row}")]
    InvalidCoordinate { row: u8, hole: u8 },

    /// The move does not fit the current occupancy: the target hole is
    /// already occupied, or a peg the move relies on is missing.
    #[error("move ({mv}) is not consistent with the game state")]
    InconsistentMove { mv: Move },

    /// The move's target row lies outside the board.
    #[error("move ({mv}) leaves the board: target row is outside 1..={row_count}")]
    OutOfBoundsMove { mv: Move, row_count: u8 },
}

pub type Result<T> = std::result::Result<T, GameError>;
