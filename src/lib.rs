//! Exhaustive search over triangular peg solitaire.
//!
//! A board has `R` rows, row `r` holding holes `1..=r`. A move jumps a peg
//! over an adjacent peg into an empty hole two steps further in the same
//! direction, removing the jumped peg. Starting from a full board with one
//! empty hole, [`search::exhaustive_search`] walks every maximal move
//! sequence and reports how many terminal states were reached and which of
//! them left exactly one peg on the board.

pub mod coord;
pub mod error;
pub mod game_state;
pub mod search;

pub use coord::{Coord, Move};
pub use error::{GameError, Result};
pub use game_state::GameState;
pub use search::{exhaustive_search, SearchReport};
