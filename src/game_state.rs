use std::fmt;

use bitvec::{bitbox, boxed::BitBox, prelude::Lsb0};
use smallvec::SmallVec;

use crate::coord::{Coord, Move};
use crate::error::{GameError, Result};

/// Legal moves of a position. Rarely more than a handful, so they stay
/// on the stack.
pub type MoveList = SmallVec<[Move; 8]>;

/// An immutable board state: the row count and the set of occupied holes,
/// stored as a row-major bit set over the triangle.
///
/// Applying a move produces a new `GameState`; existing values are never
/// mutated, so states can be shared freely across search branches.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    row_count: u8,
    occupied: BitBox<u32>,
}

impl GameState {
    /// Set up a full board of `row_count` rows with a peg in every hole
    /// except `empty_hole`.
    ///
    /// An `empty_hole` that lies outside the board is not rejected; the
    /// resulting board simply starts with no empty hole.
    pub fn new_board(row_count: u8, empty_hole: Coord) -> Self {
        assert!(row_count >= 1, "a board needs at least one row");

        let nr_holes = triangular(row_count);
        let mut occupied = bitbox![u32, Lsb0; 1; nr_holes];
        if empty_hole.row() <= row_count {
            occupied.set(hole_index(empty_hole), false);
        }

        GameState {
            row_count,
            occupied,
        }
    }

    pub fn row_count(&self) -> u8 {
        self.row_count
    }

    /// Number of pegs still on the board.
    pub fn pegs_remaining(&self) -> usize {
        self.occupied.count_ones()
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        coord.row() <= self.row_count && self.occupied[hole_index(coord)]
    }

    /// The holes that currently hold a peg, row by row.
    pub fn occupied_holes(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all(self.row_count).filter(|&coord| self.occupied[hole_index(coord)])
    }

    /// Every jump that is legal on this board: `from` and `jumped` occupied,
    /// `to` empty.
    ///
    /// The order is deterministic (row-major over occupied holes, fixed
    /// direction order per hole), which keeps search results reproducible.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for coord in self.occupied_holes() {
            for m in coord.jumps(self.row_count) {
                if self.occupied[hole_index(m.jumped)] && !self.occupied[hole_index(m.to)] {
                    moves.push(m);
                }
            }
        }
        moves
    }

    /// Apply a jump, producing the successor state.
    ///
    /// Moves obtained from [`legal_moves`](Self::legal_moves) always
    /// succeed. The checks here catch externally constructed moves that do
    /// not fit this board: a target row off the board, a target hole that
    /// is already occupied, or a missing `from`/`jumped` peg. Hole indices
    /// are already guaranteed by [`Coord`] construction.
    pub fn apply_move(&self, mv: Move) -> Result<GameState> {
        // to.row >= 1 holds for every Coord, only the upper bound can fail
        if mv.to.row() > self.row_count {
            return Err(GameError::OutOfBoundsMove {
                mv,
                row_count: self.row_count,
            });
        }
        if self.is_occupied(mv.to) {
            return Err(GameError::InconsistentMove { mv });
        }
        if !self.is_occupied(mv.from) || !self.is_occupied(mv.jumped) {
            return Err(GameError::InconsistentMove { mv });
        }

        let mut occupied = self.occupied.clone();
        occupied.set(hole_index(mv.from), false);
        occupied.set(hole_index(mv.jumped), false);
        occupied.set(hole_index(mv.to), true);

        Ok(GameState {
            row_count: self.row_count,
            occupied,
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game with {} pegs:", self.pegs_remaining())?;
        for row in 1..=self.row_count {
            for _ in 0..(self.row_count - row) {
                write!(f, " ")?;
            }
            for hole in 1..=row {
                let coord = Coord::new(row, hole).expect("holes 1..=row are valid");
                let cell = if self.occupied[hole_index(coord)] {
                    " *"
                } else {
                    " O"
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Number of holes on a board with the given number of rows.
fn triangular(row_count: u8) -> usize {
    let n = row_count as usize;
    n * (n + 1) / 2
}

/// Index of a hole in the row-major bit layout.
fn hole_index(coord: Coord) -> usize {
    triangular(coord.row() - 1) + (coord.hole() as usize - 1)
}
