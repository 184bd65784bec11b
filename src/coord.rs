use std::fmt;

use crate::error::{GameError, Result};

/// A hole position on a triangular board. Row `r` holds holes `1..=r`,
/// both 1-indexed.
///
/// Invariant: `1 <= hole <= row`. Whether the row fits on a concrete board
/// is checked at move application time, not here.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Coord {
    row: u8,
    hole: u8,
}

impl Coord {
    pub fn new(row: u8, hole: u8) -> Result<Self> {
        if hole < 1 || hole > row {
            return Err(GameError::InvalidCoordinate { row, hole });
        }
        Ok(Coord { row, hole })
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn hole(self) -> u8 {
        self.hole
    }

    /// All holes of a board with the given number of rows, row by row.
    pub fn all(row_count: u8) -> impl Iterator<Item = Self> {
        (1..=row_count).flat_map(|row| (1..=row).map(move |hole| Coord { row, hole }))
    }

    /// Enumerate the up to six geometric jumps starting at this hole.
    ///
    /// Each direction is guarded so that `jumped` and `to` always land on a
    /// board of `row_count` rows. Occupancy is not consulted here; see
    /// [`GameState::legal_moves`](crate::game_state::GameState::legal_moves).
    pub fn jumps(self, row_count: u8) -> impl Iterator<Item = Move> {
        let Coord { row, hole } = self;
        let jump = move |jumped: (u8, u8), to: (u8, u8)| Move {
            from: self,
            jumped: Coord::new(jumped.0, jumped.1).expect("guarded jump stays on the board"),
            to: Coord::new(to.0, to.1).expect("guarded jump stays on the board"),
        };

        [
            // up-left
            (row >= 3 && hole >= 3).then(|| jump((row - 1, hole - 1), (row - 2, hole - 2))),
            // up-right
            (row >= 3 && row - hole >= 2).then(|| jump((row - 1, hole), (row - 2, hole))),
            // left
            (hole >= 3).then(|| jump((row, hole - 1), (row, hole - 2))),
            // right
            (row - hole >= 2).then(|| jump((row, hole + 1), (row, hole + 2))),
            // down-left
            (row_count.saturating_sub(row) >= 2).then(|| jump((row + 1, hole), (row + 2, hole))),
            // down-right
            (row_count.saturating_sub(row) >= 2)
                .then(|| jump((row + 1, hole + 1), (row + 2, hole + 2))),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.hole)
    }
}

/// A jump: the peg at `from` hops over the peg at `jumped` and lands in the
/// empty hole `to`, removing the jumped peg.
///
/// The triple is pure geometry; whether it is legal on a concrete board is
/// decided by the game state.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Move {
    pub from: Coord,
    pub jumped: Coord,
    pub to: Coord,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {} to {}", self.from, self.jumped, self.to)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn c(row: u8, hole: u8) -> Coord {
        Coord::new(row, hole).unwrap()
    }

    fn mv(from: (u8, u8), jumped: (u8, u8), to: (u8, u8)) -> Move {
        Move {
            from: c(from.0, from.1),
            jumped: c(jumped.0, jumped.1),
            to: c(to.0, to.1),
        }
    }

    #[test]
    fn test_hole_beyond_row_is_rejected() {
        assert_eq!(
            Coord::new(2, 3),
            Err(GameError::InvalidCoordinate { row: 2, hole: 3 })
        );
    }

    #[test]
    fn test_hole_zero_is_rejected() {
        assert_eq!(
            Coord::new(4, 0),
            Err(GameError::InvalidCoordinate { row: 4, hole: 0 })
        );
    }

    #[test]
    fn test_all_enumerates_the_triangle() {
        let holes: Vec<Coord> = Coord::all(3).collect();
        assert_eq!(holes, vec![c(1, 1), c(2, 1), c(2, 2), c(3, 1), c(3, 2), c(3, 3)]);
    }

    #[test]
    fn test_corner_has_only_downward_jumps() {
        let jumps: Vec<Move> = c(1, 1).jumps(5).collect();
        assert_eq!(
            jumps,
            vec![mv((1, 1), (2, 1), (3, 1)), mv((1, 1), (2, 2), (3, 3))]
        );
    }

    #[test]
    fn test_bottom_row_hole_jumps_in_four_directions() {
        let jumps: Vec<Move> = c(5, 3).jumps(5).collect();
        assert_eq!(
            jumps,
            vec![
                mv((5, 3), (4, 2), (3, 1)),
                mv((5, 3), (4, 3), (3, 3)),
                mv((5, 3), (5, 2), (5, 1)),
                mv((5, 3), (5, 4), (5, 5)),
            ]
        );
    }

    #[test]
    fn test_tiny_boards_leave_no_room_to_jump() {
        assert_eq!(c(1, 1).jumps(1).count(), 0);
        assert_eq!(c(1, 1).jumps(2).count(), 0);
        assert_eq!(c(2, 1).jumps(2).count(), 0);
    }

    /// A board size together with one of its holes.
    fn board_coord(max_rows: u8) -> impl Strategy<Value = (u8, Coord)> {
        (1..=max_rows).prop_flat_map(|rows| {
            (1..=rows).prop_flat_map(move |row| {
                (1..=row).prop_map(move |hole| (rows, Coord::new(row, hole).unwrap()))
            })
        })
    }

    proptest! {
        #[test]
        fn jumps_never_leave_the_board((rows, from) in board_coord(10)) {
            let jumps: Vec<Move> = from.jumps(rows).collect();
            prop_assert!(jumps.len() <= 6);

            for m in jumps {
                prop_assert_eq!(m.from, from);
                prop_assert_ne!(m.jumped, m.from);
                prop_assert_ne!(m.to, m.from);
                prop_assert_ne!(m.to, m.jumped);

                for coord in [m.jumped, m.to] {
                    prop_assert!(coord.row() >= 1 && coord.row() <= rows);
                    prop_assert!(coord.hole() >= 1 && coord.hole() <= coord.row());
                }
            }
        }
    }
}
