//! The eight compass directions used by octile grid movement, plus the
//! compile-time tables the successor generators key off of.

use std::f64::consts::SQRT_2;

/// One of the eight octile movement directions.
///
/// Ordering matches the classic N, NE, E, SE, S, SW, W, NW compass sweep; the
/// grid successor generator and JPS's "all eight directions from the start"
/// case both iterate `Direction::ALL` in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit (dx, dy) offset for this direction; y grows downward to match
    /// the row-major `Grid` layout.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::NE => (1, -1),
            Direction::E => (1, 0),
            Direction::SE => (1, 1),
            Direction::S => (0, 1),
            Direction::SW => (-1, 1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NE | Direction::SE | Direction::SW | Direction::NW
        )
    }

    /// Edge cost of a single admissible step in this direction.
    pub fn step_cost(self) -> f64 {
        if self.is_diagonal() {
            SQRT_2
        } else {
            1.0
        }
    }

    /// The two orthogonal components of a diagonal direction, horizontal
    /// first. Calling this on an orthogonal direction is a logic error in
    /// the caller.
    pub const fn diagonal_components(self) -> (Direction, Direction) {
        match self {
            Direction::NE => (Direction::E, Direction::N),
            Direction::SE => (Direction::E, Direction::S),
            Direction::SW => (Direction::W, Direction::S),
            Direction::NW => (Direction::W, Direction::N),
            _ => unreachable!("diagonal_components called on an orthogonal direction"),
        }
    }

    /// Natural neighbours of a cell reached while travelling in `self`.
    ///
    /// For an orthogonal arrival, only continuing straight is natural. For a
    /// diagonal arrival, the two orthogonal components are natural *and*
    /// emitted before the diagonal continuation, per the jump-ordering rule
    /// in the JPS successor generator.
    pub const fn natural_neighbours(self) -> &'static [Direction] {
        match self {
            Direction::N => &[Direction::N],
            Direction::S => &[Direction::S],
            Direction::E => &[Direction::E],
            Direction::W => &[Direction::W],
            Direction::NE => &[Direction::E, Direction::N, Direction::NE],
            Direction::SE => &[Direction::E, Direction::S, Direction::SE],
            Direction::SW => &[Direction::W, Direction::S, Direction::SW],
            Direction::NW => &[Direction::W, Direction::N, Direction::NW],
        }
    }

    /// Forced neighbours of a cell reached while travelling in `self`, given
    /// which orthogonal sides around the cell are blocked. `blocked(d)`
    /// answers whether the orthogonal step in direction `d` from the cell is
    /// *not* admissible (off-map or impassable).
    pub fn forced_neighbours(self, mut blocked: impl FnMut(Direction) -> bool) -> Vec<Direction> {
        use Direction::*;
        let mut out = Vec::with_capacity(2);
        match self {
            E => {
                if blocked(N) {
                    out.push(NE);
                }
                if blocked(S) {
                    out.push(SE);
                }
            }
            W => {
                if blocked(N) {
                    out.push(NW);
                }
                if blocked(S) {
                    out.push(SW);
                }
            }
            N => {
                if blocked(E) {
                    out.push(NE);
                }
                if blocked(W) {
                    out.push(NW);
                }
            }
            S => {
                if blocked(E) {
                    out.push(SE);
                }
                if blocked(W) {
                    out.push(SW);
                }
            }
            NE => {
                if blocked(W) {
                    out.push(NW);
                }
                if blocked(S) {
                    out.push(SE);
                }
            }
            SE => {
                if blocked(W) {
                    out.push(SW);
                }
                if blocked(N) {
                    out.push(NE);
                }
            }
            SW => {
                if blocked(E) {
                    out.push(SE);
                }
                if blocked(N) {
                    out.push(NW);
                }
            }
            NW => {
                if blocked(E) {
                    out.push(NE);
                }
                if blocked(S) {
                    out.push(SW);
                }
            }
        }
        out
    }
}
