//! Rectangular passability grid with octile step rules.
//!
//! A `Grid` is built once per map and never mutated again; every query
//! shares it through a shared reference.

use crate::direction::Direction;

/// A cell id is simply `y * width + x` — a plain index, not a pointer.
pub type CellId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    /// `true` if the cell is blocked (impassable).
    blocked: Vec<bool>,
}

impl Grid {
    /// Builds a grid from a row-major passability array; `blocked[y*width+x]`
    /// is `true` when that cell is impassable.
    pub fn new(width: usize, height: usize, blocked: Vec<bool>) -> Self {
        assert_eq!(
            blocked.len(),
            width * height,
            "passability array length must equal width*height"
        );
        Grid {
            width,
            height,
            blocked,
        }
    }

    /// An open (all-passable) grid of the given size. Handy for tests and
    /// for `--bench`'s synthetic grid generation.
    pub fn empty(width: usize, height: usize) -> Self {
        Grid::new(width, height, vec![false; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn id_of(&self, x: i32, y: i32) -> CellId {
        debug_assert!(self.in_bounds(x, y));
        y as usize * self.width + x as usize
    }

    pub fn coord_of(&self, id: CellId) -> Coord {
        Coord::new((id % self.width) as i32, (id / self.width) as i32)
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// `get_cell(x, y)`: the cell id if in bounds, else `None`. Does not
    /// check passability.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<CellId> {
        if self.in_bounds(x, y) {
            Some(self.id_of(x, y))
        } else {
            None
        }
    }

    pub fn is_blocked(&self, id: CellId) -> bool {
        self.blocked[id]
    }

    pub fn is_blocked_xy(&self, x: i32, y: i32) -> bool {
        match self.get_cell(x, y) {
            Some(id) => self.is_blocked(id),
            None => true,
        }
    }

    /// `step(x, y, d)`: the cell reached by moving one step from `(x, y)` in
    /// direction `d`, subject to three admissibility tests:
    /// in-bounds, not blocked, and (for diagonals) no corner-cutting.
    pub fn step(&self, x: i32, y: i32, d: Direction) -> Option<CellId> {
        let (dx, dy) = d.offset();
        let (nx, ny) = (x + dx, y + dy);
        let dest = self.get_cell(nx, ny)?;
        if self.is_blocked(dest) {
            return None;
        }
        if d.is_diagonal() {
            let (h, v) = d.diagonal_components();
            let h_ok = self.step_orthogonal(x, y, h);
            let v_ok = self.step_orthogonal(x, y, v);
            if !h_ok && !v_ok {
                return None;
            }
        }
        Some(dest)
    }

    /// Admissibility of an orthogonal step alone (tests 1 and 2 only); used
    /// internally to evaluate a diagonal's corner-cutting precondition and
    /// externally by the JPS forced-neighbour table ("blocked" = step not
    /// admissible).
    fn step_orthogonal(&self, x: i32, y: i32, d: Direction) -> bool {
        debug_assert!(!d.is_diagonal());
        let (dx, dy) = d.offset();
        match self.get_cell(x + dx, y + dy) {
            Some(id) => !self.is_blocked(id),
            None => false,
        }
    }

    /// Whether the orthogonal step from `(x, y)` in direction `d` is
    /// admissible. Used by the JPS forced-neighbour rule, where "blocked"
    /// means this returns `false`.
    pub fn orthogonal_step_admissible(&self, x: i32, y: i32, d: Direction) -> bool {
        self.step_orthogonal(x, y, d)
    }

    pub fn step_from_id(&self, id: CellId, d: Direction) -> Option<CellId> {
        let c = self.coord_of(id);
        self.step(c.x, c.y, d)
    }

    /// All admissible `step` results from `cell` across the eight
    /// directions, paired with the direction taken.
    pub fn neighbours(&self, cell: CellId) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        let c = self.coord_of(cell);
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(c.x, c.y, d).map(|n| (d, n)))
    }

    /// Euclidean distance between two cells, in unscaled real units (1 for
    /// an orthogonal step, √2 for a diagonal one, and the straight-line
    /// distance for any other pair — used by JPS to cost a jump that skips
    /// intermediate cells).
    pub fn euclidean(&self, a: CellId, b: CellId) -> f64 {
        let ca = self.coord_of(a);
        let cb = self.coord_of(b);
        let dx = (ca.x - cb.x) as f64;
        let dy = (ca.y - cb.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Octile distance heuristic between two cells: admits diagonal moves at
    /// cost √2 and is consistent, which is what justifies closing (BLACK)
    /// a cell on extraction without ever reopening it.
    pub fn octile_heuristic(&self, a: CellId, b: CellId) -> f64 {
        let ca = self.coord_of(a);
        let cb = self.coord_of(b);
        let dx = (ca.x - cb.x).unsigned_abs() as f64;
        let dy = (ca.y - cb.y).unsigned_abs() as f64;
        let (dmin, dmax) = if dx < dy { (dx, dy) } else { (dy, dx) };
        std::f64::consts::SQRT_2 * dmin + (dmax - dmin)
    }
}
