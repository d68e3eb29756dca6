//! Dense path interpolation.
//!
//! The search driver's `reconstruct_path` yields a sparse jump-point path
//! for JPS (only the cells the engine actually visited). Consumers that
//! need every intermediate cell — an agent stepping tile by tile, for
//! instance — call `interpolate` to expand each hop into a straight-line
//! run of unit/diagonal steps. This is kept as a separate, explicitly
//! callable step rather than folded into the search: JPS returns jump
//! points, and interpolation is never implicit.

use crate::grid::CellId;
use crate::grid::Grid;

/// Expands a (possibly sparse) path into every intermediate cell, walking
/// each consecutive pair in a straight line. Dijkstra/A* paths are already
/// dense, so this is a no-op for them beyond re-validating adjacency.
pub fn interpolate(grid: &Grid, path: &[CellId]) -> Vec<CellId> {
    if path.len() < 2 {
        return path.to_vec();
    }
    let mut out = Vec::with_capacity(path.len());
    out.push(path[0]);
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let from_c = grid.coord_of(from);
        let to_c = grid.coord_of(to);
        let dx = (to_c.x - from_c.x).signum();
        let dy = (to_c.y - from_c.y).signum();
        let steps = (to_c.x - from_c.x).unsigned_abs().max((to_c.y - from_c.y).unsigned_abs());
        let mut cur = from_c;
        for _ in 0..steps {
            cur = crate::grid::Coord::new(cur.x + dx, cur.y + dy);
            out.push(grid.id_of(cur.x, cur.y));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_is_identity_for_dense_path() {
        let grid = Grid::empty(5, 5);
        let path = vec![grid.id_of(0, 0), grid.id_of(1, 0), grid.id_of(2, 0)];
        assert_eq!(interpolate(&grid, &path), path);
    }

    #[test]
    fn interpolate_expands_a_sparse_diagonal_jump() {
        let grid = Grid::empty(10, 10);
        let path = vec![grid.id_of(0, 0), grid.id_of(4, 4)];
        let dense = interpolate(&grid, &path);
        assert_eq!(dense.len(), 5);
        assert_eq!(dense[2], grid.id_of(2, 2));
    }

    #[test]
    fn interpolate_expands_a_sparse_straight_jump() {
        let grid = Grid::empty(10, 2);
        let path = vec![grid.id_of(0, 0), grid.id_of(6, 0)];
        let dense = interpolate(&grid, &path);
        assert_eq!(dense.len(), 7);
    }

    #[test]
    fn single_cell_path_is_unchanged() {
        let grid = Grid::empty(3, 3);
        let path = vec![grid.id_of(1, 1)];
        assert_eq!(interpolate(&grid, &path), path);
    }
}
