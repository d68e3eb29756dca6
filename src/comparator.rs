//! The two priority comparators: Dijkstra's plain `g`, and A*/JPS's
//! `f = g + h` with a heuristic tie-break.

use crate::grid::{CellId, Grid};
use crate::heap::Comparator;
use crate::node_table::NodeTable;

/// `less(a, b) ⇔ a.dist < b.dist`.
pub struct DijkstraComparator;

impl Comparator for DijkstraComparator {
    fn less(&self, table: &NodeTable, a: CellId, b: CellId) -> bool {
        table.dist(a) < table.dist(b)
    }
}

/// `f(n) = n.dist + h(n)`, tie-broken toward the smaller heuristic (the node
/// closer to the goal). The tie-break is a deliberate, exact-equality
/// comparison — it is what makes expansion counts match the reference
/// implementation, not just the final distance.
pub struct AstarComparator<'g> {
    grid: &'g Grid,
    goal: CellId,
}

impl<'g> AstarComparator<'g> {
    pub fn new(grid: &'g Grid, goal: CellId) -> Self {
        AstarComparator { grid, goal }
    }

    fn h(&self, cell: CellId) -> f64 {
        self.grid.octile_heuristic(cell, self.goal)
    }
}

impl<'g> Comparator for AstarComparator<'g> {
    fn less(&self, table: &NodeTable, a: CellId, b: CellId) -> bool {
        let (ha, hb) = (self.h(a), self.h(b));
        let (fa, fb) = (table.dist(a) + ha, table.dist(b) + hb);
        if fa == fb {
            ha < hb
        } else {
            fa < fb
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn astar_tie_break_prefers_smaller_heuristic() {
        let grid = Grid::empty(10, 10);
        let goal = grid.id_of(9, 9);
        let a = grid.id_of(5, 5);
        let b = grid.id_of(6, 6);
        let cmp = AstarComparator::new(&grid, goal);

        let mut table = NodeTable::new(grid.len());
        table.reset(a);
        // Equal f: make g(a) + h(a) == g(b) + h(b) by hand.
        let ha = grid.octile_heuristic(a, goal);
        let hb = grid.octile_heuristic(b, goal);
        table.set_dist(a, 10.0);
        table.set_dist(b, 10.0 + ha - hb);

        // b is closer to goal (smaller h), so b should win the tie-break.
        assert!(cmp.less(&table, b, a));
        assert!(!cmp.less(&table, a, b));
    }

    #[test]
    fn dijkstra_orders_purely_by_distance() {
        let cmp = DijkstraComparator;
        let mut table = NodeTable::new(4);
        table.reset(0);
        table.set_dist(1, 3.0);
        table.set_dist(2, 7.0);
        assert!(cmp.less(&table, 1, 2));
        assert!(!cmp.less(&table, 2, 1));
    }
}
