//! The generic best-first search driver, and the closed `Algorithm`
//! dispatch enum that selects a (comparator, successor-generator) pair for
//! it without virtual dispatch.

use crate::comparator::{AstarComparator, DijkstraComparator};
use crate::grid::{CellId, Grid};
use crate::heap::{Comparator, IndexedHeap};
use crate::node_table::{Colour, NodeTable};
use crate::stats::Counters;
use crate::successors::{GridSuccessors, JpsSuccessors, SuccessorGenerator};

/// One of the three supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Jps,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::Jps => "JPS",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a_star" | "a*" => Ok(Algorithm::AStar),
            "jps" => Ok(Algorithm::Jps),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Outcome of one search: the reconstructed (possibly sparse, for JPS) path
/// from start to goal inclusive, the total distance, and the
/// insert/update/extract counters.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub path: Option<Vec<CellId>>,
    pub distance: Option<f64>,
    pub counters: Counters,
}

/// Runs the generic best-first loop with the given comparator and
/// successor generator.
fn run<C, S>(grid: &Grid, table: &mut NodeTable, cmp: &C, succ: &S, start: CellId, goal: CellId) -> SearchOutcome
where
    C: Comparator,
    S: SuccessorGenerator<C>,
{
    table.reset(start);
    let mut counters = Counters::default();

    let mut heap = IndexedHeap::new(cmp);
    table.mark_grey(start);
    heap.insert(table, start);
    counters.inserts += 1;

    while !heap.empty() {
        let u = heap.extract_min(table).expect("heap reported non-empty but extract_min failed");
        counters.extracts += 1;
        table.mark_black(u);

        if u == goal {
            break;
        }

        succ.expand(grid, table, &mut heap, &mut counters, u, start, goal);
    }

    let path = reconstruct_path(table, start, goal);
    let distance = path.as_ref().map(|_| table.dist(goal));

    #[cfg(debug_assertions)]
    debug_check_invariants(table, grid);

    SearchOutcome {
        path,
        distance,
        counters,
    }
}

/// Follows `parent` from `goal` back to `start`. Returns `None` if the goal
/// was never reached (`goal.parent == None` and `goal != start`).
fn reconstruct_path(table: &NodeTable, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
    if start == goal {
        return Some(vec![start]);
    }
    if table.parent(goal).is_none() {
        return None;
    }
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        let parent = table
            .parent(current)
            .expect("path reconstruction hit a cell with no parent before reaching start");
        path.push(parent);
        current = parent;
    }
    path.reverse();
    Some(path)
}

/// Runs a query on `grid` between `start` and `goal` using the given
/// algorithm. `table` is reused across calls (reset internally).
pub fn search(grid: &Grid, table: &mut NodeTable, algorithm: Algorithm, start: CellId, goal: CellId) -> SearchOutcome {
    match algorithm {
        Algorithm::Dijkstra => {
            let cmp = DijkstraComparator;
            run(grid, table, &cmp, &GridSuccessors, start, goal)
        }
        Algorithm::AStar => {
            let cmp = AstarComparator::new(grid, goal);
            run(grid, table, &cmp, &GridSuccessors, start, goal)
        }
        Algorithm::Jps => {
            let cmp = AstarComparator::new(grid, goal);
            run(grid, table, &cmp, &JpsSuccessors, start, goal)
        }
    }
}

/// Asserts invariants that must hold at the end of any query; a violation
/// indicates a bug in the engine, not a data problem, so it aborts the
/// process rather than returning a `Result`.
#[cfg(debug_assertions)]
fn debug_check_invariants(table: &NodeTable, grid: &Grid) {
    for cell in 0..grid.len() {
        if table.colour(cell) == Colour::Black {
            debug_assert!(table.dist(cell) >= 0.0, "negative distance on cell {cell}");
        }
    }
}
