//! Successor generators: the grid successor (Dijkstra/A*, all eight
//! neighbours) and the JPS successor (natural + forced neighbours, with
//! recursive jump-point discovery).

use crate::direction::Direction;
use crate::grid::{CellId, Coord, Grid};
use crate::heap::{Comparator, IndexedHeap};
use crate::node_table::{Colour, NodeTable};
use crate::stats::Counters;

/// Relaxes `v` via `u` with edge cost `cost`, inserting or decrease-keying
/// it on the heap as needed. Shared by both successor generators — skipping
/// `BLACK` cells is the caller's job, since the two generators discover
/// candidates differently.
fn relax<C: Comparator>(
    table: &mut NodeTable,
    heap: &mut IndexedHeap<C>,
    counters: &mut Counters,
    u: CellId,
    v: CellId,
    cost: f64,
) -> bool {
    let g2 = table.dist(u) + cost;
    if g2 < table.dist(v) {
        table.set_dist(v, g2);
        table.set_parent(v, u);
        match table.colour(v) {
            Colour::White => {
                table.mark_grey(v);
                heap.insert(table, v);
                counters.inserts += 1;
            }
            _ => {
                heap.decrease_key(table, v);
                counters.updates += 1;
            }
        }
        true
    } else {
        false
    }
}

/// A generator that, given a just-extracted cell, discovers and relaxes its
/// successors. Parameterised over the comparator so it shares the same
/// `IndexedHeap` type as the driver without resorting to virtual dispatch.
pub trait SuccessorGenerator<C: Comparator> {
    #[allow(clippy::too_many_arguments)]
    fn expand(
        &self,
        grid: &Grid,
        table: &mut NodeTable,
        heap: &mut IndexedHeap<C>,
        counters: &mut Counters,
        u: CellId,
        start: CellId,
        goal: CellId,
    );
}

/// All eight octile neighbours, for Dijkstra and A*.
pub struct GridSuccessors;

impl<C: Comparator> SuccessorGenerator<C> for GridSuccessors {
    fn expand(
        &self,
        grid: &Grid,
        table: &mut NodeTable,
        heap: &mut IndexedHeap<C>,
        counters: &mut Counters,
        u: CellId,
        _start: CellId,
        _goal: CellId,
    ) {
        for (d, v) in grid.neighbours(u) {
            if table.colour(v) == Colour::Black {
                continue;
            }
            relax(table, heap, counters, u, v, d.step_cost());
        }
    }
}

/// Jump Point Search, after Harabor & Grastien.
pub struct JpsSuccessors;

impl<C: Comparator> SuccessorGenerator<C> for JpsSuccessors {
    fn expand(
        &self,
        grid: &Grid,
        table: &mut NodeTable,
        heap: &mut IndexedHeap<C>,
        counters: &mut Counters,
        u: CellId,
        start: CellId,
        goal: CellId,
    ) {
        let directions = jps_directions(grid, table, u, start);
        for d in directions {
            if let Some(v) = jump(grid, u, d, goal) {
                if table.colour(v) == Colour::Black {
                    continue;
                }
                let cost = grid.euclidean(u, v);
                if relax(table, heap, counters, u, v, cost) {
                    table.set_from_direction(v, d);
                }
            }
        }
    }
}

/// Directions to attempt a jump from, for a just-extracted JPS cell: all
/// eight at the start node, otherwise natural + forced neighbours of the
/// direction it arrived from.
fn jps_directions(grid: &Grid, table: &NodeTable, u: CellId, start: CellId) -> Vec<Direction> {
    if u == start {
        return Direction::ALL.to_vec();
    }
    let from = table
        .from_direction(u)
        .expect("a non-start JPS node must carry its arrival direction");
    let c = grid.coord_of(u);
    let mut dirs = from.natural_neighbours().to_vec();
    dirs.extend(from.forced_neighbours(|d| !grid.orthogonal_step_admissible(c.x, c.y, d)));
    dirs
}

fn has_forced_neighbour(grid: &Grid, c: Coord, d: Direction) -> bool {
    !d.forced_neighbours(|side| !grid.orthogonal_step_admissible(c.x, c.y, side))
        .is_empty()
}

/// `jump(from, d, goal)`: walks from `from` in direction `d` until it finds
/// a jump point (the goal, a cell with a forced neighbour, or — for a
/// diagonal direction — a cell from which an orthogonal jump finds one), or
/// runs off the admissible grid.
fn jump(grid: &Grid, from: CellId, d: Direction, goal: CellId) -> Option<CellId> {
    let mut current = from;
    loop {
        let c = grid.coord_of(current);
        let n = grid.step(c.x, c.y, d)?;
        if n == goal {
            return Some(n);
        }
        let nc = grid.coord_of(n);
        if has_forced_neighbour(grid, nc, d) {
            return Some(n);
        }
        if d.is_diagonal() {
            let (h, v) = d.diagonal_components();
            if jump(grid, n, h, goal).is_some() || jump(grid, n, v, goal).is_some() {
                return Some(n);
            }
        }
        current = n;
    }
}
