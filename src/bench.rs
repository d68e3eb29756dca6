//! Synthetic grid + experiment generator for `--bench`, for a quick smoke
//! test without a benchmark-set checkout.

use rand::Rng;

use crate::grid::Grid;
use crate::scenario::Experiment;

const BENCH_SIZE: usize = 64;
const BENCH_WALL_FRACTION: f64 = 0.15;

/// Builds one random grid and `n` random (start, goal) experiments on it.
/// `optimal_cost` is left at the octile heuristic between start and goal,
/// since a synthetic run has no external ground truth to check against.
pub fn generate(n: usize) -> (Grid, Vec<Experiment>) {
    let mut rng = rand::thread_rng();
    let mut blocked = vec![false; BENCH_SIZE * BENCH_SIZE];
    let wall_count = ((BENCH_SIZE * BENCH_SIZE) as f64 * BENCH_WALL_FRACTION) as usize;
    for _ in 0..wall_count {
        let idx = rng.gen_range(0..blocked.len());
        blocked[idx] = true;
    }
    let grid = Grid::new(BENCH_SIZE, BENCH_SIZE, blocked);

    let mut experiments = Vec::with_capacity(n);
    for i in 0..n {
        let (start_x, start_y) = random_passable_cell(&grid, &mut rng);
        let (goal_x, goal_y) = random_passable_cell(&grid, &mut rng);
        let start = grid.id_of(start_x, start_y);
        let goal = grid.id_of(goal_x, goal_y);
        experiments.push(Experiment {
            bucket: i as i32,
            map_path: "[bench]".into(),
            map_width: Some(BENCH_SIZE as u32),
            map_height: Some(BENCH_SIZE as u32),
            start_x,
            start_y,
            goal_x,
            goal_y,
            optimal_cost: grid.octile_heuristic(start, goal),
        });
    }
    (grid, experiments)
}

fn random_passable_cell(grid: &Grid, rng: &mut impl Rng) -> (i32, i32) {
    loop {
        let x = rng.gen_range(0..grid.width()) as i32;
        let y = rng.gen_range(0..grid.height()) as i32;
        if !grid.is_blocked_xy(x, y) {
            return (x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_the_requested_experiment_count() {
        let (_grid, experiments) = generate(5);
        assert_eq!(experiments.len(), 5);
    }

    #[test]
    fn generated_start_and_goal_cells_are_always_passable() {
        let (grid, experiments) = generate(20);
        for e in &experiments {
            assert!(!grid.is_blocked_xy(e.start_x, e.start_y));
            assert!(!grid.is_blocked_xy(e.goal_x, e.goal_y));
        }
    }
}
