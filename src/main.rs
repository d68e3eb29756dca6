use std::path::Path;
use std::time::Instant;

use clap::Parser;

use octile_pathfinding::bench;
use octile_pathfinding::cli::Cli;
use octile_pathfinding::error::CliError;
use octile_pathfinding::map_cache::MapCache;
use octile_pathfinding::node_table::NodeTable;
use octile_pathfinding::scenario::{Experiment, ScenarioLoader};
use octile_pathfinding::search::{self, Algorithm};
use octile_pathfinding::stats::{AlgorithmReport, RunSummary};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

    if let Err(err) = run(&cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut summary = RunSummary::default();

    if let Some(n) = cli.bench {
        run_bench(cli, n, &mut summary);
        if !cli.quiet {
            println!("{summary}");
        }
        return Ok(());
    }

    if cli.scenarios.is_empty() {
        return Err(CliError::NoInput);
    }

    let mut cache = MapCache::new();
    for (file_idx, scenario_path) in cli.scenarios.iter().enumerate() {
        let load = match ScenarioLoader::load(scenario_path) {
            Ok(load) => load,
            Err(err) => {
                if file_idx == 0 {
                    return Err(err.into());
                }
                log::error!("skipping scenario file '{}': {err}", scenario_path.display());
                continue;
            }
        };
        if load.malformed_lines > 0 {
            log::warn!(
                "'{}': skipped {} malformed record(s)",
                scenario_path.display(),
                load.malformed_lines
            );
        }

        for (exp_idx, experiment) in load.experiments.iter().enumerate() {
            let map_path = resolve_map_path(scenario_path, &experiment.map_path);
            let grid = match cache.get_or_load(&map_path) {
                Ok(grid) => grid,
                Err(err) => {
                    log::error!(
                        "'{}' experiment {exp_idx}: map '{}': {err}",
                        scenario_path.display(),
                        map_path.display()
                    );
                    continue;
                }
            };

            let mut table = NodeTable::new(grid.len());

            if !cli.quiet {
                println!(
                    "--- experiment {exp_idx} ({},{}) -> ({},{}) on '{}' ---",
                    experiment.start_x,
                    experiment.start_y,
                    experiment.goal_x,
                    experiment.goal_y,
                    map_path.display()
                );
            }

            let endpoints = valid_endpoints(
                &grid,
                experiment.start_x,
                experiment.start_y,
                experiment.goal_x,
                experiment.goal_y,
            );

            for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Jps] {
                let started = Instant::now();
                let outcome = match endpoints {
                    Some((start, goal)) => search::search(&grid, &mut table, algorithm, start, goal),
                    None => search::SearchOutcome {
                        path: None,
                        distance: None,
                        counters: Default::default(),
                    },
                };
                let elapsed = started.elapsed();

                let report = AlgorithmReport {
                    algorithm_name: algorithm.name(),
                    counters: outcome.counters,
                    distance: outcome.distance,
                    elapsed,
                };
                if !cli.quiet {
                    println!("{report}");
                    if let Some(d) = report.rounded_distance() {
                        println!(
                            "reference optimal = {:.1}, diff = {:+.1}",
                            experiment.optimal_cost,
                            d - experiment.optimal_cost
                        );
                    }
                }
                summary.record(&report, experiment.optimal_cost);
            }
        }
    }

    if !cli.quiet {
        println!("{summary}");
    }
    Ok(())
}

fn run_bench(cli: &Cli, n: usize, summary: &mut RunSummary) {
    let (grid, experiments) = bench::generate(n);
    let mut table = NodeTable::new(grid.len());

    for (exp_idx, experiment) in experiments.iter().enumerate() {
        run_bench_experiment(cli, &grid, &mut table, exp_idx, experiment, summary);
    }
}

fn run_bench_experiment(
    cli: &Cli,
    grid: &octile_pathfinding::grid::Grid,
    table: &mut NodeTable,
    exp_idx: usize,
    experiment: &Experiment,
    summary: &mut RunSummary,
) {
    if !cli.quiet {
        println!(
            "--- bench experiment {exp_idx} ({},{}) -> ({},{}) on '[bench]' ---",
            experiment.start_x, experiment.start_y, experiment.goal_x, experiment.goal_y
        );
    }

    let endpoints = valid_endpoints(
        grid,
        experiment.start_x,
        experiment.start_y,
        experiment.goal_x,
        experiment.goal_y,
    );

    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Jps] {
        let started = Instant::now();
        let outcome = match endpoints {
            Some((start, goal)) => search::search(grid, table, algorithm, start, goal),
            None => search::SearchOutcome {
                path: None,
                distance: None,
                counters: Default::default(),
            },
        };
        let elapsed = started.elapsed();

        let report = AlgorithmReport {
            algorithm_name: algorithm.name(),
            counters: outcome.counters,
            distance: outcome.distance,
            elapsed,
        };
        if !cli.quiet {
            println!("{report}");
        }
        summary.record(&report, experiment.optimal_cost);
    }
}

/// Validates a start/goal pair against the grid before a query is run.
///
/// An out-of-bounds or blocked endpoint is "unreachable" per the error
/// handling contract, not a crash: `NodeTable` is sized to `grid.len()` and
/// indexes it directly without a bounds check, so an off-grid coordinate
/// must never reach `grid.id_of`.
fn valid_endpoints(
    grid: &octile_pathfinding::grid::Grid,
    start_x: i32,
    start_y: i32,
    goal_x: i32,
    goal_y: i32,
) -> Option<(octile_pathfinding::grid::CellId, octile_pathfinding::grid::CellId)> {
    let start = grid.get_cell(start_x, start_y)?;
    let goal = grid.get_cell(goal_x, goal_y)?;
    if grid.is_blocked(start) || grid.is_blocked(goal) {
        return None;
    }
    Some((start, goal))
}

/// Scenario map paths are relative to the scenario file's own directory, not
/// the process's current directory.
fn resolve_map_path(scenario_path: &Path, map_path: &Path) -> std::path::PathBuf {
    if map_path.is_absolute() {
        return map_path.to_path_buf();
    }
    match scenario_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(map_path),
        _ => map_path.to_path_buf(),
    }
}
