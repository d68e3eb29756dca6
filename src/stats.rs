//! Per-experiment counters and timing, plus a cross-experiment run summary.
//!
//! A small `Display`-driven struct that the CLI prints verbatim.

use std::fmt;
use std::time::Duration;

/// Insert/update/extract counters produced by one search-driver run.
/// Determinism of these counters (same inputs -> same counters) is how
/// regressions in the engine are caught.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub inserts: usize,
    pub updates: usize,
    pub extracts: usize,
}

impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insert = {}, update = {}, extract = {}",
            self.inserts, self.updates, self.extracts
        )
    }
}

/// Outcome of a single algorithm run against one experiment.
#[derive(Debug, Clone)]
pub struct AlgorithmReport {
    pub algorithm_name: &'static str,
    pub counters: Counters,
    pub distance: Option<f64>,
    pub elapsed: Duration,
}

impl AlgorithmReport {
    /// Distance rounded to one decimal place, matching the report's output contract:
    /// `round(dist * 10) / 10`.
    pub fn rounded_distance(&self) -> Option<f64> {
        self.distance.map(|d| (d * 10.0).round() / 10.0)
    }
}

impl fmt::Display for AlgorithmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== {} ====", self.algorithm_name)?;
        writeln!(f, "{}", self.counters)?;
        match self.rounded_distance() {
            Some(d) => writeln!(f, "distance = {:.1}", d)?,
            None => writeln!(f, "destination unreachable from source")?,
        }
        write!(f, "elapsed = {:.6}s", self.elapsed.as_secs_f64())
    }
}

/// Aggregate statistics across every experiment processed in one CLI
/// invocation, broken down per algorithm.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub per_algorithm: std::collections::BTreeMap<&'static str, AlgorithmTotals>,
}

#[derive(Debug, Clone, Default)]
pub struct AlgorithmTotals {
    pub experiments: usize,
    pub unreachable: usize,
    pub max_discrepancy: f64,
    pub total_elapsed: Duration,
}

impl RunSummary {
    pub fn record(&mut self, report: &AlgorithmReport, reference_optimal: f64) {
        let entry = self.per_algorithm.entry(report.algorithm_name).or_default();
        entry.experiments += 1;
        entry.total_elapsed += report.elapsed;
        match report.rounded_distance() {
            Some(d) => {
                let discrepancy = (d - reference_optimal).abs();
                if discrepancy > entry.max_discrepancy {
                    entry.max_discrepancy = discrepancy;
                }
            }
            None => entry.unreachable += 1,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== RUN SUMMARY ===")?;
        for (name, totals) in &self.per_algorithm {
            writeln!(
                f,
                "{name}: {} experiments, {} unreachable, max |diff| = {:.6}, total time = {:.3?}",
                totals.experiments, totals.unreachable, totals.max_discrepancy, totals.total_elapsed
            )?;
        }
        Ok(())
    }
}
