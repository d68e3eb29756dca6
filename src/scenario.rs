//! Scenario file loader: `(start, goal, optimal_cost, map_name)`
//! experiments, tolerant of both the 0.0 and 1.0 line formats.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScenarioError;

#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub bucket: i32,
    pub map_path: PathBuf,
    pub map_width: Option<u32>,
    pub map_height: Option<u32>,
    pub start_x: i32,
    pub start_y: i32,
    pub goal_x: i32,
    pub goal_y: i32,
    pub optimal_cost: f64,
}

/// Result of loading one scenario file: the experiments that parsed, plus
/// the count of lines that didn't (logged and skipped, not fatal).
#[derive(Debug, Clone)]
pub struct ScenarioLoad {
    pub experiments: Vec<Experiment>,
    pub malformed_lines: usize,
}

pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Loads a scenario file. Fails only if the file itself cannot be read;
    /// individual malformed records are skipped and counted, not fatal.
    pub fn load(path: &Path) -> Result<ScenarioLoad, ScenarioError> {
        let contents = fs::read_to_string(path).map_err(|source| ScenarioError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = contents.lines().enumerate().peekable();
        let mut experiments = Vec::new();
        let mut malformed_lines = 0;

        // An optional `version <n>` header line. Its absence means every
        // line, including the first, is an unversioned (pre-0.0) record.
        if let Some(&(_, first)) = lines.peek() {
            if first.trim_start().to_ascii_lowercase().starts_with("version") {
                lines.next();
            }
        }

        for (idx, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_record(line) {
                Some(experiment) => experiments.push(experiment),
                None => {
                    let err = ScenarioError::MalformedRecord {
                        path: path.to_path_buf(),
                        line: idx + 1,
                    };
                    log::warn!("{err}, skipping");
                    malformed_lines += 1;
                }
            }
        }

        Ok(ScenarioLoad {
            experiments,
            malformed_lines,
        })
    }
}

/// Parses one whitespace-separated experiment record. Version 1.0 carries
/// two extra integer fields (map width/height) between the map path and
/// start-x; version 0.0 does not. We accept either by field count.
fn parse_record(line: &str) -> Option<Experiment> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    // Unscaled (0.0): bucket map sx sy gx gy cost -> 7 fields.
    // Scaled (1.0):   bucket map w h sx sy gx gy cost -> 9 fields.
    match fields.len() {
        7 => {
            let bucket = fields[0].parse().ok()?;
            let map_path = PathBuf::from(fields[1]);
            let start_x = fields[2].parse().ok()?;
            let start_y = fields[3].parse().ok()?;
            let goal_x = fields[4].parse().ok()?;
            let goal_y = fields[5].parse().ok()?;
            let optimal_cost = fields[6].parse().ok()?;
            Some(Experiment {
                bucket,
                map_path,
                map_width: None,
                map_height: None,
                start_x,
                start_y,
                goal_x,
                goal_y,
                optimal_cost,
            })
        }
        9 => {
            let bucket = fields[0].parse().ok()?;
            let map_path = PathBuf::from(fields[1]);
            let map_width = fields[2].parse().ok()?;
            let map_height = fields[3].parse().ok()?;
            let start_x = fields[4].parse().ok()?;
            let start_y = fields[5].parse().ok()?;
            let goal_x = fields[6].parse().ok()?;
            let goal_y = fields[7].parse().ok()?;
            let optimal_cost = fields[8].parse().ok()?;
            Some(Experiment {
                bucket,
                map_path,
                map_width: Some(map_width),
                map_height: Some(map_height),
                start_x,
                start_y,
                goal_x,
                goal_y,
                optimal_cost,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> tempfile_path::TempPath {
        tempfile_path::TempPath::with_contents(contents)
    }

    /// Minimal same-crate stand-in for a temp file, avoiding a `tempfile`
    /// dev-dependency for a handful of loader tests.
    mod tempfile_path {
        use std::io::Write;
        use std::path::{Path, PathBuf};

        pub struct TempPath(PathBuf);

        impl TempPath {
            pub fn with_contents(contents: &str) -> Self {
                let mut path = std::env::temp_dir();
                path.push(format!(
                    "octile_pathfinding_test_{}_{}",
                    std::process::id(),
                    contents.len().wrapping_mul(2654435761).wrapping_add(contents.as_bytes().first().copied().unwrap_or(0) as usize)
                ));
                let mut f = std::fs::File::create(&path).unwrap();
                f.write_all(contents.as_bytes()).unwrap();
                TempPath(path)
            }
        }

        impl AsRef<Path> for TempPath {
            fn as_ref(&self) -> &Path {
                &self.0
            }
        }

        impl Drop for TempPath {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.0);
            }
        }
    }

    #[test]
    fn parses_version_1_0_record() {
        let contents = "version 1.0\n1\tmaps/foo.map\t512\t512\t10\t20\t30\t40\t28.284271\n";
        let file = write_temp(contents);
        let load = ScenarioLoader::load(file.as_ref()).unwrap();
        assert_eq!(load.experiments.len(), 1);
        let e = &load.experiments[0];
        assert_eq!(e.map_path, PathBuf::from("maps/foo.map"));
        assert_eq!(e.map_width, Some(512));
        assert_eq!(e.start_x, 10);
        assert_eq!(e.goal_y, 40);
        assert!((e.optimal_cost - 28.284271).abs() < 1e-6);
    }

    #[test]
    fn parses_version_0_0_record_without_scale() {
        let contents = "version 0.0\n1\tmaps/foo.map\t10\t20\t30\t40\t28.284271\n";
        let file = write_temp(contents);
        let load = ScenarioLoader::load(file.as_ref()).unwrap();
        assert_eq!(load.experiments.len(), 1);
        assert_eq!(load.experiments[0].map_width, None);
    }

    #[test]
    fn unversioned_first_line_is_itself_a_record() {
        let contents = "1\tmaps/foo.map\t10\t20\t30\t40\t28.284271\n";
        let file = write_temp(contents);
        let load = ScenarioLoader::load(file.as_ref()).unwrap();
        assert_eq!(load.experiments.len(), 1);
    }

    #[test]
    fn malformed_record_is_skipped_not_fatal() {
        let contents = "version 1.0\nnot a valid record\n1\tmaps/foo.map\t10\t20\t30\t40\t28.284271\n";
        let file = write_temp(contents);
        let load = ScenarioLoader::load(file.as_ref()).unwrap();
        assert_eq!(load.experiments.len(), 1);
        assert_eq!(load.malformed_lines, 1);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let missing = PathBuf::from("/nonexistent/path/to/nothing.scen");
        assert!(matches!(
            ScenarioLoader::load(&missing),
            Err(ScenarioError::Unreadable { .. })
        ));
    }

    #[test]
    fn blank_trailing_line_is_tolerated() {
        let contents = "version 1.0\n1\tmaps/foo.map\t10\t10\t0\t0\t1\t1\t1.4\n\n\n";
        let file = write_temp(contents);
        let load = ScenarioLoader::load(file.as_ref()).unwrap();
        assert_eq!(load.experiments.len(), 1);
    }
}
