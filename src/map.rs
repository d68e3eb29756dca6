//! Octile text-format map loader.

use std::fs;
use std::path::Path;

use crate::error::MapError;
use crate::grid::Grid;

pub struct MapLoader;

impl MapLoader {
    /// Parses an octile-format map file:
    /// ```text
    /// type octile
    /// height <H>
    /// width <W>
    /// map
    /// <H rows of <W> characters>
    /// ```
    /// `.`/`G` are passable; every other character, including `@`/`O`/`T`, is
    /// blocked.
    pub fn load(path: &Path) -> Result<Grid, MapError> {
        let contents = fs::read_to_string(path).map_err(|source| MapError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        parse(path, &contents)
    }
}

fn parse(path: &Path, contents: &str) -> Result<Grid, MapError> {
    let mut lines = contents.lines();

    let type_line = lines.next().ok_or_else(|| malformed(path, "empty file"))?;
    if type_line.trim() != "type octile" {
        return Err(malformed(path, "missing 'type octile' header"));
    }

    let height = parse_header_number(path, lines.next(), "height")?;
    let width = parse_header_number(path, lines.next(), "width")?;

    let map_line = lines.next().ok_or_else(|| malformed(path, "missing 'map' line"))?;
    if map_line.trim() != "map" {
        return Err(malformed(path, "expected 'map' line after header"));
    }

    let mut blocked = Vec::with_capacity(width * height);
    let mut row_count = 0;
    for (row, line) in lines.enumerate() {
        if row >= height {
            break;
        }
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != width {
            return Err(MapError::RowLength {
                path: path.to_path_buf(),
                row,
                expected: width,
                found: chars.len(),
            });
        }
        for ch in chars {
            blocked.push(!matches!(ch, '.' | 'G'));
        }
        row_count += 1;
    }

    if row_count != height {
        return Err(malformed(
            path,
            &format!("expected {height} map rows, found {row_count}"),
        ));
    }

    Ok(Grid::new(width, height, blocked))
}

fn parse_header_number(path: &Path, line: Option<&str>, keyword: &str) -> Result<usize, MapError> {
    let line = line.ok_or_else(|| malformed(path, &format!("missing '{keyword}' line")))?;
    let mut parts = line.split_whitespace();
    let found_keyword = parts.next().ok_or_else(|| malformed(path, &format!("missing '{keyword}' line")))?;
    if found_keyword != keyword {
        return Err(malformed(path, &format!("expected '{keyword}' line, found '{found_keyword}'")));
    }
    let value = parts
        .next()
        .ok_or_else(|| malformed(path, &format!("'{keyword}' line has no value")))?;
    value
        .parse()
        .map_err(|_| malformed(path, &format!("'{keyword}' value '{value}' is not a number")))
}

fn malformed(path: &Path, reason: &str) -> MapError {
    MapError::MalformedHeader {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_path() -> PathBuf {
        PathBuf::from("sample.map")
    }

    #[test]
    fn parses_a_well_formed_map() {
        let contents = "type octile\nheight 3\nwidth 3\nmap\n...\n.@.\n...\n";
        let grid = parse(&sample_path(), contents).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_blocked_xy(1, 1));
        assert!(!grid.is_blocked_xy(0, 0));
    }

    #[test]
    fn treats_g_as_passable_and_other_characters_as_blocked() {
        let contents = "type octile\nheight 1\nwidth 4\nmap\n.GOT\n";
        let grid = parse(&sample_path(), contents).unwrap();
        assert!(!grid.is_blocked_xy(0, 0));
        assert!(!grid.is_blocked_xy(1, 0));
        assert!(grid.is_blocked_xy(2, 0));
        assert!(grid.is_blocked_xy(3, 0));
    }

    #[test]
    fn rejects_wrong_type_header() {
        let contents = "type bitmap\nheight 1\nwidth 1\nmap\n.\n";
        assert!(matches!(
            parse(&sample_path(), contents),
            Err(MapError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn rejects_row_with_wrong_length() {
        let contents = "type octile\nheight 2\nwidth 3\nmap\n...\n..\n";
        assert!(matches!(
            parse(&sample_path(), contents),
            Err(MapError::RowLength { row: 1, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn rejects_missing_map_keyword() {
        let contents = "type octile\nheight 1\nwidth 1\n.\n";
        assert!(matches!(
            parse(&sample_path(), contents),
            Err(MapError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_height() {
        let contents = "type octile\nheight many\nwidth 1\nmap\n.\n";
        assert!(matches!(
            parse(&sample_path(), contents),
            Err(MapError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let missing = PathBuf::from("/nonexistent/path/to/nothing.map");
        assert!(matches!(MapLoader::load(&missing), Err(MapError::Unreadable { .. })));
    }
}
