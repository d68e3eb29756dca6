//! CLI-level cache of parsed maps, keyed by canonical path.
//!
//! A scenario file routinely repeats the same map across hundreds of
//! experiments; the core engine has no notion of this and is handed a plain
//! `&Grid` either way.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::MapError;
use crate::grid::Grid;
use crate::map::MapLoader;

#[derive(Default)]
pub struct MapCache {
    grids: FxHashMap<PathBuf, Rc<Grid>>,
}

impl MapCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached grid for `path`, parsing and inserting it on a
    /// miss. Keyed by the canonicalized path so `./a/b.map` and `a/b.map`
    /// share a cache entry.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Rc<Grid>, MapError> {
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if let Some(grid) = self.grids.get(&key) {
            return Ok(Rc::clone(grid));
        }
        let grid = Rc::new(MapLoader::load(path)?);
        self.grids.insert(key, Rc::clone(&grid));
        Ok(grid)
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_map(contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "octile_pathfinding_map_cache_test_{}_{}.map",
            std::process::id(),
            contents.len()
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn second_load_of_same_path_reuses_the_cached_grid() {
        let path = write_map("type octile\nheight 2\nwidth 2\nmap\n..\n..\n");
        let mut cache = MapCache::new();
        let first = cache.get_or_load(&path).unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn distinct_paths_get_distinct_entries() {
        let path_a = write_map("type octile\nheight 1\nwidth 1\nmap\n.\n");
        let path_b = write_map("type octile\nheight 1\nwidth 1\nmap\n@\n");
        let mut cache = MapCache::new();
        cache.get_or_load(&path_a).unwrap();
        cache.get_or_load(&path_b).unwrap();
        assert_eq!(cache.len(), 2);
        let _ = std::fs::remove_file(&path_a);
        let _ = std::fs::remove_file(&path_b);
    }

    #[test]
    fn propagates_map_error_without_caching_it() {
        let path = write_map("type bitmap\nheight 1\nwidth 1\nmap\n.\n");
        let mut cache = MapCache::new();
        assert!(cache.get_or_load(&path).is_err());
        assert!(cache.is_empty());
        let _ = std::fs::remove_file(&path);
    }
}
