pub mod bfs;
pub mod cache;

use crate::path::ActorPath;
use cache::LookupCache;
use std::time::Instant;

pub use bfs::find_shortest_path;

#[derive(Debug, Clone)]
pub struct SearchReport {
    /// `None` when no path exists within the hop limit
    pub path: Option<ActorPath>,
    pub stats: SearchStats,
}

#[derive(Debug, Clone)]
pub struct SearchStats {
    pub actors_visited: usize,
    pub films_visited: usize,
    pub credit_lookups: usize,
    pub cast_lookups: usize,
    pub duration_ms: u64,
}

impl SearchReport {
    pub fn new(path: Option<ActorPath>, stats: SearchStats) -> Self {
        Self { path, stats }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

impl SearchStats {
    pub(crate) fn new(
        actors_visited: usize,
        films_visited: usize,
        cache: &LookupCache,
        search_timer: &Instant,
    ) -> Self {
        Self {
            actors_visited,
            films_visited,
            credit_lookups: cache.credit_lookups(),
            cast_lookups: cache.cast_lookups(),
            duration_ms: search_timer.elapsed().as_millis() as u64,
        }
    }
}
