pub const DEFAULT_MAX_HOPS: usize = 5;

/// Configuration for the shortest path search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Longest path, in actor-to-actor connections, the search may return
    pub max_hops: usize,
    /// Start from whichever actor has fewer credits (default: true)
    pub start_from_fewer_credits: bool,
}

impl SearchConfig {
    pub fn new(max_hops: usize, start_from_fewer_credits: bool) -> Self {
        Self {
            max_hops,
            start_from_fewer_credits,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            start_from_fewer_credits: true,
        }
    }
}
