mod state;

use std::time::Instant;
use tracing::debug;
use crate::database::Filmography;
use crate::path::ActorPath;
use crate::search_config::SearchConfig;
use super::cache::LookupCache;
use super::{SearchReport, SearchStats};
use state::BfsState;

/// Breadth-first search for the fewest connections between two actors.
///
/// The returned path always reads from `from_actor` to `to_actor`, whichever
/// end the search actually started at.
pub fn find_shortest_path<S: Filmography + ?Sized>(
    source: &S,
    from_actor: &str,
    to_actor: &str,
    config: &SearchConfig,
) -> SearchReport {
    let search_timer = Instant::now();
    let mut cache = LookupCache::default();

    if from_actor == to_actor {
        let stats = SearchStats::new(1, 0, &cache, &search_timer);
        return SearchReport::new(Some(ActorPath::new(from_actor)), stats);
    }

    let (start, target, swapped) = choose_start(source, from_actor, to_actor, config, &mut cache);
    debug!(start, target, swapped, max_hops = config.max_hops, "starting search");

    let mut bfs_state = BfsState::new(start);
    let path = bfs_state
        .find_path_to_target(target, source, &mut cache, config.max_hops)
        .map(|path| if swapped { path.reversed() } else { path });

    let stats = SearchStats::new(
        bfs_state.visited_actors.len(),
        bfs_state.visited_films.len(),
        &cache,
        &search_timer,
    );
    debug!(
        found = path.is_some(),
        hops = path.as_ref().map(ActorPath::len),
        actors_visited = stats.actors_visited,
        films_visited = stats.films_visited,
        "search finished"
    );

    SearchReport::new(path, stats)
}

/// Picks the end with fewer credits as the start, which keeps the first
/// expansion small. Ties keep the caller's order.
fn choose_start<'n, S: Filmography + ?Sized>(
    source: &S,
    from_actor: &'n str,
    to_actor: &'n str,
    config: &SearchConfig,
    cache: &mut LookupCache,
) -> (&'n str, &'n str, bool) {
    if !config.start_from_fewer_credits {
        return (from_actor, to_actor, false);
    }

    let from_credits = cache.credits(source, from_actor).len();
    let to_credits = cache.credits(source, to_actor).len();

    if to_credits < from_credits {
        (to_actor, from_actor, true)
    } else {
        (from_actor, to_actor, false)
    }
}
