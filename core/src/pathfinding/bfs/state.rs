use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::trace;
use crate::database::Filmography;
use crate::film::Film;
use crate::path::ActorPath;
use super::super::cache::LookupCache;

pub struct BfsState {
    queue: VecDeque<ActorPath>,
    pub visited_actors: FxHashSet<String>,
    pub visited_films: FxHashSet<Film>,
}

impl BfsState {
    pub fn new(start: &str) -> Self {
        let mut queue = VecDeque::new();
        let mut visited_actors = FxHashSet::default();

        queue.push_back(ActorPath::new(start));
        visited_actors.insert(start.to_string());

        Self {
            queue,
            visited_actors,
            visited_films: FxHashSet::default(),
        }
    }

    pub fn find_path_to_target<S: Filmography + ?Sized>(
        &mut self,
        target: &str,
        source: &S,
        cache: &mut LookupCache,
        max_hops: usize,
    ) -> Option<ActorPath> {
        while let Some(current_path) = self.queue.pop_front() {
            // Paths leave the queue shortest first, so nothing shorter is left
            if current_path.len() >= max_hops {
                trace!(max_hops, queued = self.queue.len() + 1, "hop limit reached");
                return None;
            }

            if let Some(found) = self.expand(&current_path, target, source, cache) {
                return Some(found);
            }
        }

        None
    }

    /// Extends `current_path` by every unvisited film of its last actor and
    /// every unvisited costar of those films, in stored order.
    fn expand<S: Filmography + ?Sized>(
        &mut self,
        current_path: &ActorPath,
        target: &str,
        source: &S,
        cache: &mut LookupCache,
    ) -> Option<ActorPath> {
        let current_actor = current_path.last_actor();
        let credits = cache.credits(source, current_actor);
        trace!(actor = current_actor, hops = current_path.len(), films = credits.len(), "expanding");

        for film in credits.iter() {
            if self.visited_films.contains(film) {
                continue;
            }
            self.visited_films.insert(film.clone());

            let cast = cache.cast(source, film);
            for costar in cast.iter() {
                if self.visited_actors.contains(costar) {
                    continue;
                }
                self.visited_actors.insert(costar.clone());

                let next_path = current_path.with_connection(film.clone(), costar.as_str());
                if costar == target {
                    return Some(next_path);
                }
                self.queue.push_back(next_path);
            }
        }

        None
    }
}
