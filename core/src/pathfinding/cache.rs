use crate::database::Filmography;
use crate::film::Film;
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::warn;

/// Credit and cast lookups already made during one search, keyed purely by
/// actor name or film so any path reaching the same node reuses them.
///
/// Actors or films the source does not know, or cannot decode, are cached as
/// having no neighbors.
#[derive(Default)]
pub struct LookupCache {
    credits: FxHashMap<String, Rc<[Film]>>,
    casts: FxHashMap<Film, Rc<[String]>>,
    credit_lookups: usize,
    cast_lookups: usize,
}

impl LookupCache {
    pub fn credits<S: Filmography + ?Sized>(&mut self, source: &S, actor: &str) -> Rc<[Film]> {
        if let Some(films) = self.credits.get(actor) {
            return Rc::clone(films);
        }

        self.credit_lookups += 1;
        let films: Rc<[Film]> = match source.credits_of(actor) {
            Ok(Some(films)) => films.into(),
            Ok(None) => Rc::from(Vec::new()),
            Err(error) => {
                warn!(actor, %error, "skipping actor with unreadable credits");
                Rc::from(Vec::new())
            }
        };

        self.credits.insert(actor.to_string(), Rc::clone(&films));
        films
    }

    pub fn cast<S: Filmography + ?Sized>(&mut self, source: &S, film: &Film) -> Rc<[String]> {
        if let Some(cast) = self.casts.get(film) {
            return Rc::clone(cast);
        }

        self.cast_lookups += 1;
        let cast: Rc<[String]> = match source.cast_of(film) {
            Ok(Some(cast)) => cast.into(),
            Ok(None) => Rc::from(Vec::new()),
            Err(error) => {
                warn!(film = %film, %error, "skipping film with unreadable cast");
                Rc::from(Vec::new())
            }
        };

        self.casts.insert(film.clone(), Rc::clone(&cast));
        cast
    }

    /// Calls that reached the source rather than the cache.
    pub fn credit_lookups(&self) -> usize {
        self.credit_lookups
    }

    pub fn cast_lookups(&self) -> usize {
        self.cast_lookups
    }
}
