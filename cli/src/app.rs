use sixdegrees_core::{Database, Film};
use std::{error::Error, path::Path};

pub struct SixDegreesApp {
    pub db: Database,
}

impl SixDegreesApp {
    pub fn open(data_dir: &Path) -> Result<Self, Box<dyn Error>> {
        if !data_dir.exists() {
            return Err(format!("Data path does not exist: {:?}", data_dir).into());
        }

        let db = Database::open(data_dir)?;
        if !db.is_healthy() {
            return Err(format!(
                "Data files in {:?} are damaged. Expected actordata and moviedata",
                data_dir
            )
            .into());
        }

        Ok(Self { db })
    }

    /// Credits of `name`, or `None` if no actor is credited under exactly that name.
    pub fn lookup_actor(&self, name: &str) -> Result<Option<Vec<Film>>, Box<dyn Error>> {
        Ok(self.db.credits_of(name)?)
    }

    pub fn require_actor(&self, name: &str) -> Result<(), Box<dyn Error>> {
        if self.lookup_actor(name)?.is_some() {
            return Ok(());
        }

        let suggestions = self.suggest_names(name, 5)?;
        let mut message = format!("Actor '{}' not found in database", name);
        if !suggestions.is_empty() {
            message.push_str(&format!(". Did you mean: {}?", suggestions.join(", ")));
        }
        Err(message.into())
    }

    /// Names that match `query` ignoring case, either fully or as a prefix.
    /// Exact case-insensitive matches come first.
    pub fn suggest_names(&self, query: &str, limit: usize) -> Result<Vec<String>, Box<dyn Error>> {
        let lowercase_query = query.trim().to_lowercase();
        if lowercase_query.is_empty() {
            return Ok(Vec::new());
        }

        let mut exact = Vec::new();
        let mut prefixed = Vec::new();
        for name in self.db.actor_names()? {
            let name = name?;
            let lowercase_name = name.to_lowercase();
            if lowercase_name == lowercase_query {
                exact.push(name);
            } else if prefixed.len() < limit && lowercase_name.starts_with(&lowercase_query) {
                prefixed.push(name);
            }
        }

        exact.extend(prefixed);
        exact.truncate(limit);
        Ok(exact)
    }
}
