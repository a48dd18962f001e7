use crate::film::Film;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a path: the shared film and the actor it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub film: Film,
    pub actor: String,
}

/// A chain of actors linked by films they appeared in together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPath {
    start: String,
    connections: Vec<Connection>,
}

impl ActorPath {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            connections: Vec::new(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of actor-to-actor connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn last_actor(&self) -> &str {
        self.connections
            .last()
            .map_or(self.start.as_str(), |connection| connection.actor.as_str())
    }

    pub fn add_connection(&mut self, film: Film, actor: impl Into<String>) {
        self.connections.push(Connection {
            film,
            actor: actor.into(),
        });
    }

    pub fn with_connection(&self, film: Film, actor: impl Into<String>) -> Self {
        let mut extended = self.clone();
        extended.add_connection(film, actor);
        extended
    }

    /// The same chain walked from the last actor back to the first.
    pub fn reversed(self) -> Self {
        let mut actors: Vec<String> = Vec::with_capacity(self.connections.len() + 1);
        let mut films: Vec<Film> = Vec::with_capacity(self.connections.len());
        actors.push(self.start);
        for connection in self.connections {
            films.push(connection.film);
            actors.push(connection.actor);
        }

        // Film i joins actors i and i + 1; walking backwards it leads to actor i
        let start = actors.pop().unwrap_or_default();
        let connections = films
            .into_iter()
            .zip(actors)
            .rev()
            .map(|(film, actor)| Connection { film, actor })
            .collect();

        Self { start, connections }
    }

    pub fn actors(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.start.as_str())
            .chain(self.connections.iter().map(|connection| connection.actor.as_str()))
    }
}

/// One line per connection: `A was in "Title" (Year) with B.`
impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.connections.is_empty() {
            return write!(f, "{}", self.start);
        }

        let mut previous = self.start.as_str();
        for (index, connection) in self.connections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{} was in {} with {}.", previous, connection.film, connection.actor)?;
            previous = connection.actor.as_str();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_to_carol() -> ActorPath {
        let mut path = ActorPath::new("Alice");
        path.add_connection(Film::new("Movie1", 2000), "Bob");
        path.add_connection(Film::new("Movie2", 2001), "Carol");
        path
    }

    #[test]
    fn test_length_and_last_actor() {
        let empty = ActorPath::new("Alice");
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.last_actor(), "Alice");

        let path = alice_to_carol();
        assert_eq!(path.len(), 2);
        assert_eq!(path.last_actor(), "Carol");
        assert_eq!(path.actors().collect::<Vec<_>>(), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_with_connection_leaves_original() {
        let path = ActorPath::new("Alice");
        let extended = path.with_connection(Film::new("Movie1", 2000), "Bob");

        assert_eq!(path.len(), 0);
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn test_reversed() {
        let reversed = alice_to_carol().reversed();

        assert_eq!(reversed.start(), "Carol");
        assert_eq!(
            reversed.connections(),
            &[
                Connection {
                    film: Film::new("Movie2", 2001),
                    actor: "Bob".to_string(),
                },
                Connection {
                    film: Film::new("Movie1", 2000),
                    actor: "Alice".to_string(),
                },
            ]
        );
        assert_eq!(reversed.reversed(), alice_to_carol());
    }

    #[test]
    fn test_reversed_empty_path() {
        assert_eq!(ActorPath::new("Alice").reversed(), ActorPath::new("Alice"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            alice_to_carol().to_string(),
            "Alice was in \"Movie1\" (2000) with Bob.\nBob was in \"Movie2\" (2001) with Carol."
        );
        assert_eq!(ActorPath::new("Alice").to_string(), "Alice");
    }

    #[test]
    fn test_serializes_as_start_and_connections() {
        let value = serde_json::to_value(alice_to_carol()).unwrap();

        assert_eq!(value["start"], "Alice");
        assert_eq!(value["connections"][0]["film"]["title"], "Movie1");
        assert_eq!(value["connections"][1]["actor"], "Carol");

        let parsed: ActorPath = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, alice_to_carol());
    }
}
