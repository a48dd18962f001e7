pub mod database;
pub mod error;
pub mod film;
pub mod path;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use database::{Database, DatabaseBuilder, Filmography};
pub use error::{DataFile, DatabaseError, Result};
pub use film::Film;
pub use path::{ActorPath, Connection};
pub use pathfinding::{SearchReport, SearchStats, find_shortest_path};
pub use search_config::SearchConfig;
