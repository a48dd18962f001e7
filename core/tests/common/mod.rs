#![allow(dead_code)]

use sixdegrees_core::{Database, DatabaseBuilder, Film};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestDatabase {
    pub dir: TempDir,
    pub db: Database,
}

impl TestDatabase {
    /// Builds and opens a database from `(actor, title, year)` credits.
    /// Credit and cast arrays keep the order given here.
    pub fn create(credits: &[(&str, &str, u16)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut builder = DatabaseBuilder::new();
        for &(actor, title, year) in credits {
            builder.add_credit(actor, Film::new(title, year)).unwrap();
        }
        builder.write_to(dir.path()).unwrap();

        let db = Database::open(dir.path()).unwrap();
        Self { dir, db }
    }

    /// Alice and Bob share Movie1, Bob and Carol share Movie2.
    pub fn alice_bob_carol() -> Self {
        Self::create(&[
            ("Alice", "Movie1", 2000),
            ("Bob", "Movie1", 2000),
            ("Bob", "Movie2", 2001),
            ("Carol", "Movie2", 2001),
        ])
    }
}

/// Writes hand-assembled data files into a fresh directory.
pub fn write_raw_files(actor_file: &[u8], movie_file: &[u8]) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_raw_files_to(dir.path(), actor_file, movie_file);
    dir
}

pub fn write_raw_files_to(dir: &Path, actor_file: &[u8], movie_file: &[u8]) {
    fs::write(dir.join("actordata"), actor_file).unwrap();
    fs::write(dir.join("moviedata"), movie_file).unwrap();
}

pub fn film(title: &str, year: u16) -> Film {
    Film::new(title, year)
}
