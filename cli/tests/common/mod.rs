#![allow(dead_code)]

use sixdegrees::SixDegreesApp;
use sixdegrees_core::{DatabaseBuilder, Film};
use tempfile::TempDir;

pub struct TestApp {
    pub dir: TempDir,
    pub app: SixDegreesApp,
}

impl TestApp {
    /// Alice and Bob share Movie1, Bob and Carol share Movie2. Dave and Alicia
    /// share Solo, apart from the others.
    pub fn create() -> Self {
        let dir = TempDir::new().unwrap();
        let mut builder = DatabaseBuilder::new();
        for (actor, title, year) in [
            ("Alice", "Movie1", 2000),
            ("Bob", "Movie1", 2000),
            ("Bob", "Movie2", 2001),
            ("Carol", "Movie2", 2001),
            ("Dave", "Solo", 1999),
            ("Alicia", "Solo", 1999),
        ] {
            builder.add_credit(actor, Film::new(title, year)).unwrap();
        }
        builder.write_to(dir.path()).unwrap();

        let app = SixDegreesApp::open(dir.path()).unwrap();
        Self { dir, app }
    }
}
