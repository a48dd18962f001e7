pub mod builder;
pub mod cursor;
pub mod layout;
pub mod records;

use crate::error::{DataFile, DatabaseError, Result};
use crate::film::Film;
use layout::{ACTOR_FILE_NAME, MOVIE_FILE_NAME, read_offset_table};
use memmap2::Mmap;
use records::{ActorRecord, MovieRecord, compare_film_key, decode_text};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::debug;

pub use builder::DatabaseBuilder;

/// The lookups the path search needs from a filmography.
///
/// `Ok(None)` means the actor or film is not in the data, which is a normal
/// answer rather than an error.
pub trait Filmography {
    fn credits_of(&self, actor: &str) -> Result<Option<Vec<Film>>>;
    fn cast_of(&self, film: &Film) -> Result<Option<Vec<String>>>;
}

/// Read-only view of an `actordata`/`moviedata` pair.
///
/// Both files stay memory-mapped for as long as the value lives and are
/// unmapped when it is dropped. Lookups decode records in place and only
/// allocate for the values they return.
pub struct Database {
    directory: PathBuf,
    actor_data: Mmap,
    movie_data: Mmap,
}

impl Database {
    pub fn open(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        let actor_data = open_memory_mapped_file(&directory.join(ACTOR_FILE_NAME))?;
        let movie_data = open_memory_mapped_file(&directory.join(MOVIE_FILE_NAME))?;

        debug!(
            directory = %directory.display(),
            actor_bytes = actor_data.len(),
            movie_bytes = movie_data.len(),
            "mapped filmography"
        );

        Ok(Self {
            directory,
            actor_data,
            movie_data,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// True when both offset tables fit inside their files.
    pub fn is_healthy(&self) -> bool {
        read_offset_table(&self.actor_data, DataFile::Actors).is_ok()
            && read_offset_table(&self.movie_data, DataFile::Movies).is_ok()
    }

    pub fn actor_count(&self) -> Result<usize> {
        Ok(read_offset_table(&self.actor_data, DataFile::Actors)?.len())
    }

    pub fn movie_count(&self) -> Result<usize> {
        Ok(read_offset_table(&self.movie_data, DataFile::Movies)?.len())
    }

    pub fn credits_of(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        let Some(record_offset) = self.find_actor(actor)? else {
            return Ok(None);
        };

        let record = ActorRecord::decode(&self.actor_data, record_offset)?;
        let films = record
            .films
            .iter()
            .map(|movie_offset| MovieRecord::film_at(&self.movie_data, movie_offset))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(films))
    }

    pub fn cast_of(&self, film: &Film) -> Result<Option<Vec<String>>> {
        let Some(record_offset) = self.find_movie(film)? else {
            return Ok(None);
        };

        let record = MovieRecord::decode(&self.movie_data, record_offset)?;
        let cast = record
            .cast
            .iter()
            .map(|actor_offset| {
                ActorRecord::name_at(&self.actor_data, actor_offset).map(decode_text)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(cast))
    }

    /// Every actor name in table order, decoded lazily.
    pub fn actor_names(&self) -> Result<impl Iterator<Item = Result<String>> + '_> {
        let table = read_offset_table(&self.actor_data, DataFile::Actors)?;
        Ok(table
            .iter()
            .map(move |offset| ActorRecord::name_at(&self.actor_data, offset).map(decode_text)))
    }

    fn find_actor(&self, actor: &str) -> Result<Option<usize>> {
        let table = read_offset_table(&self.actor_data, DataFile::Actors)?;
        table.search_by(|offset| {
            let name = ActorRecord::name_at(&self.actor_data, offset)?;
            Ok(name.cmp(actor.as_bytes()))
        })
    }

    fn find_movie(&self, film: &Film) -> Result<Option<usize>> {
        let table = read_offset_table(&self.movie_data, DataFile::Movies)?;
        table.search_by(|offset| {
            let (title, year) = MovieRecord::key_at(&self.movie_data, offset)?;
            Ok(compare_film_key(title, year, film))
        })
    }
}

impl Filmography for Database {
    fn credits_of(&self, actor: &str) -> Result<Option<Vec<Film>>> {
        Database::credits_of(self, actor)
    }

    fn cast_of(&self, film: &Film) -> Result<Option<Vec<String>>> {
        Database::cast_of(self, film)
    }
}

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Mmap> {
    let file = File::open(file_path).map_err(|e| DatabaseError::io(file_path, e))?;
    // The files are opened read-only and never written while mapped.
    unsafe { Mmap::map(&file) }.map_err(|e| DatabaseError::io(file_path, e))
}
