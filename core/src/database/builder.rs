use super::layout::{
    ACTOR_FILE_NAME, COUNT_WIDTH, MOVIE_FILE_NAME, OFFSET_WIDTH, align_up, padding_for,
};
use crate::error::{DatabaseError, Result};
use crate::film::Film;
use byteorder::{LittleEndian, WriteBytesExt};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};
use tracing::debug;

struct ActorEntry {
    name: String,
    films: Vec<usize>,
}

struct MovieEntry {
    film: Film,
    cast: Vec<usize>,
}

/// Writes `actordata`/`moviedata` pairs that `Database` can map.
///
/// Credit and cast arrays keep the order in which credits were added; only
/// the top-level offset tables are sorted.
#[derive(Default)]
pub struct DatabaseBuilder {
    actors: Vec<ActorEntry>,
    actor_ids: FxHashMap<String, usize>,
    movies: Vec<MovieEntry>,
    movie_ids: FxHashMap<Film, usize>,
    credits: FxHashSet<(usize, usize)>,
}

impl DatabaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Records that `actor` appears in `film`. Repeated credits are ignored.
    pub fn add_credit(&mut self, actor: &str, film: Film) -> Result<&mut Self> {
        check_text(actor)?;
        check_text(&film.title)?;
        if film.year_delta().is_none() {
            return Err(DatabaseError::InvalidInput(format!(
                "year {} of {} cannot be stored",
                film.year, film.title
            )));
        }

        let actor_id = self.actor_id(actor);
        let movie_id = self.movie_id(film);

        if self.credits.insert((actor_id, movie_id)) {
            self.actors[actor_id].films.push(movie_id);
            self.movies[movie_id].cast.push(actor_id);
        }

        Ok(self)
    }

    /// Adds credits from lines of `actor<TAB>title<TAB>year`.
    ///
    /// Blank lines and lines starting with `#` are skipped, so a name cannot
    /// begin with `#` here. Fields are taken byte for byte, surrounding
    /// spaces included; only the line ending is dropped.
    pub fn add_tsv<R: BufRead>(&mut self, reader: R) -> Result<&mut Self> {
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| {
                DatabaseError::InvalidInput(format!("line {line_number}: {e}"))
            })?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (actor, film) = parse_credit_line(line).ok_or_else(|| {
                DatabaseError::InvalidInput(format!(
                    "line {line_number}: expected actor<TAB>title<TAB>year"
                ))
            })?;
            self.add_credit(actor, film)?;
        }

        Ok(self)
    }

    pub fn from_tsv_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| DatabaseError::io(path, e))?;
        let mut builder = Self::new();
        builder.add_tsv(io::BufReader::new(file))?;
        Ok(builder)
    }

    pub fn write_to(&self, directory: &Path) -> Result<()> {
        fs::create_dir_all(directory).map_err(|e| DatabaseError::io(directory, e))?;
        let (actor_file, movie_file) = self.encode()?;

        let actor_path = directory.join(ACTOR_FILE_NAME);
        fs::write(&actor_path, &actor_file).map_err(|e| DatabaseError::io(&actor_path, e))?;
        let movie_path = directory.join(MOVIE_FILE_NAME);
        fs::write(&movie_path, &movie_file).map_err(|e| DatabaseError::io(&movie_path, e))?;

        debug!(
            directory = %directory.display(),
            actors = self.actors.len(),
            movies = self.movies.len(),
            "wrote filmography"
        );
        Ok(())
    }

    /// Encodes the actor file and the movie file, in that order.
    pub fn encode(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        for actor in &self.actors {
            check_count(actor.films.len(), &actor.name)?;
        }
        for movie in &self.movies {
            check_count(movie.cast.len(), &movie.film.title)?;
        }

        let mut actor_order: Vec<usize> = (0..self.actors.len()).collect();
        actor_order.sort_by(|&a, &b| self.actors[a].name.cmp(&self.actors[b].name));
        let mut movie_order: Vec<usize> = (0..self.movies.len()).collect();
        movie_order.sort_by(|&a, &b| self.movies[a].film.cmp(&self.movies[b].film));

        let actor_offsets = place_records(
            &actor_order,
            |id| actor_record_len(&self.actors[id]),
            ACTOR_FILE_NAME,
        )?;
        let movie_offsets = place_records(
            &movie_order,
            |id| movie_record_len(&self.movies[id]),
            MOVIE_FILE_NAME,
        )?;

        let actor_file = self
            .encode_actor_file(&actor_order, &actor_offsets, &movie_offsets)
            .map_err(|e| DatabaseError::io(ACTOR_FILE_NAME, e))?;
        let movie_file = self
            .encode_movie_file(&movie_order, &movie_offsets, &actor_offsets)
            .map_err(|e| DatabaseError::io(MOVIE_FILE_NAME, e))?;

        Ok((actor_file, movie_file))
    }

    fn actor_id(&mut self, name: &str) -> usize {
        if let Some(&id) = self.actor_ids.get(name) {
            return id;
        }
        let id = self.actors.len();
        self.actors.push(ActorEntry {
            name: name.to_string(),
            films: Vec::new(),
        });
        self.actor_ids.insert(name.to_string(), id);
        id
    }

    fn movie_id(&mut self, film: Film) -> usize {
        if let Some(&id) = self.movie_ids.get(&film) {
            return id;
        }
        let id = self.movies.len();
        self.movie_ids.insert(film.clone(), id);
        self.movies.push(MovieEntry {
            film,
            cast: Vec::new(),
        });
        id
    }

    fn encode_actor_file(
        &self,
        order: &[usize],
        actor_offsets: &[usize],
        movie_offsets: &[usize],
    ) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        write_offset_table(&mut buffer, order, actor_offsets)?;

        for &id in order {
            let actor = &self.actors[id];
            let record_start = actor_offsets[id];
            buffer.resize(record_start, 0);

            buffer.extend_from_slice(actor.name.as_bytes());
            buffer.push(0);
            pad_record(&mut buffer, record_start, 2);
            buffer.write_u16::<LittleEndian>(actor.films.len() as u16)?;
            pad_record(&mut buffer, record_start, 4);
            for &movie_id in &actor.films {
                buffer.write_u32::<LittleEndian>(movie_offsets[movie_id] as u32)?;
            }
        }

        Ok(buffer)
    }

    fn encode_movie_file(
        &self,
        order: &[usize],
        movie_offsets: &[usize],
        actor_offsets: &[usize],
    ) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        write_offset_table(&mut buffer, order, movie_offsets)?;

        for &id in order {
            let movie = &self.movies[id];
            let record_start = movie_offsets[id];
            buffer.resize(record_start, 0);

            buffer.extend_from_slice(movie.film.title.as_bytes());
            buffer.push(0);
            // Checked in add_credit
            buffer.push(movie.film.year_delta().unwrap_or_default());
            pad_record(&mut buffer, record_start, 2);
            buffer.write_u16::<LittleEndian>(movie.cast.len() as u16)?;
            pad_record(&mut buffer, record_start, 4);
            for &actor_id in &movie.cast {
                buffer.write_u32::<LittleEndian>(actor_offsets[actor_id] as u32)?;
            }
        }

        Ok(buffer)
    }
}

fn parse_credit_line(line: &str) -> Option<(&str, Film)> {
    let mut fields = line.split('\t');
    let actor = fields.next().filter(|field| !field.is_empty())?;
    let title = fields.next().filter(|field| !field.is_empty())?;
    let year = fields.next()?.trim().parse::<u16>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((actor, Film::new(title, year)))
}

fn check_text(text: &str) -> Result<()> {
    if text.is_empty() || text.contains('\0') {
        return Err(DatabaseError::InvalidInput(format!(
            "{text:?} cannot be stored as a NUL-terminated string"
        )));
    }
    Ok(())
}

fn check_count(count: usize, owner: &str) -> Result<()> {
    if count > u16::MAX as usize {
        return Err(DatabaseError::InvalidInput(format!(
            "{owner} has {count} entries, more than a record can hold"
        )));
    }
    Ok(())
}

fn actor_record_len(actor: &ActorEntry) -> usize {
    let header = align_up(actor.name.len() + 1, 2) + COUNT_WIDTH;
    align_up(header, 4) + actor.films.len() * OFFSET_WIDTH
}

fn movie_record_len(movie: &MovieEntry) -> usize {
    let header = align_up(movie.film.title.len() + 2, 2) + COUNT_WIDTH;
    align_up(header, 4) + movie.cast.len() * OFFSET_WIDTH
}

/// Assigns each record a 4-byte aligned start after the offset table.
/// Returns offsets indexed by entry id.
fn place_records(
    order: &[usize],
    record_len: impl Fn(usize) -> usize,
    file_name: &str,
) -> Result<Vec<usize>> {
    let mut offsets = vec![0; order.len()];
    let mut next = OFFSET_WIDTH + order.len() * OFFSET_WIDTH;

    for &id in order {
        next = align_up(next, 4);
        offsets[id] = next;
        next += record_len(id);
    }

    if next > u32::MAX as usize {
        return Err(DatabaseError::InvalidInput(format!(
            "{file_name} would be {next} bytes, past what 32-bit offsets can address"
        )));
    }
    Ok(offsets)
}

fn write_offset_table(buffer: &mut Vec<u8>, order: &[usize], offsets: &[usize]) -> io::Result<()> {
    buffer.write_u32::<LittleEndian>(order.len() as u32)?;
    for &id in order {
        buffer.write_u32::<LittleEndian>(offsets[id] as u32)?;
    }
    Ok(())
}

fn pad_record(buffer: &mut Vec<u8>, record_start: usize, alignment: usize) {
    let padding = padding_for(buffer.len() - record_start, alignment);
    buffer.resize(buffer.len() + padding, 0);
}
