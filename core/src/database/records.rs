use super::cursor::RecordCursor;
use super::layout::OffsetArray;
use crate::error::{DataFile, Result};
use crate::film::{Film, YEAR_BASE};
use std::cmp::Ordering;

/// An actor record borrowed straight out of the actor mapping.
///
/// Layout: name, NUL, pad to 2, `u16` film count, pad to 4, film offsets.
#[derive(Debug)]
pub struct ActorRecord<'a> {
    pub name: &'a [u8],
    pub films: OffsetArray<'a>,
}

impl<'a> ActorRecord<'a> {
    pub fn decode(actor_data: &'a [u8], offset: usize) -> Result<Self> {
        let mut cursor = RecordCursor::at(actor_data, DataFile::Actors, offset)?;
        let name = cursor.read_cstr()?;
        cursor.align_to(2)?;
        let film_count = cursor.read_u16()? as usize;
        cursor.align_to(4)?;
        let films = cursor.read_offset_array(film_count)?;

        Ok(Self { name, films })
    }

    /// Only the name, for comparisons during the binary search.
    pub fn name_at(actor_data: &'a [u8], offset: usize) -> Result<&'a [u8]> {
        RecordCursor::at(actor_data, DataFile::Actors, offset)?.read_cstr()
    }
}

/// A movie record borrowed straight out of the movie mapping.
///
/// Layout: title, NUL, year delta, pad to 2, `u16` cast count, pad to 4,
/// actor offsets.
#[derive(Debug)]
pub struct MovieRecord<'a> {
    pub title: &'a [u8],
    pub year: u16,
    pub cast: OffsetArray<'a>,
}

impl<'a> MovieRecord<'a> {
    pub fn decode(movie_data: &'a [u8], offset: usize) -> Result<Self> {
        let mut cursor = RecordCursor::at(movie_data, DataFile::Movies, offset)?;
        let (title, year) = read_film_key(&mut cursor)?;
        cursor.align_to(2)?;
        let cast_count = cursor.read_u16()? as usize;
        cursor.align_to(4)?;
        let cast = cursor.read_offset_array(cast_count)?;

        Ok(Self { title, year, cast })
    }

    /// Title and year only, for comparisons during the binary search.
    pub fn key_at(movie_data: &'a [u8], offset: usize) -> Result<(&'a [u8], u16)> {
        let mut cursor = RecordCursor::at(movie_data, DataFile::Movies, offset)?;
        read_film_key(&mut cursor)
    }

    pub fn film_at(movie_data: &'a [u8], offset: usize) -> Result<Film> {
        let (title, year) = Self::key_at(movie_data, offset)?;
        Ok(Film::new(decode_text(title), year))
    }
}

fn read_film_key<'a>(cursor: &mut RecordCursor<'a>) -> Result<(&'a [u8], u16)> {
    let title = cursor.read_cstr()?;
    let year_delta = cursor.read_u8()?;
    Ok((title, YEAR_BASE + year_delta as u16))
}

/// Orders a stored film key against a wanted film: title bytes, then year.
pub fn compare_film_key(title: &[u8], year: u16, wanted: &Film) -> Ordering {
    title
        .cmp(wanted.title.as_bytes())
        .then(year.cmp(&wanted.year))
}

/// Names are stored as raw bytes; anything that is not UTF-8 is replaced
/// rather than rejected.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
