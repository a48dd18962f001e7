use super::cursor::RecordCursor;
use crate::error::{DataFile, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::cmp::Ordering;

pub const ACTOR_FILE_NAME: &str = "actordata";
pub const MOVIE_FILE_NAME: &str = "moviedata";

/// Width of the record count and of every stored offset.
pub const OFFSET_WIDTH: usize = 4;
/// Width of the per-record child count.
pub const COUNT_WIDTH: usize = 2;

/// Bytes needed to bring `len` up to a multiple of `alignment`.
///
/// Lengths are measured from the start of the record, never from the start of
/// the file. Reader and builder both go through here.
pub fn padding_for(len: usize, alignment: usize) -> usize {
    (alignment - len % alignment) % alignment
}

pub fn align_up(len: usize, alignment: usize) -> usize {
    len + padding_for(len, alignment)
}

/// A borrowed run of little-endian `u32` offsets inside a mapping.
#[derive(Debug, Clone, Copy)]
pub struct OffsetArray<'a> {
    bytes: &'a [u8],
}

impl<'a> OffsetArray<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        debug_assert_eq!(bytes.len() % OFFSET_WIDTH, 0);
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len() / OFFSET_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        let start = index.checked_mul(OFFSET_WIDTH)?;
        let slot = self.bytes.get(start..start + OFFSET_WIDTH)?;
        Some(LittleEndian::read_u32(slot) as usize)
    }

    /// Takes `self` by value so the iterator borrows only the mapping, not
    /// this handle.
    pub fn iter(self) -> impl Iterator<Item = usize> + 'a {
        self.bytes
            .chunks_exact(OFFSET_WIDTH)
            .map(|slot| LittleEndian::read_u32(slot) as usize)
    }

    /// Binary search over the records this array points at.
    ///
    /// `compare` receives a record offset and returns how that record orders
    /// against the key the caller is looking for. Returns the offset of the
    /// matching record.
    pub fn search_by<F>(&self, mut compare: F) -> Result<Option<usize>>
    where
        F: FnMut(usize) -> Result<Ordering>,
    {
        let mut low = 0;
        let mut high = self.len();

        while low < high {
            let mid = low + (high - low) / 2;
            let Some(record_offset) = self.get(mid) else {
                break;
            };
            match compare(record_offset)? {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(Some(record_offset)),
            }
        }

        Ok(None)
    }
}

/// Reads the top-level table of a data file: a record count followed by that
/// many sorted record offsets.
pub fn read_offset_table(data: &[u8], file: DataFile) -> Result<OffsetArray<'_>> {
    let mut cursor = RecordCursor::at(data, file, 0)?;
    let record_count = cursor.read_u32()? as usize;
    cursor.read_offset_array(record_count)
}
