use super::layout::{OFFSET_WIDTH, OffsetArray, padding_for};
use crate::error::{DataFile, DatabaseError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Forward-only reader over one record of a mapped data file.
///
/// Every read is bounds-checked against the mapping; running off the end, or
/// a string without its terminator, becomes `CorruptData` instead of a panic.
pub struct RecordCursor<'a> {
    data: &'a [u8],
    file: DataFile,
    record_start: usize,
    cursor: Cursor<&'a [u8]>,
}

impl<'a> RecordCursor<'a> {
    pub fn at(data: &'a [u8], file: DataFile, offset: usize) -> Result<Self> {
        if offset >= data.len() {
            return Err(DatabaseError::corrupt(
                file,
                offset,
                format!("offset beyond end of file ({} bytes)", data.len()),
            ));
        }

        let mut cursor = Cursor::new(data);
        cursor.set_position(offset as u64);

        Ok(Self {
            data,
            file,
            record_start: offset,
            cursor,
        })
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Bytes consumed since the start of the record.
    pub fn record_len(&self) -> usize {
        self.position() - self.record_start
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let position = self.position();
        self.cursor
            .read_u8()
            .map_err(|_| self.truncated(position, 1))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let position = self.position();
        self.cursor
            .read_u16::<LittleEndian>()
            .map_err(|_| self.truncated(position, 2))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let position = self.position();
        self.cursor
            .read_u32::<LittleEndian>()
            .map_err(|_| self.truncated(position, 4))
    }

    /// Borrows a NUL-terminated string and steps past its terminator.
    pub fn read_cstr(&mut self) -> Result<&'a [u8]> {
        let position = self.position();
        let remaining = &self.data[position..];
        let Some(terminator) = remaining.iter().position(|&byte| byte == 0) else {
            return Err(DatabaseError::corrupt(
                self.file,
                position,
                "string is not NUL-terminated",
            ));
        };

        self.cursor.set_position((position + terminator + 1) as u64);
        Ok(&remaining[..terminator])
    }

    /// Skips pad bytes so the next field sits at a multiple of `alignment`
    /// from the record start.
    pub fn align_to(&mut self, alignment: usize) -> Result<()> {
        let position = self.position();
        let padded = position + padding_for(self.record_len(), alignment);
        if padded > self.data.len() {
            return Err(self.truncated(position, padded - position));
        }
        self.cursor.set_position(padded as u64);
        Ok(())
    }

    /// Borrows `count` offsets starting at the current position.
    pub fn read_offset_array(&mut self, count: usize) -> Result<OffsetArray<'a>> {
        let position = self.position();
        let end = count
            .checked_mul(OFFSET_WIDTH)
            .and_then(|width| position.checked_add(width))
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| self.truncated(position, count.saturating_mul(OFFSET_WIDTH)))?;

        self.cursor.set_position(end as u64);
        Ok(OffsetArray::new(&self.data[position..end]))
    }

    fn truncated(&self, position: usize, wanted: usize) -> DatabaseError {
        DatabaseError::corrupt(
            self.file,
            position,
            format!(
                "record at {} needs {} more bytes but the file is {} bytes long",
                self.record_start,
                wanted,
                self.data.len()
            ),
        )
    }
}
