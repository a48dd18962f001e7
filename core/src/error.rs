use std::path::PathBuf;
use thiserror::Error;

/// Which of the two database files a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Actors,
    Movies,
}

impl DataFile {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFile::Actors => "actor file",
            DataFile::Movies => "movie file",
        }
    }
}

impl std::fmt::Display for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A database file could not be opened, mapped or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes decoded from a mapping point outside the file or break the record layout.
    #[error("corrupt data in {file} at offset {offset}: {reason}")]
    CorruptData {
        file: DataFile,
        offset: usize,
        reason: String,
    },

    /// Input handed to the database builder cannot be encoded.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DatabaseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatabaseError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(file: DataFile, offset: usize, reason: impl Into<String>) -> Self {
        DatabaseError::CorruptData {
            file,
            offset,
            reason: reason.into(),
        }
    }

    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, DatabaseError::CorruptData { .. })
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
