//! Errors reported by the mesh loader.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Attribute table a face corner indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeTable {
    Positions,
    Texcoords,
    Normals,
}

impl fmt::Display for AttributeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeTable::Positions => "position",
            AttributeTable::Texcoords => "texcoord",
            AttributeTable::Normals => "normal",
        })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("OBJ file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A recognized record whose fields could not be parsed.
    #[error("Malformed record on line {line} ({what}): '{content}'")]
    MalformedRecord {
        line: usize,
        content: String,
        what: &'static str,
    },

    /// `index` is the 1-based value from the file.
    #[error(
        "Face on line {line} references {table} {index}, but only {table_size} were declared"
    )]
    IndexOutOfRange {
        table: AttributeTable,
        index: i64,
        table_size: usize,
        line: usize,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;
