//! Error types for the turtle engine.
//!
//! Out-of-bounds pixel writes are not errors: they are dropped, counted and
//! logged. Everything here is a condition the caller has to see.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by drawing, encoding and script operations
#[derive(Debug, Error)]
pub enum TurtleError {
    /// A buffer reservation failed or its size overflowed
    #[error("can't allocate {bytes} bytes for {what}")]
    Allocation { what: &'static str, bytes: usize },

    /// Output file could not be created or written
    #[error("could not write to file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to a caller-supplied stream failed
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    /// A single scanline produced more intercepts than the fill can hold
    #[error("too many intercepts in fill algorithm: {count} on row {row}")]
    InterceptOverflow { row: i32, count: usize },

    /// The polygon vertex list grew past its capacity before the fill closed
    #[error("polygon has {count} vertices, more than the fill can hold")]
    VertexOverflow { count: usize },

    /// Video was started with zero pixels per frame
    #[error("pixels per frame must be at least 1")]
    InvalidFrameInterval,

    /// A script file could not be read
    #[error("could not read script {}: {source}", path.display())]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A script file is not valid JSON for the command schema
    #[error("invalid script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TurtleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TurtleError>;
