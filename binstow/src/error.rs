//! The failure taxonomy shared by every part of the framework.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while opening a stream or moving a value
/// through it.
///
/// The enum stores [`std::io::ErrorKind`] instead of [`std::io::Error`] so
/// errors stay cheap to clone and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The session's filename was empty when the stream was opened.
    #[error("no filename is set for the stream")]
    MissingFilename,

    /// The file could not be created or truncated for writing.
    #[error("cannot open {} for writing: {kind}", .path.display())]
    CannotOpenForWrite {
        /// The full path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        kind: std::io::ErrorKind,
    },

    /// The file could not be opened for reading.
    #[error("cannot open {} for reading: {kind}", .path.display())]
    CannotOpenForRead {
        /// The full path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        kind: std::io::ErrorKind,
    },

    /// The root tag at the start of the stream does not match the type the
    /// caller asked to read.
    #[error("the stream was written as `{written}` but is being read as `{requested}`")]
    TypeMismatch {
        /// The tag found at the start of the stream.
        written: String,
        /// The tag of the type the first read requested.
        requested: String,
    },

    /// The stream ended in the middle of a value.
    #[error("end of stream reached, cannot read more data")]
    UnexpectedEof,

    /// A decoded payload is structurally invalid for the requested type.
    #[error("corrupted stream: {0}")]
    Corrupted(&'static str),

    /// A container holds more elements than the u32 count field can carry.
    #[error("container of {len} elements does not fit the u32 count field")]
    CountOverflow {
        /// The number of elements in the rejected container.
        len: usize,
    },

    /// The session has no open stream because its last reset failed.
    #[error("the stream is not open; the last reset failed")]
    Closed,

    /// Any other I/O failure.
    #[error("{kind}")]
    Io {
        /// The underlying I/O failure.
        kind: std::io::ErrorKind,
    },
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            kind => Error::Io { kind },
        }
    }
}
