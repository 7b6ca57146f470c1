//! Error types for locating, reading and classifying story files.

use std::{fmt, io, path::PathBuf};

use crate::types::ChunkTag;
use crate::{EXIT_MALFORMED, EXIT_NOT_FOUND};

/// Error type for resource location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// No candidate directory holds a regular file with the requested name.
    #[error("unable to locate z-code program '{name}' (searched: {})", DisplayDirs(.searched))]
    UnableToLocate { name: String, searched: Vec<PathBuf> },
}

/// Error type for reading a located file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The file could not be opened or read to the end.
    #[error("unable to access z-code program '{}'", .path.display())]
    UnableToAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for format classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// A recognized format this interpreter does not run.
    #[error("unsupported z-code program type '{tag}' in '{}'", .path.display())]
    UnsupportedType { path: PathBuf, tag: ChunkTag },
    /// An IFF container whose form type is not a blorb.
    #[error(
        "invalid z-code program format in '{}': expected IFF form type 'IFRS', found '{form_type}'",
        .path.display()
    )]
    InvalidProgramFormat { path: PathBuf, form_type: ChunkTag },
    /// No recognized magic bytes.
    #[error("unknown z-code program format in '{}' (leading bytes {leading:02x?})", .path.display())]
    UnknownFormat { path: PathBuf, leading: Vec<u8> },
    /// The image ends before the bytes a classification rule needs.
    #[error(
        "z-code program '{}' is truncated: {len} bytes, at least {required} required",
        .path.display()
    )]
    TruncatedImage {
        path: PathBuf,
        len: usize,
        required: usize,
    },
}

/// Error type covering the whole load pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Coarse kind of a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnableToLocate,
    UnableToAccess,
    UnsupportedType,
    InvalidProgramFormat,
    UnknownFormat,
    TruncatedImage,
}

impl ErrorKind {
    /// Process exit status a command-line front end should report.
    ///
    /// Missing or unreadable files share one status; everything that was read
    /// but rejected shares another.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::UnableToLocate | ErrorKind::UnableToAccess => EXIT_NOT_FOUND,
            ErrorKind::UnsupportedType
            | ErrorKind::InvalidProgramFormat
            | ErrorKind::UnknownFormat
            | ErrorKind::TruncatedImage => EXIT_MALFORMED,
        }
    }
}

impl LocateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocateError::UnableToLocate { .. } => ErrorKind::UnableToLocate,
        }
    }
}

impl ReadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadError::UnableToAccess { .. } => ErrorKind::UnableToAccess,
        }
    }
}

impl ClassifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifyError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            ClassifyError::InvalidProgramFormat { .. } => ErrorKind::InvalidProgramFormat,
            ClassifyError::UnknownFormat { .. } => ErrorKind::UnknownFormat,
            ClassifyError::TruncatedImage { .. } => ErrorKind::TruncatedImage,
        }
    }
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Locate(e) => e.kind(),
            LoadError::Read(e) => e.kind(),
            LoadError::Classify(e) => e.kind(),
        }
    }
}

struct DisplayDirs<'a>(&'a [PathBuf]);

impl fmt::Display for DisplayDirs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dir) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", dir.display())?;
        }
        Ok(())
    }
}
