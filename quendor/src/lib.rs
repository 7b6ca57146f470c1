//! Story-file acquisition and format classification for the Quendor
//! Z-Machine interpreter.
//!
//! # Pipeline
//!
//! Loading a story file runs three stages strictly in sequence:
//!
//! ```text
//! [name] --locate--> [path] --read--> [image bytes] --classify--> [FormatTag]
//! ```
//!
//! - **locate**: probe the current directory, then the directory named by
//!   `QUENDOR_PATH`, and take the first regular file with the requested name.
//! - **read**: load the whole file into memory, all-or-nothing.
//! - **classify**: inspect the leading bytes and decide what kind of image it is.
//!
//! # Recognized images
//!
//! ```text
//! offset  0      4          8      12
//!         [ver][..........................]   raw z-code, ver in 1..=8
//!         ["FORM"][len: u32 BE]["IFRS"]...    blorb container
//!         ["GLUL"]...                         glulx, recognized and rejected
//! ```
//!
//! Every stage reports failure as a value. Nothing in this crate terminates the
//! process; the binary maps [`ErrorKind`] to an exit status.

mod error;
mod format;
mod locator;
mod program;
mod reader;
mod types;

pub use error::{ClassifyError, ErrorKind, LoadError, LocateError, ReadError};
pub use format::classify;
pub use locator::{SEARCH_PATH_ENV, SearchPath, expand_search_dir, locate};
pub use program::Program;
pub use reader::read;
pub use types::{ChunkTag, FormatTag, LoadedImage, LocatedResource, ResourceRequest};

/// Magic tag opening every IFF container: "FORM" in ASCII.
pub const FORM_MAGIC: ChunkTag = ChunkTag(*b"FORM");

/// IFF form type identifying a blorb resource collection: "IFRS" in ASCII.
pub const BLORB_FORM_TYPE: ChunkTag = ChunkTag(*b"IFRS");

/// Magic tag opening a Glulx story file: "GLUL" in ASCII.
pub const GLULX_MAGIC: ChunkTag = ChunkTag(*b"GLUL");

/// Size of a chunk tag in bytes.
pub const TAG_SIZE: usize = 4;

/// Header size needed to classify an IFF container: tag + length + form type.
pub const FORM_HEADER_SIZE: usize = 12;

/// Lowest Z-Machine version accepted for a raw story file.
pub const MIN_ZCODE_VERSION: u8 = 1;

/// Highest Z-Machine version accepted for a raw story file.
pub const MAX_ZCODE_VERSION: u8 = 8;

/// Exit status for a story file that could not be found or read (`EX_NOINPUT`).
pub const EXIT_NOT_FOUND: u8 = 66;

/// Exit status for a story file that is present but malformed or unsupported
/// (`EX_DATAERR`).
pub const EXIT_MALFORMED: u8 = 65;
