//! Whole-file loading of story images.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::debug;

use crate::error::ReadError;
use crate::types::LoadedImage;

/// Read the entire file at `path` into memory.
///
/// The file handle is dropped on every return path. A read that ends with a
/// different number of bytes than the file reported is treated as a failure,
/// so a returned image is always complete.
pub fn read(path: &Path) -> Result<LoadedImage, ReadError> {
    let access = |source: io::Error| ReadError::UnableToAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(access)?;
    let file_size = file.metadata().map_err(access)?.len();
    let capacity = usize::try_from(file_size).map_err(|_| {
        access(io::Error::new(
            io::ErrorKind::OutOfMemory,
            format!("file of {file_size} bytes does not fit in memory"),
        ))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(capacity).map_err(|e| {
        access(io::Error::new(
            io::ErrorKind::OutOfMemory,
            format!("cannot allocate {file_size} bytes: {e}"),
        ))
    })?;
    reader.read_to_end(&mut bytes).map_err(access)?;

    if bytes.len() as u64 != file_size {
        return Err(access(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "read {} bytes but the file reported {file_size}",
                bytes.len()
            ),
        )));
    }

    debug!("Read {} bytes from '{}'", bytes.len(), path.display());
    Ok(LoadedImage::new(path, bytes))
}
