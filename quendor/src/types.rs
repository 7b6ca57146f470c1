//! Values flowing through the loading pipeline.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A four byte IFF-style tag.
///
/// Tags are compared byte for byte. For display each byte is decoded as a
/// latin-1 character, so any byte sequence renders without loss.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    /// Read a tag from `bytes[offset..offset + 4]`, if the slice is long enough.
    pub fn read_at(bytes: &[u8], offset: usize) -> Option<Self> {
        let window = bytes.get(offset..offset.checked_add(4)?)?;
        let tag: [u8; 4] = window.try_into().ok()?;
        Some(Self(tag))
    }

    /// The tag with ASCII letters upper-cased.
    pub fn to_ascii_uppercase(self) -> Self {
        Self(self.0.map(|b| b.to_ascii_uppercase()))
    }

    /// The raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|&b| char::from(b)).collect();
        f.write_str(&text)
    }
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkTag({:?} {:02x?})", self.to_string(), self.0)
    }
}

/// The name or path a user asked to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest(String);

impl ResourceRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a requested resource was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedResource {
    /// Path of the matching regular file.
    pub path: PathBuf,
    /// Every directory that was part of the search, in probe order.
    pub searched: Vec<PathBuf>,
}

impl LocatedResource {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The complete contents of a story file, read in one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedImage {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl LoadedImage {
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// Path the image was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The leading byte, which holds the version number of a raw story file.
    pub fn version(&self) -> Option<u8> {
        self.bytes.first().copied()
    }
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Classification of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// A bare z-code story file.
    RawBytecode {
        /// Z-Machine version from the first header byte.
        version: u8,
    },
    /// A blorb (`FORM`/`IFRS`) container wrapping a z-code resource.
    ChunkedInteractiveFiction {
        /// Length field of the outer `FORM` chunk, as recorded in the file.
        form_length: u32,
    },
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatTag::RawBytecode { version } => write!(f, "z-code (version {version})"),
            FormatTag::ChunkedInteractiveFiction { .. } => f.write_str("blorb (IFRS)"),
        }
    }
}
