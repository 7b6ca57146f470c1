//! Container format classification of loaded story images.

use log::debug;

use crate::error::ClassifyError;
use crate::types::{ChunkTag, FormatTag, LoadedImage};
use crate::{
    BLORB_FORM_TYPE, FORM_HEADER_SIZE, FORM_MAGIC, GLULX_MAGIC, MAX_ZCODE_VERSION,
    MIN_ZCODE_VERSION, TAG_SIZE,
};

/// Decide what kind of story image `image` holds.
///
/// Rules are applied in order, because a leading ASCII tag byte can also look
/// like a version number:
///
/// 1. `GLUL` in any letter case is a Glulx image and is rejected.
/// 2. `FORM` is an IFF container; bytes 8..12 must read `IFRS`.
/// 3. Otherwise a first byte in `1..=8` is a raw z-code version.
/// 4. Anything else is unknown.
///
/// The result depends only on the bytes, so classifying the same image twice
/// always gives the same answer.
pub fn classify(image: &LoadedImage) -> Result<FormatTag, ClassifyError> {
    let bytes = image.bytes();
    let path = image.path();

    let tag = ChunkTag::read_at(bytes, 0).ok_or_else(|| ClassifyError::TruncatedImage {
        path: path.to_path_buf(),
        len: bytes.len(),
        required: TAG_SIZE,
    })?;
    debug!("Leading tag of '{}' is {tag:?}", path.display());

    if tag.to_ascii_uppercase() == GLULX_MAGIC {
        return Err(ClassifyError::UnsupportedType {
            path: path.to_path_buf(),
            tag,
        });
    }

    if tag == FORM_MAGIC {
        return classify_form(image);
    }

    let version = bytes[0];
    if (MIN_ZCODE_VERSION..=MAX_ZCODE_VERSION).contains(&version) {
        debug!("'{}' is a version {version} z-code image", path.display());
        return Ok(FormatTag::RawBytecode { version });
    }

    Err(ClassifyError::UnknownFormat {
        path: path.to_path_buf(),
        leading: tag.as_bytes().to_vec(),
    })
}

fn classify_form(image: &LoadedImage) -> Result<FormatTag, ClassifyError> {
    let bytes = image.bytes();
    let path = image.path();

    if bytes.len() < FORM_HEADER_SIZE {
        return Err(ClassifyError::TruncatedImage {
            path: path.to_path_buf(),
            len: bytes.len(),
            required: FORM_HEADER_SIZE,
        });
    }

    let form_length = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let form_type = ChunkTag([bytes[8], bytes[9], bytes[10], bytes[11]]);
    debug!(
        "'{}' is an IFF FORM of {form_length} bytes with form type {form_type:?}",
        path.display()
    );

    if form_type != BLORB_FORM_TYPE {
        return Err(ClassifyError::InvalidProgramFormat {
            path: path.to_path_buf(),
            form_type,
        });
    }

    Ok(FormatTag::ChunkedInteractiveFiction { form_length })
}
