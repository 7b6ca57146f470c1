//! The loaded and classified z-code program.

use log::info;

use crate::error::LoadError;
use crate::format::classify;
use crate::locator::{SearchPath, locate};
use crate::reader::read;
use crate::types::{FormatTag, LoadedImage, LocatedResource, ResourceRequest};

/// A story file that has been found, read and classified.
#[derive(Debug, Clone)]
pub struct Program {
    request: ResourceRequest,
    location: LocatedResource,
    image: LoadedImage,
    format: FormatTag,
}

impl Program {
    /// Locate `name` on `search`, read it and classify the image.
    pub fn load(name: &str, search: &SearchPath) -> Result<Self, LoadError> {
        let request = ResourceRequest::new(name);
        let location = locate(request.name(), search)?;
        let image = read(location.path())?;
        let format = classify(&image)?;
        info!(
            "Loaded '{}' from '{}' as {format} ({} bytes)",
            request,
            location.path().display(),
            image.len()
        );
        Ok(Self {
            request,
            location,
            image,
            format,
        })
    }

    pub fn request(&self) -> &ResourceRequest {
        &self.request
    }

    pub fn location(&self) -> &LocatedResource {
        &self.location
    }

    pub fn image(&self) -> &LoadedImage {
        &self.image
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }
}
