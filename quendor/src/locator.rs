//! Story file lookup across the configured search directories.

use std::{
    env, io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::LocateError;
use crate::types::{LocatedResource, ResourceRequest};

/// Environment variable naming the secondary search directory.
pub const SEARCH_PATH_ENV: &str = "QUENDOR_PATH";

/// Ordered directories probed for a story file.
///
/// There are always exactly two candidates: the working directory first, then
/// the configured search directory. An unset search directory is kept as an
/// empty path, which never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    current_dir: PathBuf,
    search_dir: PathBuf,
}

impl SearchPath {
    pub fn new(current_dir: impl Into<PathBuf>, search_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            search_dir: search_dir.into(),
        }
    }

    /// Build from the process working directory and an explicit, unexpanded
    /// search directory.
    pub fn with_search_dir(raw: Option<&str>) -> io::Result<Self> {
        let current_dir = env::current_dir()?;
        let search_dir = expand_search_dir(raw.unwrap_or_default(), |name| env::var(name).ok());
        Ok(Self::new(current_dir, search_dir))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    /// Candidate directories in probe order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        vec![self.current_dir.clone(), self.search_dir.clone()]
    }
}

/// Expand a search directory setting.
///
/// A leading `~` becomes the user's home directory, and `$VAR` or `${VAR}` are
/// replaced by the value `lookup` returns for them. References that cannot be
/// resolved are kept as written.
pub fn expand_search_dir<F>(raw: &str, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    expand_with_home(raw, dirs::home_dir().as_deref(), lookup)
}

fn expand_with_home<F>(raw: &str, home: Option<&Path>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;

    if let Some(tail) = rest.strip_prefix('~')
        && (tail.is_empty() || tail.starts_with('/') || tail.starts_with('\\'))
        && let Some(home) = home
    {
        expanded.push_str(&home.to_string_lossy());
        rest = tail;
    }

    while let Some(pos) = rest.find('$') {
        expanded.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        if name.is_empty() {
            expanded.push('$');
            rest = after;
            continue;
        }
        match lookup(name) {
            Some(value) => expanded.push_str(&value),
            None => expanded.push_str(&rest[pos..pos + 1 + consumed]),
        }
        rest = &after[consumed..];
    }
    expanded.push_str(rest);

    PathBuf::from(expanded)
}

/// Find the first candidate directory holding a regular file named `name`.
pub fn locate(name: &str, search: &SearchPath) -> Result<LocatedResource, LocateError> {
    let request = ResourceRequest::new(name);
    let searched = search.candidates();

    for dir in &searched {
        if dir.as_os_str().is_empty() {
            debug!("Skipping unset search directory for '{request}'");
            continue;
        }
        let candidate = dir.join(request.name());
        debug!("Probing '{}'", candidate.display());
        if candidate.is_file() {
            debug!("Located '{request}' at '{}'", candidate.display());
            return Ok(LocatedResource {
                path: candidate,
                searched,
            });
        }
    }

    Err(LocateError::UnableToLocate {
        name: request.name().to_string(),
        searched,
    })
}
