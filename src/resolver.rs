use std::path::{Component, Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Image resolution
// ---------------------------------------------------------------------------

/// Why an identifier could not be turned into displayable content.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{identifier} was not found in {}", .dir.display())]
    NotFound { identifier: String, dir: PathBuf },

    #[error("{0:?} is not a plain file name")]
    InvalidIdentifier(String),

    #[error("{identifier} is not a readable image: {source}")]
    Unreadable {
        identifier: String,
        #[source]
        source: image::ImageError,
    },
}

/// Content ready for the egui image loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// `file://` URI understood by `egui_extras`' file loader.
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

/// Turns a catalog identifier into image content.
pub trait ImageResolver {
    fn resolve(&self, identifier: &str) -> Result<ResolvedImage, ResolveError>;
}

/// Resolves identifiers as file names inside one directory.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    root: PathBuf,
}

impl DirectoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageResolver for DirectoryResolver {
    fn resolve(&self, identifier: &str) -> Result<ResolvedImage, ResolveError> {
        if !is_plain_file_name(identifier) {
            return Err(ResolveError::InvalidIdentifier(identifier.to_string()));
        }

        let path = self.root.join(identifier);
        if !path.is_file() {
            return Err(ResolveError::NotFound {
                identifier: identifier.to_string(),
                dir: self.root.clone(),
            });
        }

        // Header probe only; full decoding is left to the egui loaders.
        let (width, height) =
            image::image_dimensions(&path).map_err(|source| ResolveError::Unreadable {
                identifier: identifier.to_string(),
                source,
            })?;

        Ok(ResolvedImage {
            uri: format!("file://{}", path.display()),
            width,
            height,
        })
    }
}

/// Exactly one normal path component: no separators, no `..`, no root.
fn is_plain_file_name(identifier: &str) -> bool {
    let mut components = Path::new(identifier).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
