//! Catalog loading errors

use std::fmt::Display;
use std::path::PathBuf;

/// Everything that can go wrong at the catalog boundary.
///
/// The mathematical core itself is total: builders, the equation
/// interpreter, and the sampler degrade to documented defaults instead of
/// failing. Only loading the concept resource can genuinely error, and
/// callers need to tell a missing file apart from a corrupt one.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// (NotFound) The concept resource does not exist at the given path
    NotFound(PathBuf),
    /// (Unreadable) The concept resource exists but could not be read
    Unreadable(PathBuf, #[source] std::io::Error),
    /// (Parse) The concept resource is not valid catalog JSON
    Parse(#[from] serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound(path) => {
                write!(f, "(NotFound) concept catalog not found at: {}", path.display())
            },
            CatalogError::Unreadable(path, source) => {
                write!(
                    f,
                    "(Unreadable) concept catalog at {} could not be read: {}",
                    path.display(),
                    source
                )
            },
            CatalogError::Parse(source) => {
                write!(f, "(Parse) concept catalog is not valid JSON: {}", source)
            },
        }
    }
}
