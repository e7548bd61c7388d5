use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::{expand_user, EntityKind, Result};

/// Expands `raw` and confirms that it names an entity of the given kind.
///
/// The returned path is the expanded input rebuilt from its components (see
/// [`expand_user`]): it is not made absolute and symlinks are not resolved.
///
/// # Errors
///
/// Returns the kind-specific [`Error`](crate::Error) when the expanded path
/// fails [`EntityKind::exists`].
#[instrument(skip(raw), fields(raw = raw.as_ref()))]
pub fn validate_path<S: AsRef<str>>(raw: S, kind: EntityKind) -> Result<PathBuf> {
    let path = expand_user(raw);
    if kind.exists(&path) {
        Ok(path)
    } else {
        debug!(path = %path.display(), %kind, "path failed existence check");
        Err(kind.not_found(path))
    }
}

/// [`validate_path`] accepting either a file or a directory.
///
/// # Errors
///
/// Returns [`Error::NoSuchFileOrDirectory`](crate::Error::NoSuchFileOrDirectory)
/// when nothing exists at the expanded path.
pub fn validate_path_default<S: AsRef<str>>(raw: S) -> Result<PathBuf> {
    validate_path(raw, EntityKind::FileOrDirectory)
}

/// A path that passed [`validate_path`], along with the kind it was checked
/// against.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub struct CheckedPath {
    inner: PathBuf,
    kind: EntityKind,
}

impl CheckedPath {
    pub fn new<S: AsRef<str>>(raw: S, kind: EntityKind) -> Result<Self> {
        let inner = validate_path(raw, kind)?;
        Ok(Self { inner, kind })
    }

    /// The validated path.
    pub fn as_path(&self) -> &Path {
        self.inner.as_path()
    }

    /// The kind this path was confirmed to be.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.inner
    }

    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl AsRef<Path> for CheckedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<CheckedPath> for PathBuf {
    fn from(path: CheckedPath) -> Self {
        path.inner
    }
}

impl fmt::Display for CheckedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.display(), f)
    }
}

crate::helper::impl_try_from!(&str => CheckedPath);
crate::helper::impl_try_from!(String => CheckedPath);
crate::helper::impl_try_from!(&String => CheckedPath);
