use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{validate_path, Error, ParseKindError, Result};

/// The kind of filesystem entity a path is required to name.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A regular file.
    File,
    /// A directory.
    #[serde(rename = "dir", alias = "directory")]
    Directory,
    /// Anything that exists.
    #[default]
    #[serde(rename = "any", alias = "file-or-dir")]
    FileOrDirectory,
}

impl EntityKind {
    /// Returns `true` if `path` names an entity of this kind.
    ///
    /// A missing path (or one that cannot be inspected) yields `false`.
    pub fn exists<P: AsRef<Path>>(self, path: P) -> bool {
        let path = path.as_ref();
        match self {
            Self::File => path.is_file(),
            Self::Directory => path.is_dir(),
            Self::FileOrDirectory => path.exists(),
        }
    }

    /// The error reported when `path` fails [`EntityKind::exists`].
    pub fn not_found<P: Into<PathBuf>>(self, path: P) -> Error {
        let path = path.into();
        match self {
            Self::File => Error::FileNotFound { path },
            Self::Directory => Error::NotADirectory { path },
            Self::FileOrDirectory => Error::NoSuchFileOrDirectory { path },
        }
    }

    /// A value parser that validates command line arguments against this kind.
    ///
    /// ```ignore
    /// #[clap(value_parser = EntityKind::Directory.parser())]
    /// output_dir: PathBuf,
    /// ```
    pub fn parser(self) -> impl Fn(&str) -> Result<PathBuf> + Clone + Send + Sync + 'static {
        move |raw: &str| validate_path(raw, self)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "dir"),
            Self::FileOrDirectory => write!(f, "any"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "dir" | "directory" => Ok(Self::Directory),
            "any" | "file-or-dir" => Ok(Self::FileOrDirectory),
            _ => Err(ParseKindError(s.to_owned())),
        }
    }
}
