use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::EntityKind;

/// Raised when a path does not name an entity of the requested kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("file not found: '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("not a directory: '{}'", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("no such file or directory: '{}'", .path.display())]
    NoSuchFileOrDirectory { path: PathBuf },
}

impl Error {
    /// The expanded path that failed the check.
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotFound { path }
            | Self::NotADirectory { path }
            | Self::NoSuchFileOrDirectory { path } => path,
        }
    }

    /// The kind the path was checked against.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::FileNotFound { .. } => EntityKind::File,
            Self::NotADirectory { .. } => EntityKind::Directory,
            Self::NoSuchFileOrDirectory { .. } => EntityKind::FileOrDirectory,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown entity kind '{0}' (expected one of: file, dir, any)")]
pub struct ParseKindError(pub(in crate) String);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_path_in_message() {
        let err = Error::FileNotFound {
            path: PathBuf::from("/etc"),
        };
        assert_eq!(err.to_string(), "file not found: '/etc'");

        let err = Error::NotADirectory {
            path: PathBuf::from("/etc/passwd"),
        };
        assert_eq!(err.to_string(), "not a directory: '/etc/passwd'");

        let err = Error::NoSuchFileOrDirectory {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.to_string(), "no such file or directory: '/nope'");
    }

    #[test]
    fn reports_path_and_kind() {
        let err = Error::NotADirectory {
            path: PathBuf::from("/a/b"),
        };
        assert_eq!(err.path(), Path::new("/a/b"));
        assert_eq!(err.kind(), EntityKind::Directory);
    }

    #[test]
    fn parse_kind_error_names_input() {
        let err = ParseKindError("socket".to_owned());
        assert!(err.to_string().contains("'socket'"));
    }
}
