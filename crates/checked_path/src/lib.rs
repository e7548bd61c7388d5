#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod expand;
mod filename;
mod kind;
mod validate;

pub use error::{Error, ParseKindError};
pub use expand::expand_user;
pub use filename::sanitize_filename;
pub use kind::EntityKind;
pub use validate::{validate_path, validate_path_default, CheckedPath};

pub type Result<T> = std::result::Result<T, Error>;

pub(in crate) mod helper {
    macro_rules! impl_try_from {
        ($src:ty => $target:ident) => {
            impl TryFrom<$src> for $target {
                type Error = crate::Error;
                fn try_from(raw: $src) -> crate::Result<Self> {
                    Self::new(raw, crate::EntityKind::default())
                }
            }
        };
    }
    pub(in crate) use impl_try_from;

    macro_rules! static_regex {
        ($re:literal $(,)?) => {{
            static RE: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
            RE.get_or_init(|| {
                regex::Regex::new($re).expect(&format!("Malformed regex '{}'. This is a bug.", $re))
            })
        }};
    }
    pub(in crate) use static_regex;
}

#[cfg(test)]
pub(in crate) mod test {
    use tempfile::TempDir;
    use temptree::temptree;

    /// `file` is a regular file, `dir` is a directory, `missing` does not exist.
    pub fn sample_tree() -> TempDir {
        temptree! {
            "file": "contents",
            dir: {
                "nested.txt": "",
            },
        }
    }

    macro_rules! tree_path {
        ($tree:expr, $name:literal) => {{
            $tree.path().join($name).to_string_lossy().into_owned()
        }};
    }

    pub(in crate) use tree_path;
}
