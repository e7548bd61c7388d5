use std::path::{is_separator, Component, Path, PathBuf};
use tracing::{trace, warn};

/// Replaces a leading `~` component with the current user's home directory.
///
/// Only `~` on its own or followed by a separator is expanded. `~name` and a
/// `~` anywhere else are kept as-is, as is the whole input when the home
/// directory cannot be determined.
///
/// The result is rebuilt from its components: repeated and trailing
/// separators and `.` components are dropped, and an empty path becomes `.`.
/// `..` and symlinks are left alone.
pub fn expand_user<S: AsRef<str>>(raw: S) -> PathBuf {
    let raw = raw.as_ref();

    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(is_separator) => {
            match dirs::home_dir() {
                Some(home) => {
                    let expanded = home.join(rest.trim_start_matches(is_separator));
                    trace!(path = raw, expanded = %expanded.display(), "expanded home directory");
                    expanded
                }
                None => {
                    warn!(path = raw, "unable to determine home directory, leaving path unexpanded");
                    PathBuf::from(raw)
                }
            }
        }
        _ => PathBuf::from(raw),
    };

    from_components(&expanded)
}

fn from_components(path: &Path) -> PathBuf {
    let rebuilt: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if rebuilt.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        rebuilt
    }
}
