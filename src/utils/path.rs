//! `~` expansion for configured directories and user-supplied file paths.

use std::path::PathBuf;

/// Replace a leading `~` (alone or followed by `/`) with the home directory.
/// Paths are returned unchanged when no home directory is known.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(r) if r.is_empty() || r.starts_with('/') => r.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
