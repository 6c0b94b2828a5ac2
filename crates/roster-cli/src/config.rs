//! Roster file location.

use std::path::{Path, PathBuf};

/// Default roster filename, expected beside the installed executable.
pub const DEFAULT_ROSTER_FILENAME: &str = "roster.csv";

/// Environment variable overriding the roster location.
pub const ROSTER_FILE_ENV: &str = "ROSTER_FILE";

/// Resolves the roster path: explicit flag, then `ROSTER_FILE`, then the
/// default filename beside the executable. The filename has drifted across
/// sheet revisions, so it is configuration rather than a hardcoded constant.
pub fn resolve_roster_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(from_env) = std::env::var(ROSTER_FILE_ENV)
        && !from_env.trim().is_empty()
    {
        return PathBuf::from(from_env);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ROSTER_FILENAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_roster_path(Some(Path::new("/data/characters.csv")));
        assert_eq!(path, PathBuf::from("/data/characters.csv"));
    }

    #[test]
    fn default_resolution_ends_with_the_default_filename() {
        // Only meaningful when the env override is not set in the test
        // environment.
        if std::env::var(ROSTER_FILE_ENV).is_err() {
            let path = resolve_roster_path(None);
            assert!(path.ends_with(DEFAULT_ROSTER_FILENAME));
        }
    }
}
