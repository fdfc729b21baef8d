use std::path::PathBuf;

// =============================================================================
// Version constants
// =============================================================================

/// Version of the running application, embedded at build time.
///
/// Compared against the `version` field of imported documents to decide
/// whether an export produced by another edition can be imported here.
pub const RUNNING_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Oldest export version the current edition still imports.
pub const EXPORT_COMPAT_FLOOR: &str = "2.0.0";

/// Returns the path to the data directory for sourcefresh.
/// Uses $XDG_DATA_HOME/sourcefresh if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/sourcefresh,
/// or ./sourcefresh if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("sourcefresh.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("sourcefresh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_version_is_a_recognizable_version() {
        assert!(crate::version::normalize_version(RUNNING_VERSION).is_some());
    }

    #[test]
    fn compat_floor_is_not_above_running_version() {
        assert!(crate::version::version_ge(RUNNING_VERSION, EXPORT_COMPAT_FLOOR));
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/sourcefresh"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/sourcefresh"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./sourcefresh"));
    }
}
