//! Store location configuration
//!
//! The tablet keeps its document store in a fixed directory; on the device
//! (and in most synced copies) that is `~/.local/share/remarkable/xochitl`.
//! The location is resolved once at startup, with precedence:
//! explicit `--folder` flag > `XOCHITL_DIR` environment variable > default.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default store directory
pub const STORE_DIR_ENV: &str = "XOCHITL_DIR";

/// Store directory relative to the home directory
const DEFAULT_STORE_RELATIVE: &[&str] = &[".local", "share", "remarkable", "xochitl"];

/// Resolved location of the metadata store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLocation {
    root: PathBuf,
}

impl StoreLocation {
    /// Resolve the store directory for this invocation
    pub fn resolve(flag: Option<&Path>) -> Self {
        if let Some(path) = flag {
            return StoreLocation {
                root: path.to_path_buf(),
            };
        }

        if let Some(dir) = env::var_os(STORE_DIR_ENV) {
            if !dir.is_empty() {
                return StoreLocation {
                    root: PathBuf::from(dir),
                };
            }
        }

        StoreLocation {
            root: default_store_dir(),
        }
    }

    /// Get the store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Default on-device location of the xochitl store
pub fn default_store_dir() -> PathBuf {
    let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    for part in DEFAULT_STORE_RELATIVE {
        dir.push(part);
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_dir_is_home_relative() {
        let dir = default_store_dir();
        assert!(dir.ends_with(Path::new(".local/share/remarkable/xochitl")));
    }

    #[test]
    fn test_explicit_flag_wins() {
        let location = StoreLocation::resolve(Some(Path::new("/tmp/store")));
        assert_eq!(location.root(), Path::new("/tmp/store"));
    }

    #[test]
    fn test_env_var_precedence() {
        // Single test mutates the variable to avoid racing parallel tests.
        env::set_var(STORE_DIR_ENV, "/tmp/from-env");
        let location = StoreLocation::resolve(None);
        assert_eq!(location.root(), Path::new("/tmp/from-env"));

        // Flag still beats the environment.
        let location = StoreLocation::resolve(Some(Path::new("/tmp/from-flag")));
        assert_eq!(location.root(), Path::new("/tmp/from-flag"));

        env::remove_var(STORE_DIR_ENV);
        let location = StoreLocation::resolve(None);
        assert_eq!(location.root(), default_store_dir());
    }
}
