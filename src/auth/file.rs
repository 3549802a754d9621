//! File-backed credential storage.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use log::{debug, warn};

use super::TokenStore;

/// One file per key under a directory.
///
/// Values are trimmed on read so a hand-edited file with a trailing newline
/// still reads back as the same credential. A missing or unreadable file
/// reads as absent.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store rooted at the platform config directory
    /// (`<config>/panelkit`). `None` when the platform has no config dir.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("panelkit")))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStore for FileTokenStore {
    #[tracing::instrument(skip(self))]
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => {
                let value = contents.trim().to_string();
                if value.is_empty() { None } else { Some(value) }
            }
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Failed to read credential {}: {}", key, e);
                }
                None
            }
        }
    }

    #[tracing::instrument(skip(self, value))]
    fn write(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(self.path_for(key), value));
        if let Err(e) = result {
            warn!("Failed to persist credential {}: {}", key, e);
        }
    }

    #[tracing::instrument(skip(self))]
    fn remove(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => debug!("Removed stored credential {}", key),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove credential {}: {}", key, e),
        }
    }
}
