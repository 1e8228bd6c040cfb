//! Shared config snapshot with explicit reload.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! The handle is built once at startup and passed to collaborators; there
//! is no process-global instance.

use crate::config::{ConfigError, SiteConfig};
use crate::{debug, utils::hash};
use anyhow::Result;
use arc_swap::ArcSwap;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

/// Read handle to the current [`SiteConfig`].
///
/// Readers get an `Arc` to a complete snapshot. A reload replaces the whole
/// snapshot at once, so no reader ever sees a partly updated record.
#[derive(Debug)]
pub struct ConfigHandle {
    current: ArcSwap<SiteConfig>,
    /// File the config was loaded from, `None` for in-memory configs.
    source: Option<PathBuf>,
    /// Hash of the file content behind `current`.
    hash: AtomicU64,
}

impl ConfigHandle {
    /// Wrap an already built config. `reload` is a no-op for such handles.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
            source: None,
            hash: AtomicU64::new(0),
        }
    }

    /// Load and validate `path`, remembering it for later reloads.
    pub fn open(path: &Path) -> Result<Self> {
        let loaded = SiteConfig::from_path(path)?.validated()?;

        Ok(Self {
            current: ArcSwap::from_pointee(loaded.config),
            source: Some(loaded.path),
            hash: AtomicU64::new(loaded.hash),
        })
    }

    /// Current snapshot.
    #[inline]
    pub fn get(&self) -> Arc<SiteConfig> {
        self.current.load_full()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Reload config from disk if content changed.
    ///
    /// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
    /// On error the previous snapshot stays in place.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = self.source.as_deref() else {
            return Ok(false);
        };

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let new_hash = hash::compute(&content);
        if new_hash == self.hash.load(Ordering::Relaxed) {
            debug!("reload"; "{} unchanged", path.display());
            return Ok(false);
        }

        let loaded = SiteConfig::from_content(path, &content)?.validated()?;

        self.current.store(Arc::new(loaded.config));
        self.hash.store(loaded.hash, Ordering::Relaxed);
        debug!("reload"; "{} reloaded", path.display());

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEST_REQUIRED;
    use tempfile::TempDir;

    fn write_config(dir: &Path, extra: &str) -> PathBuf {
        let path = dir.join("site.toml");
        fs::write(&path, format!("{TEST_REQUIRED}{extra}")).unwrap();
        path
    }

    #[test]
    fn test_in_memory_handle_never_reloads() {
        let handle = ConfigHandle::new(SiteConfig::default());
        assert!(handle.source().is_none());
        assert!(!handle.reload().unwrap());
    }

    #[test]
    fn test_reload_only_on_change() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "postPerPage = 5");

        let handle = ConfigHandle::open(&path).unwrap();
        let before = handle.get();
        assert_eq!(before.post_per_page.get(), 5);
        assert!(!handle.reload().unwrap());

        write_config(temp.path(), "postPerPage = 8");
        assert!(handle.reload().unwrap());
        assert_eq!(handle.get().post_per_page.get(), 8);

        // earlier snapshots are untouched
        assert_eq!(before.post_per_page.get(), 5);
    }

    #[test]
    fn test_failed_reload_keeps_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "");
        let handle = ConfigHandle::open(&path).unwrap();

        write_config(temp.path(), "dir = \"diagonal\"");
        assert!(handle.reload().is_err());
        assert_eq!(handle.get().title, "Test");
    }
}
