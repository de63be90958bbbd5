use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ArborConfig;

/// Key under which the sidebar open/closed flag is stored.
pub const SIDEBAR_STATE_KEY: &str = "sidebar:state";

/// Maximum retention for the persisted flag: one week.
pub const SIDEBAR_STATE_MAX_AGE: Duration = Duration::from_secs(604_800);

/// Durable store for the sidebar open/closed preference.
///
/// The flag lives in `~/.arbor/sidebar.state` as a single plain-text
/// `sidebar:state=true|false` line -- no structured format, no versioning.
/// Entries older than [`SIDEBAR_STATE_MAX_AGE`] (by file modification time)
/// are treated as absent, so a stale preference falls back to the
/// configured default.
///
/// Reads and writes are best-effort: storage problems degrade to "no
/// preference" and are never surfaced to the caller.
pub struct SidebarStateStore;

impl SidebarStateStore {
    fn state_path() -> Result<PathBuf> {
        Ok(ArborConfig::base_dir()?.join("sidebar.state"))
    }

    /// Read the persisted flag, or `None` when absent, expired, or
    /// unreadable.
    pub fn load() -> Option<bool> {
        let path = Self::state_path().ok()?;
        Self::load_from(&path)
    }

    /// Mirror the current open/closed state to disk. Failures are logged at
    /// debug level and otherwise ignored.
    pub fn save(open: bool) {
        let Ok(path) = Self::state_path() else {
            return;
        };
        if let Err(e) = Self::save_to(&path, open) {
            debug!("Sidebar state write skipped: {e}");
        }
    }

    /// Read from an explicit path (for testing without `~/.arbor/`).
    pub fn load_from(path: &Path) -> Option<bool> {
        Self::load_with_max_age(path, SIDEBAR_STATE_MAX_AGE)
    }

    /// Write to an explicit path (for testing without `~/.arbor/`).
    pub fn save_to(path: &Path, open: bool) -> Result<()> {
        let line = format!("{SIDEBAR_STATE_KEY}={open}");
        std::fs::write(path, line)
            .with_context(|| format!("Failed to write sidebar state: {}", path.display()))
    }

    /// Read with an explicit retention window. Exposed for expiry tests.
    pub fn load_with_max_age(path: &Path, max_age: Duration) -> Option<bool> {
        let meta = std::fs::metadata(path).ok()?;
        match meta.modified().map(|t| t.elapsed().unwrap_or_default()) {
            Ok(age) if age > max_age => {
                debug!("Sidebar state entry expired ({}s old)", age.as_secs());
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Sidebar state mtime unavailable: {e}");
                return None;
            }
        }

        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse the `sidebar:state=true|false` line. Anything else is "no
    /// preference".
    fn parse(content: &str) -> Option<bool> {
        let line = content.trim();
        let value = line.strip_prefix(SIDEBAR_STATE_KEY)?.strip_prefix('=')?;
        match value {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_path_in(dir: &TempDir) -> PathBuf {
        dir.path().join("sidebar.state")
    }

    #[test]
    fn test_round_trip_true_and_false() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        SidebarStateStore::save_to(&path, true).unwrap();
        assert_eq!(SidebarStateStore::load_from(&path), Some(true));

        SidebarStateStore::save_to(&path, false).unwrap();
        assert_eq!(SidebarStateStore::load_from(&path), Some(false));
    }

    #[test]
    fn test_missing_file_is_no_preference() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        assert_eq!(SidebarStateStore::load_from(&path), None);
    }

    #[test]
    fn test_corrupt_content_is_no_preference() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        for garbage in ["", "sidebar:state=", "sidebar:state=maybe", "open=true", "true"] {
            std::fs::write(&path, garbage).unwrap();
            assert_eq!(
                SidebarStateStore::load_from(&path),
                None,
                "content {garbage:?} should not parse"
            );
        }
    }

    #[test]
    fn test_expired_entry_is_no_preference() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        SidebarStateStore::save_to(&path, true).unwrap();

        // A zero retention window makes any entry stale.
        assert_eq!(
            SidebarStateStore::load_with_max_age(&path, Duration::ZERO),
            None
        );
        // The same entry is still valid under the real window.
        assert_eq!(SidebarStateStore::load_from(&path), Some(true));
    }

    #[test]
    fn test_stored_format_is_the_plain_text_contract() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        SidebarStateStore::save_to(&path, true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "sidebar:state=true");
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        SidebarStateStore::save_to(&path, true).unwrap();
        SidebarStateStore::save_to(&path, false).unwrap();
        assert_eq!(SidebarStateStore::load_from(&path), Some(false));
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        let tmp = TempDir::new().unwrap();
        let path = state_path_in(&tmp);

        std::fs::write(&path, "sidebar:state=true\n").unwrap();
        assert_eq!(SidebarStateStore::load_from(&path), Some(true));
    }
}
