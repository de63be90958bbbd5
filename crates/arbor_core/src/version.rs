//! Version-check collaborator -- queries GitHub releases for a newer build
//! and caches the result for the UI to surface as a toast.
//!
//! Arbor only notifies; it never replaces its own binary. Failures on this
//! path are logged and ignored -- the UI must never block on it.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result, bail};
use parking_lot::RwLock;
use tracing::info;

/// Repository owner/name on GitHub.
const GITHUB_REPO: &str = "arbor-ai/arbor";

/// Information about an available update.
#[derive(Debug, Clone)]
pub struct UpdateNotice {
    /// The new version string (e.g. "0.2.0").
    pub version: String,
    /// URL to the release page on GitHub.
    pub release_url: String,
}

/// Shared state for the version checker, safe to clone across threads.
#[derive(Clone)]
pub struct VersionChecker {
    inner: Arc<VersionCheckerInner>,
}

struct VersionCheckerInner {
    current_version: String,
    notice: RwLock<Option<UpdateNotice>>,
    checking: AtomicBool,
}

impl VersionChecker {
    /// Create a new checker with the current running version.
    pub fn new(current_version: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(VersionCheckerInner {
                current_version: current_version.into(),
                notice: RwLock::new(None),
                checking: AtomicBool::new(false),
            }),
        }
    }

    /// Returns the current running version.
    pub fn current_version(&self) -> &str {
        &self.inner.current_version
    }

    /// Returns the cached notice if a newer version is available.
    pub fn available_update(&self) -> Option<UpdateNotice> {
        self.inner.notice.read().clone()
    }

    /// Whether a check is currently in progress.
    pub fn is_checking(&self) -> bool {
        self.inner.checking.load(Ordering::Relaxed)
    }

    /// Check GitHub releases for a newer version.
    /// This is blocking -- call from a background thread.
    pub fn check(&self) -> Result<Option<UpdateNotice>> {
        if self.inner.checking.swap(true, Ordering::SeqCst) {
            bail!("Version check already in progress");
        }

        let result = self.do_check();

        self.inner.checking.store(false, Ordering::SeqCst);

        if let Ok(outcome) = &result {
            match outcome {
                Some(notice) => {
                    info!(
                        "Update available: {} -> {}",
                        self.inner.current_version, notice.version
                    );
                }
                None => {
                    info!(
                        "No update available (current: {})",
                        self.inner.current_version
                    );
                }
            }
            *self.inner.notice.write() = outcome.clone();
        }

        result
    }

    fn do_check(&self) -> Result<Option<UpdateNotice>> {
        let url = format!("https://api.github.com/repos/{GITHUB_REPO}/releases/latest");

        // Blocking reqwest client (we're on a background thread).
        let client = reqwest::blocking::Client::builder()
            .user_agent("arbor-version-check/1.0")
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        let resp = client.get(&url).send().context("Failed to reach GitHub")?;

        if !resp.status().is_success() {
            bail!("GitHub API returned status {}", resp.status());
        }

        let body: serde_json::Value = resp.json().context("Failed to parse response")?;

        let tag = body["tag_name"]
            .as_str()
            .context("No tag_name in response")?;

        let remote_version = tag.strip_prefix('v').unwrap_or(tag);

        if !is_newer(remote_version, &self.inner.current_version) {
            return Ok(None);
        }

        let release_url = body["html_url"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| format!("https://github.com/{GITHUB_REPO}/releases"));

        Ok(Some(UpdateNotice {
            version: remote_version.to_string(),
            release_url,
        }))
    }
}

/// Compare two semver-like version strings, return true if `remote > local`.
fn is_newer(remote: &str, local: &str) -> bool {
    let parse = |v: &str| -> (u32, u32, u32) {
        let parts: Vec<&str> = v.split('.').collect();
        let major = parts.first().and_then(|s| s.parse().ok()).unwrap_or(0);
        let minor = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(0);
        let patch = parts.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
        (major, minor, patch)
    };

    parse(remote) > parse(local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_newer() {
        assert!(is_newer("0.2.0", "0.1.4"));
        assert!(is_newer("0.1.5", "0.1.4"));
        assert!(is_newer("1.0.0", "0.9.9"));
        assert!(!is_newer("0.1.4", "0.1.4"));
        assert!(!is_newer("0.1.3", "0.1.4"));
        assert!(!is_newer("0.0.9", "0.1.4"));
    }

    #[test]
    fn test_is_newer_tolerates_short_versions() {
        assert!(is_newer("1.0", "0.9.9"));
        assert!(is_newer("2", "1.9.9"));
        assert!(!is_newer("1", "1.0.0"));
        assert!(!is_newer("garbage", "0.1.0"));
    }

    #[test]
    fn test_no_notice_before_any_check() {
        let checker = VersionChecker::new("0.1.4");
        assert!(checker.available_update().is_none());
        assert!(!checker.is_checking());
        assert_eq!(checker.current_version(), "0.1.4");
    }
}
