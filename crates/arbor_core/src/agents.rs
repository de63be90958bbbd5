use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::ArborConfig;

/// One configured agent in the framework the client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEntry {
    pub id: String,
    pub name: String,
}

/// The client's navigation content: the roster of agents the user has
/// configured, read from `~/.arbor/agents.json`.
///
/// The roster is presentation input only -- a missing or corrupt file falls
/// back to the built-in default agent and never errors to the caller.
#[derive(Debug, Clone)]
pub struct AgentDirectory {
    pub agents: Vec<AgentEntry>,
}

impl AgentDirectory {
    /// Load the roster, degrading to the default on any failure.
    pub fn load() -> Self {
        match ArborConfig::base_dir() {
            Ok(base) => Self::load_from(&base.join("agents.json")),
            Err(e) => {
                warn!("Agent roster unavailable: {e}");
                Self::default()
            }
        }
    }

    /// Load from an explicit path (for testing without `~/.arbor/`).
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            debug!("No agent roster at {}, using default", path.display());
            return Self::default();
        };
        match serde_json::from_str::<Vec<AgentEntry>>(&content) {
            Ok(agents) if !agents.is_empty() => Self { agents },
            Ok(_) => Self::default(),
            Err(e) => {
                warn!("Agent roster parse failed, using default: {e}");
                Self::default()
            }
        }
    }
}

impl Default for AgentDirectory {
    fn default() -> Self {
        Self {
            agents: vec![AgentEntry {
                id: "default".into(),
                name: "Assistant".into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_default() {
        let tmp = TempDir::new().unwrap();
        let roster = AgentDirectory::load_from(&tmp.path().join("agents.json"));
        assert_eq!(roster.agents.len(), 1);
        assert_eq!(roster.agents[0].id, "default");
    }

    #[test]
    fn test_load_corrupt_file_yields_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("agents.json");
        std::fs::write(&path, "[{ broken").unwrap();

        let roster = AgentDirectory::load_from(&path);
        assert_eq!(roster.agents[0].id, "default");
    }

    #[test]
    fn test_load_empty_list_yields_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("agents.json");
        std::fs::write(&path, "[]").unwrap();

        let roster = AgentDirectory::load_from(&path);
        assert_eq!(roster.agents[0].id, "default");
    }

    #[test]
    fn test_load_configured_roster() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("agents.json");
        std::fs::write(
            &path,
            r#"[
                { "id": "scout", "name": "Scout" },
                { "id": "scribe", "name": "Scribe" }
            ]"#,
        )
        .unwrap();

        let roster = AgentDirectory::load_from(&path);
        assert_eq!(roster.agents.len(), 2);
        assert_eq!(roster.agents[0].name, "Scout");
        assert_eq!(roster.agents[1].id, "scribe");
    }
}
