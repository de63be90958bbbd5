pub mod agents;
pub mod config;
pub mod logging;
pub mod ui_state;
pub mod version;

pub use agents::{AgentDirectory, AgentEntry};
pub use config::ArborConfig;
pub use ui_state::{SIDEBAR_STATE_KEY, SIDEBAR_STATE_MAX_AGE, SidebarStateStore};
pub use version::{UpdateNotice, VersionChecker};
