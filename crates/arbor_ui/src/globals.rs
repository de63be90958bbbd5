//! GPUI Global wrappers for backend services.
//!
//! Defined in `arbor_ui` so that both the workspace (which reads them) and
//! the bootstrap code (which sets them) share the same types. Each wrapper
//! is a newtype around the service it wraps.

use gpui::Global;

use arbor_core::config::ArborConfig;
use arbor_core::version::VersionChecker;

/// Global wrapper for the loaded application configuration.
pub struct AppConfig(pub ArborConfig);
impl Global for AppConfig {}

/// Global wrapper for the version-check collaborator.
pub struct AppVersionCheck(pub VersionChecker);
impl Global for AppVersionCheck {}
