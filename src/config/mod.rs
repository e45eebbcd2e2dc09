//! Configuration module for the contacts book
//!
//! - Per-user path resolution
//! - Settings persistence (phone rules, display, audit)

pub mod paths;
pub mod settings;

pub use paths::ContactsPaths;
pub use settings::{AuditSettings, DisplaySettings, Settings};
