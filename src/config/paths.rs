//! Path management for the contacts book
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTS_BOOK_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/contacts-book` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ContactsError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "CONTACTS_BOOK_DIR";

/// Manages all paths used by the contacts book
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    base_dir: PathBuf,
}

impl ContactsPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ContactsError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactsError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactsError> {
    ProjectDirs::from("", "", "contacts-book")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine a home directory".into()))
}
