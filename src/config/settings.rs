//! User settings for the contacts book
//!
//! Phone validation bounds, console display preferences and audit logging.
//! Every field has a default, so a partial or missing file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::ContactsPaths;
use crate::error::ContactsError;
use crate::models::PhoneRules;

/// Console display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Colour status messages
    #[serde(default = "default_true")]
    pub color: bool,

    /// Prefix menu entries and messages with icons
    #[serde(default = "default_true")]
    pub icons: bool,

    /// Wait for Enter after each action
    #[serde(default = "default_true")]
    pub pauses: bool,

    /// Show "Checking..." style progress dots
    #[serde(default = "default_true")]
    pub animations: bool,

    /// Short delay after a result, in milliseconds
    #[serde(default = "default_short_pause_ms")]
    pub short_pause_ms: u64,

    /// Longer delay used after errors, in milliseconds
    #[serde(default = "default_medium_pause_ms")]
    pub medium_pause_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: true,
            icons: true,
            pauses: true,
            animations: true,
            short_pause_ms: default_short_pause_ms(),
            medium_pause_ms: default_medium_pause_ms(),
        }
    }
}

/// Audit log settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSettings {
    /// Append every store mutation to the audit log
    #[serde(default)]
    pub enabled: bool,
}

/// User settings for the contacts book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Accepted phone number length
    #[serde(default)]
    pub phone: PhoneRules,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub audit: AuditSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_short_pause_ms() -> u64 {
    600
}

fn default_medium_pause_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            phone: PhoneRules::default(),
            display: DisplaySettings::default(),
            audit: AuditSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or defaults if there is no file
    pub fn load_or_create(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        if paths.is_initialized() {
            Self::load_from(&paths.settings_file())
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ContactsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ContactsError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ContactsError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot be used
    pub fn validate(&self) -> Result<(), ContactsError> {
        self.phone.check()
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactsPaths) -> Result<(), ContactsError> {
        paths.ensure_directories()?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), ContactsError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(path, contents).map_err(|e| {
            ContactsError::Io(format!(
                "Failed to write settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.phone.min_digits, 7);
        assert_eq!(settings.phone.max_digits, 15);
        assert!(settings.display.color);
        assert!(settings.display.pauses);
        assert!(!settings.audit.enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.phone = PhoneRules::new(10, 10).unwrap();
        settings.display.color = false;
        settings.audit.enabled = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"phone": {"max_digits": 12}, "display": {"icons": false}}"#)
            .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.phone.min_digits, 7);
        assert_eq!(settings.phone.max_digits, 12);
        assert!(!settings.display.icons);
        assert!(settings.display.animations);
        assert_eq!(settings.display.short_pause_ms, 600);
    }

    #[test]
    fn test_rejects_inverted_phone_bounds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"phone": {"min_digits": 12, "max_digits": 8}}"#).unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ContactsError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::load_from(&path),
            Err(ContactsError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(matches!(Settings::load_from(&path), Err(ContactsError::Io(_))));
    }
}
