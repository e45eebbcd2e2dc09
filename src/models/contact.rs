//! Contact model
//!
//! A contact is a name, an email address and a phone number. Field rules live
//! in the validation module; this module only holds the data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, stored trimmed
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, digits only
    pub phone: String,
}

impl Contact {
    /// Create a new contact
    ///
    /// The name is trimmed; email and phone are taken as given.
    pub fn new(
        name: impl AsRef<str>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Normalize a name for matching
    pub fn normalize_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Check if this contact's name contains `query` (case-insensitive)
    pub fn name_contains(&self, query: &str) -> bool {
        Self::normalize_name(&self.name).contains(&Self::normalize_name(query))
    }

    /// Apply a patch in place. Callers validate the patch first.
    pub(crate) fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.phone)
    }
}

/// Field replacements for an update
///
/// `None` keeps the current value of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactPatch {
    /// An empty patch that changes nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replace the phone
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
