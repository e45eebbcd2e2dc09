//! Audit entry data structures
//!
//! Defines the operations that can be audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

use super::diff::describe_changes;

/// Types of store mutations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact fields were replaced
    Update,
    /// Contact was removed
    Delete,
    /// Every contact was removed
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the contact store with optional before/after
/// values for tracking changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Store position affected; absent for clears
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Name of the affected contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    /// Record before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Contact>,

    /// Record after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Contact>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, position: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            position,
            contact_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an add
    pub fn create(position: usize, contact: &Contact) -> Self {
        Self {
            contact_name: Some(contact.name.clone()),
            after: Some(contact.clone()),
            ..Self::new(Operation::Create, Some(position))
        }
    }

    /// Create a new audit entry for an update
    pub fn update(position: usize, before: &Contact, after: &Contact) -> Self {
        Self {
            contact_name: Some(after.name.clone()),
            before: Some(before.clone()),
            after: Some(after.clone()),
            diff_summary: describe_changes(before, after),
            ..Self::new(Operation::Update, Some(position))
        }
    }

    /// Create a new audit entry for a delete
    pub fn delete(position: usize, contact: &Contact) -> Self {
        Self {
            contact_name: Some(contact.name.clone()),
            before: Some(contact.clone()),
            ..Self::new(Operation::Delete, Some(position))
        }
    }

    /// Create a new audit entry for a clear
    pub fn clear(removed: usize) -> Self {
        Self {
            diff_summary: Some(format!("removed {} contact(s)", removed)),
            ..Self::new(Operation::Clear, None)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(position) = self.position {
            output.push_str(&format!(" #{}", position + 1));
        }

        if let Some(name) = &self.contact_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
