//! Change summaries for audit logging
//!
//! Produces a short human-readable description of the fields that differ
//! between two versions of a contact.

use crate::models::Contact;

/// Longest field value shown in full before truncation
const MAX_SHOWN_CHARS: usize = 50;

/// Describe the fields that changed between `before` and `after`
///
/// Returns `None` when the two records are identical. Fields are listed in
/// record order: name, email, phone.
pub fn describe_changes(before: &Contact, after: &Contact) -> Option<String> {
    let fields = [
        ("name", &before.name, &after.name),
        ("email", &before.email, &after.email),
        ("phone", &before.phone, &after.phone),
    ];

    let changes: Vec<String> = fields
        .iter()
        .filter(|(_, old, new)| old != new)
        .map(|(field, old, new)| format!("{}: {} -> {}", field, quote(old), quote(new)))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote a field value, truncating long ones on a char boundary
fn quote(value: &str) -> String {
    if value.chars().count() > MAX_SHOWN_CHARS {
        let head: String = value.chars().take(MAX_SHOWN_CHARS - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", value)
    }
}
