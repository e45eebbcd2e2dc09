//! Audit logging for the contacts book
//!
//! Records every store mutation (create, update, delete, clear) with
//! before/after values in an append-only JSON-lines file.
//!
//! - `AuditEntry`: one log entry with timestamp, operation, position and
//!   optional before/after records.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `describe_changes`: short summary of the fields an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
