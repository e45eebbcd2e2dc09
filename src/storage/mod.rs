//! Storage layer for the contacts book
//!
//! Contacts are held in memory for the lifetime of the process. There is no
//! on-disk format; the audit log is the only file a store may write.

pub mod contacts;

pub use contacts::ContactStore;
