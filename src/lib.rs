//! Contacts Book - terminal-based contact management
//!
//! This library provides the core of a single-user contact book: an
//! in-memory, validated list of contacts and the interactive menu that drives
//! it from a terminal.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The contact record and field validation
//! - `storage`: The in-memory contact store
//! - `audit`: Optional append-only log of store mutations
//! - `display`: Terminal formatting
//! - `cli`: The interactive menu loop
//!
//! # Example
//!
//! ```rust
//! use contacts::models::{ContactPatch, Validator};
//! use contacts::storage::ContactStore;
//!
//! let mut store = ContactStore::new(Validator::default());
//! let index = store.add("Alice", "alice@mail.com", "1234567")?;
//! store.update(index, ContactPatch::new().phone("5550001111"))?;
//! assert_eq!(store.find_by_name("ali").len(), 1);
//! # Ok::<(), contacts::ContactsError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
