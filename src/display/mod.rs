//! Display formatting for terminal output
//!
//! Contact blocks, pick lists, headings and styled status messages.

pub mod contact;
pub mod style;

pub use contact::{format_contact_block, format_contact_list, format_heading, format_pick_list};
pub use style::{icons, MessageKind, Theme};
