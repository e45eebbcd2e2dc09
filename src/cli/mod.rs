//! Interactive console interface
//!
//! This module contains the menu loop and its actions, bridging line-based
//! terminal input with the contact store.

pub mod actions;
pub mod console;
pub mod menu;

pub use console::{Console, Pacing};
pub use menu::{run_menu, MenuChoice};
