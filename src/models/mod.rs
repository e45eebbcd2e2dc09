//! Core data models for the contacts book
//!
//! The contact record, partial updates, and the field validation rules.

pub mod contact;
pub mod validation;

pub use contact::{Contact, ContactPatch};
pub use validation::{validate_email, validate_name, validate_phone, PhoneRules, Validator};
