//! Field validation for contacts
//!
//! Pure checks over raw input strings. Nothing here touches the store.

use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, ContactsResult};

/// Default lower bound on phone digits
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 7;

/// Default upper bound on phone digits
pub const DEFAULT_MAX_PHONE_DIGITS: usize = 15;

/// Accepted phone length, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneRules {
    #[serde(default = "default_min_digits")]
    pub min_digits: usize,

    #[serde(default = "default_max_digits")]
    pub max_digits: usize,
}

fn default_min_digits() -> usize {
    DEFAULT_MIN_PHONE_DIGITS
}

fn default_max_digits() -> usize {
    DEFAULT_MAX_PHONE_DIGITS
}

impl Default for PhoneRules {
    fn default() -> Self {
        Self {
            min_digits: DEFAULT_MIN_PHONE_DIGITS,
            max_digits: DEFAULT_MAX_PHONE_DIGITS,
        }
    }
}

impl PhoneRules {
    /// Create rules, rejecting empty or inverted ranges
    pub fn new(min_digits: usize, max_digits: usize) -> ContactsResult<Self> {
        let rules = Self {
            min_digits,
            max_digits,
        };
        rules.check()?;
        Ok(rules)
    }

    /// Check that the bounds describe a usable range
    pub fn check(&self) -> ContactsResult<()> {
        if self.min_digits == 0 {
            return Err(ContactsError::Config(
                "phone.min_digits must be at least 1".into(),
            ));
        }
        if self.min_digits > self.max_digits {
            return Err(ContactsError::Config(format!(
                "phone.min_digits ({}) is greater than phone.max_digits ({})",
                self.min_digits, self.max_digits
            )));
        }
        Ok(())
    }
}

/// Validate a name: non-empty once trimmed
pub fn validate_name(name: &str) -> ContactsResult<()> {
    if name.trim().is_empty() {
        return Err(ContactsError::InvalidName);
    }
    Ok(())
}

/// Validate an email address
///
/// Accepted iff it has exactly one `@`, at least one `.` after that `@`, and
/// no whitespace anywhere.
pub fn validate_email(email: &str) -> ContactsResult<()> {
    let invalid = || ContactsError::InvalidEmail {
        value: email.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    if email.matches('@').count() != 1 {
        return Err(invalid());
    }

    match email.split_once('@') {
        Some((_, domain)) if domain.contains('.') => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validate a phone number against the given rules
pub fn validate_phone(phone: &str, rules: &PhoneRules) -> ContactsResult<()> {
    let len = phone.chars().count();
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());

    if !digits_only || len < rules.min_digits || len > rules.max_digits {
        return Err(ContactsError::InvalidPhone {
            value: phone.to_string(),
            min: rules.min_digits,
            max: rules.max_digits,
        });
    }
    Ok(())
}

/// Bundles the configured rules so a store can own its validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    phone: PhoneRules,
}

impl Validator {
    pub fn new(phone: PhoneRules) -> Self {
        Self { phone }
    }

    pub fn phone_rules(&self) -> &PhoneRules {
        &self.phone
    }

    pub fn name(&self, name: &str) -> ContactsResult<()> {
        validate_name(name)
    }

    pub fn email(&self, email: &str) -> ContactsResult<()> {
        validate_email(email)
    }

    pub fn phone(&self, phone: &str) -> ContactsResult<()> {
        validate_phone(phone, &self.phone)
    }
}
