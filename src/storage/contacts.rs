//! In-memory contact store
//!
//! An ordered list of contacts that lives for the duration of the process.
//! Every mutation validates first and writes second, so a failed call leaves
//! the list untouched.

use log::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ContactsError, ContactsResult};
use crate::models::{Contact, ContactPatch, Validator};

/// Ordered, validated collection of contacts
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    validator: Validator,
    audit: Option<AuditLogger>,
}

impl ContactStore {
    /// Create an empty store using the given validation rules
    pub fn new(validator: Validator) -> Self {
        Self {
            contacts: Vec::new(),
            validator,
            audit: None,
        }
    }

    /// Record every successful mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate and append a contact, returning its position
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> ContactsResult<usize> {
        self.validator.name(name)?;
        self.validator.email(email)?;
        self.validator.phone(phone)?;

        let contact = Contact::new(name, email, phone);
        let index = self.contacts.len();
        debug!("Adding contact '{}' at position {}", contact.name, index);

        self.audit(|| AuditEntry::create(index, &contact));
        self.contacts.push(contact);
        Ok(index)
    }

    /// Case-insensitive substring search on names, in store order
    pub fn find_by_name(&self, query: &str) -> Vec<(usize, &Contact)> {
        let matches: Vec<_> = self
            .contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.name_contains(query))
            .collect();

        debug!("Name search '{}' matched {} contact(s)", query, matches.len());
        matches
    }

    /// Replace the provided fields of the contact at `index`
    ///
    /// All provided fields are validated before any is written.
    pub fn update(&mut self, index: usize, patch: ContactPatch) -> ContactsResult<Contact> {
        let len = self.contacts.len();
        if index >= len {
            return Err(ContactsError::out_of_range(index, len));
        }

        if let Some(name) = &patch.name {
            self.validator.name(name)?;
        }
        if let Some(email) = &patch.email {
            self.validator.email(email)?;
        }
        if let Some(phone) = &patch.phone {
            self.validator.phone(phone)?;
        }

        let before = self.contacts[index].clone();
        self.contacts[index].apply(patch);
        let after = self.contacts[index].clone();
        debug!("Updated contact at position {}", index);

        self.audit(|| AuditEntry::update(index, &before, &after));
        Ok(after)
    }

    /// Remove and return the contact at `index`
    pub fn delete(&mut self, index: usize) -> ContactsResult<Contact> {
        let len = self.contacts.len();
        if index >= len {
            return Err(ContactsError::out_of_range(index, len));
        }

        let removed = self.contacts.remove(index);
        debug!("Deleted contact '{}' from position {}", removed.name, index);

        self.audit(|| AuditEntry::delete(index, &removed));
        Ok(removed)
    }

    /// Remove every contact, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.contacts.len();
        self.contacts.clear();
        debug!("Cleared {} contact(s)", removed);

        self.audit(|| AuditEntry::clear(removed));
        removed
    }

    /// All contacts in current order
    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Write an audit entry if auditing is on
    ///
    /// The mutation has already happened; a failed write is only reported.
    fn audit(&self, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry()) {
                warn!("Audit log {} not updated: {}", logger.path().display(), e);
            }
        }
    }
}
