//! Menu actions
//!
//! One function per menu entry. Each reads its fields from the console, runs
//! a single store operation and renders the outcome. Data errors are reported
//! to the user and swallowed; only console I/O errors propagate.

use std::io::{BufRead, Write};

use crate::display::{
    format_contact_block, format_contact_list, format_heading, format_pick_list, icons,
};
use crate::error::{ContactsError, ContactsResult};
use crate::models::ContactPatch;
use crate::storage::ContactStore;

use super::console::Console;

/// Print a data error, then pause
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &ContactsError,
) -> ContactsResult<()> {
    console.animate("Checking", 3)?;
    console.error(&err.to_string())?;
    console.wait_medium()?;
    console.pause()
}

/// Print a warning, then pause
fn notice<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> ContactsResult<()> {
    console.warn(text)?;
    console.wait_short()?;
    console.pause()
}

/// Print a success message, then pause
fn done<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> ContactsResult<()> {
    console.success(text)?;
    console.wait_short()?;
    console.pause()
}

/// Prompt for one field and check it before moving on
///
/// Returns `None` after reporting a validation failure.
fn read_field<R, W, F>(
    console: &mut Console<R, W>,
    label: &str,
    check: F,
) -> ContactsResult<Option<String>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&str) -> ContactsResult<()>,
{
    let value = console.prompt(label)?;
    match check(&value) {
        Ok(()) => Ok(Some(value)),
        Err(e) if e.is_validation() => {
            report(console, &e)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Add a new contact
pub fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::ADD, "Add New Contact"))?;

    let validator = *store.validator();
    let Some(name) = read_field(console, "Name: ", |v| validator.name(v))? else {
        return Ok(());
    };
    let Some(email) = read_field(console, "Email: ", |v| validator.email(v))? else {
        return Ok(());
    };
    let rules = validator.phone_rules();
    let phone_label = format!(
        "Phone ({}-{} digits): ",
        rules.min_digits, rules.max_digits
    );
    let Some(phone) = read_field(console, &phone_label, |v| validator.phone(v))? else {
        return Ok(());
    };

    console.animate("Saving", 2)?;
    match store.add(&name, &email, &phone) {
        Ok(_) => done(console, "Contact added successfully!"),
        Err(e) if e.is_validation() => report(console, &e),
        Err(e) => Err(e),
    }
}

/// Find one contact by name, asking the user to pick among several matches
///
/// Returns the store position, or `None` after telling the user why not.
fn select_contact<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    verb: &str,
) -> ContactsResult<Option<usize>> {
    if store.is_empty() {
        notice(console, &format!("No contacts to {}.", verb))?;
        return Ok(None);
    }

    let query = console.prompt("Name: ")?;
    if query.is_empty() {
        report(console, &ContactsError::InvalidName)?;
        return Ok(None);
    }

    let matches = store.find_by_name(&query);
    match matches.len() {
        0 => {
            console.error("No matching contact found.")?;
            console.wait_short()?;
            console.pause()?;
            Ok(None)
        }
        1 => Ok(Some(matches[0].0)),
        n => {
            console.blank()?;
            console.print(format_pick_list(&matches))?;
            console.blank()?;
            let positions: Vec<usize> = matches.iter().map(|(i, _)| *i).collect();

            let answer =
                console.prompt(&format!("Select contact number to {} (1-{}): ", verb, n))?;
            match answer.parse::<usize>() {
                Ok(choice) if (1..=n).contains(&choice) => Ok(Some(positions[choice - 1])),
                Ok(_) => {
                    console.error("Invalid selection!")?;
                    console.pause()?;
                    Ok(None)
                }
                Err(_) => {
                    console.error("Please enter a valid number!")?;
                    console.pause()?;
                    Ok(None)
                }
            }
        }
    }
}

/// Search contacts by name
pub fn search_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::SEARCH, "Search Contacts"))?;

    if store.is_empty() {
        return notice(console, "No contacts to search.");
    }

    let query = console.prompt("Enter name: ")?;
    if query.is_empty() {
        return report(console, &ContactsError::InvalidName);
    }

    let matches = store.find_by_name(&query);
    if matches.is_empty() {
        console.error("No contact found.")?;
        console.wait_short()?;
        return console.pause();
    }

    console.blank()?;
    for (index, contact) in &matches {
        console.print(format_contact_block(&theme, index + 1, contact))?;
    }
    console.success(&format!("Found {} contact(s)", matches.len()))?;
    console.pause()
}

/// Delete a contact after confirmation
pub fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::DELETE, "Delete Contact"))?;

    let Some(index) = select_contact(store, console, "delete")? else {
        return Ok(());
    };

    if let Some(contact) = store.get(index) {
        console.print(format_contact_block(&theme, index + 1, contact))?;
    }
    let confirm = console.prompt("Delete this contact? (yes/no): ")?;
    if confirm.to_lowercase() != "yes" {
        console.animate("Cancelling", 3)?;
        return notice(console, "Delete cancelled.");
    }

    match store.delete(index) {
        Ok(removed) => done(console, &format!("Contact '{}' deleted.", removed.name)),
        Err(e) if e.is_out_of_range() => report(console, &e),
        Err(e) => Err(e),
    }
}

/// Update fields of a contact; blank answers keep the current value
pub fn update_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::UPDATE, "Update Contact"))?;

    let Some(index) = select_contact(store, console, "update")? else {
        return Ok(());
    };
    let Some(current) = store.get(index).cloned() else {
        return report(console, &ContactsError::out_of_range(index, store.len()));
    };

    console.print(format_contact_block(&theme, index + 1, &current))?;
    console.info("Leave a field blank to keep its current value.")?;

    let mut patch = ContactPatch::new();
    let name = console.prompt(&format!("New name [{}]: ", current.name))?;
    if !name.is_empty() {
        patch = patch.name(name);
    }
    let email = console.prompt(&format!("New email [{}]: ", current.email))?;
    if !email.is_empty() {
        patch = patch.email(email);
    }
    let phone = console.prompt(&format!("New phone [{}]: ", current.phone))?;
    if !phone.is_empty() {
        patch = patch.phone(phone);
    }

    if patch.is_empty() {
        return notice(console, "Nothing to update.");
    }

    console.animate("Saving", 2)?;
    match store.update(index, patch) {
        Ok(updated) => {
            console.print(format_contact_block(&theme, index + 1, &updated))?;
            done(console, "Contact updated.")
        }
        Err(e) if e.is_validation() || e.is_out_of_range() => report(console, &e),
        Err(e) => Err(e),
    }
}

/// List every contact in store order
pub fn list_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::LIST, "Contact List"))?;

    let contacts = store.list_all();
    if contacts.is_empty() {
        return notice(console, "No contacts found. Add your first contact!");
    }

    console.print(format_contact_list(&theme, contacts))?;
    console.success(&format!("End of list — Total: {}", contacts.len()))?;
    console.pause()
}

/// Remove every contact once the user types "confirm"
pub fn clear_all_contacts<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.print(format_heading(&theme, icons::CLEAR, "Clear All Contacts"))?;

    if store.is_empty() {
        return notice(console, "No contacts to clear.");
    }

    console.warn("WARNING: This will permanently delete ALL contacts!")?;
    let confirm =
        console.prompt("Type 'confirm' to delete everything, or anything else to cancel: ")?;
    console.blank()?;
    if confirm.to_lowercase() != "confirm" {
        return notice(console, "Clear cancelled.");
    }

    let removed = store.clear();
    done(console, &format!("All contacts removed ({}).", removed))
}
