//! Contact display formatting
//!
//! Formats contacts for terminal output as detail blocks and short pick lists.

use crate::models::Contact;

use super::style::{icons, Theme};

const BLOCK_WIDTH: usize = 36;
const PICK_LIST_WIDTH: usize = 40;

/// Format one contact as a block headed by its 1-based number
pub fn format_contact_block(theme: &Theme, number: usize, contact: &Contact) -> String {
    let mut output = String::new();
    output.push_str(&"=".repeat(BLOCK_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "[{}] {}{}\n",
        number,
        theme.icon(icons::USER),
        contact.name
    ));
    output.push_str(&format!(
        "    {}Phone: {}\n",
        theme.icon(icons::PHONE),
        contact.phone
    ));
    output.push_str(&format!(
        "    {}Email: {}\n",
        theme.icon(icons::EMAIL),
        contact.email
    ));
    output.push_str(&"-".repeat(BLOCK_WIDTH));
    output.push('\n');
    output
}

/// Format every contact of a store listing as blocks, numbered from 1
pub fn format_contact_list(theme: &Theme, contacts: &[Contact]) -> String {
    contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| format_contact_block(theme, i + 1, contact))
        .collect()
}

/// Format search matches as a numbered pick list
///
/// Numbers are 1-based positions in `matches`, not store positions.
pub fn format_pick_list(matches: &[(usize, &Contact)]) -> String {
    let mut output = String::new();
    output.push_str(&"=".repeat(PICK_LIST_WIDTH));
    output.push('\n');
    for (i, (_, contact)) in matches.iter().enumerate() {
        output.push_str(&format!("[{}] {} — {}\n", i + 1, contact.name, contact.phone));
    }
    output.push_str(&"=".repeat(PICK_LIST_WIDTH));
    output.push('\n');
    output
}

/// Heading line with an optional icon and an underline
pub fn format_heading(theme: &Theme, icon: &str, title: &str) -> String {
    format!("{}{}\n{}\n", theme.icon(icon), title, "-".repeat(BLOCK_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact::new("Alice", "alice@mail.com", "1234567")
    }

    #[test]
    fn test_format_contact_block() {
        let output = format_contact_block(&Theme::plain(), 3, &alice());

        assert!(output.contains("[3] Alice"));
        assert!(output.contains("Phone: 1234567"));
        assert!(output.contains("Email: alice@mail.com"));
    }

    #[test]
    fn test_format_contact_block_with_icons() {
        let output = format_contact_block(&Theme::default(), 1, &alice());
        assert!(output.contains("👤"));
        assert!(output.contains("📞"));
    }

    #[test]
    fn test_format_contact_list_numbers_from_one() {
        let contacts = vec![alice(), Contact::new("Bob", "bob@x.com", "7654321012")];
        let output = format_contact_list(&Theme::plain(), &contacts);

        assert!(output.contains("[1] Alice"));
        assert!(output.contains("[2] Bob"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_contact_list(&Theme::plain(), &[]).is_empty());
    }

    #[test]
    fn test_format_pick_list() {
        let alice = alice();
        let alina = Contact::new("Alina", "alina@mail.com", "2345678");
        let output = format_pick_list(&[(4, &alice), (9, &alina)]);

        assert!(output.contains("[1] Alice — 1234567"));
        assert!(output.contains("[2] Alina — 2345678"));
        assert!(!output.contains("[5]"));
    }

    #[test]
    fn test_format_heading() {
        let output = format_heading(&Theme::plain(), icons::ADD, "Add New Contact");
        assert!(output.starts_with("Add New Contact\n"));
    }
}
