//! Main menu loop
//!
//! Renders the numbered menu, dispatches one action per choice, and keeps
//! looping until the user exits or input runs out.

use std::io::{BufRead, Write};

use log::info;

use crate::display::{icons, Theme};
use crate::error::{ContactsError, ContactsResult};
use crate::storage::ContactStore;

use super::actions;
use super::console::Console;

const BANNER_WIDTH: usize = 48;

/// Entries of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Delete,
    Update,
    List,
    ClearAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        Self::Add,
        Self::Search,
        Self::Delete,
        Self::Update,
        Self::List,
        Self::ClearAll,
        Self::Exit,
    ];

    /// Parse a menu selection such as "3"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Update),
            "5" => Some(Self::List),
            "6" => Some(Self::ClearAll),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> usize {
        match self {
            Self::Add => 1,
            Self::Search => 2,
            Self::Delete => 3,
            Self::Update => 4,
            Self::List => 5,
            Self::ClearAll => 6,
            Self::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add New Contact",
            Self::Search => "Search For Contact",
            Self::Delete => "Delete Contact",
            Self::Update => "Update Contact",
            Self::List => "List Contacts",
            Self::ClearAll => "Clear All Contacts",
            Self::Exit => "Exit",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Add => icons::ADD,
            Self::Search => icons::SEARCH,
            Self::Delete => icons::DELETE,
            Self::Update => icons::UPDATE,
            Self::List => icons::LIST,
            Self::ClearAll => icons::CLEAR,
            Self::Exit => icons::EXIT,
        }
    }
}

/// Render the menu text
pub fn format_menu(theme: &Theme) -> String {
    let mut output = String::from("\n----- Contact Book Menu -----\n\n");
    for choice in MenuChoice::ALL {
        output.push_str(&format!(
            "{}. {}{}\n",
            choice.number(),
            theme.icon(choice.icon()),
            choice.label()
        ));
    }
    output.push_str("-----------------------------\n");
    output
}

/// Run the interactive menu until Exit or end of input
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactsResult<()> {
    let theme = *console.theme();
    console.blank()?;
    console.line("=".repeat(BANNER_WIDTH))?;
    console.line(format!(
        "{:^width$}",
        "CONTACTS BOOK — Simple CLI",
        width = BANNER_WIDTH
    ))?;
    console.line("=".repeat(BANNER_WIDTH))?;

    loop {
        console.print(format_menu(&theme))?;

        let outcome = match console.prompt("Enter a valid choice (1-7): ") {
            Ok(answer) => dispatch(store, console, &answer),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(true) => continue,
            Ok(false) => break,
            Err(ContactsError::InputClosed) => {
                info!("Input closed, leaving menu");
                console.blank()?;
                console.line("Program closed. Goodbye!")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }

    console.blank()?;
    console.line("=".repeat(45))?;
    console.success("Thank you for using Contacts Book — Bye!")?;
    console.line("=".repeat(45))?;
    console.wait_short()?;
    Ok(())
}

/// Run one menu selection; `false` means the user chose Exit
fn dispatch<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
    answer: &str,
) -> ContactsResult<bool> {
    let Some(choice) = MenuChoice::parse(answer) else {
        console.animate("Checking", 3)?;
        console.error("Invalid choice — try again.")?;
        console.wait_short()?;
        return Ok(true);
    };

    info!("Menu choice: {:?}", choice);
    match choice {
        MenuChoice::Add => actions::add_contact(store, console)?,
        MenuChoice::Search => actions::search_contacts(store, console)?,
        MenuChoice::Delete => actions::delete_contact(store, console)?,
        MenuChoice::Update => actions::update_contact(store, console)?,
        MenuChoice::List => actions::list_contacts(store, console)?,
        MenuChoice::ClearAll => actions::clear_all_contacts(store, console)?,
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::Pacing;
    use crate::models::Validator;
    use std::io::Cursor;

    fn run(input: &str, store: &mut ContactStore) -> String {
        run_bytes(input.as_bytes(), store)
    }

    fn run_bytes(input: &[u8], store: &mut ContactStore) -> String {
        let mut console = Console::new(
            Cursor::new(input.to_vec()),
            Vec::new(),
            Theme::plain(),
            Pacing::none(),
        );
        run_menu(store, &mut console).unwrap();
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::ClearAll));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_format_menu_lists_every_entry() {
        let menu = format_menu(&Theme::plain());
        assert!(menu.contains("1. Add New Contact"));
        assert!(menu.contains("6. Clear All Contacts"));
        assert!(menu.contains("7. Exit"));
    }

    #[test]
    fn test_exit_immediately() {
        let mut store = ContactStore::new(Validator::default());
        let out = run("7\n", &mut store);

        assert!(out.contains("CONTACTS BOOK — Simple CLI"));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_invalid_choice_loops() {
        let mut store = ContactStore::new(Validator::default());
        let out = run("9\n7\n", &mut store);

        assert!(out.contains("Invalid choice — try again."));
        assert_eq!(out.matches("Contact Book Menu").count(), 2);
    }

    #[test]
    fn test_session_add_delete_search() {
        let mut store = ContactStore::new(Validator::default());
        let input = "1\nAlice\nalice@mail.com\n1234567\n\
                     1\nBob\nbob@x.com\n7654321012\n\
                     3\nalice\nyes\n\
                     2\nbob\n\
                     7\n";
        let out = run(input, &mut store);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().name, "Bob");
        assert!(out.contains("Contact 'Alice' deleted."));
        assert!(out.contains("[1] Bob"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut store = ContactStore::new(Validator::default());
        let input = "1\n\n1\nAlice\nalice@mail\n5\n7\n";
        let out = run(input, &mut store);

        assert!(out.contains("Name required!"));
        assert!(out.contains("Invalid email 'alice@mail'"));
        assert!(out.contains("No contacts found."));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut store = ContactStore::new(Validator::default());
        let out = run_bytes(b"1\n\xff\xfe\nbad\n5\n7\n", &mut store);

        assert!(store.is_empty());
        assert!(out.contains("Invalid email 'bad'"));
        assert!(out.contains("No contacts found."));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut store = ContactStore::new(Validator::default());
        let out = run("1\nAlice\n", &mut store);

        assert!(store.is_empty());
        assert!(out.contains("Program closed. Goodbye!"));
    }
}
