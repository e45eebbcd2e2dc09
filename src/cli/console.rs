//! Line-based console I/O for the interactive menu
//!
//! Wraps a reader and a writer so the menu can run against stdin/stdout or
//! in-memory buffers. Pauses and animations are governed by `Pacing`.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::DisplaySettings;
use crate::display::{MessageKind, Theme};
use crate::error::{ContactsError, ContactsResult};

const DOT_DELAY: Duration = Duration::from_millis(400);

/// Timing behaviour of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Wait for Enter after each action
    pub pauses: bool,
    /// Show progress dots and short sleeps
    pub animations: bool,
    pub short: Duration,
    pub medium: Duration,
}

impl Pacing {
    /// No waiting of any kind
    pub fn none() -> Self {
        Self {
            pauses: false,
            animations: false,
            short: Duration::ZERO,
            medium: Duration::ZERO,
        }
    }

    pub fn from_settings(display: &DisplaySettings) -> Self {
        Self {
            pauses: display.pauses,
            animations: display.animations,
            short: Duration::from_millis(display.short_pause_ms),
            medium: Duration::from_millis(display.medium_pause_ms),
        }
    }
}

/// Interactive console over any buffered reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    theme: Theme,
    pacing: Pacing,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, theme: Theme, pacing: Pacing) -> Self {
        Self {
            input,
            output,
            theme,
            pacing,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `label`, read one line, and return it trimmed
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// line reaches validation as text instead of failing the session.
    /// Returns `InputClosed` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> ContactsResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            writeln!(self.output)?;
            return Err(ContactsError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Print text followed by a newline
    pub fn line(&mut self, text: impl Display) -> ContactsResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text as-is
    pub fn print(&mut self, text: impl Display) -> ContactsResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> ContactsResult<()> {
        self.line("")
    }

    /// Print a styled status line
    pub fn message(&mut self, kind: MessageKind, text: &str) -> ContactsResult<()> {
        let styled = self.theme.message(kind, text);
        self.line(styled)
    }

    pub fn info(&mut self, text: &str) -> ContactsResult<()> {
        self.message(MessageKind::Info, text)
    }

    pub fn success(&mut self, text: &str) -> ContactsResult<()> {
        self.message(MessageKind::Success, text)
    }

    pub fn warn(&mut self, text: &str) -> ContactsResult<()> {
        self.message(MessageKind::Warning, text)
    }

    pub fn error(&mut self, text: &str) -> ContactsResult<()> {
        self.message(MessageKind::Error, text)
    }

    /// Wait for Enter, if pauses are on
    pub fn pause(&mut self) -> ContactsResult<()> {
        if !self.pacing.pauses {
            return Ok(());
        }
        self.blank()?;
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    /// Print "word." "word.." "word..." on one line, then clear it
    pub fn animate(&mut self, word: &str, repeats: usize) -> ContactsResult<()> {
        if !self.pacing.animations {
            return Ok(());
        }
        for i in 0..repeats {
            let dots = ".".repeat(i % 3 + 1);
            write!(self.output, "\r{}{}   ", word, dots)?;
            self.output.flush()?;
            thread::sleep(DOT_DELAY);
        }
        write!(self.output, "\r")?;
        Ok(())
    }

    pub fn wait_short(&mut self) -> ContactsResult<()> {
        self.wait(self.pacing.short)
    }

    pub fn wait_medium(&mut self) -> ContactsResult<()> {
        self.wait(self.pacing.medium)
    }

    fn wait(&mut self, delay: Duration) -> ContactsResult<()> {
        if self.pacing.animations && !delay.is_zero() {
            self.output.flush()?;
            thread::sleep(delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str, pacing: Pacing) -> TestConsole {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Theme::plain(),
            pacing,
        )
    }

    fn written(console: &TestConsole) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_prompt_trims_input() {
        let mut console = console("  Alice  \n", Pacing::none());
        assert_eq!(console.prompt("Name: ").unwrap(), "Alice");
        assert_eq!(written(&console), "Name: ");
    }

    #[test]
    fn test_prompt_at_eof() {
        let mut console = console("", Pacing::none());
        assert!(matches!(
            console.prompt("Name: "),
            Err(ContactsError::InputClosed)
        ));
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(
            Cursor::new(vec![0xff, 0xfe, b'\n', b'n', b'e', b'x', b't', b'\n']),
            Vec::new(),
            Theme::plain(),
            Pacing::none(),
        );
        assert_eq!(console.prompt("> ").unwrap(), "\u{fffd}\u{fffd}");
        assert_eq!(console.prompt("> ").unwrap(), "next");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = console("7", Pacing::none());
        assert_eq!(console.prompt("> ").unwrap(), "7");
    }

    #[test]
    fn test_pause_disabled_reads_nothing() {
        let mut console = console("next\n", Pacing::none());
        console.pause().unwrap();
        assert_eq!(console.prompt("> ").unwrap(), "next");
    }

    #[test]
    fn test_pause_consumes_a_line() {
        let pacing = Pacing {
            pauses: true,
            ..Pacing::none()
        };
        let mut console = console("\nnext\n", pacing);
        console.pause().unwrap();
        assert!(written(&console).contains("Press Enter to continue..."));
        assert_eq!(console.prompt("> ").unwrap(), "next");
    }

    #[test]
    fn test_messages_use_theme() {
        let mut console = console("", Pacing::none());
        console.error("Invalid choice").unwrap();
        console.success("Done").unwrap();
        console.info("Hint").unwrap();
        assert_eq!(
            written(&console),
            "ERROR: Invalid choice\nOK Done\n.. Hint\n"
        );
    }

    #[test]
    fn test_animation_disabled_writes_nothing() {
        let mut console = console("", Pacing::none());
        console.animate("Checking", 3).unwrap();
        console.wait_medium().unwrap();
        assert!(written(&console).is_empty());
    }

    #[test]
    fn test_pacing_from_settings() {
        let pacing = Pacing::from_settings(&DisplaySettings::default());
        assert!(pacing.pauses);
        assert!(pacing.animations);
        assert_eq!(pacing.short, Duration::from_millis(600));
        assert_eq!(pacing.medium, Duration::from_millis(1000));
    }
}
