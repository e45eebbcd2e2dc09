//! Status message styling
//!
//! Colours and icons for ok/warning/error/info lines, with plain-text
//! fallbacks when colour or icons are turned off.

use crossterm::style::{Color, Stylize};

use crate::config::DisplaySettings;

/// Menu and heading icons
pub mod icons {
    pub const ADD: &str = "➕";
    pub const SEARCH: &str = "🔎";
    pub const DELETE: &str = "🗑️";
    pub const UPDATE: &str = "✏️";
    pub const LIST: &str = "📋";
    pub const CLEAR: &str = "⚠️";
    pub const EXIT: &str = "✅";
    pub const EMAIL: &str = "✉️";
    pub const PHONE: &str = "📞";
    pub const USER: &str = "👤";
}

/// Kind of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Progress or informational message
    Info,
    /// Operation succeeded
    Success,
    /// Nothing to do, or the user cancelled
    Warning,
    /// Validation or lookup failure
    Error,
}

impl MessageKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "💡",
            Self::Success => "✔️",
            Self::Warning => "🚨",
            Self::Error => "❌",
        }
    }

    /// Prefix used when icons are turned off
    pub fn plain_marker(&self) -> &'static str {
        match self {
            Self::Info => "..",
            Self::Success => "OK",
            Self::Warning => "!!",
            Self::Error => "ERROR:",
        }
    }
}

/// How to decorate console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
    pub icons: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: true,
            icons: true,
        }
    }
}

impl Theme {
    /// Undecorated output, used by tests and `--no-color` pipelines
    pub fn plain() -> Self {
        Self {
            color: false,
            icons: false,
        }
    }

    pub fn from_settings(display: &DisplaySettings) -> Self {
        Self {
            color: display.color,
            icons: display.icons,
        }
    }

    /// Render a status line such as "✔️ Contact added successfully!"
    pub fn message(&self, kind: MessageKind, text: &str) -> String {
        let marker = if self.icons {
            kind.icon()
        } else {
            kind.plain_marker()
        };
        let line = format!("{} {}", marker, text);

        if self.color {
            line.with(kind.color()).bold().to_string()
        } else {
            line
        }
    }

    /// Icon followed by two spaces, or nothing
    pub fn icon(&self, icon: &str) -> String {
        if self.icons {
            format!("{}  ", icon)
        } else {
            String::new()
        }
    }
}
