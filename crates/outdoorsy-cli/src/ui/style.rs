//! `[ok]`/`[err]`/`[warn]`/`[info]`/`[hint]` prefixed messages
//!
//! Only the prefix is colored; message text is printed as given so tests and
//! pipes see the same words either way.

use owo_colors::{AnsiColors, OwoColorize};

use super::color::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Ok,
    Err,
    Warn,
    Info,
    Hint,
}

impl MessageType {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Ok => "[ok]",
            Self::Err => "[err]",
            Self::Warn => "[warn]",
            Self::Info => "[info]",
            Self::Hint => "[hint]",
        }
    }

    fn color(&self) -> AnsiColors {
        match self {
            Self::Ok => AnsiColors::Green,
            Self::Err => AnsiColors::Red,
            Self::Warn => AnsiColors::Yellow,
            Self::Info => AnsiColors::Blue,
            Self::Hint => AnsiColors::Cyan,
        }
    }
}

/// Formats import results, errors and menu headers for the terminal
#[derive(Debug, Clone)]
pub struct Style {
    colors: bool,
}

impl Style {
    /// Resolve `mode` once; `auto` looks at `NO_COLOR` and stdout here
    pub fn new(mode: ColorMode) -> Self {
        Self {
            colors: mode.is_enabled(),
        }
    }

    pub fn message(&self, kind: MessageType, text: &str) -> String {
        if self.colors {
            format!("{} {}", kind.prefix().color(kind.color()), text)
        } else {
            format!("{} {}", kind.prefix(), text)
        }
    }

    /// Indented `label: value` line under a message
    pub fn message_detail(&self, label: &str, value: &str) -> String {
        format!("     {}: {}", label, value)
    }

    pub fn section(&self, title: &str) -> String {
        if self.colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages() {
        let style = Style::new(ColorMode::Never);
        assert_eq!(style.message(MessageType::Ok, "Uploaded"), "[ok] Uploaded");
        assert_eq!(style.message(MessageType::Err, "Failed"), "[err] Failed");
        assert_eq!(style.message(MessageType::Hint, "Try view"), "[hint] Try view");
        assert_eq!(style.section("Customers"), "Customers");
    }

    #[test]
    fn test_colored_message_keeps_text() {
        let style = Style::new(ColorMode::Always);
        let line = style.message(MessageType::Warn, "line 3 skipped");
        assert!(line.contains("[warn]"));
        assert!(line.ends_with(" line 3 skipped"));
        assert_ne!(line, "[warn] line 3 skipped");
    }

    #[test]
    fn test_message_detail() {
        let style = Style::new(ColorMode::Never);
        assert_eq!(style.message_detail("Rows imported", "3"), "     Rows imported: 3");
    }
}
