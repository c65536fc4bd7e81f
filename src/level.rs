//! Log levels and their display themes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use colored::Color;

/// Severity of a single log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Reference width of the level column in plain mode ("INFO").
pub(crate) const LEVEL_COLUMN: usize = 4;

impl Level {
    /// Lowercase name used by the structured output. Part of the wire
    /// contract consumed by downstream collectors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    /// Unrecognized input is not an error: it renders as debug.
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "info" => Level::Info,
            "warn" => Level::Warn,
            "error" => Level::Error,
            _ => Level::Debug,
        })
    }
}

/// Display attributes derived from a level: the fixed-width tag text plus
/// the colors for the tag and the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub label: &'static str,
    pub level_color: Color,
    pub message_color: Color,
}

impl Theme {
    /// Pure, total lookup; every level has exactly one theme.
    pub fn for_level(level: Level) -> Theme {
        match level {
            Level::Info => Theme {
                label: "INFO",
                level_color: Color::Green,
                message_color: Color::White,
            },
            Level::Warn => Theme {
                label: "WARN",
                level_color: Color::Yellow,
                message_color: Color::Yellow,
            },
            Level::Error => Theme {
                label: "ERROR",
                level_color: Color::Red,
                message_color: Color::Red,
            },
            Level::Debug => Theme {
                label: "DEBUG",
                level_color: Color::White,
                message_color: Color::White,
            },
        }
    }

    /// Spaces inserted after the level tag so the service column lines up
    /// regardless of tag length.
    pub(crate) fn column_gap(&self) -> String {
        " ".repeat((LEVEL_COLUMN + 1).saturating_sub(self.label.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_totality() {
        assert_eq!(Theme::for_level(Level::Info).label, "INFO");
        assert_eq!(Theme::for_level(Level::Warn).label, "WARN");
        assert_eq!(Theme::for_level(Level::Error).label, "ERROR");
        assert_eq!(Theme::for_level(Level::Debug).label, "DEBUG");

        assert_eq!(Theme::for_level(Level::Info).level_color, Color::Green);
        assert_eq!(Theme::for_level(Level::Warn).message_color, Color::Yellow);
        assert_eq!(Theme::for_level(Level::Error).message_color, Color::Red);
    }

    #[test]
    fn test_unrecognized_level_falls_back_to_debug() {
        assert_eq!("verbose".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_lowercase_names() {
        assert_eq!(Level::Warn.as_str(), "warn");
        assert_eq!(Level::Error.to_string(), "error");
    }

    #[test]
    fn test_column_gap_aligns_tags() {
        // Four-letter tags get one extra space, five-letter tags none.
        assert_eq!(Theme::for_level(Level::Info).column_gap(), " ");
        assert_eq!(Theme::for_level(Level::Warn).column_gap(), " ");
        assert_eq!(Theme::for_level(Level::Error).column_gap(), "");
        assert_eq!(Theme::for_level(Level::Debug).column_gap(), "");
    }
}
