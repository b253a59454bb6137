//! Theme configuration for CLI output
//!
//! Centralizes the colors used for show/hide lines and status messages.
//! Colors are plain ANSI escape codes and are switched off when stdout is
//! not a terminal or `NO_COLOR` is set.

use crossterm::style::Color;

/// Colors for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Color for "show" lines
    pub show: Color,
    /// Color for "hide" lines
    pub hide: Color,
    /// Error/warning color
    pub error: Color,
    /// Whether escape codes are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text, green for shows, yellow for hides.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            show: Color::Green,
            hide: Color::Yellow,
            error: Color::Red,
            enabled: true,
        }
    }

    /// Theme that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::standard()
        }
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn show_text(&self, text: &str) -> String {
        self.paint(self.show, text)
    }

    pub fn hide_text(&self, text: &str) -> String {
        self.paint(self.hide, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a crossterm Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Theme for stdout: colored only on a terminal without `NO_COLOR`.
pub fn current_theme() -> Theme {
    theme_for(atty::Stream::Stdout)
}

/// Theme for stderr: status and error lines check stderr's own terminal.
pub fn stderr_theme() -> Theme {
    theme_for(atty::Stream::Stderr)
}

fn theme_for(stream: atty::Stream) -> Theme {
    let no_color = std::env::var_os("NO_COLOR").map_or(false, |v| !v.is_empty());
    pick_theme(no_color, atty::is(stream))
}

fn pick_theme(no_color: bool, is_terminal: bool) -> Theme {
    if no_color || !is_terminal {
        Theme::plain()
    } else {
        Theme::standard()
    }
}
