use std::env;
use std::io::{stderr, stdout};

use colored::Colorize;
use is_terminal::IsTerminal;

/// Color mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use TTY detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Invalid color mode: '{}'. Valid options: auto, always, never",
                s
            )),
        }
    }
}

/// TTY-aware color helper that respects NO_COLOR and terminal detection
#[derive(Clone)]
pub struct ColorHelper {
    mode: ColorMode,
    stdout_is_terminal: bool,
    stderr_is_terminal: bool,
    no_color: bool,
}

impl ColorHelper {
    /// Create a new color helper with the specified mode
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            stdout_is_terminal: stdout().is_terminal(),
            stderr_is_terminal: stderr().is_terminal(),
            no_color: !env::var("NO_COLOR").unwrap_or_default().is_empty(),
        }
    }

    /// Check if colors should be used for stdout
    pub fn should_color_stdout(&self) -> bool {
        self.should_use_colors(self.stdout_is_terminal)
    }

    /// Check if colors should be used for stderr
    pub fn should_color_stderr(&self) -> bool {
        self.should_use_colors(self.stderr_is_terminal)
    }

    fn should_use_colors(&self, is_terminal: bool) -> bool {
        // Respect NO_COLOR environment variable (standard)
        if self.no_color {
            return false;
        }

        match self.mode {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => is_terminal,
        }
    }

    fn apply<F>(&self, text: &str, style: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        if self.should_color_stdout() {
            style(text)
        } else {
            text.to_string()
        }
    }

    pub fn red(&self, text: &str) -> String {
        self.apply(text, |t| t.red().to_string())
    }

    pub fn green(&self, text: &str) -> String {
        self.apply(text, |t| t.green().to_string())
    }

    pub fn blue(&self, text: &str) -> String {
        self.apply(text, |t| t.blue().to_string())
    }

    pub fn yellow(&self, text: &str) -> String {
        self.apply(text, |t| t.yellow().to_string())
    }

    pub fn cyan(&self, text: &str) -> String {
        self.apply(text, |t| t.cyan().to_string())
    }

    pub fn dimmed(&self, text: &str) -> String {
        self.apply(text, |t| t.dimmed().to_string())
    }

    pub fn bold(&self, text: &str) -> String {
        self.apply(text, |t| t.bold().to_string())
    }

    pub fn red_bold(&self, text: &str) -> String {
        self.apply(text, |t| t.red().bold().to_string())
    }

    pub fn green_bold(&self, text: &str) -> String {
        self.apply(text, |t| t.green().bold().to_string())
    }

    pub fn blue_bold(&self, text: &str) -> String {
        self.apply(text, |t| t.blue().bold().to_string())
    }

    pub fn yellow_bold(&self, text: &str) -> String {
        self.apply(text, |t| t.yellow().bold().to_string())
    }
}
