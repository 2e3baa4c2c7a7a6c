//! ANSI text styling for the terminal.

/// Escape sequences used by the screens.
///
/// [`Style::PLAIN`] renders every sequence as the empty string, so the same
/// templates produce unstyled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub bold: &'static str,
    pub underline: &'static str,
    pub strike: &'static str,
    pub reset: &'static str,
}

impl Style {
    pub const ANSI: Self = Self {
        bold: "\u{1b}[1m",
        underline: "\u{1b}[4m",
        strike: "\u{1b}[9m",
        reset: "\u{1b}[0m",
    };

    pub const PLAIN: Self = Self {
        bold: "",
        underline: "",
        strike: "",
        reset: "",
    };

    pub fn new(color: bool) -> Self {
        if color { Self::ANSI } else { Self::PLAIN }
    }

    /// Wrap `text` in bold.
    pub fn emphasis(&self, text: &str) -> String {
        format!("{}{}{}", self.bold, text, self.reset)
    }
}
