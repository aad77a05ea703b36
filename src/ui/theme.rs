//! Visual theme and styling.

use console::Style;

/// Visual theme for terminal output.
#[derive(Debug, Clone)]
pub struct PrCleanerTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for separators (dim).
    pub border: Style,
    /// Style for contextual hints and commands to run (cyan).
    pub hint: Style,
}

impl Default for PrCleanerTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PrCleanerTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            hint: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a separator line of the given width.
    pub fn format_separator(&self, width: usize) -> String {
        format!("{}", self.border.apply_to("=".repeat(width)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = PrCleanerTheme::plain();
        let msg = theme.format_success("Git: git version 2.43.0");
        assert_eq!(msg, "✓ Git: git version 2.43.0");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = PrCleanerTheme::plain();
        let msg = theme.format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = PrCleanerTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_separator_is_exact_width() {
        let theme = PrCleanerTheme::plain();
        assert_eq!(theme.format_separator(60), "=".repeat(60));
    }

    #[test]
    fn default_theme_matches_new() {
        let theme = PrCleanerTheme::default();
        // Styled output still carries the text
        assert!(theme.format_header("Requirements").contains("Requirements"));
    }
}
