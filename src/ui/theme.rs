//! Visual theme and styling.

use console::Style;

/// Styles applied to status lines.
///
/// Plain exercise output is never styled; only error lines pick up color.
#[derive(Debug, Clone)]
pub struct ShopTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for ShopTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_error() {
        let theme = ShopTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = ShopTheme::new();
        assert!(theme.format_error("Failed").contains("Failed"));
    }
}
