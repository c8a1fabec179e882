//! # Theme
//!
//! The shared read-only style table: one `Theme` value is built at startup
//! and handed by reference to every renderer. No ambient global style
//! state anywhere.
//!
//! The two accent colors mirror the original product's palette: green for
//! the ethanol verdict, burnt orange for the gasoline verdict.

use ratatui::style::{Color, Modifier, Style};

use crate::core::comparison::Recommendation;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Card borders and section titles.
    pub frame: Style,
    /// Field labels and secondary text.
    pub label: Style,
    /// Text the user typed.
    pub input: Style,
    /// Placeholder text in empty fields.
    pub placeholder: Style,
    /// The focused field's border.
    pub focused: Style,
    /// Validation modal border and title.
    pub error: Style,
    /// Verdict color when ethanol wins (original: #28a745).
    pub ethanol_accent: Style,
    /// Verdict color when gasoline wins (original: #D35400).
    pub gasoline_accent: Style,
}

impl Theme {
    /// Style for a verdict, purely a function of the recommendation.
    pub fn recommendation(&self, recommendation: Recommendation) -> Style {
        match recommendation {
            Recommendation::Ethanol => self.ethanol_accent,
            Recommendation::Gasoline => self.gasoline_accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            frame: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            input: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            focused: Style::default().fg(Color::Cyan),
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ethanol_accent: Style::default()
                .fg(Color::Rgb(40, 167, 69))
                .add_modifier(Modifier::BOLD),
            gasoline_accent: Style::default()
                .fg(Color::Rgb(211, 84, 0))
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_styles_differ() {
        let theme = Theme::default();
        assert_ne!(
            theme.recommendation(Recommendation::Ethanol),
            theme.recommendation(Recommendation::Gasoline)
        );
    }
}
