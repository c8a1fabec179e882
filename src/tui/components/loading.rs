//! # Loading Screen
//!
//! Indeterminate spinner shown while the app "boots". Accepts no input;
//! the transition to Home is driven entirely by the one-shot timer in the
//! event loop, so this component is purely presentational.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Braille spinner, advanced once per animation tick by the event loop.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingScreen {
    frame_index: usize,
}

impl LoadingScreen {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }
}

impl Component for LoadingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let spinner = SPINNER_FRAMES[self.frame_index % SPINNER_FRAMES.len()];

        let lines = vec![
            Line::from(Span::styled(spinner, theme.focused)),
            Line::from(""),
            Line::from(Span::styled("Fuelcheck", theme.input)),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                theme.label,
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            center,
        );
    }
}
