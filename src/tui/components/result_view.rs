//! # Result View
//!
//! Pure display of one `ComparisonResult`: badge, verdict message in the
//! verdict's accent color, and both input prices to exactly two decimal
//! places. The payload is borrowed from the `Screen::Result` variant, so
//! this view cannot exist without one.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::comparison::{ComparisonResult, Recommendation};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Stand-ins for the original app's two result images.
const ETHANOL_BADGE: &str = "\
   ,-.
  ( E )   ethanol
   `-'";
const GASOLINE_BADGE: &str = "\
   ,-.
  ( G )   gasoline
   `-'";

/// High-level events emitted by the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultEvent {
    /// The user wants to calculate again.
    Reset,
}

pub struct ResultView<'a> {
    result: &'a ComparisonResult,
    currency_symbol: &'a str,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a ComparisonResult, currency_symbol: &'a str) -> Self {
        Self {
            result,
            currency_symbol,
        }
    }

    fn badge(&self) -> &'static str {
        match self.result.recommendation {
            Recommendation::Ethanol => ETHANOL_BADGE,
            Recommendation::Gasoline => GASOLINE_BADGE,
        }
    }
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let accent = theme.recommendation(self.result.recommendation);

        let mut lines: Vec<Line> = self
            .badge()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), accent)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.result.recommendation.message(),
            accent,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("With these prices:", theme.label)));
        lines.push(Line::from(Span::styled(
            format!(
                "Ethanol:  {} {:.2}",
                self.currency_symbol, self.result.ethanol_price
            ),
            theme.input,
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Gasoline: {} {:.2}",
                self.currency_symbol, self.result.gasoline_price
            ),
            theme.input,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: calculate again",
            theme.label,
        )));

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            center,
        );
    }
}

impl EventHandler for ResultView<'_> {
    type Event = ResultEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => Some(ResultEvent::Reset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_result(ethanol: &str, gasoline: &str) -> String {
        let result = ComparisonResult::from_input(ethanol, gasoline).unwrap();
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let mut view = ResultView::new(&result, "R$");
        terminal
            .draw(|f| view.render(f, f.area(), &theme))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_ethanol_verdict_rendered() {
        let text = render_result("4.60", "7.30");
        assert!(text.contains("Ethanol is the better buy"));
        assert!(text.contains("Ethanol:  R$ 4.60"));
        assert!(text.contains("Gasoline: R$ 7.30"));
    }

    #[test]
    fn test_gasoline_verdict_rendered() {
        let text = render_result("5.50", "6.00");
        assert!(text.contains("Gasoline is the better buy"));
    }

    #[test]
    fn test_prices_formatted_to_two_decimals() {
        let text = render_result("4.6", "7.3");
        assert!(text.contains("4.60"));
        assert!(text.contains("7.30"));
    }

    #[test]
    fn test_enter_requests_reset() {
        let result = ComparisonResult::from_input("4.60", "7.30").unwrap();
        let mut view = ResultView::new(&result, "R$");
        assert_eq!(
            view.handle_event(&TuiEvent::Submit),
            Some(ResultEvent::Reset)
        );
        assert_eq!(view.handle_event(&TuiEvent::InputChar('x')), None);
    }
}
