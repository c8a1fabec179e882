//! # Price Form
//!
//! The Home screen: two labeled free-text price fields and a calculate
//! action. The form owns only presentation state (buffers, focus);
//! validation belongs to `core::comparison`, which is why any text is
//! accepted here, not just digits.
//!
//! Field contents deliberately survive a submit: they are still wanted on
//! a validation failure, and the original app leaves prior text in place
//! when the user comes back from the result screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::comparison::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Enter pressed: the raw texts of both fields, untouched.
    Submit { ethanol: String, gasoline: String },
}

struct PriceField {
    label: &'static str,
    placeholder: &'static str,
    buffer: String,
}

impl PriceField {
    fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            buffer: String::new(),
        }
    }
}

pub struct PriceForm {
    ethanol: PriceField,
    gasoline: PriceField,
    /// None while blurred, i.e. right after a submit. Mirrors the
    /// original's keyboard dismissal before validating.
    focused: Option<Field>,
}

impl PriceForm {
    pub fn new() -> Self {
        Self {
            ethanol: PriceField::new("Ethanol (price per liter)", "e.g. 4.60"),
            gasoline: PriceField::new("Gasoline (price per liter)", "e.g. 7.30"),
            focused: Some(Field::Ethanol),
        }
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn ethanol_text(&self) -> &str {
        &self.ethanol.buffer
    }

    pub fn gasoline_text(&self) -> &str {
        &self.gasoline.buffer
    }

    fn focused_buffer(&mut self) -> &mut String {
        // Typing into a blurred form focuses the first field again.
        let field = *self.focused.get_or_insert(Field::Ethanol);
        match field {
            Field::Ethanol => &mut self.ethanol.buffer,
            Field::Gasoline => &mut self.gasoline.buffer,
        }
    }

    fn move_focus(&mut self) {
        self.focused = Some(match self.focused {
            Some(Field::Ethanol) => Field::Gasoline,
            // With two fields, next and previous are the same move.
            Some(Field::Gasoline) | None => Field::Ethanol,
        });
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        field: &PriceField,
        is_focused: bool,
    ) {
        let border = if is_focused { theme.focused } else { theme.frame };
        let block = Block::bordered()
            .border_style(border)
            .title(Span::styled(field.label, theme.label));

        let content = if field.buffer.is_empty() {
            Span::styled(field.placeholder, theme.placeholder)
        } else {
            Span::styled(field.buffer.as_str(), theme.input)
        };

        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
    }
}

impl Default for PriceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PriceForm {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        use Constraint::Length;

        let [card] = Layout::horizontal([Length(44.min(area.width))])
            .flex(Flex::Center)
            .areas(area);
        let [title_area, ethanol_area, gasoline_area, hint_area] =
            Layout::vertical([Length(2), Length(3), Length(3), Length(1)])
                .flex(Flex::Center)
                .areas(card);

        frame.render_widget(
            Paragraph::new(Span::styled("Which fuel wins?", theme.input))
                .alignment(Alignment::Center),
            title_area,
        );

        self.render_field(
            frame,
            ethanol_area,
            theme,
            &self.ethanol,
            self.focused == Some(Field::Ethanol),
        );
        self.render_field(
            frame,
            gasoline_area,
            theme,
            &self.gasoline,
            self.focused == Some(Field::Gasoline),
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter: calculate   Tab: switch field",
                theme.label,
            ))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}

impl EventHandler for PriceForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.focused_buffer().push(*c);
                None
            }
            TuiEvent::Backspace => {
                self.focused_buffer().pop();
                None
            }
            TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                self.move_focus();
                None
            }
            TuiEvent::Submit => {
                self.focused = None;
                Some(FormEvent::Submit {
                    ethanol: self.ethanol.buffer.clone(),
                    gasoline: self.gasoline.buffer.clone(),
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(form: &mut PriceForm, text: &str) {
        for c in text.chars() {
            form.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = PriceForm::new();
        type_text(&mut form, "4.60");
        assert_eq!(form.ethanol_text(), "4.60");
        assert_eq!(form.gasoline_text(), "");

        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "7.30");
        assert_eq!(form.gasoline_text(), "7.30");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut form = PriceForm::new();
        type_text(&mut form, "4.65");
        form.handle_event(&TuiEvent::Backspace);
        assert_eq!(form.ethanol_text(), "4.6");
    }

    #[test]
    fn test_focus_wraps_between_the_two_fields() {
        let mut form = PriceForm::new();
        assert_eq!(form.focused(), Some(Field::Ethanol));
        form.handle_event(&TuiEvent::FocusNext);
        assert_eq!(form.focused(), Some(Field::Gasoline));
        form.handle_event(&TuiEvent::FocusNext);
        assert_eq!(form.focused(), Some(Field::Ethanol));
        form.handle_event(&TuiEvent::FocusPrev);
        assert_eq!(form.focused(), Some(Field::Gasoline));
    }

    #[test]
    fn test_submit_blurs_and_keeps_field_text() {
        let mut form = PriceForm::new();
        type_text(&mut form, "4.60");
        form.handle_event(&TuiEvent::FocusNext);
        type_text(&mut form, "7.30");

        let event = form.handle_event(&TuiEvent::Submit);
        assert_eq!(
            event,
            Some(FormEvent::Submit {
                ethanol: "4.60".to_string(),
                gasoline: "7.30".to_string(),
            })
        );
        // Focus is dismissed, text is retained for the retry/return case.
        assert_eq!(form.focused(), None);
        assert_eq!(form.ethanol_text(), "4.60");
        assert_eq!(form.gasoline_text(), "7.30");
    }

    #[test]
    fn test_typing_after_blur_refocuses_first_field() {
        let mut form = PriceForm::new();
        form.handle_event(&TuiEvent::Submit);
        assert_eq!(form.focused(), None);
        form.handle_event(&TuiEvent::InputChar('5'));
        assert_eq!(form.focused(), Some(Field::Ethanol));
        assert_eq!(form.ethanol_text(), "5");
    }

    #[test]
    fn test_render_shows_labels_and_placeholders() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let mut form = PriceForm::new();

        terminal
            .draw(|f| form.render(f, f.area(), &theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ethanol (price per liter)"));
        assert!(text.contains("Gasoline (price per liter)"));
        assert!(text.contains("e.g. 4.60"));
        assert!(text.contains("Which fuel wins?"));
    }

    #[test]
    fn test_render_shows_typed_text_instead_of_placeholder() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        let mut form = PriceForm::new();
        type_text(&mut form, "4.60");

        terminal
            .draw(|f| form.render(f, f.area(), &theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("4.60"));
        assert!(!text.contains("e.g. 4.60"));
    }
}
