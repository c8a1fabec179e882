//! Top-level frame layout: status bar, current screen, and the blocking
//! validation modal when one is up.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::comparison::InvalidInput;
use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LoadingScreen, ResultView};
use crate::tui::theme::Theme;

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    theme: &Theme,
    currency_symbol: &str,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let [bar_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    frame.render_widget(Span::styled(status_bar_text(&app.screen), theme.label), bar_area);

    match &app.screen {
        Screen::Loading => {
            LoadingScreen::new(spinner_frame).render(frame, main_area, theme);
        }
        Screen::Home => {
            tui.form.render(frame, main_area, theme);
        }
        Screen::Result(result) => {
            ResultView::new(result, currency_symbol).render(frame, main_area, theme);
        }
    }

    if let Some(error) = &app.error {
        draw_error_modal(frame, main_area, theme, error);
    }
}

fn status_bar_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Loading => "Fuelcheck",
        Screen::Home => "Fuelcheck | Home | Ctrl+C: quit",
        Screen::Result(_) => "Fuelcheck | Result | Ctrl+C: quit",
    }
}

/// Centered modal over the form. While this is visible the event loop
/// routes nothing to the form, so the message is blocking in the same way
/// the original's alert was.
fn draw_error_modal(frame: &mut Frame, area: Rect, theme: &Theme, error: &InvalidInput) {
    let [modal] = Layout::horizontal([Constraint::Length(46.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [modal] = Layout::vertical([Constraint::Length(6)])
        .flex(Flex::Center)
        .areas(modal);

    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(format!("{error}\n\nEnter: dismiss"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(theme.error).title("Invalid input")),
        modal,
    );
}
