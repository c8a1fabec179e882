//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the current
//! screen, and translates keyboard events into `core::Action` values.
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event loop
//!
//! Single-threaded and poll-driven. Each iteration:
//!
//! 1. polls the loading timer; if it fired, applies `LoadingFinished`
//! 2. draws the frame
//! 3. waits for a key event — with a short timeout while the loading
//!    spinner animates, a long one once the app is idle on a form
//!
//! The loading deadline is an explicit [`OneShotTimer`], scheduled when
//! the loop starts and canceled on teardown, so a quit during the splash
//! can never leave a transition pending.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use std::time::{Duration, Instant};

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::core::timer::OneShotTimer;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormEvent, PriceForm, ResultEvent, ResultView};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::theme::Theme;

/// How often the spinner advances while the loading screen is up.
const ANIMATION_TICK: Duration = Duration::from_millis(80);
/// Poll timeout once the app is idle on a form or result screen.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    /// The Home screen's fields and focus. Lives for the whole session so
    /// field text survives validation failures and returns from Result.
    pub form: PriceForm,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: PriceForm::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new();
    let theme = Theme::default();

    let mut terminal = ratatui::init();

    // The loading screen mounts first; schedule its one-shot deadline.
    let start_time = Instant::now();
    let mut loading_timer = OneShotTimer::new();
    loading_timer.schedule(start_time, Duration::from_millis(config.loading_ms));
    info!("Loading screen up for {}ms", config.loading_ms);

    loop {
        let now = Instant::now();
        if loading_timer.poll(now) {
            update(&mut app, Action::LoadingFinished);
        }

        let spinner_frame = (start_time.elapsed().as_millis() / ANIMATION_TICK.as_millis()) as usize;
        terminal.draw(|f| {
            ui::draw_ui(f, &app, &mut tui, &theme, &config.currency_symbol, spinner_frame)
        })?;

        let timeout = match loading_timer.remaining(Instant::now()) {
            Some(remaining) => remaining.min(ANIMATION_TICK),
            None => IDLE_TICK,
        };
        let Some(tui_event) = poll_event_timeout(timeout) else {
            continue;
        };

        let effect = dispatch(&mut app, &mut tui, config, &tui_event);
        if effect == Effect::Quit {
            // Teardown: the splash timer must not outlive its screen.
            loading_timer.cancel();
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event to whatever owns it on the current screen and
/// apply the resulting action, if any.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    config: &ResolvedConfig,
    event: &TuiEvent,
) -> Effect {
    if *event == TuiEvent::ForceQuit {
        return update(app, Action::Quit);
    }
    if *event == TuiEvent::Resize {
        return Effect::None;
    }

    // The validation modal is blocking: while it is up, Enter/Esc dismiss
    // it and everything else is swallowed.
    if app.error.is_some() {
        if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
            return update(app, Action::DismissError);
        }
        return Effect::None;
    }

    match &app.screen {
        // The loading screen accepts no interaction.
        Screen::Loading => Effect::None,
        Screen::Home => {
            if *event == TuiEvent::Escape {
                return update(app, Action::Quit);
            }
            match tui.form.handle_event(event) {
                Some(FormEvent::Submit { ethanol, gasoline }) => {
                    update(app, Action::Submit { ethanol, gasoline })
                }
                None => Effect::None,
            }
        }
        Screen::Result(result) => {
            if *event == TuiEvent::Escape {
                return update(app, Action::Quit);
            }
            let result_event =
                ResultView::new(result, &config.currency_symbol).handle_event(event);
            match result_event {
                Some(ResultEvent::Reset) => update(app, Action::Reset),
                None => Effect::None,
            }
        }
    }
}
