//! # Actions
//!
//! Everything that can happen in Fuelcheck becomes an `Action`.
//! The loading timer fires? That's `Action::LoadingFinished`.
//! The user presses Enter on the form? That's `Action::Submit`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and reports an [`Effect`] back to the caller. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` owns navigation: the screen transition table lives here and
//! nowhere else. An action arriving on a screen it is not valid for is
//! ignored and logged, never applied.

use log::{info, warn};

use crate::core::comparison::ComparisonResult;
use crate::core::state::{App, Screen};

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The loading deadline elapsed; replace Loading with Home.
    LoadingFinished,
    /// The user submitted the form with these raw field texts.
    Submit { ethanol: String, gasoline: String },
    /// The user dismissed the validation modal.
    DismissError,
    /// The user asked to calculate again; back to Home, payload discarded.
    Reset,
    /// The user asked to exit.
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadingFinished => {
            if app.screen == Screen::Loading {
                info!("Loading finished, replacing with Home");
                app.screen = Screen::Home;
            } else {
                warn!("Ignoring LoadingFinished outside Loading screen");
            }
            Effect::None
        }
        Action::Submit { ethanol, gasoline } => {
            if app.screen != Screen::Home {
                warn!("Ignoring Submit outside Home screen");
                return Effect::None;
            }
            if app.error.is_some() {
                // The validation modal is blocking; a submit cannot slip past it.
                warn!("Ignoring Submit while validation modal is up");
                return Effect::None;
            }
            match ComparisonResult::from_input(&ethanol, &gasoline) {
                Ok(result) => {
                    info!(
                        "Calculated ratio {:.4}, recommending {:?}",
                        result.ratio, result.recommendation
                    );
                    app.screen = Screen::Result(result);
                }
                Err(err) => {
                    info!("Rejected input: {err}");
                    app.error = Some(err);
                }
            }
            Effect::None
        }
        Action::DismissError => {
            app.error = None;
            Effect::None
        }
        Action::Reset => {
            if matches!(app.screen, Screen::Result(_)) {
                info!("Reset to Home, discarding result");
                app.screen = Screen::Home;
            } else {
                warn!("Ignoring Reset outside Result screen");
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparison::{Field, InvalidInput, Recommendation};

    fn submit(ethanol: &str, gasoline: &str) -> Action {
        Action::Submit {
            ethanol: ethanol.to_string(),
            gasoline: gasoline.to_string(),
        }
    }

    #[test]
    fn test_loading_finished_replaces_with_home() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::LoadingFinished), Effect::None);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_loading_finished_ignored_elsewhere() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        // A stale firing after the transition must not change anything.
        update(&mut app, Action::LoadingFinished);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_valid_submit_navigates_to_result() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, submit("4.60", "7.30"));

        match &app.screen {
            Screen::Result(result) => {
                assert_eq!(result.recommendation, Recommendation::Ethanol);
                assert_eq!(result.ethanol_price, 4.60);
                assert_eq!(result.gasoline_price, 7.30);
            }
            other => panic!("expected Result screen, got {other:?}"),
        }
        assert!(app.error.is_none());
    }

    #[test]
    fn test_invalid_submit_stays_on_home_with_error() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, submit("", "6.00"));

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(
            app.error,
            Some(InvalidInput::NotANumber {
                field: Field::Ethanol
            })
        );
    }

    #[test]
    fn test_modal_blocks_further_submits() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, submit("", "6.00"));
        // Even a valid submit is swallowed until the modal is dismissed.
        update(&mut app, submit("4.60", "7.30"));
        assert_eq!(app.screen, Screen::Home);

        update(&mut app, Action::DismissError);
        assert!(app.error.is_none());
        update(&mut app, submit("4.60", "7.30"));
        assert!(matches!(app.screen, Screen::Result(_)));
    }

    #[test]
    fn test_submit_ignored_outside_home() {
        let mut app = App::new();
        update(&mut app, submit("4.60", "7.30"));
        assert_eq!(app.screen, Screen::Loading);
    }

    #[test]
    fn test_reset_returns_to_home() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, submit("4.60", "7.30"));
        update(&mut app, Action::Reset);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_reset_ignored_on_home() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, Action::Reset);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn test_results_are_independent_across_resets() {
        let mut app = App::new();
        update(&mut app, Action::LoadingFinished);
        update(&mut app, submit("4.60", "7.30"));
        update(&mut app, Action::Reset);
        update(&mut app, submit("5.50", "6.00"));

        match &app.screen {
            Screen::Result(result) => {
                assert_eq!(result.recommendation, Recommendation::Gasoline);
                assert_eq!(result.ethanol_price, 5.50);
            }
            other => panic!("expected Result screen, got {other:?}"),
        }
    }

    #[test]
    fn test_quit_from_any_screen() {
        // Effect::Quit is the single quit signal; the screen is untouched.
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.screen, Screen::Loading);

        update(&mut app, Action::LoadingFinished);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.screen, Screen::Home);
    }
}
