//! # TUI Components
//!
//! One component per screen, mirroring the app's navigation states:
//!
//! ```text
//! components/
//! ├── loading.rs      (spinner splash, no input)
//! ├── price_form.rs   (two price fields + calculate, stateful)
//! └── result_view.rs  (verdict display, borrows the payload)
//! ```
//!
//! `PriceForm` is the only stateful component — its buffers and focus live
//! across frames in `TuiState`. The other two are rebuilt from props every
//! draw. All three take the shared [`crate::tui::theme::Theme`] by
//! reference; none owns styling.

pub mod loading;
pub mod price_form;
pub mod result_view;

pub use loading::LoadingScreen;
pub use price_form::{FormEvent, PriceForm};
pub use result_view::{ResultEvent, ResultView};
