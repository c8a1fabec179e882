use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::theme::Theme;

/// A renderable screen element.
///
/// Screens receive their data as struct fields ("props"): the loading
/// screen gets a spinner frame index, the result view gets a borrowed
/// `ComparisonResult`. The shared [`Theme`] is passed by reference at
/// render time so no component owns styling.
///
/// `render` takes `&mut self` so stateful components (the price form) can
/// update presentation caches during the render pass, matching ratatui's
/// `StatefulWidget` convention.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// A component that reacts to terminal events.
///
/// Returns a high-level event when the input means something to the parent
/// (e.g. the price form emits `FormEvent::Submit` on Enter); `None` when
/// the event was consumed internally or ignored.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
