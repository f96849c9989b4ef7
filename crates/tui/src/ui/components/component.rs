//! Component system for the terminal site.
//!
//! Components are self-contained UI elements: they handle their own input,
//! mutate the slice of [`App`] state they own, render into a provided `Rect`,
//! and report anything with wider consequences back to the runtime as
//! [`Effect`]s.

use crossterm::event::{KeyEvent, MouseEvent};
use hbt_types::Effect;
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with its own behavior.
///
/// # Component lifecycle
///
/// 1. **Event handling**: the runtime routes key and mouse events to the
///    component that owns the focused widget or the area under the pointer.
/// 2. **Rendering**: `render()` draws the component into its area and may
///    record hit-test geometry for the next mouse event.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events inside the component's last rendered area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing
    /// and recording layout used for hit testing.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }

    /// Splits `area` into the sub-areas this component renders into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
