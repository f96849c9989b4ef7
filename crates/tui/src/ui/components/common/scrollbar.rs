//! Themed scrollbar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::ScrollMetrics;
use crate::ui::theme::roles::Theme;

/// Renders a vertical scrollbar for `metrics` on the right edge of `area`.
///
/// Nothing is drawn when the content fits the viewport.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, theme: &dyn Theme, metrics: &ScrollMetrics) {
    if !metrics.is_scrollable() {
        return;
    }
    let mut scrollbar_state = ScrollbarState::new(usize::from(metrics.max_offset()) + 1)
        .position(usize::from(metrics.offset()))
        .viewport_content_length(usize::from(metrics.viewport_height()));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.roles().scrollbar_thumb))
        .track_style(Style::default().fg(theme.roles().scrollbar_track));
    frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
