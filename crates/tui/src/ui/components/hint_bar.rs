//! Single-line strip of key hints under the page.
//!
//! The main view hands over the hints of whichever component owns focus;
//! after a theme switch the strip also names the new palette until the next
//! key press.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct HintBarComponent {
    hints: Vec<Span<'static>>,
}

impl HintBarComponent {
    pub fn set_hints(&mut self, hints: Vec<Span<'static>>) {
        self.hints = hints;
    }
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let mut spans = Vec::with_capacity(self.hints.len() + 8);
        spans.push(Span::raw(" "));
        if app.ctx.theme_notice {
            let definition = app.ctx.theme_definition;
            spans.push(Span::styled("Theme: ", theme.text_muted_style()));
            spans.push(Span::styled(definition.label, theme.accent_secondary_style()));
            spans.push(Span::raw(" "));
            spans.extend(th::swatch_spans(definition.swatch.background, definition.swatch.accent));
            spans.push(Span::raw("   "));
        }
        spans.extend(self.hints.iter().cloned());
        spans.extend(th::build_hint_spans(theme, &[("t", " theme  "), ("q", " quit")]));

        let paragraph = Paragraph::new(Line::from(spans)).style(theme.text_muted_style().bg(theme.roles().background));
        frame.render_widget(paragraph, rect);
    }
}
