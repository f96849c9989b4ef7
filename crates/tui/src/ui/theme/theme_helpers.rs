use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Background for a page section; sections alternate between the page
/// background and the raised surface.
pub fn section_style<T: Theme + ?Sized>(theme: &T, section_index: usize) -> Style {
    let ThemeRoles {
        background, surface, text, ..
    } = *theme.roles();
    let bg = if section_index % 2 == 0 { background } else { surface };
    Style::default().bg(bg).fg(text)
}

/// Style for a header nav control.
///
/// The active section gets the accent color and an underline; keyboard focus
/// adds the selection background on top of either state.
pub fn nav_item_style<T: Theme + ?Sized>(theme: &T, is_active: bool, is_focused: bool) -> Style {
    let mut style = if is_active {
        theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_secondary_style()
    };
    if is_focused {
        style = style.bg(theme.roles().selection_bg);
    }
    style
}

/// Style for input fields; caller decides whether to draw a caret.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, focused: bool) -> Style {
    let ThemeRoles {
        surface_muted,
        text,
        error,
        ..
    } = *theme.roles();
    let mut style = Style::default().bg(surface_muted).fg(text);
    if !valid {
        style = style.fg(error);
    }
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Primary button style (filled accent background).
pub fn button_primary_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    let ThemeRoles {
        accent_strong,
        text,
        focus,
        ..
    } = *theme.roles();
    let style = Style::default().bg(accent_strong).fg(text).add_modifier(Modifier::BOLD);
    if focused {
        style.fg(focus).add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Builds `key description` pairs for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let key_style = theme.accent_emphasis_style();
    let text_style = theme.text_muted_style();
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*description, text_style));
    }
    spans
}

/// Two colored cells summarizing a palette.
pub fn swatch_spans(background: Color, accent: Color) -> [Span<'static>; 2] {
    [
        Span::styled("  ", Style::default().bg(background)),
        Span::styled("  ", Style::default().bg(accent)),
    ]
}
