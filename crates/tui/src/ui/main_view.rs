use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use hbt_types::{Effect, SectionId};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
};

use super::components::{Component, ContactFormComponent, HintBarComponent, NavBarComponent, PageComponent};
use crate::app::{App, HEADER_HEIGHT, HINT_BAR_HEIGHT};

/// Root view: header nav bar, scrolling page and hint bar.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavBarComponent,
    pub page_view: PageComponent,
    pub contact_view: ContactFormComponent,
    pub hint_bar_view: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a sensible focus when the focused widget disappeared.
    pub fn restore_focus(&mut self, app: &mut App) {
        let flag = app.nav_bar.flag_for(app.active.get()).cloned();
        match flag {
            Some(flag) => app.focus.focus(&flag),
            None => app.focus.first(),
        }
    }

    fn handle_global_key(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        let effects = match key.code {
            KeyCode::Char('q') => vec![Effect::Quit],
            KeyCode::Char('t') => {
                app.cycle_theme();
                Vec::new()
            }
            KeyCode::Char(digit @ '1'..='5') => {
                let index = digit as usize - '1' as usize;
                SectionId::from_index(index).map(Effect::NavigateTo).into_iter().collect()
            }
            _ => return None,
        };
        Some(effects)
    }

    fn moves_focus(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        match key.code {
            KeyCode::Tab => app.focus.next(),
            KeyCode::BackTab => app.focus.prev(),
            _ => return None,
        };
        Some(app.reveal_focus().into_iter().collect())
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.ctx.theme_notice {
            app.ctx.theme_notice = false;
            app.mark_dirty();
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }

        let effects = if let Some(effects) = Self::moves_focus(app, key) {
            effects
        } else if app.focused_section() == Some(SectionId::Contact) {
            self.contact_view.handle_key_events(app, key)
        } else if let Some(effects) = Self::handle_global_key(app, key) {
            effects
        } else if app.nav_bar.focused_index().is_some()
            && matches!(
                key.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l' | ' ') | KeyCode::Enter
            )
        {
            self.nav_bar_view.handle_key_events(app, key)
        } else {
            self.page_view.handle_key_events(app, key)
        };
        // Focus styling is part of the page copy.
        app.refresh();
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.nav_bar_view.handle_mouse_events(app, mouse);
        effects.extend(self.page_view.handle_mouse_events(app, mouse));
        app.refresh();
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(background, area);

        let layout = self.get_preferred_layout(app, area);
        self.nav_bar_view.render(frame, layout[0], app);
        self.page_view.render(frame, layout[1], app);
        self.contact_view.render(frame, layout[1], app);

        let hints = self.get_hint_spans(app);
        self.hint_bar_view.set_hints(hints);
        self.hint_bar_view.render(frame, layout[2], app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        if app.focused_section() == Some(SectionId::Contact) {
            self.contact_view.get_hint_spans(app)
        } else if app.nav_bar.focused_index().is_some() {
            self.nav_bar_view.get_hint_spans(app)
        } else {
            self.page_view.get_hint_spans(app)
        }
    }

    /// Header, page and hint bar stacked vertically; matches `App::page_area`.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{MouseButton, MouseEventKind};
    use hbt_types::Msg;
    use hbt_util::UserPreferences;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::SiteConfig;

    const SIZE: (u16, u16) = (100, 30);

    fn app() -> App {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), ("TUI_THEME", None::<&str>)], || {
            App::new(&SiteConfig::default(), Arc::new(UserPreferences::ephemeral()), SIZE)
        })
    }

    fn draw(app: &mut App, view: &mut MainView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SIZE.0, SIZE.1)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_header_and_hero() {
        let mut app = app();
        let mut view = MainView::new();
        let screen = draw(&mut app, &mut view);
        for label in ["HBT", "Home", "About", "Services", "Portfolio", "Contact"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert_eq!(app.nav_bar.per_item_areas.len(), 5);
    }

    #[test]
    fn footer_is_visible_at_the_bottom() {
        let mut app = app();
        let mut view = MainView::new();
        app.update(&Msg::ScrollToBottom);
        let screen = draw(&mut app, &mut view);
        assert!(screen.contains("All rights reserved"));
    }

    #[test]
    fn digits_navigate_and_q_quits() {
        let mut app = app();
        let mut view = MainView::new();
        let effects = view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('3')));
        assert_eq!(effects, vec![Effect::NavigateTo(SectionId::Services)]);
        let effects = view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn typing_in_the_form_does_not_trigger_shortcuts() {
        let mut app = app();
        let mut view = MainView::new();
        let flag = app.contact.name.focus.clone();
        app.focus.focus(&flag);
        let effects = view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Char('q')));
        assert!(effects.is_empty());
        assert_eq!(app.contact.name.value, "q");
    }

    #[test]
    fn scroll_keys_move_the_page_without_effects() {
        let mut app = app();
        let mut view = MainView::new();
        let effects = view.handle_key_events(&mut app, KeyEvent::from(KeyCode::Down));
        assert!(effects.is_empty());
        assert_eq!(app.scroll.offset(), 1);
    }

    #[test]
    fn clicking_a_nav_item_navigates() {
        let mut app = app();
        let mut view = MainView::new();
        draw(&mut app, &mut view);
        let about = app.nav_bar.per_item_areas[1];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: about.x,
            row: about.y,
            modifiers: KeyModifiers::NONE,
        };
        let effects = view.handle_mouse_events(&mut app, click);
        assert_eq!(effects, vec![Effect::NavigateTo(SectionId::About)]);
    }
}
