use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hbt_types::{Effect, SectionId};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::{
    app::App,
    contact::ContactField,
    ui::{components::Component, theme::theme_helpers as th},
};

/// Keyboard handling for the contact form.
#[derive(Debug, Default)]
pub struct ContactFormComponent;

impl ContactFormComponent {
    fn submit(app: &mut App) -> Vec<Effect> {
        app.submit_contact().map(Effect::SubmitContact).into_iter().collect()
    }

    /// Moves focus from `field` to the next control in the form.
    fn advance(app: &mut App, field: ContactField) {
        match field {
            ContactField::Name => app.focus.focus(&app.contact.email.focus),
            ContactField::Email => app.focus.focus(&app.contact.message.focus),
            ContactField::Message => app.focus.focus(&app.contact.f_submit),
        }
    }
}

impl Component for ContactFormComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Esc {
            if let Some(flag) = app.nav_bar.flag_for(SectionId::Contact).cloned() {
                app.focus.focus(&flag);
            }
            return Vec::new();
        }

        if app.contact.is_submit_focused() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Self::submit(app),
                _ => Vec::new(),
            };
        }

        let Some(field) = app.contact.focused_field() else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => return Self::submit(app),
            KeyCode::Enter if field == ContactField::Message => app.contact.insert_char(field, '\n'),
            KeyCode::Enter => Self::advance(app, field),
            KeyCode::Backspace => app.contact.backspace(field),
            KeyCode::Char(character) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.contact.insert_char(field, character)
            }
            _ => return Vec::new(),
        }
        app.refresh();
        Vec::new()
    }

    /// The form is drawn inline by the page.
    fn render(&mut self, _frame: &mut Frame, _rect: Rect, _app: &mut App) {}

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        if app.contact.is_submit_focused() {
            return th::build_hint_spans(theme, &[("Enter", " send  "), ("Esc", " back to menu  "), ("Tab", " next control  ")]);
        }
        let enter = if app.contact.focused_field() == Some(ContactField::Message) {
            ("Enter", " new line  ")
        } else {
            ("Enter", " next field  ")
        };
        th::build_hint_spans(theme, &[enter, ("Ctrl+Enter", " send  "), ("Esc", " back to menu  "), ("Tab", " next control  ")])
    }
}
