use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use hbt_types::Effect;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::state::NavItem;
use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th, utils::find_target_index_by_mouse_position},
};

const BRAND: &str = "HBT";
/// Blank columns on each side of an item label.
const ITEM_PADDING: u16 = 1;
/// Columns between neighbouring items.
const ITEM_GAP: u16 = 1;

/// Horizontal navigation bar rendered in the header.
#[derive(Debug, Default)]
pub struct NavBarComponent;

/// Labels and rects for the header's text `row`, right-aligned after the
/// brand. Full labels are used when all of them fit, short labels otherwise.
/// Items that still do not fit are left out.
fn fit_items(items: &[NavItem], row: Rect) -> Vec<(&str, Rect)> {
    let leftmost = row.x + BRAND.len() as u16 + ITEM_GAP;
    let available = row.right().saturating_sub(leftmost);
    let full: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    let labels = if row_width(&full) <= available {
        full
    } else {
        items.iter().map(|item| item.short_label.as_str()).collect()
    };

    let mut fitted = Vec::with_capacity(labels.len());
    let mut used = 0u16;
    for label in labels {
        let width = label.width() as u16 + ITEM_PADDING * 2;
        let needed = used + width + if fitted.is_empty() { 0 } else { ITEM_GAP };
        if needed > available {
            break;
        }
        used = needed;
        fitted.push((label, width));
    }

    let mut x = row.right().saturating_sub(used);
    fitted
        .into_iter()
        .map(|(label, width)| {
            let rect = Rect::new(x, row.y, width, 1);
            x += width + ITEM_GAP;
            (label, rect)
        })
        .collect()
}

/// Columns taken by `labels` laid out side by side.
fn row_width(labels: &[&str]) -> u16 {
    let items: u16 = labels.iter().map(|label| label.width() as u16 + ITEM_PADDING * 2).sum();
    items + ITEM_GAP * (labels.len() as u16).saturating_sub(1)
}

fn text_row(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(1)]).margin(1).areas(area);
    row
}

impl NavBarComponent {
    /// Focuses item `index` and asks the runtime to navigate to its section.
    fn activate(app: &mut App, index: usize) -> Vec<Effect> {
        let Some(item) = app.nav_bar.items.get(index) else {
            return Vec::new();
        };
        let section = item.section;
        if let Some(flag) = app.nav_bar.item_focus_flags.get(index) {
            app.focus.focus(flag);
        }
        vec![Effect::NavigateTo(section)]
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(flag) = app.nav_bar.cycle_focus(true) {
                    app.focus.focus(&flag);
                }
                Vec::new()
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(flag) = app.nav_bar.cycle_focus(false) {
                    app.focus.focus(&flag);
                }
                Vec::new()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match app.nav_bar.focused_index() {
                Some(index) => Self::activate(app, index),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let state = &app.nav_bar;
        match find_target_index_by_mouse_position(&state.last_area, &state.per_item_areas, mouse.column, mouse.row) {
            Some(index) => Self::activate(app, index),
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let any_focused = app.nav_bar.item_focus_flags.iter().any(|flag| flag.get());
        let block = th::block(theme, None, any_focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fitted = fit_items(&app.nav_bar.items, text_row(area));
        let brand = Line::from(Span::styled(BRAND, theme.accent_primary_style().add_modifier(Modifier::BOLD)));
        frame.render_widget(Paragraph::new(brand), Rect { width: inner.width.min(BRAND.len() as u16), ..inner });

        let active = app.active.get();
        for (index, (item, (label, item_area))) in app.nav_bar.items.iter().zip(&fitted).enumerate() {
            let focused = app.nav_bar.item_focus_flags.get(index).is_some_and(|flag| flag.get());
            let style = th::nav_item_style(theme, item.section == active, focused);
            frame.render_widget(Paragraph::new(Span::styled(label.to_string(), style)).centered(), *item_area);
        }

        let per_item_areas = fitted.into_iter().map(|(_, rect)| rect).collect();
        app.nav_bar.last_area = area;
        app.nav_bar.per_item_areas = per_item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("←/→", " move  "), ("Enter", " go to section  "), ("1-5", " jump  "), ("Tab", " next control  ")],
        )
    }

    /// One rect per item, right-aligned on the header's text row.
    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        fit_items(&app.nav_bar.items, text_row(area)).into_iter().map(|(_, rect)| rect).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hbt_util::UserPreferences;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::SiteConfig;

    fn app(columns: u16) -> App {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), ("TUI_THEME", None::<&str>)], || {
            App::new(&SiteConfig::default(), Arc::new(UserPreferences::ephemeral()), (columns, 30))
        })
    }

    #[test]
    fn items_are_right_aligned_without_overlap() {
        let app = app(100);
        let rects = NavBarComponent.get_preferred_layout(&app, Rect::new(0, 0, 100, 3));
        assert_eq!(rects.len(), 5);
        assert_eq!(rects.last().map(|rect| rect.right()), Some(99));
        for pair in rects.windows(2) {
            assert!(pair[0].right() < pair[1].x);
        }
    }

    #[test]
    fn narrow_header_switches_to_short_labels() {
        for columns in [30, 50] {
            let app = app(columns);
            let rects = NavBarComponent.get_preferred_layout(&app, Rect::new(0, 0, columns, 3));
            assert_eq!(rects.len(), 5, "{columns} columns");
            assert!(rects.iter().all(|rect| rect.x >= 1 + BRAND.len() as u16 + ITEM_GAP));
            assert!(rects.iter().all(|rect| rect.width == 1 + ITEM_PADDING * 2));
        }
    }

    #[test]
    fn short_labels_are_rendered_where_they_are_clicked() {
        let mut app = app(30);
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).expect("terminal");
        terminal
            .draw(|frame| NavBarComponent.render(frame, frame.area(), &mut app))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        assert_eq!(app.nav_bar.per_item_areas.len(), 5);
        for (index, rect) in app.nav_bar.per_item_areas.iter().enumerate() {
            let digit = (index + 1).to_string();
            assert_eq!(buffer[(rect.x + ITEM_PADDING, rect.y)].symbol(), digit);
        }
    }

    #[test]
    fn tiny_header_drops_trailing_items() {
        let app = app(20);
        let rects = NavBarComponent.get_preferred_layout(&app, Rect::new(0, 0, 20, 3));
        assert!(rects.len() < 5);
        assert!(rects.iter().all(|rect| rect.x >= 1 + BRAND.len() as u16 + ITEM_GAP));
    }

    #[test]
    fn arrow_keys_wrap_and_enter_navigates() {
        let mut app = app(100);
        let mut nav = NavBarComponent;
        nav.handle_key_events(&mut app, KeyEvent::from(KeyCode::Left));
        let focused = app.nav_bar.focused_index().map(|index| app.nav_bar.items[index].section);
        assert_eq!(focused, Some(hbt_types::SectionId::Contact));
        let effects = nav.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::NavigateTo(hbt_types::SectionId::Contact)]);
    }
}
