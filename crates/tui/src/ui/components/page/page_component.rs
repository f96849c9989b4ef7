use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use hbt_types::{Effect, Extent, Msg, SectionId};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use super::{PAGE_MARGIN, PageTarget, SCROLLBAR_WIDTH};
use crate::{
    app::App,
    ui::{
        components::{Component, common::render_vertical_scrollbar},
        theme::theme_helpers as th,
        utils::document_row,
    },
};

/// Rows moved per mouse-wheel notch.
const WHEEL_STEP: i16 = 3;

/// Draws the visible slice of the page and handles manual scrolling.
#[derive(Debug, Default)]
pub struct PageComponent {
    last_area: Rect,
}

impl PageComponent {
    /// Applies a click on a page target.
    fn activate(app: &mut App, target: PageTarget) -> Vec<Effect> {
        match target {
            PageTarget::ExploreServices => {
                app.focus.focus(&app.f_hero_cta);
                vec![Effect::NavigateTo(SectionId::Services)]
            }
            PageTarget::Field(field) => {
                app.focus.focus(&app.contact.input(field).focus);
                Vec::new()
            }
            PageTarget::Submit => {
                app.focus.focus(&app.contact.f_submit);
                app.submit_contact().map(Effect::SubmitContact).into_iter().collect()
            }
        }
    }
}

impl Component for PageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let msg = match key.code {
            KeyCode::Enter if app.f_hero_cta.get() => return vec![Effect::NavigateTo(SectionId::Services)],
            KeyCode::Up | KeyCode::Char('k') => Msg::ScrollLines(-1),
            KeyCode::Down | KeyCode::Char('j') => Msg::ScrollLines(1),
            KeyCode::PageUp => Msg::ScrollPages(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => Msg::ScrollPages(1),
            KeyCode::Home | KeyCode::Char('g') => Msg::ScrollToTop,
            KeyCode::End | KeyCode::Char('G') => Msg::ScrollToBottom,
            _ => return Vec::new(),
        };
        app.update(&msg);
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let Some(row) = document_row(&self.last_area, app.scroll.offset(), mouse.column, mouse.row) else {
            return Vec::new();
        };
        match mouse.kind {
            MouseEventKind::ScrollDown => app.update(&Msg::ScrollLines(WHEEL_STEP)),
            MouseEventKind::ScrollUp => app.update(&Msg::ScrollLines(-WHEEL_STEP)),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = app.page.target_at(row) {
                    return Self::activate(app, target);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let layout = self.get_preferred_layout(app, area);
        let (content_area, scrollbar_area) = (layout[0], layout[1]);
        frame.render_widget(Block::new().style(th::panel_style(theme)), area);

        let viewport = Extent::new(u32::from(app.scroll.offset()), u32::from(content_area.height));
        for (index, laid) in app.page.sections().iter().enumerate() {
            render_slice(frame, content_area, viewport, laid.extent, &laid.lines, th::section_style(theme, index));
        }
        let (footer, footer_extent) = app.page.footer();
        render_slice(frame, content_area, viewport, footer_extent, footer, th::panel_style(theme));

        render_vertical_scrollbar(frame, scrollbar_area, theme, &app.scroll);
        self.last_area = content_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut hints = Vec::with_capacity(4);
        if app.f_hero_cta.get() {
            hints.push(("Enter", " explore services  "));
        }
        hints.extend([("↑/↓ PgUp/PgDn", " scroll  "), ("Home/End", " top/bottom  "), ("Tab", " next control  ")]);
        th::build_hint_spans(&*app.ctx.theme, &hints)
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::horizontal([Constraint::Min(0), Constraint::Length(SCROLLBAR_WIDTH)])
            .split(area)
            .to_vec()
    }
}

/// Draws the rows of `extent` that fall inside `viewport`.
fn render_slice(frame: &mut Frame, area: Rect, viewport: Extent, extent: Extent, lines: &[Line<'static>], style: Style) {
    let top = extent.top.max(viewport.top);
    let bottom = extent.bottom().min(viewport.bottom());
    if bottom <= top {
        return;
    }
    let slice = Rect {
        x: area.x,
        y: area.y + (top - viewport.top) as u16,
        width: area.width,
        height: (bottom - top) as u16,
    };
    frame.render_widget(Block::new().style(style), slice);

    let skipped_rows = (top - extent.top) as u16;
    let paragraph = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .scroll((skipped_rows, 0))
        .style(style);
    frame.render_widget(
        paragraph,
        slice.inner(Margin {
            horizontal: PAGE_MARGIN,
            vertical: 0,
        }),
    );
}
