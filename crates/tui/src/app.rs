//! Application state for the terminal site.
//!
//! [`App`] owns the section-visibility controller, the page layout it
//! observes, the scroll position, and the per-component UI state. All of it
//! is mutated from the runtime loop only.

use std::{rc::Rc, sync::Arc, time::Duration};

use chrono::{Datelike, Local};
use hbt_engine::{ActiveSection, GeometryObserver, ScrollRequest, SectionSync, SmoothScroll};
use hbt_types::{ContactMessage, Effect, Msg, RegionHandle, SectionId};
use hbt_util::UserPreferences;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::{
    SiteConfig,
    ui::{
        components::{
            common::ScrollMetrics,
            contact::ContactFormState,
            nav_bar::NavBarState,
            page::{PageContext, PageLayout, text_width},
        },
        theme::{self, Theme, ThemeDefinition, catalog},
    },
};

/// Rows taken by the header nav bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the hint bar.
pub const HINT_BAR_HEIGHT: u16 = 1;

/// Cross-cutting context shared by all components.
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub theme_definition: &'static ThemeDefinition,
    pub preferences: Arc<UserPreferences>,
    /// Set after a theme switch; the hint bar shows it until the next key.
    pub theme_notice: bool,
}

/// Top-level application state.
pub struct App {
    pub ctx: SharedCtx,
    /// Section-visibility synchronization controller.
    pub sync: SectionSync<GeometryObserver, SmoothScroll>,
    /// Reader for the published active section; the nav bar renders from it.
    pub active: ActiveSection,
    pub page: PageLayout,
    pub scroll: ScrollMetrics,
    pub nav_bar: NavBarState,
    pub f_hero_cta: FocusFlag,
    pub contact: ContactFormState,
    pub focus: Rc<Focus>,
    app_focus: FocusFlag,
    terminal_size: (u16, u16),
    next_region: u64,
    year: i32,
    dirty: bool,
}

impl App {
    /// Builds the app for a terminal of `size` (columns, rows) and mounts every section.
    pub fn new(config: &SiteConfig, preferences: Arc<UserPreferences>, size: (u16, u16)) -> Self {
        let preferred_theme = preferences.preferred_theme();
        let loaded = theme::load(config.theme.as_deref(), preferred_theme.as_deref());
        let scroll_duration = if config.reduce_motion {
            Duration::ZERO
        } else {
            config.scroll_duration
        };
        let sync = SectionSync::new(GeometryObserver::new(config.visibility_threshold), SmoothScroll::new(scroll_duration));
        let active = sync.subscribe();
        info!(
            theme = loaded.definition.id,
            threshold = sync.observer().threshold(),
            scroll_ms = scroll_duration.as_millis() as u64,
            "starting site"
        );

        let mut app = Self {
            ctx: SharedCtx {
                theme: loaded.theme,
                theme_definition: loaded.definition,
                preferences,
                theme_notice: false,
            },
            sync,
            active,
            page: PageLayout::default(),
            scroll: ScrollMetrics::default(),
            nav_bar: NavBarState::for_sections(),
            f_hero_cta: FocusFlag::named("hero.cta"),
            contact: ContactFormState::default(),
            focus: Rc::default(),
            app_focus: FocusFlag::named("app"),
            terminal_size: size,
            next_region: 1,
            year: Local::now().year(),
            dirty: true,
        };
        for section in SectionId::ALL {
            app.mount_section(section);
        }
        app.refresh();
        app.focus = Rc::new(FocusBuilder::build_for(&app));
        if let Some(flag) = app.nav_bar.item_focus_flags.first() {
            app.focus.focus(flag);
        }
        app
    }

    /// Applies a message to the app state.
    pub fn update(&mut self, msg: &Msg) {
        match msg {
            Msg::Tick(elapsed) => self.tick(*elapsed),
            Msg::Resize(columns, rows) => {
                self.terminal_size = (*columns, *rows);
                self.refresh();
            }
            Msg::Navigate(section) => self.navigate_to(*section),
            Msg::ScrollLines(delta) => self.scroll_manually(|scroll| scroll.scroll_lines(*delta)),
            Msg::ScrollPages(delta) => self.scroll_manually(|scroll| scroll.scroll_pages(*delta)),
            Msg::ScrollToTop => self.scroll_manually(ScrollMetrics::scroll_to_top),
            Msg::ScrollToBottom => self.scroll_manually(ScrollMetrics::scroll_to_bottom),
            Msg::ContactDelivered(result) => {
                self.contact.on_delivered(result);
                self.refresh();
            }
        }
    }

    /// Whether the navigation scroll animation is running.
    pub fn is_animating(&self) -> bool {
        self.sync.scroll().is_animating()
    }

    /// Returns and clears the "needs a redraw" flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Area the page is drawn into, below the header and above the hint bar.
    pub fn page_area(&self) -> Rect {
        let (columns, rows) = self.terminal_size;
        Rect::new(0, HEADER_HEIGHT, columns, rows.saturating_sub(HEADER_HEIGHT + HINT_BAR_HEIGHT))
    }

    /// Rebuilds the page for the current state, clamps the scroll position
    /// and lets the observer see the result.
    pub fn refresh(&mut self) {
        let viewport_height = self.page_area().height;
        let ctx = PageContext {
            theme: &*self.ctx.theme,
            width: text_width(self.terminal_size.0),
            viewport_height,
            contact: &self.contact,
            cta_focused: self.f_hero_cta.get(),
            year: self.year,
        };
        self.page.relayout(&ctx);
        self.scroll.resize(self.page.content_height(), viewport_height);
        self.sample_viewport();
        self.dirty = true;
    }

    /// Explicit navigation: publishes `section` and starts the scroll.
    pub fn navigate_to(&mut self, section: SectionId) {
        let outcome = self.sync.navigate_to(section);
        match outcome.scroll {
            ScrollRequest::Issued(region) => debug!(%section, %region, "navigating"),
            ScrollRequest::Skipped(anomaly) => debug!(%section, %anomaly, "navigation without scroll"),
        }
        self.dirty = true;
    }

    /// Starts a submission of the contact form, or marks the invalid fields.
    pub fn submit_contact(&mut self) -> Option<ContactMessage> {
        if self.contact.is_busy() {
            return None;
        }
        let result = self.contact.try_submit();
        self.refresh();
        match result {
            Ok(message) => Some(message),
            Err(errors) => {
                debug!(errors = errors.len(), "contact form rejected");
                None
            }
        }
    }

    /// Switches to the next palette and remembers the choice.
    pub fn cycle_theme(&mut self) {
        let next = catalog::next_after(self.ctx.theme_definition);
        self.ctx.theme = next.build();
        self.ctx.theme_definition = next;
        self.ctx.theme_notice = true;
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, theme = next.id, "failed to persist theme preference");
        }
        self.refresh();
    }

    /// Section owning the focused widget, when it is not the nav bar.
    pub fn focused_section(&self) -> Option<SectionId> {
        if self.f_hero_cta.get() {
            Some(SectionId::Home)
        } else if self.contact.focused_field().is_some() || self.contact.is_submit_focused() {
            Some(SectionId::Contact)
        } else {
            None
        }
    }

    /// Navigation that brings the focused widget's section on screen, if it is off screen.
    pub fn reveal_focus(&self) -> Option<Effect> {
        let section = self.focused_section()?;
        let extent = self.page.extent_of(section)?;
        let viewport = self.scroll.viewport_extent();
        (extent.overlap(&viewport) == 0).then_some(Effect::NavigateTo(section))
    }

    /// Releases every section subscription.
    pub fn teardown(&mut self) {
        self.sync.teardown();
    }

    fn mount_section(&mut self, section: SectionId) {
        let region = RegionHandle::new(self.next_region);
        self.next_region += 1;
        if let Some(anomaly) = self.sync.register(section, region) {
            debug!(%anomaly, "section remounted");
        }
        self.page.mount(section, region);
    }

    fn tick(&mut self, elapsed: Duration) {
        let current = u32::from(self.scroll.offset());
        let max_offset = u32::from(self.scroll.max_offset());
        if let Some(offset) = self.sync.scroll_mut().tick(elapsed, current, max_offset, &self.page) {
            self.scroll.set_offset(offset);
            self.dirty = true;
        }
        self.sample_viewport();
    }

    fn scroll_manually(&mut self, apply: impl FnOnce(&mut ScrollMetrics)) {
        self.sync.scroll_mut().cancel();
        apply(&mut self.scroll);
        self.sample_viewport();
        self.dirty = true;
    }

    fn sample_viewport(&mut self) {
        let viewport = self.scroll.viewport_extent();
        if let Some(section) = self.sync.sample(viewport, &self.page) {
            debug!(%section, offset = viewport.top, "active section follows scroll");
            self.dirty = true;
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.nav_bar);
        builder.leaf_widget(&self.f_hero_cta);
        builder.widget(&self.contact);
    }

    fn focus(&self) -> FocusFlag {
        self.app_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
