use hbt_types::SectionId;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

/// A single control in the header navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    /// Compact label used when the full labels do not fit the header.
    pub short_label: String,
    pub section: SectionId,
}

impl NavItem {
    pub fn new(label: impl Into<String>, short_label: impl Into<String>, section: SectionId) -> Self {
        Self {
            label: label.into(),
            short_label: short_label.into(),
            section,
        }
    }
}

/// State for the header navigation bar.
///
/// Owns the items and rat-focus flags for the container and each item. Which
/// item is *active* is not stored here: it is read from the published active
/// section on every render.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    pub items: Vec<NavItem>,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `items` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the nav bar; used for hit testing.
    pub last_area: Rect,
    /// Last computed per-item areas for hit testing.
    pub per_item_areas: Vec<Rect>,
}

impl NavBarState {
    pub fn new(items: Vec<NavItem>) -> Self {
        let item_focus_flags = (0..items.len()).map(|i| FocusFlag::named(&format!("nav.item.{i}"))).collect();
        Self {
            items,
            container_focus: FocusFlag::named("nav"),
            item_focus_flags,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// One control per section, in page order. Short labels are the digit
    /// keys that jump to each section.
    pub fn for_sections() -> Self {
        Self::new(
            SectionId::ALL
                .into_iter()
                .map(|section| NavItem::new(section.label(), (section.index() + 1).to_string(), section))
                .collect(),
        )
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(|flag| flag.get())
    }

    /// The flag that should receive focus when moving left (`forward == false`)
    /// or right, wrapping at both ends. Starts from the first item when none
    /// is focused.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(idx) if forward => (idx + 1) % len,
            Some(idx) => (idx + len - 1) % len,
            None => 0,
        };
        self.item_focus_flags.get(next).cloned()
    }

    pub fn flag_for(&self, section: SectionId) -> Option<&FocusFlag> {
        let idx = self.items.iter().position(|item| item.section == section)?;
        self.item_focus_flags.get(idx)
    }
}

impl HasFocus for NavBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_follow_page_order() {
        let state = NavBarState::for_sections();
        let labels: Vec<&str> = state.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Portfolio", "Contact"]);
        let short: Vec<&str> = state.items.iter().map(|item| item.short_label.as_str()).collect();
        assert_eq!(short, ["1", "2", "3", "4", "5"]);
        assert_eq!(state.item_focus_flags.len(), 5);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let state = NavBarState::for_sections();
        let first = state.cycle_focus(true).expect("flag");
        assert_eq!(first.widget_id(), state.item_focus_flags[0].widget_id());

        state.item_focus_flags[4].set(true);
        assert_eq!(state.cycle_focus(true).expect("flag").widget_id(), state.item_focus_flags[0].widget_id());
        state.item_focus_flags[4].set(false);

        state.item_focus_flags[0].set(true);
        assert_eq!(state.cycle_focus(false).expect("flag").widget_id(), state.item_focus_flags[4].widget_id());
    }
}
