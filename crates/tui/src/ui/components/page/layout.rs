//! Vertical layout of the page in document rows.
//!
//! Sections are stacked top to bottom at the current text width. Each
//! mounted section keeps its [`RegionHandle`] across relayouts; only its
//! extent changes.
//!
//! Every section is at least one viewport tall. Navigation then always ends
//! with the target's top at the viewport top and the section below it out of
//! sight, so the last visibility crossing belongs to the target. This holds
//! for the last section too: the page can scroll far enough to bring it up.

use hbt_engine::RegionGeometry;
use hbt_types::{Extent, RegionHandle, SectionId};
use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::content::{self, PageContext, PageTarget};

/// Columns left blank on each side of the page copy.
pub const PAGE_MARGIN: u16 = 2;
/// Column reserved for the scrollbar.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Wrapped height of `lines` at `width`.
pub fn wrapped_rows(lines: &[Line<'static>], width: u16) -> u32 {
    if lines.is_empty() || width == 0 {
        return 0;
    }
    let rows = Paragraph::new(lines.to_vec()).wrap(Wrap { trim: false }).line_count(width);
    u32::try_from(rows).unwrap_or(u32::MAX)
}

/// Text width available to the page for a terminal `columns` wide.
pub fn text_width(columns: u16) -> u16 {
    columns.saturating_sub(SCROLLBAR_WIDTH).saturating_sub(PAGE_MARGIN * 2)
}

/// One section after layout.
#[derive(Debug, Clone)]
pub struct LaidOutSection {
    pub section: SectionId,
    pub region: RegionHandle,
    pub extent: Extent,
    pub lines: Vec<Line<'static>>,
    targets: Vec<(Extent, PageTarget)>,
}

#[derive(Debug, Default)]
pub struct PageLayout {
    mounted: Vec<(SectionId, RegionHandle)>,
    sections: Vec<LaidOutSection>,
    footer: Vec<Line<'static>>,
    footer_extent: Extent,
}

impl PageLayout {
    /// Adds `section` at the end of the page. The next relayout gives it an extent.
    pub fn mount(&mut self, section: SectionId, region: RegionHandle) {
        self.mounted.retain(|(mounted, _)| *mounted != section);
        self.mounted.push((section, region));
    }

    /// Recomputes every section's lines and extent.
    pub fn relayout(&mut self, ctx: &PageContext<'_>) {
        let mut top = 0u32;
        let mut sections = Vec::with_capacity(self.mounted.len());
        for (section, region) in self.mounted.iter().copied() {
            let built = content::build_section(section, ctx);
            let height = wrapped_rows(&built.lines, ctx.width).max(u32::from(ctx.viewport_height));
            let targets = built
                .targets
                .into_iter()
                .map(|(range, target)| {
                    let offset = wrapped_rows(&built.lines[..range.start], ctx.width);
                    let rows = wrapped_rows(&built.lines[range], ctx.width);
                    (Extent::new(top + offset, rows), target)
                })
                .collect();
            sections.push(LaidOutSection {
                section,
                region,
                extent: Extent::new(top, height),
                lines: built.lines,
                targets,
            });
            top += height;
        }
        self.sections = sections;
        self.footer = content::footer(ctx);
        self.footer_extent = Extent::new(top, wrapped_rows(&self.footer, ctx.width));
    }

    pub fn sections(&self) -> &[LaidOutSection] {
        &self.sections
    }

    pub fn footer(&self) -> (&[Line<'static>], Extent) {
        (&self.footer, self.footer_extent)
    }

    /// Total document height in rows, footer included.
    pub fn content_height(&self) -> u32 {
        self.footer_extent.bottom()
    }

    pub fn extent_of(&self, section: SectionId) -> Option<Extent> {
        self.sections.iter().find(|laid| laid.section == section).map(|laid| laid.extent)
    }

    /// Click target covering document row `row`, if any.
    pub fn target_at(&self, row: u32) -> Option<PageTarget> {
        self.sections
            .iter()
            .filter(|laid| laid.extent.top <= row && row < laid.extent.bottom())
            .flat_map(|laid| laid.targets.iter())
            .find(|(extent, _)| extent.top <= row && row < extent.bottom())
            .map(|(_, target)| *target)
    }
}

impl RegionGeometry for PageLayout {
    fn extent(&self, region: RegionHandle) -> Option<Extent> {
        self.sections.iter().find(|laid| laid.region == region).map(|laid| laid.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contact::ContactField,
        ui::{components::contact::ContactFormState, theme::StudioTheme},
    };

    fn laid_out(width: u16, viewport_height: u16) -> PageLayout {
        let theme = StudioTheme::new();
        let contact = ContactFormState::default();
        let mut layout = PageLayout::default();
        for (index, section) in SectionId::ALL.into_iter().enumerate() {
            layout.mount(section, RegionHandle::new(index as u64 + 1));
        }
        layout.relayout(&PageContext {
            theme: &theme,
            width,
            viewport_height,
            contact: &contact,
            cta_focused: false,
            year: 2026,
        });
        layout
    }

    #[test]
    fn sections_stack_without_gaps() {
        let layout = laid_out(76, 30);
        let mut expected_top = 0;
        for laid in layout.sections() {
            assert_eq!(laid.extent.top, expected_top, "{}", laid.section);
            assert!(laid.extent.height > 0, "{}", laid.section);
            expected_top = laid.extent.bottom();
        }
        assert_eq!(layout.footer().1.top, expected_top);
        assert_eq!(layout.content_height(), layout.footer().1.bottom());
    }

    #[test]
    fn hero_fills_the_viewport() {
        let layout = laid_out(76, 40);
        assert_eq!(layout.extent_of(SectionId::Home).map(|extent| extent.height), Some(40));
    }

    #[test]
    fn short_sections_are_padded_to_the_viewport() {
        let layout = laid_out(120, 40);
        for laid in layout.sections() {
            assert!(laid.extent.height >= 40, "{}", laid.section);
        }
        let contact = layout.extent_of(SectionId::Contact).expect("contact");
        assert!(layout.content_height() - 40 >= contact.top);
    }

    #[test]
    fn narrow_widths_make_sections_taller_but_keep_handles() {
        let wide = laid_out(120, 4);
        let narrow = laid_out(30, 4);
        let wide_about = wide.extent_of(SectionId::About).expect("about");
        let narrow_about = narrow.extent_of(SectionId::About).expect("about");
        assert!(narrow_about.height > wide_about.height);
        assert_eq!(wide.extent(RegionHandle::new(2)), Some(wide_about));
        assert_eq!(narrow.extent(RegionHandle::new(2)), Some(narrow_about));
    }

    #[test]
    fn click_targets_land_inside_their_sections() {
        let layout = laid_out(76, 30);
        let home = layout.extent_of(SectionId::Home).expect("home");
        let cta_row = (home.top..home.bottom())
            .find(|row| layout.target_at(*row) == Some(PageTarget::ExploreServices))
            .expect("cta row");
        assert!(cta_row > home.top);

        let contact = layout.extent_of(SectionId::Contact).expect("contact");
        let field_rows = (contact.top..contact.bottom())
            .filter(|row| layout.target_at(*row) == Some(PageTarget::Field(ContactField::Email)))
            .count();
        assert_eq!(field_rows, 2, "label plus one input row");
        assert!((contact.top..contact.bottom()).any(|row| layout.target_at(row) == Some(PageTarget::Submit)));
    }

    #[test]
    fn unknown_region_has_no_geometry() {
        let layout = laid_out(76, 30);
        assert_eq!(layout.extent(RegionHandle::new(99)), None);
    }
}
