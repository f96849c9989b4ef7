//! Vertical scroll position of the page.
//!
//! Tracks document height, viewport height and the current offset, with
//! bounded line/page navigation. The offset is also what the smooth-scroll
//! animation writes to and what the visibility observer samples.

use hbt_types::Extent;

/// Scroll metrics in terminal rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Returns the maximum valid scroll offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// The rows currently on screen, in document coordinates.
    pub fn viewport_extent(&self) -> Extent {
        Extent::new(u32::from(self.offset), u32::from(self.viewport_height))
    }

    /// Updates both heights at once and clamps the offset.
    pub fn resize(&mut self, content_height: u32, viewport_height: u16) {
        self.content_height = u16::try_from(content_height).unwrap_or(u16::MAX);
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Jumps to `offset`, clamped to the valid range.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = u16::try_from(offset).unwrap_or(u16::MAX);
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up).
    pub fn scroll_lines(&mut self, delta: i16) {
        if delta == 0 || !self.is_scrollable() {
            return;
        }
        let current = i32::from(self.offset);
        let max = i32::from(self.max_offset());
        let next = (current + i32::from(delta)).clamp(0, max);
        self.offset = next as u16;
    }

    /// Scrolls by whole viewports, keeping one row of overlap.
    pub fn scroll_pages(&mut self, delta_pages: i16) {
        if delta_pages == 0 || self.viewport_height == 0 {
            return;
        }
        let page = i32::from(self.viewport_height.saturating_sub(1).max(1));
        let delta = page.saturating_mul(i32::from(delta_pages)).clamp(i32::from(i16::MIN), i32::from(i16::MAX));
        self.scroll_lines(delta as i16);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
