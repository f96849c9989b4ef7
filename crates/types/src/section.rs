use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one of the fixed content sections of the page.
///
/// Variants are declared in document order, so `Ord` follows the order in
/// which the sections are stacked on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero section shown at the top of the page.
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Contact,
}

impl SectionId {
    /// Every section, in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    /// Stable lowercase identifier (e.g. `"services"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label used by navigation controls.
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    /// Position of the section in document order.
    pub fn index(self) -> usize {
        SectionId::ALL.iter().position(|id| *id == self).unwrap_or_default()
    }

    /// Section at the given document position, if any.
    pub fn from_index(index: usize) -> Option<SectionId> {
        SectionId::ALL.get(index).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'; expected one of home, about, services, portfolio, contact")]
pub struct ParseSectionIdError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ParseSectionIdError(value.to_string()))
    }
}

/// Opaque reference to the live on-screen region representing a section.
///
/// Handles are minted by whoever mounts the region. Remounting a section
/// yields a fresh handle, which lets consumers tell a stale region apart from
/// its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionHandle(u64);

impl RegionHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

/// Vertical span in document rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extent {
    pub top: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// First row past the end of the span.
    pub const fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Number of rows shared with `other`.
    pub fn overlap(&self, other: &Extent) -> u32 {
        let start = self.top.max(other.top);
        let end = self.bottom().min(other.bottom());
        end.saturating_sub(start)
    }

    /// Fraction of this span that lies inside `viewport`, in `0.0..=1.0`.
    ///
    /// An empty span is never considered visible.
    pub fn visible_fraction(&self, viewport: &Extent) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.overlap(viewport) as f32 / self.height as f32
    }
}

/// Notification that a region crossed the visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub section_id: SectionId,
    /// Region the crossing was observed on.
    pub region: RegionHandle,
    pub is_visible: bool,
    pub visible_fraction: f32,
}

impl VisibilityEvent {
    pub fn visible(section_id: SectionId, region: RegionHandle, visible_fraction: f32) -> Self {
        Self {
            section_id,
            region,
            is_visible: true,
            visible_fraction,
        }
    }

    pub fn hidden(section_id: SectionId, region: RegionHandle, visible_fraction: f32) -> Self {
        Self {
            section_id,
            region,
            is_visible: false,
            visible_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_parse_case_insensitively() {
        assert_eq!("Services".parse::<SectionId>(), Ok(SectionId::Services));
        assert_eq!(" contact ".parse::<SectionId>(), Ok(SectionId::Contact));
        assert!("blog".parse::<SectionId>().is_err());
    }

    #[test]
    fn section_ids_serialize_lowercase() {
        let json = serde_json::to_string(&SectionId::Portfolio).expect("serialize");
        assert_eq!(json, "\"portfolio\"");
        let back: SectionId = serde_json::from_str("\"about\"").expect("deserialize");
        assert_eq!(back, SectionId::About);
    }

    #[test]
    fn index_round_trips_document_order() {
        for (position, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
            assert_eq!(SectionId::from_index(position), Some(*id));
        }
        assert_eq!(SectionId::from_index(5), None);
    }

    #[test]
    fn visible_fraction_is_relative_to_region_height() {
        let viewport = Extent::new(10, 20);
        assert_eq!(Extent::new(0, 20).visible_fraction(&viewport), 0.5);
        assert_eq!(Extent::new(12, 4).visible_fraction(&viewport), 1.0);
        assert_eq!(Extent::new(40, 10).visible_fraction(&viewport), 0.0);
        assert_eq!(Extent::new(15, 0).visible_fraction(&viewport), 0.0);
    }
}
