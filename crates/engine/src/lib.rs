//! # HBT Engine
//!
//! Section-visibility synchronization for a single-page site: keeps one
//! published "active section" in step with both explicit navigation and what
//! is actually on screen.
//!
//! ## Architecture
//!
//! - **`registry`**: [`SectionRegistry`] maps each section to its live region
//!   and keeps the observer subscribed to exactly those regions.
//! - **`observer`**: [`ViewportObserver`] seam plus [`GeometryObserver`], which
//!   turns region extents into threshold crossings.
//! - **`tracker`**: [`ActiveSectionTracker`] owns the published value and
//!   applies navigation commands and visibility events (last event wins).
//! - **`scroll`**: [`ScrollDriver`] port and the [`SmoothScroll`] animation.
//! - **`sync`**: [`SectionSync`] facade tying the pieces together.
//!
//! ## Usage
//!
//! ```rust
//! use hbt_engine::{GeometryObserver, SectionSync, SmoothScroll};
//! use hbt_types::{RegionHandle, SectionId};
//!
//! let mut sync = SectionSync::new(GeometryObserver::default(), SmoothScroll::default());
//! sync.register(SectionId::Home, RegionHandle::new(1));
//! sync.register(SectionId::Services, RegionHandle::new(2));
//!
//! let nav = sync.subscribe();
//! sync.navigate_to(SectionId::Services);
//! assert_eq!(nav.get(), SectionId::Services);
//! assert!(sync.scroll().is_animating());
//! ```

pub mod error;
pub mod observer;
pub mod registry;
pub mod scroll;
pub mod sync;
pub mod tracker;

pub use error::SyncAnomaly;
pub use observer::{DEFAULT_VISIBILITY_THRESHOLD, GeometryObserver, RegionGeometry, ViewportObserver};
pub use registry::SectionRegistry;
pub use scroll::{DEFAULT_SCROLL_DURATION, ScrollDriver, SmoothScroll};
pub use sync::SectionSync;
pub use tracker::{ActiveSection, ActiveSectionTracker, NavigateOutcome, ScrollRequest, VisibilityOutcome};
