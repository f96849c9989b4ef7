//! Viewport observation: turning region geometry into threshold crossings.
//!
//! The [`ViewportObserver`] trait is the seam the registry talks to; any
//! platform that can say "tell me when region R crosses visibility fraction
//! F" can implement it. [`GeometryObserver`] is the implementation used by
//! the terminal front end, which knows every region's extent in document rows
//! and samples them against the viewport once per frame.

use hbt_types::{Extent, RegionHandle, SectionId, VisibilityEvent};
use indexmap::IndexMap;
use tracing::trace;

/// Fraction of a region's own height that must be inside the viewport for it
/// to count as visible.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Subscription interface driven by [`SectionRegistry`](crate::SectionRegistry).
pub trait ViewportObserver {
    /// Starts watching `region` on behalf of `section`.
    fn observe(&mut self, section: SectionId, region: RegionHandle);

    /// Stops watching `region`. Unknown regions are ignored.
    fn unobserve(&mut self, region: RegionHandle);

    /// Regions currently watched.
    fn observed(&self) -> Vec<RegionHandle>;

    fn is_observing(&self, region: RegionHandle) -> bool {
        self.observed().contains(&region)
    }
}

/// Source of region extents in document rows.
pub trait RegionGeometry {
    /// Current extent of `region`, or `None` when it is not laid out.
    fn extent(&self, region: RegionHandle) -> Option<Extent>;
}

#[derive(Debug, Clone, Copy)]
struct Subscription {
    section: SectionId,
    /// Last state reported for the region; `None` until the first sample.
    last_visible: Option<bool>,
}

/// Geometry-backed observer that reports threshold crossings.
///
/// Each sample compares a region's state against the last state it
/// *reported*, not against the previous frame. A fast scroll that jumps a
/// region from fully visible to fully hidden between two samples therefore
/// still produces exactly one crossing, and an unchanged state never produces
/// a duplicate.
#[derive(Debug, Clone)]
pub struct GeometryObserver {
    threshold: f32,
    subscriptions: IndexMap<RegionHandle, Subscription>,
}

impl Default for GeometryObserver {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl GeometryObserver {
    /// Creates an observer with the given activation threshold.
    ///
    /// Values outside `(0, 1]` (or NaN) fall back to the nearest valid
    /// bound, or to the default when not a number.
    pub fn new(threshold: f32) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(f32::EPSILON, 1.0)
        };
        Self {
            threshold,
            subscriptions: IndexMap::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Samples every subscribed region against `viewport` and returns the
    /// crossings since the last reported state, in subscription order.
    ///
    /// Regions the geometry source does not know about are skipped and keep
    /// their previous state.
    pub fn sample<G: RegionGeometry + ?Sized>(&mut self, viewport: Extent, geometry: &G) -> Vec<VisibilityEvent> {
        let mut events = Vec::new();
        for (region, subscription) in self.subscriptions.iter_mut() {
            let Some(extent) = geometry.extent(*region) else {
                continue;
            };
            let visible_fraction = extent.visible_fraction(&viewport);
            let is_visible = visible_fraction >= self.threshold;
            if subscription.last_visible == Some(is_visible) {
                continue;
            }
            subscription.last_visible = Some(is_visible);
            trace!(section = %subscription.section, %region, is_visible, visible_fraction, "visibility crossing");
            events.push(VisibilityEvent {
                section_id: subscription.section,
                region: *region,
                is_visible,
                visible_fraction,
            });
        }
        events
    }
}

impl ViewportObserver for GeometryObserver {
    fn observe(&mut self, section: SectionId, region: RegionHandle) {
        self.subscriptions.entry(region).or_insert(Subscription {
            section,
            last_visible: None,
        });
    }

    fn unobserve(&mut self, region: RegionHandle) {
        self.subscriptions.shift_remove(&region);
    }

    fn observed(&self) -> Vec<RegionHandle> {
        self.subscriptions.keys().copied().collect()
    }

    fn is_observing(&self, region: RegionHandle) -> bool {
        self.subscriptions.contains_key(&region)
    }
}
