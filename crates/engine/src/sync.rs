//! Facade wiring the registry, observer and tracker together.

use hbt_types::{Extent, RegionHandle, SectionId, VisibilityEvent};
use tracing::info;

use crate::{
    error::SyncAnomaly,
    observer::{GeometryObserver, RegionGeometry, ViewportObserver},
    registry::SectionRegistry,
    scroll::ScrollDriver,
    tracker::{ActiveSection, ActiveSectionTracker, NavigateOutcome, VisibilityOutcome},
};

/// Section-visibility synchronization controller.
///
/// Hosts drive one `SectionSync`: sections call [`register`](Self::register)
/// / [`unregister`](Self::unregister) from their mount hooks, navigation
/// controls call [`navigate_to`](Self::navigate_to), and observed crossings
/// are fed through [`handle_visibility`](Self::handle_visibility). Render
/// consumers read the result through [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct SectionSync<O, S> {
    registry: SectionRegistry<O>,
    tracker: ActiveSectionTracker<S>,
}

impl<O: ViewportObserver, S: ScrollDriver> SectionSync<O, S> {
    pub fn new(observer: O, scroll: S) -> Self {
        Self {
            registry: SectionRegistry::new(observer),
            tracker: ActiveSectionTracker::new(scroll),
        }
    }

    pub fn register(&mut self, section: SectionId, region: RegionHandle) -> Option<SyncAnomaly> {
        self.registry.register(section, region)
    }

    /// Removes `section`; a scroll still heading for its region is released.
    pub fn unregister(&mut self, section: SectionId) -> Option<RegionHandle> {
        let region = self.registry.unregister(section)?;
        self.tracker.scroll_mut().region_released(region);
        Some(region)
    }

    pub fn navigate_to(&mut self, section: SectionId) -> NavigateOutcome {
        let target = self.registry.handle(section);
        self.tracker.navigate_to(section, target)
    }

    pub fn handle_visibility(&mut self, event: VisibilityEvent) -> VisibilityOutcome {
        let live_region = self.registry.handle(event.section_id);
        self.tracker.on_visibility_event(event, live_region)
    }

    /// Applies events in order; returns the active section if it changed.
    pub fn handle_visibility_batch<I>(&mut self, events: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = VisibilityEvent>,
    {
        let before = self.active();
        for event in events {
            self.handle_visibility(event);
        }
        let after = self.active();
        (after != before).then_some(after)
    }

    pub fn active(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn subscribe(&self) -> ActiveSection {
        self.tracker.subscribe()
    }

    /// Releases every region subscription at the end of the session.
    pub fn teardown(&mut self) {
        info!(regions = self.registry.len(), "tearing down section sync");
        self.registry.clear();
    }

    pub fn registry(&self) -> &SectionRegistry<O> {
        &self.registry
    }

    pub fn observer(&self) -> &O {
        self.registry.observer()
    }

    pub fn scroll(&self) -> &S {
        self.tracker.scroll()
    }

    pub fn scroll_mut(&mut self) -> &mut S {
        self.tracker.scroll_mut()
    }
}

impl<S: ScrollDriver> SectionSync<GeometryObserver, S> {
    /// Samples the viewport and feeds every crossing to the tracker.
    ///
    /// Returns the active section if it changed.
    pub fn sample<G: RegionGeometry + ?Sized>(&mut self, viewport: Extent, geometry: &G) -> Option<SectionId> {
        let events = self.registry.observer_mut().sample(viewport, geometry);
        self.handle_visibility_batch(events)
    }
}
