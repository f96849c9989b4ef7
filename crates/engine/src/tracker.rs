//! Active-section tracker.
//!
//! The tracker is the single writer of the published active section. Two
//! kinds of input move it:
//!
//! - `navigate_to` is unconditional: the value changes at once and a scroll
//!   command is issued toward the target region, without waiting for the
//!   animation.
//! - visibility events are conditional: only `is_visible = true` events from
//!   a live region move the value, and the last one processed wins. The
//!   tracker never compares visible fractions.
//!
//! Both inputs arrive on the same single-threaded loop, so last-event-wins is
//! well defined without locking.

use hbt_types::{RegionHandle, SectionId, VisibilityEvent};
use tokio::sync::watch;
use tracing::debug;

use crate::{error::SyncAnomaly, scroll::ScrollDriver};

/// Read handle on the published active section.
///
/// Cloning is cheap; every render consumer can hold its own handle.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    receiver: watch::Receiver<SectionId>,
}

impl ActiveSection {
    /// Latest published value.
    pub fn get(&self) -> SectionId {
        *self.receiver.borrow()
    }

    /// Whether a new value was published since this handle last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Returns the latest value and marks it as seen.
    pub fn mark_seen(&mut self) -> SectionId {
        *self.receiver.borrow_and_update()
    }

    /// Waits for the next published change. Returns `None` once the tracker
    /// has been dropped.
    pub async fn changed(&mut self) -> Option<SectionId> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

/// What `navigate_to` did about scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Issued(RegionHandle),
    Skipped(SyncAnomaly),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOutcome {
    pub active: SectionId,
    pub scroll: ScrollRequest,
}

/// What a visibility event did to the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityOutcome {
    Transitioned { from: SectionId, to: SectionId },
    /// The event named the section that was already active.
    Unchanged,
    /// `is_visible = false` events never move the active section.
    IgnoredHidden,
    Dropped(SyncAnomaly),
}

/// Owns the published active section and the outbound scroll port.
#[derive(Debug)]
pub struct ActiveSectionTracker<S> {
    active: watch::Sender<SectionId>,
    scroll: S,
}

impl<S: ScrollDriver> ActiveSectionTracker<S> {
    /// Creates a tracker whose active section starts at [`SectionId::Home`].
    pub fn new(scroll: S) -> Self {
        let (active, _) = watch::channel(SectionId::default());
        Self { active, scroll }
    }

    pub fn active(&self) -> SectionId {
        *self.active.borrow()
    }

    pub fn subscribe(&self) -> ActiveSection {
        ActiveSection {
            receiver: self.active.subscribe(),
        }
    }

    /// Makes `section` active immediately and scrolls toward `target`.
    ///
    /// When `target` is `None` the section has no mounted region: the value is
    /// still published, the scroll is skipped.
    pub fn navigate_to(&mut self, section: SectionId, target: Option<RegionHandle>) -> NavigateOutcome {
        self.publish(section);
        let scroll = match target {
            Some(region) => {
                debug!(%section, %region, "navigating to section");
                self.scroll.scroll_into_view(region);
                ScrollRequest::Issued(region)
            }
            None => {
                let anomaly = SyncAnomaly::MissingRegionHandle { section };
                debug!(%section, %anomaly, "navigating without a region");
                ScrollRequest::Skipped(anomaly)
            }
        };
        NavigateOutcome { active: section, scroll }
    }

    /// Applies a visibility event.
    ///
    /// `live_region` is the handle currently registered for the event's
    /// section; events observed on any other region are stale and dropped.
    pub fn on_visibility_event(&mut self, event: VisibilityEvent, live_region: Option<RegionHandle>) -> VisibilityOutcome {
        if live_region != Some(event.region) {
            let anomaly = SyncAnomaly::UnregisteredVisibilityEvent {
                section: event.section_id,
                region: event.region,
            };
            debug!(%anomaly, "dropping visibility event");
            return VisibilityOutcome::Dropped(anomaly);
        }
        if !event.is_visible {
            return VisibilityOutcome::IgnoredHidden;
        }
        let from = self.active();
        if !self.publish(event.section_id) {
            return VisibilityOutcome::Unchanged;
        }
        debug!(%from, to = %event.section_id, fraction = event.visible_fraction, "active section follows viewport");
        VisibilityOutcome::Transitioned {
            from,
            to: event.section_id,
        }
    }

    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// Publishes `section`; returns whether the value changed.
    fn publish(&self, section: SectionId) -> bool {
        self.active.send_if_modified(|current| {
            if *current == section {
                return false;
            }
            *current = section;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingScroll(Vec<RegionHandle>);

    impl ScrollDriver for RecordingScroll {
        fn scroll_into_view(&mut self, region: RegionHandle) {
            self.0.push(region);
        }
    }

    fn region(raw: u64) -> RegionHandle {
        RegionHandle::new(raw)
    }

    #[test]
    fn starts_at_home() {
        let tracker = ActiveSectionTracker::new(RecordingScroll::default());
        assert_eq!(tracker.active(), SectionId::Home);
        assert_eq!(tracker.subscribe().get(), SectionId::Home);
    }

    #[test]
    fn navigation_publishes_before_scrolling_completes() {
        let mut tracker = ActiveSectionTracker::new(RecordingScroll::default());
        let reader = tracker.subscribe();

        let outcome = tracker.navigate_to(SectionId::Portfolio, Some(region(4)));

        assert_eq!(outcome.active, SectionId::Portfolio);
        assert_eq!(outcome.scroll, ScrollRequest::Issued(region(4)));
        assert_eq!(reader.get(), SectionId::Portfolio);
        assert!(reader.has_changed());
        assert_eq!(tracker.scroll().0, vec![region(4)]);
    }

    #[test]
    fn navigation_without_region_still_publishes() {
        let mut tracker = ActiveSectionTracker::new(RecordingScroll::default());
        let outcome = tracker.navigate_to(SectionId::Contact, None);

        assert_eq!(tracker.active(), SectionId::Contact);
        assert_eq!(
            outcome.scroll,
            ScrollRequest::Skipped(SyncAnomaly::MissingRegionHandle {
                section: SectionId::Contact
            })
        );
        assert!(tracker.scroll().0.is_empty());
    }

    #[test]
    fn hidden_events_are_ignored() {
        let mut tracker = ActiveSectionTracker::new(RecordingScroll::default());
        let event = VisibilityEvent::hidden(SectionId::About, region(2), 0.1);
        assert_eq!(tracker.on_visibility_event(event, Some(region(2))), VisibilityOutcome::IgnoredHidden);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn stale_region_events_are_dropped() {
        let mut tracker = ActiveSectionTracker::new(RecordingScroll::default());
        let event = VisibilityEvent::visible(SectionId::About, region(2), 0.9);

        let outcome = tracker.on_visibility_event(event, Some(region(9)));
        assert!(matches!(outcome, VisibilityOutcome::Dropped(SyncAnomaly::UnregisteredVisibilityEvent { .. })));
        let outcome = tracker.on_visibility_event(event, None);
        assert!(matches!(outcome, VisibilityOutcome::Dropped(_)));
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn visible_event_for_active_section_is_unchanged() {
        let mut tracker = ActiveSectionTracker::new(RecordingScroll::default());
        let mut reader = tracker.subscribe();
        reader.mark_seen();

        let event = VisibilityEvent::visible(SectionId::Home, region(1), 1.0);
        assert_eq!(tracker.on_visibility_event(event, Some(region(1))), VisibilityOutcome::Unchanged);
        assert!(!reader.has_changed());
    }
}
