//! Section registry: which live region currently represents each section.
//!
//! The registry is the only writer of region handles. It owns the viewport
//! observer so that every register/unregister call can re-synchronize the
//! observer's subscription set to exactly the registry's contents.

use hbt_types::{RegionHandle, SectionId};
use indexmap::IndexMap;
use tracing::debug;

use crate::{error::SyncAnomaly, observer::ViewportObserver};

/// Lifecycle-scoped mapping from [`SectionId`] to its live [`RegionHandle`].
///
/// Entries are kept in registration order. At most one handle exists per
/// section; a section may transiently have none while it is not mounted.
#[derive(Debug)]
pub struct SectionRegistry<O> {
    regions: IndexMap<SectionId, RegionHandle>,
    observer: O,
}

impl<O: ViewportObserver> SectionRegistry<O> {
    pub fn new(observer: O) -> Self {
        Self {
            regions: IndexMap::new(),
            observer,
        }
    }

    /// Associates `region` with `section`, replacing any prior handle.
    ///
    /// Returns [`SyncAnomaly::DuplicateRegistration`] when a handle was
    /// already present. The replacement is applied either way and the
    /// previous region stops being observed.
    pub fn register(&mut self, section: SectionId, region: RegionHandle) -> Option<SyncAnomaly> {
        let anomaly = self
            .regions
            .insert(section, region)
            .map(|previous| SyncAnomaly::DuplicateRegistration { section, previous });
        if let Some(anomaly) = &anomaly {
            debug!(%section, %region, %anomaly, "replacing registered region");
        } else {
            debug!(%section, %region, "registered region");
        }
        self.resync_observer();
        anomaly
    }

    /// Removes the region registered for `section`.
    ///
    /// Unregistering a section without a handle is a no-op and returns `None`.
    pub fn unregister(&mut self, section: SectionId) -> Option<RegionHandle> {
        let removed = self.regions.shift_remove(&section)?;
        debug!(%section, region = %removed, "unregistered region");
        self.resync_observer();
        Some(removed)
    }

    /// Unregisters every section. Used when the session is torn down.
    pub fn clear(&mut self) {
        if self.regions.is_empty() {
            return;
        }
        self.regions.clear();
        self.resync_observer();
    }

    pub fn handle(&self, section: SectionId) -> Option<RegionHandle> {
        self.regions.get(&section).copied()
    }

    /// Reverse lookup: the section currently represented by `region`.
    pub fn section_for(&self, region: RegionHandle) -> Option<SectionId> {
        self.regions.iter().find_map(|(section, handle)| (*handle == region).then_some(*section))
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.regions.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Registered `(section, region)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, RegionHandle)> + '_ {
        self.regions.iter().map(|(section, region)| (*section, *region))
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access for sampling. Subscription changes must go through
    /// [`register`](Self::register) / [`unregister`](Self::unregister).
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Brings the observer's subscriptions in line with `regions`: drop every
    /// region that is no longer registered, then add the missing ones.
    fn resync_observer(&mut self) {
        for region in self.observer.observed() {
            if !self.regions.values().any(|live| *live == region) {
                self.observer.unobserve(region);
            }
        }
        for (section, region) in &self.regions {
            if !self.observer.is_observing(*region) {
                self.observer.observe(*section, *region);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that records calls so tests can assert on subscription churn.
    #[derive(Debug, Default)]
    struct RecordingObserver {
        observed: Vec<(SectionId, RegionHandle)>,
        observe_calls: usize,
        unobserve_calls: usize,
    }

    impl ViewportObserver for RecordingObserver {
        fn observe(&mut self, section: SectionId, region: RegionHandle) {
            self.observe_calls += 1;
            self.observed.push((section, region));
        }

        fn unobserve(&mut self, region: RegionHandle) {
            self.unobserve_calls += 1;
            self.observed.retain(|(_, observed)| *observed != region);
        }

        fn observed(&self) -> Vec<RegionHandle> {
            self.observed.iter().map(|(_, region)| *region).collect()
        }
    }

    fn handle(raw: u64) -> RegionHandle {
        RegionHandle::new(raw)
    }

    #[test]
    fn register_subscribes_each_region_once() {
        let mut registry = SectionRegistry::new(RecordingObserver::default());
        assert!(registry.register(SectionId::Home, handle(1)).is_none());
        assert!(registry.register(SectionId::About, handle(2)).is_none());

        assert_eq!(registry.observer().observed(), vec![handle(1), handle(2)]);
        assert_eq!(registry.observer().observe_calls, 2);
        assert_eq!(registry.handle(SectionId::About), Some(handle(2)));
        assert_eq!(registry.section_for(handle(1)), Some(SectionId::Home));
    }

    #[test]
    fn duplicate_registration_replaces_and_unsubscribes_old_region() {
        let mut registry = SectionRegistry::new(RecordingObserver::default());
        registry.register(SectionId::Services, handle(3));
        let anomaly = registry.register(SectionId::Services, handle(7));

        assert_eq!(
            anomaly,
            Some(SyncAnomaly::DuplicateRegistration {
                section: SectionId::Services,
                previous: handle(3)
            })
        );
        assert_eq!(registry.handle(SectionId::Services), Some(handle(7)));
        assert_eq!(registry.observer().observed(), vec![handle(7)]);
        assert_eq!(registry.observer().unobserve_calls, 1);
    }

    #[test]
    fn re_registering_the_same_region_does_not_double_subscribe() {
        let mut registry = SectionRegistry::new(RecordingObserver::default());
        registry.register(SectionId::Home, handle(1));
        registry.register(SectionId::Home, handle(1));

        assert_eq!(registry.observer().observed(), vec![handle(1)]);
        assert_eq!(registry.observer().observe_calls, 1);
        assert_eq!(registry.observer().unobserve_calls, 0);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = SectionRegistry::new(RecordingObserver::default());
        registry.register(SectionId::Home, handle(1));
        registry.register(SectionId::Contact, handle(5));

        assert_eq!(registry.unregister(SectionId::Contact), Some(handle(5)));
        assert_eq!(registry.unregister(SectionId::Contact), None);
        assert_eq!(registry.unregister(SectionId::Portfolio), None);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.observer().observed(), vec![handle(1)]);
        assert_eq!(registry.observer().unobserve_calls, 1);
    }

    #[test]
    fn clear_releases_every_subscription() {
        let mut registry = SectionRegistry::new(RecordingObserver::default());
        for (raw, section) in SectionId::ALL.into_iter().enumerate() {
            registry.register(section, handle(raw as u64));
        }
        registry.clear();

        assert!(registry.is_empty());
        assert!(registry.observer().observed().is_empty());
    }
}
