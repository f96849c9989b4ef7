use std::collections::HashMap;

use std::time::Duration;

use hbt_engine::{GeometryObserver, RegionGeometry, ScrollDriver, ScrollRequest, SectionSync, SmoothScroll, SyncAnomaly, ViewportObserver, VisibilityOutcome};
use hbt_types::{Extent, RegionHandle, SectionId, VisibilityEvent};

#[derive(Debug, Default)]
struct RecordingScroll {
    targets: Vec<RegionHandle>,
    released: Vec<RegionHandle>,
}

impl ScrollDriver for RecordingScroll {
    fn scroll_into_view(&mut self, region: RegionHandle) {
        self.targets.push(region);
    }

    fn region_released(&mut self, region: RegionHandle) {
        self.released.push(region);
    }
}

#[derive(Default)]
struct Page {
    extents: HashMap<RegionHandle, Extent>,
}

impl RegionGeometry for Page {
    fn extent(&self, region: RegionHandle) -> Option<Extent> {
        self.extents.get(&region).copied()
    }
}

const HOME: RegionHandle = RegionHandle::new(1);
const ABOUT: RegionHandle = RegionHandle::new(2);
const SERVICES: RegionHandle = RegionHandle::new(3);

type Controller = SectionSync<GeometryObserver, RecordingScroll>;

/// Registers home/about/services as three 30-row regions stacked in order.
fn mounted_page() -> (Controller, Page) {
    let mut sync = SectionSync::new(GeometryObserver::default(), RecordingScroll::default());
    let mut page = Page::default();
    for (section, region, top) in [
        (SectionId::Home, HOME, 0),
        (SectionId::About, ABOUT, 30),
        (SectionId::Services, SERVICES, 60),
    ] {
        sync.register(section, region);
        page.extents.insert(region, Extent::new(top, 30));
    }
    (sync, page)
}

#[test]
fn active_section_starts_at_home() {
    let (sync, _) = mounted_page();
    assert_eq!(sync.active(), SectionId::Home);
    assert_eq!(sync.subscribe().get(), SectionId::Home);
}

#[test]
fn navigation_is_immediate_for_every_registered_section() {
    let (mut sync, _) = mounted_page();
    for (section, region) in [(SectionId::About, ABOUT), (SectionId::Services, SERVICES), (SectionId::Home, HOME)] {
        let outcome = sync.navigate_to(section);
        assert_eq!(sync.active(), section);
        assert_eq!(outcome.scroll, ScrollRequest::Issued(region));
    }
    assert_eq!(sync.scroll().targets, vec![ABOUT, SERVICES, HOME]);
}

#[test]
fn hidden_events_never_move_the_active_section() {
    let (mut sync, _) = mounted_page();
    sync.navigate_to(SectionId::About);
    let events = [
        VisibilityEvent::hidden(SectionId::Home, HOME, 0.0),
        VisibilityEvent::hidden(SectionId::Services, SERVICES, 0.4),
        VisibilityEvent::hidden(SectionId::About, ABOUT, 0.2),
    ];
    assert_eq!(sync.handle_visibility_batch(events), None);
    assert_eq!(sync.active(), SectionId::About);
}

#[test]
fn last_visible_event_wins_regardless_of_fraction() {
    let (mut sync, _) = mounted_page();
    let events = [
        VisibilityEvent::visible(SectionId::Home, HOME, 1.0),
        VisibilityEvent::visible(SectionId::Services, SERVICES, 0.95),
        VisibilityEvent::visible(SectionId::About, ABOUT, 0.5),
    ];
    assert_eq!(sync.handle_visibility_batch(events), Some(SectionId::About));
}

#[test]
fn unregister_twice_or_unknown_is_a_no_op() {
    let (mut sync, _) = mounted_page();
    assert_eq!(sync.unregister(SectionId::About), Some(ABOUT));
    let snapshot: Vec<_> = sync.registry().iter().collect();

    assert_eq!(sync.unregister(SectionId::About), None);
    assert_eq!(sync.unregister(SectionId::Contact), None);
    assert_eq!(sync.registry().iter().collect::<Vec<_>>(), snapshot);
}

#[test]
fn unregister_releases_the_region_to_the_scroll_driver() {
    let (mut sync, _) = mounted_page();
    sync.unregister(SectionId::About);
    sync.unregister(SectionId::About);
    assert_eq!(sync.scroll().released, vec![ABOUT]);
}

#[test]
fn unmounting_the_scroll_target_stops_the_animation() {
    let mut sync = SectionSync::new(GeometryObserver::default(), SmoothScroll::new(Duration::from_millis(450)));
    let mut page = Page::default();
    for (section, region, top) in [(SectionId::Home, HOME, 0), (SectionId::About, ABOUT, 30), (SectionId::Services, SERVICES, 60)] {
        sync.register(section, region);
        page.extents.insert(region, Extent::new(top, 30));
    }

    sync.navigate_to(SectionId::Services);
    assert!(sync.scroll().is_animating());
    sync.unregister(SectionId::About);
    assert_eq!(sync.scroll().target(), Some(SERVICES));

    sync.unregister(SectionId::Services);
    assert!(!sync.scroll().is_animating());
    assert_eq!(sync.scroll_mut().tick(Duration::from_millis(16), 0, 60, &page), None);
    assert_eq!(sync.active(), SectionId::Services);
}

#[test]
fn unregistered_region_crossings_never_reach_the_tracker() {
    let (mut sync, page) = mounted_page();
    sync.sample(Extent::new(0, 30), &page);
    sync.unregister(SectionId::About);

    // About would be fully visible here if it were still observed.
    assert_eq!(sync.sample(Extent::new(30, 30), &page), None);
    assert_eq!(sync.active(), SectionId::Home);
    assert!(!sync.observer().observed().contains(&ABOUT));
}

#[test]
fn stale_event_after_remount_is_dropped() {
    let (mut sync, _) = mounted_page();
    let remounted = RegionHandle::new(20);
    assert!(matches!(
        sync.register(SectionId::About, remounted),
        Some(SyncAnomaly::DuplicateRegistration { previous, .. }) if previous == ABOUT
    ));

    let stale = VisibilityEvent::visible(SectionId::About, ABOUT, 1.0);
    assert!(matches!(sync.handle_visibility(stale), VisibilityOutcome::Dropped(_)));
    assert_eq!(sync.active(), SectionId::Home);

    let fresh = VisibilityEvent::visible(SectionId::About, remounted, 1.0);
    assert_eq!(
        sync.handle_visibility(fresh),
        VisibilityOutcome::Transitioned {
            from: SectionId::Home,
            to: SectionId::About
        }
    );
}

#[test]
fn navigation_to_unmounted_section_updates_without_scrolling() {
    let (mut sync, _) = mounted_page();
    let outcome = sync.navigate_to(SectionId::Portfolio);
    assert_eq!(sync.active(), SectionId::Portfolio);
    assert_eq!(
        outcome.scroll,
        ScrollRequest::Skipped(SyncAnomaly::MissingRegionHandle {
            section: SectionId::Portfolio
        })
    );
    assert!(sync.scroll().targets.is_empty());
}

#[test]
fn navigate_then_settle_then_scroll_manually() {
    let (mut sync, page) = mounted_page();
    let mut reader = sync.subscribe();
    sync.sample(Extent::new(0, 30), &page);

    let outcome = sync.navigate_to(SectionId::Services);
    assert_eq!(reader.mark_seen(), SectionId::Services);
    assert_eq!(outcome.scroll, ScrollRequest::Issued(SERVICES));
    assert_eq!(sync.scroll().targets, vec![SERVICES]);

    // The scroll settles with services filling the viewport.
    assert_eq!(sync.sample(Extent::new(60, 30), &page), None);
    assert_eq!(sync.active(), SectionId::Services);
    assert!(!reader.has_changed());

    // The user scrolls back up by hand until about fills the viewport.
    assert_eq!(sync.sample(Extent::new(30, 30), &page), Some(SectionId::About));
    assert_eq!(reader.mark_seen(), SectionId::About);
}

#[test]
fn teardown_releases_all_regions() {
    let (mut sync, page) = mounted_page();
    sync.teardown();
    assert!(sync.registry().is_empty());
    assert!(sync.observer().observed().is_empty());
    assert_eq!(sync.sample(Extent::new(30, 30), &page), None);
}
