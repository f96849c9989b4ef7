//! Outbound scroll port and the smooth-scroll primitive behind it.

use std::time::Duration;

use hbt_types::RegionHandle;
use tracing::debug;

use crate::observer::RegionGeometry;

/// Default length of a navigation scroll animation.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// "Scroll this region into view, smoothly."
///
/// The tracker only issues the command; the implementation owns the
/// animation and must tolerate targets that disappear mid-flight.
pub trait ScrollDriver {
    fn scroll_into_view(&mut self, region: RegionHandle);

    /// `region` was unmounted. A scroll still heading for it should stop.
    fn region_released(&mut self, _region: RegionHandle) {}
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    target: RegionHandle,
    /// Offset the animation starts from; captured on the first tick.
    from: Option<f32>,
    elapsed: Duration,
}

/// Eases a document offset toward the top of a target region.
///
/// A command issued while another animation is running retargets in place:
/// the new animation starts from wherever the offset is on the next tick and
/// the clock restarts. The destination is re-read from the geometry on every
/// tick, so a relayout mid-flight is followed rather than overshot.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    duration: Duration,
    animation: Option<Animation>,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DURATION)
    }
}

impl SmoothScroll {
    /// A zero `duration` jumps straight to the target on the next tick.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            animation: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn target(&self) -> Option<RegionHandle> {
        self.animation.map(|animation| animation.target)
    }

    /// Abandons the current animation, leaving the offset where it is.
    pub fn cancel(&mut self) {
        if let Some(animation) = self.animation.take() {
            debug!(target_region = %animation.target, "scroll animation cancelled");
        }
    }

    /// Advances the animation by `elapsed` and returns the new offset.
    ///
    /// `current` is the host's offset right now and `max_offset` the furthest
    /// it may scroll. Returns `None` when idle, or when the target no longer
    /// has geometry, in which case the animation ends without moving.
    pub fn tick<G: RegionGeometry + ?Sized>(&mut self, elapsed: Duration, current: u32, max_offset: u32, geometry: &G) -> Option<u32> {
        let animation = self.animation.as_mut()?;
        let Some(extent) = geometry.extent(animation.target) else {
            debug!(target_region = %animation.target, "scroll target vanished; stopping");
            self.animation = None;
            return None;
        };

        let destination = extent.top.min(max_offset);
        let from = *animation.from.get_or_insert(current as f32);
        animation.elapsed = animation.elapsed.saturating_add(elapsed);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (animation.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if progress >= 1.0 {
            self.animation = None;
            return Some(destination);
        }
        let position = from + (destination as f32 - from) * ease_out_cubic(progress);
        Some(position.round().max(0.0) as u32)
    }
}

impl ScrollDriver for SmoothScroll {
    fn scroll_into_view(&mut self, region: RegionHandle) {
        if let Some(previous) = self.target() {
            debug!(from_region = %previous, to_region = %region, "retargeting scroll animation");
        }
        self.animation = Some(Animation {
            target: region,
            from: None,
            elapsed: Duration::ZERO,
        });
    }

    fn region_released(&mut self, region: RegionHandle) {
        if self.target() == Some(region) {
            self.cancel();
        }
    }
}

fn ease_out_cubic(progress: f32) -> f32 {
    let remaining = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - remaining * remaining * remaining
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use hbt_types::Extent;

    use super::*;

    struct Layout(HashMap<RegionHandle, Extent>);

    impl RegionGeometry for Layout {
        fn extent(&self, region: RegionHandle) -> Option<Extent> {
            self.0.get(&region).copied()
        }
    }

    fn layout() -> Layout {
        Layout(HashMap::from([
            (RegionHandle::new(1), Extent::new(0, 40)),
            (RegionHandle::new(2), Extent::new(40, 40)),
            (RegionHandle::new(3), Extent::new(80, 40)),
        ]))
    }

    const FRAME: Duration = Duration::from_millis(50);

    #[test]
    fn idle_scroll_does_nothing() {
        let mut scroll = SmoothScroll::default();
        assert_eq!(scroll.tick(FRAME, 0, 100, &layout()), None);
    }

    #[test]
    fn animation_moves_monotonically_and_lands_on_target() {
        let mut scroll = SmoothScroll::new(Duration::from_millis(200));
        let geometry = layout();
        scroll.scroll_into_view(RegionHandle::new(3));

        let mut offset = 0;
        let mut steps = Vec::new();
        while let Some(next) = scroll.tick(FRAME, offset, 100, &geometry) {
            assert!(next >= offset, "offset went backwards: {offset} -> {next}");
            offset = next;
            steps.push(next);
        }
        assert_eq!(offset, 80);
        assert_eq!(steps.len(), 4);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn destination_is_clamped_to_max_offset() {
        let mut scroll = SmoothScroll::new(Duration::ZERO);
        scroll.scroll_into_view(RegionHandle::new(3));
        assert_eq!(scroll.tick(FRAME, 0, 60, &layout()), Some(60));
    }

    #[test]
    fn releasing_the_target_stops_the_animation() {
        let mut scroll = SmoothScroll::new(Duration::from_millis(200));
        scroll.scroll_into_view(RegionHandle::new(3));
        scroll.region_released(RegionHandle::new(2));
        assert_eq!(scroll.target(), Some(RegionHandle::new(3)));
        scroll.region_released(RegionHandle::new(3));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(FRAME, 0, 100, &layout()), None);
    }

    #[test]
    fn retarget_starts_from_current_position() {
        let mut scroll = SmoothScroll::new(Duration::from_millis(200));
        let geometry = layout();
        scroll.scroll_into_view(RegionHandle::new(3));
        let midway = scroll.tick(FRAME, 0, 100, &geometry).expect("animating");
        assert!(midway > 0 && midway < 80);

        scroll.scroll_into_view(RegionHandle::new(1));
        assert_eq!(scroll.target(), Some(RegionHandle::new(1)));
        let next = scroll.tick(FRAME, midway, 100, &geometry).expect("animating");
        assert!(next < midway, "expected to head back toward the top, got {next}");

        let mut offset = next;
        while let Some(step) = scroll.tick(FRAME, offset, 100, &geometry) {
            offset = step;
        }
        assert_eq!(offset, 0);
    }

    #[test]
    fn vanished_target_ends_silently() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_into_view(RegionHandle::new(42));
        assert_eq!(scroll.tick(FRAME, 10, 100, &layout()), None);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn cancel_stops_animation() {
        let mut scroll = SmoothScroll::default();
        scroll.scroll_into_view(RegionHandle::new(2));
        scroll.cancel();
        assert_eq!(scroll.tick(FRAME, 0, 100, &layout()), None);
    }
}
