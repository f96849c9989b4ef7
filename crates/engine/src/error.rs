//! Anomalies the synchronization core can run into.
//!
//! None of these are fatal. Each one degrades to "no visible effect" and is
//! reported back in operation outcomes so callers and tests can see what
//! happened; the core also logs them at `debug` level.

use hbt_types::{RegionHandle, SectionId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncAnomaly {
    /// `navigate_to` targeted a section with no mounted region; the scroll
    /// step was skipped.
    #[error("no region registered for section '{section}'; scroll skipped")]
    MissingRegionHandle { section: SectionId },

    /// `register` ran again for a section that still had a handle; the newer
    /// handle replaced `previous`.
    #[error("section '{section}' registered again; replaced {previous}")]
    DuplicateRegistration { section: SectionId, previous: RegionHandle },

    /// A visibility event arrived for a region that is no longer the live
    /// region of its section.
    #[error("visibility event for '{section}' on {region} has no live region; dropped")]
    UnregisteredVisibilityEvent { section: SectionId, region: RegionHandle },
}
