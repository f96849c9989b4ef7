//! Shared type definitions for the HBT Studio site.
//!
//! These types cross crate boundaries: the engine speaks in [`SectionId`],
//! [`RegionHandle`] and [`VisibilityEvent`], while the terminal front end
//! exchanges [`Msg`] and [`Effect`] values between its components and the
//! runtime loop.

mod contact;
mod message;
mod section;

pub use contact::ContactMessage;
pub use message::{Effect, Msg};
pub use section::{Extent, ParseSectionIdError, RegionHandle, SectionId, VisibilityEvent};
