//! Header navigation bar.
//!
//! One control per page section, laid out horizontally after the "HBT"
//! brand. The control matching the published active section is highlighted;
//! keyboard focus is tracked separately through rat-focus flags so the two
//! can differ while the user tabs around.

mod nav_bar_component;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use state::NavBarState;
