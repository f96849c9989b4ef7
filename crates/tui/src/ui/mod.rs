//! UI layer: components, the main view that arranges them, themes and the
//! runtime loop.

pub mod components;
pub mod main_view;
pub mod runtime;
pub mod theme;
pub mod utils;
