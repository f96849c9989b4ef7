//! UI components: nav bar, page, contact form, hint bar.

pub mod common;
pub mod component;
pub mod contact;
pub mod hint_bar;
pub mod nav_bar;
pub mod page;

pub use component::*;
pub use contact::ContactFormComponent;
pub use hint_bar::HintBarComponent;
pub use nav_bar::NavBarComponent;
pub use page::PageComponent;
