//! The scrolling page: five sections stacked vertically plus a footer.
//!
//! `layout` turns section copy into document rows and doubles as the
//! geometry the visibility observer samples; `page_component` draws the rows
//! currently inside the viewport and handles manual scrolling.

mod content;
mod layout;
mod page_component;

pub use content::{PageContext, PageTarget};
pub use layout::{PAGE_MARGIN, PageLayout, SCROLLBAR_WIDTH, text_width};
pub use page_component::PageComponent;
