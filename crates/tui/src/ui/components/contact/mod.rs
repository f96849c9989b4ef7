//! Contact form: inputs, submit control and delivery status.
//!
//! The form's rows are drawn inline by the page; this module owns the state
//! and the keyboard handling while one of its controls has focus.

mod contact_component;
mod state;

pub use contact_component::ContactFormComponent;
pub use state::{ContactFormState, SubmissionStatus};
