use std::time::Duration;

use crate::{ContactMessage, SectionId};

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Periodic UI tick carrying the time elapsed since the previous tick.
    Tick(Duration),
    /// Terminal resized
    Resize(u16, u16),
    /// Jump to a section (nav bar, hero call-to-action)
    Navigate(SectionId),
    /// Manual scroll by rows (`+` down, `-` up)
    ScrollLines(i16),
    /// Manual scroll by viewport pages
    ScrollPages(i16),
    ScrollToTop,
    ScrollToBottom,
    /// Outcome of handing a contact message to the transport
    ContactDelivered(Result<(), String>),
}

/// Side effects that can be triggered by state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Explicit navigation command for the active-section tracker
    NavigateTo(SectionId),
    /// Hand a validated contact message to the submission transport
    SubmitContact(ContactMessage),
    /// Leave the application
    Quit,
}
