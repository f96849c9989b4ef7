use hbt_types::ContactMessage;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::contact::{ContactField, FieldError, validate_contact};

/// Maximum characters accepted per field.
const FIELD_LIMITS: [usize; 3] = [80, 120, 2000];

/// A single-line (or, for the message, multi-line) text input.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    pub value: String,
    pub error: Option<&'static str>,
    pub focus: FocusFlag,
}

impl TextInput {
    fn new(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Self::default()
        }
    }
}

/// Outcome of the last submission shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Sending,
    Sent,
    Failed(String),
}

/// State for the contact form: three inputs, a submit control and the
/// result of the last attempt.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    pub name: TextInput,
    pub email: TextInput,
    pub message: TextInput,
    pub f_submit: FocusFlag,
    pub container_focus: FocusFlag,
    pub status: Option<SubmissionStatus>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            name: TextInput::new("contact.name"),
            email: TextInput::new("contact.email"),
            message: TextInput::new("contact.message"),
            f_submit: FocusFlag::named("contact.submit"),
            container_focus: FocusFlag::named("contact"),
            status: None,
        }
    }
}

impl ContactFormState {
    pub fn input(&self, field: ContactField) -> &TextInput {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn input_mut(&mut self, field: ContactField) -> &mut TextInput {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// The input that currently holds keyboard focus, if any.
    pub fn focused_field(&self) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| self.input(*field).focus.get())
    }

    pub fn is_submit_focused(&self) -> bool {
        self.f_submit.get()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.status, Some(SubmissionStatus::Sending))
    }

    /// Appends a character to `field`, clearing its error. Newlines are only
    /// accepted by the message. Input is ignored while a submission is in flight.
    pub fn insert_char(&mut self, field: ContactField, character: char) {
        if self.is_busy() || (character == '\n' && field != ContactField::Message) {
            return;
        }
        let limit = FIELD_LIMITS[field as usize];
        let input = self.input_mut(field);
        if input.value.chars().count() >= limit {
            return;
        }
        input.value.push(character);
        input.error = None;
        self.clear_finished_status();
    }

    pub fn backspace(&mut self, field: ContactField) {
        if self.is_busy() {
            return;
        }
        let input = self.input_mut(field);
        input.value.pop();
        input.error = None;
        self.clear_finished_status();
    }

    /// Validates every input, recording inline errors on failure.
    pub fn try_submit(&mut self) -> Result<ContactMessage, Vec<FieldError>> {
        for field in ContactField::ALL {
            self.input_mut(field).error = None;
        }
        match validate_contact(&self.name.value, &self.email.value, &self.message.value) {
            Ok(message) => {
                self.status = Some(SubmissionStatus::Sending);
                Ok(message)
            }
            Err(errors) => {
                for error in &errors {
                    self.input_mut(error.field).error = Some(error.message);
                }
                self.status = None;
                Err(errors)
            }
        }
    }

    /// Applies the transport's verdict. Success clears the form.
    pub fn on_delivered(&mut self, result: &Result<(), String>) {
        match result {
            Ok(()) => {
                for field in ContactField::ALL {
                    let input = self.input_mut(field);
                    input.value.clear();
                    input.error = None;
                }
                self.status = Some(SubmissionStatus::Sent);
            }
            Err(reason) => self.status = Some(SubmissionStatus::Failed(reason.clone())),
        }
    }

    fn clear_finished_status(&mut self) {
        if matches!(self.status, Some(SubmissionStatus::Sent | SubmissionStatus::Failed(_))) {
            self.status = None;
        }
    }
}

impl HasFocus for ContactFormState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.name.focus);
        builder.leaf_widget(&self.email.focus);
        builder.leaf_widget(&self.message.focus);
        builder.leaf_widget(&self.f_submit);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
