use crate::ui::mvi::UiState;

/// Lifecycle of a form submission.
///
/// `Err` is sticky: editing fields after a failed submit does not clear
/// the error display. Only the next submit attempt overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// A submission is in flight. Observable so the control can be
    /// disabled while sending.
    Sending,
    Ok,
    Err,
}

/// Field values and status of the contact form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub consent: bool,
    pub status: FormStatus,
}

impl ContactFormState {
    /// Reset the field values after a successful submission. Does not
    /// touch `status`.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.consent = false;
    }
}

impl UiState for ContactFormState {}

/// Field values and status of the newsletter signup form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsletterFormState {
    pub email: String,
    pub consent: bool,
    pub status: FormStatus,
}

impl NewsletterFormState {
    pub fn clear_fields(&mut self) {
        self.email.clear();
        self.consent = false;
    }
}

impl UiState for NewsletterFormState {}
