//! Form state machines for the contact form and the newsletter signup.
//!
//! Both forms share one lifecycle: `Idle -> Sending -> {Ok, Err}`, with
//! retry re-entering `Sending`. Validation is pure; the side-effecting
//! submit paths live in [`contact`] and [`newsletter`].

pub mod contact;
mod error;
pub mod newsletter;
mod state;
pub mod validate;

pub use error::{StoreError, SubmitError};
pub use state::{ContactFormState, FormStatus, NewsletterFormState};
