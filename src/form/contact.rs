//! Contact form submission over the external form relay.
//!
//! The transport is a trait seam so the submission logic can be tested
//! without a network. A single attempt per submit; there is no timeout
//! beyond the client's connect default, so a hung relay leaves the form
//! in `Sending` until the process exits (known limitation, no
//! cancellation path exists).

use std::future::Future;
use std::pin::Pin;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::constants::{CONTACT_ENDPOINT, CONTACT_SUBJECT};
use crate::form::error::SubmitError;
use crate::form::state::{ContactFormState, FormStatus};
use crate::form::validate::validate_contact;

/// JSON body posted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

pub type TransportFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send>>;

/// Delivery seam for contact submissions.
pub trait ContactTransport: Send + Sync {
    fn send(&self, payload: ContactPayload) -> TransportFuture;
}

/// Production transport: one JSON POST to the fixed relay endpoint.
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new() -> Self {
        Self::with_endpoint(CONTACT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpContactTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactTransport for HttpContactTransport {
    fn send(&self, payload: ContactPayload) -> TransportFuture {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            let response = client
                .post(&endpoint)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .json(&payload)
                .send()
                .await?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                Err(SubmitError::RelayStatus {
                    status: status.as_u16(),
                })
            }
        })
    }
}

/// Validate the form and mark it `Sending`.
///
/// Invalid input sets `Err` and returns `None`; no transport call may
/// happen in that case. On `Some`, the caller owns delivering the
/// payload and reporting the outcome via [`finish_submit`].
pub fn begin_submit(form: &mut ContactFormState) -> Option<ContactPayload> {
    if let Err(reasons) = validate_contact(form) {
        tracing::debug!(?reasons, "contact submission rejected by validator");
        form.status = FormStatus::Err;
        return None;
    }
    form.status = FormStatus::Sending;
    Some(ContactPayload {
        name: form.name.clone(),
        email: form.email.clone(),
        message: form.message.clone(),
        subject: CONTACT_SUBJECT.to_string(),
    })
}

/// Apply the relay outcome. Success clears the field values; failure
/// keeps them so the user can correct and resubmit.
pub fn finish_submit(form: &mut ContactFormState, outcome: Result<(), SubmitError>) {
    match outcome {
        Ok(()) => {
            tracing::info!("contact submission delivered");
            form.clear_fields();
            form.status = FormStatus::Ok;
        }
        Err(err) => {
            tracing::warn!(error = %err, "contact submission failed");
            form.status = FormStatus::Err;
        }
    }
}

/// Run one full submission against a transport.
pub async fn submit_contact<T: ContactTransport + ?Sized>(
    form: &mut ContactFormState,
    transport: &T,
) {
    let Some(payload) = begin_submit(form) else {
        return;
    };
    let outcome = transport.send(payload).await;
    finish_submit(form, outcome);
}
