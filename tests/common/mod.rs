//! Shared test doubles.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pentangelen::form::contact::{ContactPayload, ContactTransport, TransportFuture};
use pentangelen::form::SubmitError;

/// Transport double that counts calls and answers with a fixed outcome.
pub struct FakeTransport {
    calls: Arc<AtomicUsize>,
    failing_status: Option<u16>,
}

impl FakeTransport {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failing_status: None,
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failing_status: Some(status),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContactTransport for FakeTransport {
    fn send(&self, _payload: ContactPayload) -> TransportFuture {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing_status = self.failing_status;
        Box::pin(async move {
            match failing_status {
                None => Ok(()),
                Some(status) => Err(SubmitError::RelayStatus { status }),
            }
        })
    }
}
