mod common;

use common::FakeTransport;
use pentangelen::constants::CONTACT_SUBJECT;
use pentangelen::form::contact::{begin_submit, submit_contact};
use pentangelen::form::{ContactFormState, FormStatus};

fn valid_form() -> ContactFormState {
    ContactFormState {
        name: "Bendik".to_string(),
        email: "bendik@example.com".to_string(),
        message: "Hei!".to_string(),
        consent: true,
        ..Default::default()
    }
}

#[test]
fn begin_submit_marks_sending_and_builds_payload() {
    let mut form = valid_form();
    let payload = begin_submit(&mut form).expect("valid form should yield a payload");
    assert_eq!(form.status, FormStatus::Sending);
    assert_eq!(payload.email, "bendik@example.com");
    assert_eq!(payload.subject, CONTACT_SUBJECT);
}

#[test]
fn payload_serializes_with_subject_key() {
    let mut form = valid_form();
    let payload = begin_submit(&mut form).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("_subject").is_some(), "relay expects _subject");
    assert!(value.get("subject").is_none());
}

#[tokio::test]
async fn invalid_submit_issues_no_network_call() {
    let transport = FakeTransport::ok();
    let mut form = ContactFormState {
        message: "Hei!".to_string(),
        consent: true,
        ..Default::default()
    };
    submit_contact(&mut form, &transport).await;
    assert_eq!(form.status, FormStatus::Err);
    assert_eq!(transport.calls(), 0, "validator failure must not reach the relay");
}

#[tokio::test]
async fn successful_submit_clears_fields_and_sets_ok() {
    let transport = FakeTransport::ok();
    let mut form = valid_form();
    submit_contact(&mut form, &transport).await;
    assert_eq!(form.status, FormStatus::Ok);
    assert_eq!(transport.calls(), 1);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert!(!form.consent);
}

#[tokio::test]
async fn relay_error_preserves_input() {
    let transport = FakeTransport::failing_with_status(502);
    let mut form = valid_form();
    submit_contact(&mut form, &transport).await;
    assert_eq!(form.status, FormStatus::Err);
    assert_eq!(form.email, "bendik@example.com", "input kept for correction");
    assert!(form.consent);
}

#[tokio::test]
async fn malformed_email_is_accepted_by_contact_path() {
    // Only presence is checked client-side; format is the relay's
    // problem. The newsletter form is stricter.
    let transport = FakeTransport::ok();
    let mut form = ContactFormState {
        email: "not-an-email".to_string(),
        message: "Hei!".to_string(),
        consent: true,
        ..Default::default()
    };
    submit_contact(&mut form, &transport).await;
    assert_eq!(form.status, FormStatus::Ok);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn retry_after_error_reenters_sending_and_can_succeed() {
    let failing = FakeTransport::failing_with_status(500);
    let mut form = valid_form();
    submit_contact(&mut form, &failing).await;
    assert_eq!(form.status, FormStatus::Err);

    let ok = FakeTransport::ok();
    submit_contact(&mut form, &ok).await;
    assert_eq!(form.status, FormStatus::Ok);
    assert_eq!(ok.calls(), 1);
}
