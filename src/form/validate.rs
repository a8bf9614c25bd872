//! Pure field validators shared by both forms.
//!
//! The contact form checks only presence: email format is not enforced
//! there (matching the site's behavior), while the newsletter form does
//! require a `local@domain.tld` shape. The asymmetry is intentional and
//! must not be unified.

use thiserror::Error;

use crate::form::state::{ContactFormState, NewsletterFormState};

/// Reason a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("e-post mangler")]
    EmailMissing,
    #[error("ugyldig e-postadresse")]
    EmailFormat,
    #[error("melding mangler")]
    MessageMissing,
    #[error("samtykke mangler")]
    ConsentMissing,
}

/// Presence-only validation for the contact form.
pub fn validate_contact(form: &ContactFormState) -> Result<(), Vec<FieldError>> {
    let mut reasons = Vec::new();
    if form.email.is_empty() {
        reasons.push(FieldError::EmailMissing);
    }
    if form.message.is_empty() {
        reasons.push(FieldError::MessageMissing);
    }
    if !form.consent {
        reasons.push(FieldError::ConsentMissing);
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}

/// Shape-checked validation for the newsletter form.
pub fn validate_newsletter(form: &NewsletterFormState) -> Result<(), Vec<FieldError>> {
    let mut reasons = Vec::new();
    if !email_shape_ok(&form.email) {
        reasons.push(FieldError::EmailFormat);
    }
    if !form.consent {
        reasons.push(FieldError::ConsentMissing);
    }
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}

/// `local@domain.tld` shape: a non-empty run without whitespace or `@`,
/// one `@`, then a domain containing an interior dot. No full RFC 5322
/// parse, just the signup sanity check.
fn email_shape_ok(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    // At least one dot with a character on both sides. '.' is ASCII,
    // so the byte window is safe on multi-byte input.
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn newsletter(email: &str, consent: bool) -> NewsletterFormState {
        NewsletterFormState {
            email: email.to_string(),
            consent,
            ..Default::default()
        }
    }

    #[test]
    fn newsletter_accepts_well_formed_email_with_consent() {
        assert!(validate_newsletter(&newsletter("test@example.com", true)).is_ok());
    }

    #[test]
    fn newsletter_rejects_truncated_email() {
        let reasons = validate_newsletter(&newsletter("bad@", true)).unwrap_err();
        assert_eq!(reasons, vec![FieldError::EmailFormat]);
    }

    #[test]
    fn newsletter_rejects_missing_consent() {
        let reasons = validate_newsletter(&newsletter("test@example.com", false)).unwrap_err();
        assert_eq!(reasons, vec![FieldError::ConsentMissing]);
    }

    #[test]
    fn email_shape_requires_interior_dot() {
        assert!(email_shape_ok("a@b.c"));
        assert!(!email_shape_ok("a@b"));
        assert!(!email_shape_ok("a@b."));
        assert!(!email_shape_ok("a@.c"));
        assert!(!email_shape_ok("@b.c"));
        assert!(!email_shape_ok("a b@c.d"));
        assert!(!email_shape_ok("a@b@c.d"));
    }

    #[test]
    fn contact_checks_presence_not_format() {
        let form = ContactFormState {
            email: "not-an-email".to_string(),
            message: "hei".to_string(),
            consent: true,
            ..Default::default()
        };
        // Malformed email passes: the contact path only checks presence.
        assert!(validate_contact(&form).is_ok());
    }

    #[test]
    fn contact_collects_all_missing_fields() {
        let reasons = validate_contact(&ContactFormState::default()).unwrap_err();
        assert_eq!(
            reasons,
            vec![
                FieldError::EmailMissing,
                FieldError::MessageMissing,
                FieldError::ConsentMissing,
            ]
        );
    }
}
