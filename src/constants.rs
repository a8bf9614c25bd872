//! Fixed external endpoints and storage keys.
//!
//! The site has no configuration surface: no CLI flags, no environment
//! variables, no config file. The form relay endpoint and the signup
//! store key are baked in.

/// Form relay endpoint for the contact form (Formspree).
pub const CONTACT_ENDPOINT: &str = "https://formspree.io/f/meolyppd";

/// Subject line attached to every contact submission.
pub const CONTACT_SUBJECT: &str = "Ny melding fra pentangelen-site";

/// File name of the persisted newsletter signup list, stored under the
/// platform data directory.
pub const SIGNUP_STORE_FILE: &str = "thr_newsletter_signups.json";

/// Directory name under the platform data dir for all persisted state.
pub const APP_DIR: &str = "pentangelen";
