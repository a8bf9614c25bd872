//! Terminal client for the Pentangelen book-series site.
//!
//! Static content pages (home, books, book detail, lore, news, about,
//! author, contact) composed in one running client, driven by three
//! small state machines: a navigation router, two form submission
//! machines, and a pair of overlay visibility flags.

pub mod catalog;
pub mod constants;
pub mod form;
pub mod logging;
pub mod nav;
pub mod overlay;
pub mod retailer;
pub mod ui;
