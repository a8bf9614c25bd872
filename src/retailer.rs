//! Outbound retailer search links.
//!
//! Pure URL generation: three fixed retailer search URLs keyed by book
//! title, plus a generic web-search fallback keyed by title and author.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Matches JavaScript `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-escaped, so a space
/// becomes `%20` (not `+`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A named outbound link to a retailer search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerLink {
    pub name: &'static str,
    pub url: String,
}

pub fn norli_url(title: &str) -> String {
    format!("https://www.norli.no/search?q={}", encode_component(title))
}

pub fn ark_url(title: &str) -> String {
    format!("https://www.ark.no/search?q={}", encode_component(title))
}

pub fn bod_url(title: &str) -> String {
    format!("https://www.bod.no/sok/?q={}", encode_component(title))
}

pub fn fallback_search_url(title: &str, author: &str) -> String {
    format!(
        "https://duckduckgo.com/?q={}",
        encode_component(&format!("{} {}", title, author))
    )
}

/// The four outbound links shown for a book, in display order.
pub fn retailer_links(title: &str, author: &str) -> Vec<RetailerLink> {
    vec![
        RetailerLink {
            name: "Norli",
            url: norli_url(title),
        },
        RetailerLink {
            name: "Ark",
            url: ark_url(title),
        },
        RetailerLink {
            name: "BoD",
            url: bod_url(title),
        },
        RetailerLink {
            name: "Flere forhandlere",
            url: fallback_search_url(title, author),
        },
    ]
}
