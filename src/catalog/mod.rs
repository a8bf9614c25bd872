//! Static content catalog for the Pentangelen book universe.
//!
//! Pure data: book records, lore codex entries, news posts, and page
//! text. The catalog has no behavior beyond lookup; everything else in
//! the client reads from it.

mod books;
mod pages;

pub use books::{book_by_id, books, BookDetailRow, BookRecord, DetailIcon};
pub use pages::{lore_entries, news_posts, LoreEntry, NewsPost, ABOUT_TEXT, AUTHOR_BIO, AUTHOR_NAME};
