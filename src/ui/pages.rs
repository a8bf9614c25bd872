//! Body content for each page, built as styled lines from the latest
//! state snapshot. Pure: reads the app, never mutates it.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::catalog::{self, BookRecord, DetailIcon};
use crate::form::FormStatus;
use crate::nav::PageId;
use crate::retailer;
use crate::ui::app::{App, FormFocus};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, HEADER_TEXT, MUTED_TEXT, SIGIL_ACCENT, STATUS_ERROR, STATUS_OK,
};

pub fn body_lines(app: &App) -> Vec<Line<'static>> {
    match app.nav().current_page {
        PageId::Home => home(app),
        PageId::Books => books_grid(app),
        PageId::BookDetail => book_detail(app),
        PageId::Lore => lore(),
        PageId::News => news(),
        PageId::About => about(),
        PageId::Author => author(),
        PageId::Contact => contact_page(app),
    }
}

fn home(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Okkultisme. Humor. Horror."),
        Line::from(""),
        body(
            "Et bokunivers der purgatorier skjuler seg i kolonihager, der \
             veldedighetsforeningene er sekter og vennskap settes på prøve av noe som vil inn \
             fra den andre siden.",
        ),
        Line::from(""),
        muted("[ Okkult skrekk ] [ Komisk nerve ] [ Serie ]"),
        Line::from(""),
        muted("Trykk 'b' for bøkene, 'l' for lore."),
        Line::from(""),
        heading("Hold meg oppdatert"),
        body("Få beskjed når nye kapitler, lanseringer eller signeringer skjer. Ingen spam."),
        Line::from(""),
    ];
    lines.push(text_field(
        "E-post",
        &app.newsletter().email,
        app.focus() == FormFocus::NewsletterEmail,
    ));
    lines.push(consent_box(
        "Jeg samtykker til å motta e-post om dette bokprosjektet.",
        app.newsletter().consent,
        app.focus() == FormFocus::NewsletterConsent,
    ));
    lines.push(Line::from(""));
    lines.extend(newsletter_status(app));
    lines.push(Line::from(""));
    lines.push(muted("Tab: felt  Enter: meld meg på  Mellomrom: samtykke"));
    lines
}

fn books_grid(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Bøker"),
        muted("Velg en bok for detaljside (piltaster + Enter)."),
        Line::from(""),
    ];
    for (idx, book) in catalog::books().iter().enumerate() {
        let selected = idx == app.book_selection();
        lines.extend(book_card(book, selected));
        lines.push(Line::from(""));
    }
    lines
}

fn book_card(book: &'static BookRecord, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default().fg(SIGIL_ACCENT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(book.title, title_style),
            Span::styled(
                format!("  — {}", book.subtitle),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}  [{}]", book.status, book.tags.join(", ")),
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

/// The detail page renders nothing when no book is selected: reaching
/// it without a selection is defined as a no-op, not an error.
fn book_detail(app: &App) -> Vec<Line<'static>> {
    let Some(book) = app.nav().selected_book.and_then(catalog::book_by_id) else {
        return Vec::new();
    };

    let mut lines = vec![
        heading(book.title),
        muted_string(format!("{}  [{}]", book.subtitle, book.tags.join(", "))),
        Line::from(""),
        heading("Om boken"),
        body(book.blurb),
        Line::from(""),
        heading("Metadata"),
    ];
    for row in book.details {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} {}: ", icon_glyph(row.icon), row.label),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(row.value, Style::default().fg(BODY_TEXT)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  Status: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(book.status, Style::default().fg(BODY_TEXT)),
    ]));
    lines.push(Line::from(""));
    lines.push(heading("Kjøp boken"));
    for link in retailer::retailer_links(book.title, book.author) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", link.name), Style::default().fg(HEADER_TEXT)),
            Span::styled(link.url, Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines.push(muted(
        "  Lagerstatus, levering og angrerett håndteres av forhandler.",
    ));
    lines.push(Line::from(""));
    lines.push(muted("Esc: tilbake til bøker"));
    lines
}

fn lore() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Lore-kodeks"), Line::from("")];
    for entry in catalog::lore_entries() {
        lines.push(Line::from(Span::styled(
            entry.title,
            Style::default().fg(SIGIL_ACCENT),
        )));
        lines.push(body(entry.body));
        lines.push(Line::from(""));
    }
    lines
}

fn news() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Nyheter & notater"), Line::from("")];
    for post in catalog::news_posts() {
        lines.push(Line::from(vec![
            Span::styled(post.title, Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("  {}", post.date), Style::default().fg(MUTED_TEXT)),
        ]));
        lines.push(body(post.excerpt));
        lines.push(Line::from(""));
    }
    lines
}

fn about() -> Vec<Line<'static>> {
    let mut lines = vec![heading("Om universet"), Line::from("")];
    lines.extend(paragraphs(catalog::ABOUT_TEXT));
    lines
}

fn author() -> Vec<Line<'static>> {
    let mut lines = vec![heading(catalog::AUTHOR_NAME), Line::from("")];
    lines.extend(paragraphs(catalog::AUTHOR_BIO));
    lines
}

fn contact_page(app: &App) -> Vec<Line<'static>> {
    let form = app.contact();
    let mut lines = vec![heading("Kontakt"), Line::from("")];
    lines.push(text_field(
        "Navn",
        &form.name,
        app.focus() == FormFocus::ContactName,
    ));
    lines.push(text_field(
        "E-post",
        &form.email,
        app.focus() == FormFocus::ContactEmail,
    ));
    lines.push(text_field(
        "Melding",
        &form.message,
        app.focus() == FormFocus::ContactMessage,
    ));
    lines.push(consent_box(
        "Jeg samtykker til at denne meldingen sendes til Torben (Formspree).",
        form.consent,
        app.focus() == FormFocus::ContactConsent,
    ));
    lines.push(Line::from(""));
    lines.extend(contact_status(app));
    lines.push(Line::from(""));
    lines.push(muted("Tab: felt  Enter: send melding  Mellomrom: samtykke"));
    lines.push(muted("Forlagskontakt: torben.rygg@gmail.com"));
    lines
}

// -- Form status banners ------------------------------------------------------

fn contact_status(app: &App) -> Vec<Line<'static>> {
    match app.contact().status {
        FormStatus::Idle => Vec::new(),
        FormStatus::Sending => vec![muted("Sender…")],
        FormStatus::Ok => vec![Line::from(Span::styled(
            "Takk! Meldingen er sendt.",
            Style::default().fg(STATUS_OK),
        ))],
        FormStatus::Err => vec![Line::from(Span::styled(
            "Noe gikk galt. Sjekk feltene og prøv igjen (eller send e-post direkte).",
            Style::default().fg(STATUS_ERROR),
        ))],
    }
}

fn newsletter_status(app: &App) -> Vec<Line<'static>> {
    match app.newsletter().status {
        FormStatus::Idle => Vec::new(),
        FormStatus::Sending => vec![muted("Sender…")],
        FormStatus::Ok => vec![Line::from(Span::styled(
            "Takk! Du er lagt til (mock).",
            Style::default().fg(STATUS_OK),
        ))],
        FormStatus::Err => vec![Line::from(Span::styled(
            "Sjekk e-post og samtykke.",
            Style::default().fg(STATUS_ERROR),
        ))],
    }
}

// -- Building blocks ----------------------------------------------------------

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(SIGIL_ACCENT)))
}

fn body(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(BODY_TEXT)))
}

fn muted(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

fn muted_string(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

fn paragraphs(text: &'static str) -> Vec<Line<'static>> {
    text.split('\n').map(body).collect()
}

fn text_field(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let value_style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(BODY_TEXT)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<8}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(format!("{}{}", value, cursor), value_style),
    ])
}

fn consent_box(label: &'static str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let boxmark = if checked { "[x] " } else { "[ ] " };
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(boxmark, style),
        Span::styled(label, style),
    ])
}

fn icon_glyph(icon: DetailIcon) -> &'static str {
    match icon {
        DetailIcon::MapPin => "⌖",
        DetailIcon::Ghost => "☠",
        DetailIcon::Shield => "⛨",
        DetailIcon::Timer => "⏲",
        DetailIcon::Wand => "⚚",
    }
}
