mod common;

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use common::FakeTransport;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pentangelen::form::newsletter::SignupStore;
use pentangelen::form::FormStatus;
use pentangelen::nav::PageId;
use pentangelen::ui::app::{App, FieldEdit, FormFocus};
use pentangelen::ui::events::AppEvent;
use pentangelen::ui::input::handle_key;
use pentangelen::ui::pages::body_lines;
use tempfile::TempDir;

struct Session {
    app: App,
    rx: Receiver<AppEvent>,
    // Held so the app's runtime handle and store path stay valid.
    _runtime: tokio::runtime::Runtime,
    _dir: TempDir,
}

fn session_with(transport: Arc<FakeTransport>) -> Session {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let dir = TempDir::new().unwrap();
    let store = SignupStore::new(dir.path().join("signups.json"));
    let app = App::new(runtime.handle().clone(), tx, transport, store);
    Session {
        app,
        rx,
        _runtime: runtime,
        _dir: dir,
    }
}

fn session() -> Session {
    session_with(Arc::new(FakeTransport::ok()))
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_edit(FieldEdit::Char(c));
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// -- Navigation and rendering -------------------------------------------------

#[test]
fn detail_page_without_selection_renders_nothing() {
    let mut s = session();
    s.app.navigate(PageId::BookDetail);
    assert!(body_lines(&s.app).is_empty());
}

#[test]
fn selecting_a_book_renders_its_detail_page() {
    let mut s = session();
    s.app.select_book("pentangelen");
    assert_eq!(s.app.nav().current_page, PageId::BookDetail);
    let lines = body_lines(&s.app);
    assert!(!lines.is_empty());
    let text: String = lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .map(|s| s.content.as_ref())
        .collect();
    assert!(text.contains("Pentangelen"));
    assert!(text.contains("Norli"));
}

#[test]
fn navigation_dismisses_menu_but_not_ai_popup() {
    let mut s = session();
    s.app.toggle_menu();
    s.app
        .dispatch_overlay(pentangelen::overlay::OverlayIntent::OpenAiPopup);
    s.app.navigate(PageId::Lore);
    assert!(!s.app.overlay().menu_open, "navigation must close the menu");
    assert!(s.app.overlay().ai_popup_open, "popup ignores navigation");
}

#[test]
fn entering_contact_page_focuses_name_field() {
    let mut s = session();
    s.app.navigate(PageId::Contact);
    assert_eq!(s.app.focus(), FormFocus::ContactName);
}

// -- Key handling -------------------------------------------------------------

#[test]
fn ctrl_b_toggles_menu_and_enter_navigates() {
    let mut s = session();
    handle_key(&mut s.app, ctrl('b'));
    assert!(s.app.overlay().menu_open);
    // Second entry in the menu is Bøker.
    handle_key(&mut s.app, key(KeyCode::Down));
    handle_key(&mut s.app, key(KeyCode::Enter));
    assert_eq!(s.app.nav().current_page, PageId::Books);
    assert!(!s.app.overlay().menu_open);
}

#[test]
fn books_page_enter_opens_selected_book() {
    let mut s = session();
    s.app.navigate(PageId::Books);
    handle_key(&mut s.app, key(KeyCode::Down));
    handle_key(&mut s.app, key(KeyCode::Enter));
    assert_eq!(s.app.nav().current_page, PageId::BookDetail);
    assert_eq!(s.app.nav().selected_book, Some("tempusterror"));
}

#[test]
fn ai_popup_blocks_other_keys_until_dismissed() {
    let mut s = session();
    handle_key(&mut s.app, ctrl('k'));
    assert!(s.app.overlay().ai_popup_open);
    handle_key(&mut s.app, key(KeyCode::Char('b')));
    assert_eq!(s.app.nav().current_page, PageId::Home, "hotkeys blocked");
    handle_key(&mut s.app, key(KeyCode::Esc));
    assert!(!s.app.overlay().ai_popup_open);
}

// -- Form lifecycle through the app -------------------------------------------

#[test]
fn invalid_contact_submit_sets_err_without_spawning() {
    let transport = Arc::new(FakeTransport::ok());
    let mut s = session_with(Arc::clone(&transport));
    s.app.navigate(PageId::Contact);
    s.app.submit_contact();
    assert_eq!(s.app.contact().status, FormStatus::Err);
    assert_eq!(transport.calls(), 0);
    assert!(s.rx.try_recv().is_err(), "no result event expected");
}

#[test]
fn error_banner_sticks_while_editing_fields() {
    let mut s = session();
    s.app.navigate(PageId::Contact);
    s.app.submit_contact();
    assert_eq!(s.app.contact().status, FormStatus::Err);
    type_str(&mut s.app, "Bendik");
    assert_eq!(
        s.app.contact().status,
        FormStatus::Err,
        "edits must not clear the error display"
    );
}

#[test]
fn contact_submit_round_trips_through_event_channel() {
    let transport = Arc::new(FakeTransport::ok());
    let mut s = session_with(Arc::clone(&transport));
    s.app.navigate(PageId::Contact);

    type_str(&mut s.app, "Bendik");
    s.app.focus_next();
    type_str(&mut s.app, "bendik@example.com");
    s.app.focus_next();
    type_str(&mut s.app, "Hei fra Tønsberg");
    s.app.focus_next();
    s.app.handle_edit(FieldEdit::ToggleConsent);

    s.app.submit_contact();
    assert_eq!(s.app.contact().status, FormStatus::Sending);

    let event = s
        .rx
        .recv_timeout(Duration::from_secs(5))
        .expect("submission outcome should arrive");
    match event {
        AppEvent::ContactResult(outcome) => s.app.on_contact_result(outcome),
        _ => panic!("expected ContactResult"),
    }

    assert_eq!(s.app.contact().status, FormStatus::Ok);
    assert!(s.app.contact().email.is_empty());
    assert_eq!(transport.calls(), 1);
}

#[test]
fn newsletter_submit_from_home_page() {
    let mut s = session();
    handle_key(&mut s.app, key(KeyCode::Tab));
    assert_eq!(s.app.focus(), FormFocus::NewsletterEmail);
    type_str(&mut s.app, "test@example.com");
    s.app.focus_next();
    s.app.handle_edit(FieldEdit::ToggleConsent);
    handle_key(&mut s.app, key(KeyCode::Enter));
    assert_eq!(s.app.newsletter().status, FormStatus::Ok);
}
