use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::nav::PageId;
use crate::overlay::OverlayIntent;
use crate::ui::app::{App, FieldEdit, FormFocus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    // Ctrl+B: burger menu. Ctrl+K: the footer "Bruk av KI" popup.
    if is_ctrl_char(key, 'b') {
        app.toggle_menu();
        return;
    }
    if is_ctrl_char(key, 'k') {
        app.dispatch_overlay(OverlayIntent::OpenAiPopup);
        return;
    }

    // The AI popup has no backdrop dismissal: only its dismiss control
    // closes it, and it sits above everything else.
    if app.overlay().ai_popup_open {
        if matches!(key.code, KeyCode::Esc) {
            app.dispatch_overlay(OverlayIntent::DismissAiPopup);
        }
        return;
    }

    if app.overlay().menu_open {
        match key.code {
            KeyCode::Up => app.move_menu_selection(-1),
            KeyCode::Down => app.move_menu_selection(1),
            KeyCode::Enter => app.activate_menu_selection(),
            KeyCode::Esc => app.dispatch_overlay(OverlayIntent::DismissMenu),
            _ => {}
        }
        return;
    }

    if app.focus() != FormFocus::None {
        handle_form_key(app, key);
        return;
    }

    match app.nav().current_page {
        PageId::Books => match key.code {
            KeyCode::Up => app.move_book_selection(-1),
            KeyCode::Down => app.move_book_selection(1),
            KeyCode::Enter => app.open_selected_book(),
            _ => handle_page_hotkey(app, key),
        },
        PageId::BookDetail => match key.code {
            KeyCode::Esc | KeyCode::Backspace => app.navigate(PageId::Books),
            _ => handle_page_hotkey(app, key),
        },
        PageId::Home => match key.code {
            KeyCode::Tab => app.focus_next(),
            _ => handle_page_hotkey(app, key),
        },
        _ => handle_page_hotkey(app, key),
    }
}

/// Keys while a form field is focused: Tab cycles fields, Enter
/// submits, Space toggles a focused consent box, anything printable
/// edits the field.
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::Esc => match app.nav().current_page {
            // Leaving the contact form goes home; on the home page Esc
            // just drops focus back to browsing.
            PageId::Contact => app.navigate(PageId::Home),
            page => app.navigate(page),
        },
        KeyCode::Enter => match app.focus() {
            FormFocus::NewsletterEmail | FormFocus::NewsletterConsent => app.submit_newsletter(),
            _ => app.submit_contact(),
        },
        KeyCode::Backspace => app.handle_edit(FieldEdit::Backspace),
        KeyCode::Char(' ') if app.focus().is_consent() => {
            app.handle_edit(FieldEdit::ToggleConsent)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.handle_edit(FieldEdit::Char(c))
        }
        _ => {}
    }
}

/// Single-letter navigation and scrolling on read-only pages.
fn handle_page_hotkey(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-10),
        KeyCode::PageDown => app.scroll_by(10),
        KeyCode::Char('h') => app.navigate(PageId::Home),
        KeyCode::Char('b') => app.navigate(PageId::Books),
        KeyCode::Char('l') => app.navigate(PageId::Lore),
        KeyCode::Char('n') => app.navigate(PageId::News),
        KeyCode::Char('o') => app.navigate(PageId::About),
        KeyCode::Char('f') => app.navigate(PageId::Author),
        KeyCode::Char('k') => app.navigate(PageId::Contact),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
