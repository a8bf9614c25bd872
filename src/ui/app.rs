use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::catalog;
use crate::form::contact::{self, ContactTransport};
use crate::form::newsletter::{self, SignupStore};
use crate::form::{ContactFormState, NewsletterFormState, SubmitError};
use crate::nav::{NavIntent, NavReducer, NavState, PageId};
use crate::overlay::{OverlayIntent, OverlayReducer, OverlayState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;

/// Which form field currently receives text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    None,
    ContactName,
    ContactEmail,
    ContactMessage,
    ContactConsent,
    NewsletterEmail,
    NewsletterConsent,
}

impl FormFocus {
    /// Initial focus when a page is entered.
    fn entering(page: PageId) -> Self {
        match page {
            PageId::Contact => FormFocus::ContactName,
            _ => FormFocus::None,
        }
    }

    /// Tab order on a page, wrapping back to the start.
    fn next_on(self, page: PageId) -> Self {
        match page {
            PageId::Home => match self {
                FormFocus::None => FormFocus::NewsletterEmail,
                FormFocus::NewsletterEmail => FormFocus::NewsletterConsent,
                _ => FormFocus::None,
            },
            PageId::Contact => match self {
                FormFocus::ContactName => FormFocus::ContactEmail,
                FormFocus::ContactEmail => FormFocus::ContactMessage,
                FormFocus::ContactMessage => FormFocus::ContactConsent,
                _ => FormFocus::ContactName,
            },
            _ => FormFocus::None,
        }
    }

    pub fn is_consent(self) -> bool {
        matches!(self, FormFocus::ContactConsent | FormFocus::NewsletterConsent)
    }
}

/// Edit applied to the focused form field. Field edits never touch the
/// submission status: an error banner stays visible until the next
/// submit attempt.
#[derive(Debug, Clone, Copy)]
pub enum FieldEdit {
    Char(char),
    Backspace,
    ToggleConsent,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level session controller.
///
/// Owns every state machine for the lifetime of the client session and
/// performs the side effects that ride along with transitions. The
/// render layer reads snapshots through the accessors and never mutates.
pub struct App {
    should_quit: bool,
    nav: NavState,
    overlay: OverlayState,
    contact: ContactFormState,
    newsletter: NewsletterFormState,
    focus: FormFocus,
    menu_selection: usize,
    book_selection: usize,
    scroll: u16,
    transport: Arc<dyn ContactTransport>,
    store: SignupStore,
    events_tx: Sender<AppEvent>,
    runtime: tokio::runtime::Handle,
}

impl App {
    pub fn new(
        runtime: tokio::runtime::Handle,
        events_tx: Sender<AppEvent>,
        transport: Arc<dyn ContactTransport>,
        store: SignupStore,
    ) -> Self {
        Self {
            should_quit: false,
            nav: NavState::default(),
            overlay: OverlayState::default(),
            contact: ContactFormState::default(),
            newsletter: NewsletterFormState::default(),
            focus: FormFocus::default(),
            menu_selection: 0,
            book_selection: 0,
            scroll: 0,
            transport,
            store,
            events_tx,
            runtime,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // -- Navigation ----------------------------------------------------------

    /// Dispatch a navigation intent plus its mandated side effects:
    /// every transition dismisses the menu and scrolls back to top.
    pub fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
        dispatch_mvi!(self, overlay, OverlayReducer, OverlayIntent::DismissMenu);
        self.scroll = 0;
        self.focus = FormFocus::entering(self.nav.current_page);
        tracing::debug!(page = ?self.nav.current_page, "navigated");
    }

    pub fn navigate(&mut self, target: PageId) {
        self.dispatch_nav(NavIntent::to(target));
    }

    pub fn select_book(&mut self, id: &'static str) {
        self.dispatch_nav(NavIntent::SelectBook { id });
    }

    // -- Overlays ------------------------------------------------------------

    pub fn dispatch_overlay(&mut self, intent: OverlayIntent) {
        dispatch_mvi!(self, overlay, OverlayReducer, intent);
    }

    pub fn toggle_menu(&mut self) {
        if !self.overlay.menu_open {
            self.menu_selection = 0;
        }
        self.dispatch_overlay(OverlayIntent::ToggleMenu);
    }

    pub fn move_menu_selection(&mut self, delta: isize) {
        let len = PageId::menu_pages().len();
        self.menu_selection = step_wrapping(self.menu_selection, delta, len);
    }

    pub fn activate_menu_selection(&mut self) {
        let target = PageId::menu_pages()[self.menu_selection];
        self.navigate(target);
    }

    // -- Books grid ----------------------------------------------------------

    pub fn move_book_selection(&mut self, delta: isize) {
        let len = catalog::books().len();
        self.book_selection = step_wrapping(self.book_selection, delta, len);
    }

    pub fn open_selected_book(&mut self) {
        if let Some(book) = catalog::books().get(self.book_selection) {
            self.select_book(book.id);
        }
    }

    // -- Forms ---------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next_on(self.nav.current_page);
    }

    pub fn handle_edit(&mut self, edit: FieldEdit) {
        let field = match self.focus {
            FormFocus::ContactName => Some(&mut self.contact.name),
            FormFocus::ContactEmail => Some(&mut self.contact.email),
            FormFocus::ContactMessage => Some(&mut self.contact.message),
            FormFocus::NewsletterEmail => Some(&mut self.newsletter.email),
            FormFocus::ContactConsent | FormFocus::NewsletterConsent | FormFocus::None => None,
        };
        match (edit, field) {
            (FieldEdit::Char(c), Some(field)) => field.push(c),
            (FieldEdit::Backspace, Some(field)) => {
                field.pop();
            }
            (FieldEdit::ToggleConsent, _) => match self.focus {
                FormFocus::ContactConsent => self.contact.consent = !self.contact.consent,
                FormFocus::NewsletterConsent => {
                    self.newsletter.consent = !self.newsletter.consent
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Start a contact submission. Validation failure settles the form
    /// synchronously; otherwise the relay call runs on the async
    /// runtime and reports back through the event channel.
    pub fn submit_contact(&mut self) {
        let Some(payload) = contact::begin_submit(&mut self.contact) else {
            return;
        };
        let transport = Arc::clone(&self.transport);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let outcome = transport.send(payload).await;
            let _ = tx.send(AppEvent::ContactResult(outcome));
        });
    }

    pub fn on_contact_result(&mut self, outcome: Result<(), SubmitError>) {
        contact::finish_submit(&mut self.contact, outcome);
    }

    pub fn submit_newsletter(&mut self) {
        newsletter::submit_newsletter(&mut self.newsletter, &self.store);
    }

    // -- Scrolling -----------------------------------------------------------

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    // -- Snapshot accessors --------------------------------------------------

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn newsletter(&self) -> &NewsletterFormState {
        &self.newsletter
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn book_selection(&self) -> usize {
        self.book_selection
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

fn step_wrapping(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((current as isize + delta) % len + len) % len) as usize
}
