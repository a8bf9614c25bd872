use crate::ui::mvi::UiState;

/// Identifier of the currently displayed content page.
///
/// Exactly one page is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageId {
    #[default]
    Home,
    Books,
    BookDetail,
    Lore,
    News,
    About,
    Author,
    Contact,
}

impl PageId {
    /// Title shown in the header and the burger menu.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Hjem",
            PageId::Books => "Bøker",
            PageId::BookDetail => "Bok",
            PageId::Lore => "Lore",
            PageId::News => "Nyheter",
            PageId::About => "Om",
            PageId::Author => "Forfatter",
            PageId::Contact => "Kontakt",
        }
    }

    /// Pages reachable from the burger menu, in menu order.
    /// `BookDetail` is reachable only by selecting a book.
    pub fn menu_pages() -> &'static [PageId] {
        &[
            PageId::Home,
            PageId::Books,
            PageId::Lore,
            PageId::News,
            PageId::About,
            PageId::Contact,
            PageId::Author,
        ]
    }
}

/// Session-wide navigation state.
///
/// `selected_book` holds a catalog id; the render layer resolves it
/// against the catalog and renders nothing when resolution fails.
/// Any navigation away from `BookDetail` clears the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub current_page: PageId,
    pub selected_book: Option<&'static str>,
}

impl UiState for NavState {}
