use crate::nav::state::PageId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Switch the active page. Selection is dropped unless the target is
    /// `BookDetail` and `clear_selection` is false.
    Navigate {
        target: PageId,
        clear_selection: bool,
    },
    /// Select a book and switch to its detail page in one transition,
    /// so the detail page never observes a page switch without a
    /// selection.
    SelectBook { id: &'static str },
}

impl NavIntent {
    /// Plain navigation to a page, dropping any selection for
    /// non-detail targets.
    pub fn to(target: PageId) -> Self {
        NavIntent::Navigate {
            target,
            clear_selection: false,
        }
    }
}

impl Intent for NavIntent {}
