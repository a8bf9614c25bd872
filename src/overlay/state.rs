use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub menu_open: bool,
    /// The "Bruk av KI" disclosure popup in the footer.
    pub ai_popup_open: bool,
}

impl UiState for OverlayState {}
