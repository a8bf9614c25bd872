use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum OverlayIntent {
    ToggleMenu,
    /// Close the menu if open. Dispatched explicitly and by every
    /// navigation transition.
    DismissMenu,
    OpenAiPopup,
    /// The popup has no backdrop dismissal; this is the only way it
    /// closes.
    DismissAiPopup,
}

impl Intent for OverlayIntent {}
