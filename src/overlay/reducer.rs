use crate::overlay::intent::OverlayIntent;
use crate::overlay::state::OverlayState;
use crate::ui::mvi::Reducer;

pub struct OverlayReducer;

impl Reducer for OverlayReducer {
    type State = OverlayState;
    type Intent = OverlayIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OverlayIntent::ToggleMenu => OverlayState {
                menu_open: !state.menu_open,
                ..state
            },
            OverlayIntent::DismissMenu => OverlayState {
                menu_open: false,
                ..state
            },
            OverlayIntent::OpenAiPopup => OverlayState {
                ai_popup_open: true,
                ..state
            },
            OverlayIntent::DismissAiPopup => OverlayState {
                ai_popup_open: false,
                ..state
            },
        }
    }
}
