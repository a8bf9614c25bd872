use crate::nav::intent::NavIntent;
use crate::nav::state::{NavState, PageId};
use crate::ui::mvi::Reducer;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Navigate {
                target,
                clear_selection,
            } => {
                let selected_book = if target == PageId::BookDetail && !clear_selection {
                    state.selected_book
                } else {
                    None
                };
                NavState {
                    current_page: target,
                    selected_book,
                }
            }
            NavIntent::SelectBook { id } => NavState {
                current_page: PageId::BookDetail,
                selected_book: Some(id),
            },
        }
    }
}
