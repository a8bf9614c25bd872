use pentangelen::nav::{NavIntent, NavReducer, NavState, PageId};
use pentangelen::ui::mvi::Reducer;

const ALL_PAGES: [PageId; 8] = [
    PageId::Home,
    PageId::Books,
    PageId::BookDetail,
    PageId::Lore,
    PageId::News,
    PageId::About,
    PageId::Author,
    PageId::Contact,
];

#[test]
fn session_starts_at_home_with_no_selection() {
    let state = NavState::default();
    assert_eq!(state.current_page, PageId::Home);
    assert_eq!(state.selected_book, None);
}

#[test]
fn navigate_sets_current_page_for_every_target() {
    for target in ALL_PAGES {
        let state = NavReducer::reduce(NavState::default(), NavIntent::to(target));
        assert_eq!(state.current_page, target);
    }
}

#[test]
fn navigate_clears_selection_for_non_detail_targets() {
    for target in ALL_PAGES {
        if target == PageId::BookDetail {
            continue;
        }
        let state = NavReducer::reduce(
            NavState {
                current_page: PageId::BookDetail,
                selected_book: Some("pentangelen"),
            },
            NavIntent::to(target),
        );
        assert_eq!(state.selected_book, None, "selection leaked into {target:?}");
    }
}

#[test]
fn select_book_switches_to_detail_with_selection() {
    let state = NavReducer::reduce(
        NavState::default(),
        NavIntent::SelectBook { id: "pentangelen" },
    );
    assert_eq!(state.current_page, PageId::BookDetail);
    assert_eq!(state.selected_book, Some("pentangelen"));
}

#[test]
fn navigating_home_after_selection_clears_it() {
    let state = NavReducer::reduce(
        NavState::default(),
        NavIntent::SelectBook { id: "tempusterror" },
    );
    let state = NavReducer::reduce(state, NavIntent::to(PageId::Home));
    assert_eq!(state.selected_book, None);
}

#[test]
fn navigate_to_detail_keeps_existing_selection() {
    let state = NavReducer::reduce(
        NavState::default(),
        NavIntent::SelectBook { id: "taumageddon" },
    );
    let state = NavReducer::reduce(state, NavIntent::to(PageId::BookDetail));
    assert_eq!(state.selected_book, Some("taumageddon"));
}

#[test]
fn navigate_to_detail_without_selection_stays_none() {
    let state = NavReducer::reduce(NavState::default(), NavIntent::to(PageId::BookDetail));
    assert_eq!(state.current_page, PageId::BookDetail);
    assert_eq!(state.selected_book, None);
}

#[test]
fn clear_selection_flag_drops_selection_even_on_detail() {
    let state = NavReducer::reduce(
        NavState::default(),
        NavIntent::SelectBook { id: "pentangelen" },
    );
    let state = NavReducer::reduce(
        state,
        NavIntent::Navigate {
            target: PageId::BookDetail,
            clear_selection: true,
        },
    );
    assert_eq!(state.selected_book, None);
}
