use dioxus::prelude::*;

use crate::components::{
    activity_card::ActivityCard, header::Header, signup_form::SignupForm,
    status_banner::StatusBanner, toolbar::Toolbar,
};
use crate::controller::BoardController;
use crate::filter::categories;
use crate::models::{LoadState, SortMode};
use crate::state::{BoardState, StatusState};
use crate::view::{project_board, EMPTY_LIST_TEXT, LOADING_TEXT, LOAD_FAILED_TEXT};

#[component]
pub fn Board() -> Element {
    let state = use_context::<BoardState>();
    let status = use_context::<StatusState>();
    let controller = use_context::<BoardController>();
    let activities = state.activities;
    let load = *state.load.read();
    let mut view = state.view;
    let mut email = state.email;
    let mut picked = state.picked;

    let board = project_board(&activities.read(), &view.read());
    let cats = categories(&activities.read());
    let selected = board.selected_option(picked.read().as_deref()).map(str::to_string);

    let on_category = move |c: String| view.write().category = c;
    let on_search = move |s: String| view.write().search = s;
    let on_sort = move |m: SortMode| view.write().sort = m;

    let submit_ctl = controller.clone();
    let on_submit = move |_| {
        // Read at submit time so the pick reflects the current filter.
        let current = project_board(&activities.read(), &view.read());
        let activity = current
            .selected_option(picked.read().as_deref())
            .unwrap_or_default()
            .to_string();
        let address = email.read().clone();
        submit_ctl.signup(activity, address);
    };
    let remove_ctl = controller.clone();
    let on_remove = move |(activity, address): (String, String)| {
        remove_ctl.unregister(activity, address);
    };

    rsx! {
        div { class: "app",
            Header {}
            section { id: "activities-container", class: "card",
                h3 { "Available Activities" }
                Toolbar {
                    categories: cats,
                    view: view.read().clone(),
                    on_category: on_category,
                    on_search: on_search,
                    on_sort: on_sort,
                }
                div { id: "activities-list",
                    { match load {
                        LoadState::Loading => rsx! { p { "{LOADING_TEXT}" } },
                        LoadState::Failed => rsx! { p { "{LOAD_FAILED_TEXT}" } },
                        LoadState::Ready if board.is_empty() => rsx! { p { "{EMPTY_LIST_TEXT}" } },
                        LoadState::Ready => rsx! {
                            for card in board.cards.iter().cloned() {
                                ActivityCard { key: "card-{card.name}", card: card, on_remove: on_remove.clone() }
                            }
                        },
                    } }
                }
            }
            section { id: "signup-container", class: "card",
                h3 { "Sign Up for an Activity" }
                SignupForm {
                    email: email.read().clone(),
                    options: board.options.clone(),
                    selected: selected,
                    on_email: move |v: String| email.set(v),
                    on_pick: move |v: String| picked.set(Some(v)),
                    on_submit: on_submit,
                }
                StatusBanner { message: status.msg.read().clone() }
            }
        }
    }
}
