use dioxus::prelude::*;
use dioxus_router::prelude::{Routable, Router};

use crate::api::ActivityClient;
use crate::app_assets::head_nodes;
use crate::config::ClientConfig;
use crate::controller::BoardController;
use crate::models::{ActivitySet, LoadState, ViewState};
use crate::pages::board::Board;
use crate::state::{BoardState, StatusState};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Board {},
}

/// Creates the board signals and controller and provides them as context.
///
/// The client config comes from root context; launch supplies it, anything
/// else gets the defaults.
pub fn use_board_provider() -> BoardController {
    let config = try_use_context::<ClientConfig>().unwrap_or_default();

    let board = BoardState {
        activities: use_signal(ActivitySet::new),
        load: use_signal(|| LoadState::Loading),
        view: use_signal(ViewState::default),
        email: use_signal(String::new),
        picked: use_signal(|| None),
    };
    let status = StatusState { msg: use_signal(|| None) };
    let controller = use_hook(|| BoardController {
        board,
        status,
        client: ActivityClient::new(&config),
        message_timeout: config.message_timeout,
    });

    use_context_provider(|| board);
    use_context_provider(|| status);
    use_context_provider(|| controller.clone());
    controller
}

#[component]
pub fn App() -> Element {
    let controller = use_board_provider();

    // One-time load after first render
    use_effect(move || controller.reload());

    rsx! {
        { head_nodes() }
        Router::<Route> {}
    }
}
