use dioxus::prelude::*;

use crate::models::{ActivitySet, LoadState, StatusMessage, ViewState};

#[derive(Clone, Copy)]
pub struct BoardState {
    pub activities: Signal<ActivitySet>,
    pub load: Signal<LoadState>,
    pub view: Signal<ViewState>,
    pub email: Signal<String>,
    /// Last activity picked in the sign-up selector, if any.
    pub picked: Signal<Option<String>>,
}

#[derive(Clone, Copy)]
pub struct StatusState {
    pub msg: Signal<Option<StatusMessage>>,
}
