use std::time::Duration;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::actions::{resolve, Action};
use crate::api::{ActionReply, ActivityClient};
use crate::error::BoardError;
use crate::models::{LoadState, StatusMessage};
use crate::platform;
use crate::state::{BoardState, StatusState};

/// Network side of the board: loading the list and settling actions.
/// Tasks are spawned on the root scope.
#[derive(Clone)]
pub struct BoardController {
    pub board: BoardState,
    pub status: StatusState,
    pub client: ActivityClient,
    pub message_timeout: Duration,
}

impl BoardController {
    /// Fetch the activity list in the background.
    pub fn reload(&self) {
        let this = self.clone();
        spawn_forever(async move { this.load().await });
    }

    pub async fn load(&self) {
        let mut activities = self.board.activities;
        let mut load = self.board.load;
        match self.client.fetch_activities().await {
            Ok(set) => {
                info!(count = set.len(), "activities loaded");
                activities.set(set);
                load.set(LoadState::Ready);
            }
            Err(err) => {
                error!(kind = err.label(), error = %err, "error fetching activities");
                load.set(LoadState::Failed);
            }
        }
    }

    pub fn signup(&self, activity: String, email: String) {
        let this = self.clone();
        spawn_forever(async move {
            let outcome = this.client.signup(&activity, &email).await;
            this.settle(Action::Signup, outcome);
        });
    }

    pub fn unregister(&self, activity: String, email: String) {
        let this = self.clone();
        spawn_forever(async move {
            let outcome = this.client.unregister(&activity, &email).await;
            this.settle(Action::Unregister, outcome);
        });
    }

    fn settle(&self, action: Action, outcome: Result<ActionReply, BoardError>) {
        let resolution = resolve(action, outcome);
        if resolution.reset_form {
            let mut email = self.board.email;
            let mut picked = self.board.picked;
            email.set(String::new());
            picked.set(None);
        }
        self.show(resolution.status);
        if resolution.refresh {
            self.reload();
        }
    }

    /// Show a message and hide it once the timeout elapses. Earlier hide
    /// timers are left running, so they may hide a newer message.
    pub fn show(&self, message: StatusMessage) {
        let mut msg = self.status.msg;
        msg.set(Some(message));
        let timeout = self.message_timeout;
        spawn_forever(async move {
            platform::sleep(timeout).await;
            if let Some(current) = msg.write().as_mut() {
                current.visible = false;
            }
        });
    }
}
