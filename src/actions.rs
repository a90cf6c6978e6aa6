use tracing::{error, info};

use crate::api::ActionReply;
use crate::error::BoardError;
use crate::models::StatusMessage;

pub const FALLBACK_ERROR: &str = "An error occurred";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Signup,
    Unregister,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Signup => "signup",
            Action::Unregister => "unregister",
        }
    }

    fn network_failure_text(self) -> &'static str {
        match self {
            Action::Signup => "Failed to sign up. Please try again.",
            Action::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// What the page does once an action request settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub status: StatusMessage,
    /// Re-fetch the activity list.
    pub refresh: bool,
    /// Clear the sign-up form.
    pub reset_form: bool,
}

pub fn resolve(action: Action, outcome: Result<ActionReply, BoardError>) -> Resolution {
    match outcome {
        Ok(ActionReply::Accepted { message }) => {
            info!(action = action.name(), "action accepted");
            Resolution {
                status: StatusMessage::success(message),
                refresh: true,
                reset_form: action == Action::Signup,
            }
        }
        Ok(ActionReply::Rejected { detail }) => {
            info!(action = action.name(), detail = detail.as_deref(), "action rejected");
            Resolution {
                status: StatusMessage::error(detail.unwrap_or_else(|| FALLBACK_ERROR.to_string())),
                refresh: false,
                reset_form: false,
            }
        }
        Err(err) => {
            error!(action = action.name(), kind = err.label(), error = %err, "action failed");
            Resolution {
                status: StatusMessage::error(action.network_failure_text()),
                refresh: false,
                reset_form: false,
            }
        }
    }
}
