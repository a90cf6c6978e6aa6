use dioxus::prelude::*;

use crate::models::StatusMessage;

#[component]
pub fn StatusBanner(message: Option<StatusMessage>) -> Element {
    let (text, class) = match &message {
        Some(m) if m.visible => (m.text.clone(), m.kind.class().to_string()),
        Some(m) => (m.text.clone(), format!("{} hidden", m.kind.class())),
        None => (String::new(), "hidden".to_string()),
    };
    rsx! {
        div { id: "message", class: "{class}", "{text}" }
    }
}
