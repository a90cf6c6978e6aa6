use dioxus::prelude::*;

use crate::view::{ActivityCard as Card, NO_PARTICIPANTS_TEXT};

/// One activity with its roster. `on_remove` receives `(activity, email)`.
#[component]
pub fn ActivityCard(card: Card, on_remove: EventHandler<(String, String)>) -> Element {
    let availability = card.availability();
    rsx! {
        div { class: "activity-card",
            h4 { "{card.name}" }
            p { "{card.description}" }
            p { strong { "Schedule:" } " {card.schedule}" }
            p { strong { "Availability:" } " {availability}" }
            div { class: "participants-container",
                if card.participants.is_empty() {
                    p { em { "{NO_PARTICIPANTS_TEXT}" } }
                } else {
                    div { class: "participants-section",
                        h5 { "Participants:" }
                        ul { class: "participants-list",
                            for (idx, email) in card.participants.iter().cloned().enumerate() {
                                li { key: "p-{idx}-{email}",
                                    span { class: "participant-email", "{email}" }
                                    button {
                                        class: "delete-btn",
                                        "data-activity": "{card.name}",
                                        "data-email": "{email}",
                                        aria_label: "Remove participant",
                                        onclick: {
                                            let activity = card.name.clone();
                                            let email = email.clone();
                                            move |_| on_remove.call((activity.clone(), email.clone()))
                                        },
                                        "❌"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
