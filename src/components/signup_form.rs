use dioxus::prelude::*;

#[component]
pub fn SignupForm(
    email: String,
    options: Vec<String>,
    selected: Option<String>,
    on_email: EventHandler<String>,
    on_pick: EventHandler<String>,
    on_submit: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        form {
            id: "signup-form",
            class: "add",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(e);
            },
            div { class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    class: "text",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: "{email}",
                    oninput: move |e| on_email.call(e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    onchange: move |e| on_pick.call(e.value()),
                    for name in options.into_iter() {
                        option {
                            key: "opt-{name}",
                            value: "{name}",
                            selected: selected.as_deref() == Some(name.as_str()),
                            "{name}"
                        }
                    }
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Sign Up" }
        }
    }
}
