use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "header",
            h1 { class: "title", "Mergington High School" }
            h2 { class: "meta", "Extracurricular Activities" }
        }
    }
}
