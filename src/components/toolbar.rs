use dioxus::prelude::*;

use crate::models::{SortMode, ViewState};

#[component]
pub fn Toolbar(
    categories: Vec<String>,
    view: ViewState,
    on_category: EventHandler<String>,
    on_search: EventHandler<String>,
    on_sort: EventHandler<SortMode>,
) -> Element {
    rsx! {
        div { id: "activity-toolbar", class: "filters",
            label { r#for: "category-filter", "Category:" }
            select {
                id: "category-filter",
                onchange: move |e| on_category.call(e.value()),
                option { value: "", selected: view.category.is_empty(), "All" }
                for cat in categories.into_iter() {
                    option { key: "cat-{cat}", value: "{cat}", selected: cat == view.category, "{cat}" }
                }
            }
            label { r#for: "activity-search", "Search:" }
            input {
                id: "activity-search",
                class: "text",
                r#type: "text",
                placeholder: "Search activities...",
                value: "{view.search}",
                oninput: move |e| on_search.call(e.value()),
            }
            label { r#for: "activity-sort", "Sort by:" }
            select {
                id: "activity-sort",
                onchange: move |e| on_sort.call(SortMode::from_value(&e.value())),
                option { value: "name", selected: view.sort == SortMode::Name, "Name" }
                option { value: "date", selected: view.sort == SortMode::Date, "Date" }
            }
        }
    }
}
