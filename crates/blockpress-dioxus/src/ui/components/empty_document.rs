use dioxus::prelude::*;

#[component]
pub fn EmptyDocument() -> Element {
    rsx! {
        div {
            class: "empty-document",
            p { "No content yet. Add a block to get started." }
        }
    }
}
