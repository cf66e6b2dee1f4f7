use dioxus::prelude::*;

#[component]
pub fn CodeFence(code: String) -> Element {
    rsx! {
        pre {
            class: "code",
            code { "{code}" }
        }
    }
}
