use dioxus::prelude::*;

/// Modal yes/no question; answers `true` when the user confirms
#[component]
pub fn ConfirmDialog(message: String, on_answer: Callback<bool>) -> Element {
    rsx! {
        div {
            class: "confirm-overlay",
            div {
                class: "confirm-dialog",
                role: "alertdialog",
                p { "{message}" }
                div {
                    class: "confirm-actions",
                    button {
                        class: "confirm-cancel",
                        onclick: move |_| on_answer.call(false),
                        "Cancel"
                    }
                    button {
                        class: "confirm-ok danger",
                        onclick: move |_| on_answer.call(true),
                        "Delete"
                    }
                }
            }
        }
    }
}
