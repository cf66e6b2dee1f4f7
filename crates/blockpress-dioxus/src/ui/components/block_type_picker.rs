use blockpress_engine::models::BlockType;
use dioxus::prelude::*;

#[component]
pub fn BlockTypePicker(open: bool, on_toggle: Callback<()>, on_select: Callback<BlockType>) -> Element {
    rsx! {
        div {
            class: "block-type-picker",
            button {
                class: "add-block-button",
                onclick: move |_| on_toggle.call(()),
                if open { "Cancel" } else { "Add block +" }
            }
            if open {
                div {
                    class: "block-type-menu",
                    for (block_type, label) in BlockType::ALL.map(|t| (t, t.label())) {
                        button {
                            class: "block-type-option",
                            onclick: move |_| on_select.call(block_type),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
