use crate::ui::components::form_controls::calculate_textarea_rows;
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{ListSettings, SettingChange};
use dioxus::prelude::*;

/// List items are edited as plain text, one item per line
#[component]
pub fn ListEditor(content: String, settings: ListSettings, on_patch: Callback<BlockPatch>) -> Element {
    let bullet_class = if settings.ordered { "list-toggle" } else { "list-toggle active" };
    let number_class = if settings.ordered { "list-toggle active" } else { "list-toggle" };
    let row_count = calculate_textarea_rows(&content, 3);

    rsx! {
        div {
            class: "list-editor",
            div {
                class: "list-toggles",
                button {
                    class: bullet_class,
                    onclick: move |_| on_patch.call(BlockPatch::setting(SettingChange::Ordered(false))),
                    "• Bulleted"
                }
                button {
                    class: number_class,
                    onclick: move |_| on_patch.call(BlockPatch::setting(SettingChange::Ordered(true))),
                    "1. Numbered"
                }
            }
            textarea {
                class: "block-textarea list-items",
                value: "{content}",
                rows: row_count,
                placeholder: "One item per line",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::content(event.value())),
            }
        }
    }
}
