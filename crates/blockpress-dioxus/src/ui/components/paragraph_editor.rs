use crate::ui::components::form_controls::{TextSizeSelect, calculate_textarea_rows, rows_for_size};
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{ParagraphSettings, SettingChange, TextSize};
use dioxus::prelude::*;

#[component]
pub fn ParagraphEditor(
    content: String,
    settings: ParagraphSettings,
    on_patch: Callback<BlockPatch>,
) -> Element {
    let size = settings.size.as_str();
    let row_count = calculate_textarea_rows(&content, rows_for_size(settings.size));

    rsx! {
        div {
            class: "paragraph-editor",
            TextSizeSelect {
                value: settings.size,
                on_select: move |size: TextSize| on_patch.call(BlockPatch::setting(SettingChange::Size(size)))
            }
            textarea {
                class: "block-textarea size-{size}",
                value: "{content}",
                rows: row_count,
                placeholder: "Write a paragraph...",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::content(event.value())),
            }
        }
    }
}
