use crate::ui::components::form_controls::calculate_textarea_rows;
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{QuoteSettings, SettingChange};
use dioxus::prelude::*;

#[component]
pub fn QuoteEditor(content: String, settings: QuoteSettings, on_patch: Callback<BlockPatch>) -> Element {
    let author = settings.author.unwrap_or_default();
    let row_count = calculate_textarea_rows(&content, 2);

    rsx! {
        div {
            class: "quote-editor",
            textarea {
                class: "block-textarea quote-text",
                value: "{content}",
                rows: row_count,
                placeholder: "Quotation",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::content(event.value())),
            }
            input {
                r#type: "text",
                class: "quote-author",
                value: "{author}",
                placeholder: "Author (optional)",
                oninput: move |event: Event<FormData>| {
                    let value = event.value();
                    let author = (!value.is_empty()).then_some(value);
                    on_patch.call(BlockPatch::setting(SettingChange::Author(author)));
                },
            }
        }
    }
}
