use crate::ui::components::form_controls::{HeadingLevelSelect, TextSizeSelect, heading_font_size};
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{HeadingLevel, HeadingSettings, SettingChange, TextSize};
use dioxus::prelude::*;

#[component]
pub fn HeadingEditor(
    content: String,
    settings: HeadingSettings,
    on_patch: Callback<BlockPatch>,
) -> Element {
    let tag = settings.level.tag();
    let size = settings.size.as_str();
    let font_size = heading_font_size(settings.level);

    rsx! {
        div {
            class: "heading-editor",
            div {
                class: "heading-options",
                HeadingLevelSelect {
                    value: settings.level,
                    on_select: move |level: HeadingLevel| on_patch.call(BlockPatch::setting(SettingChange::Level(level)))
                }
                TextSizeSelect {
                    value: settings.size,
                    on_select: move |size: TextSize| on_patch.call(BlockPatch::setting(SettingChange::Size(size)))
                }
            }
            input {
                r#type: "text",
                class: "heading-input heading-{tag} size-{size}",
                style: "font-size: {font_size}; font-weight: bold;",
                value: "{content}",
                placeholder: "Heading",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::content(event.value())),
            }
        }
    }
}
