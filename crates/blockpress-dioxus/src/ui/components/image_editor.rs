use crate::ui::components::form_controls::MediaSizeSelect;
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{ImageSettings, MediaSize, SettingChange};
use dioxus::prelude::*;

#[component]
pub fn ImageEditor(settings: ImageSettings, on_patch: Callback<BlockPatch>) -> Element {
    let ImageSettings {
        url,
        alt,
        caption,
        size,
    } = settings;
    let width = size.css_width();

    rsx! {
        div {
            class: "image-editor",
            input {
                r#type: "text",
                class: "image-url",
                value: "{url}",
                placeholder: "Image URL",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::setting(SettingChange::Url(event.value()))),
            }
            input {
                r#type: "text",
                class: "image-alt",
                value: "{alt}",
                placeholder: "Alt text",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::setting(SettingChange::Alt(event.value()))),
            }
            input {
                r#type: "text",
                class: "image-caption",
                value: "{caption}",
                placeholder: "Caption (optional)",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::setting(SettingChange::Caption(event.value()))),
            }
            MediaSizeSelect {
                value: size,
                on_select: move |size: MediaSize| on_patch.call(BlockPatch::setting(SettingChange::MediaSize(size)))
            }
            if !url.is_empty() {
                img {
                    class: "image-preview",
                    src: "{url}",
                    alt: "{alt}",
                    style: "width: {width}",
                }
            }
        }
    }
}
