use crate::ui::components::form_controls::MediaSizeSelect;
use blockpress_engine::editing::BlockPatch;
use blockpress_engine::models::{MediaSize, SettingChange, VideoSettings};
use blockpress_engine::render::embed_url;
use dioxus::prelude::*;

#[component]
pub fn VideoEditor(settings: VideoSettings, on_patch: Callback<BlockPatch>) -> Element {
    let url = settings.url;
    let embed = embed_url(&url);
    let width = settings.size.css_width();

    rsx! {
        div {
            class: "video-editor",
            input {
                r#type: "text",
                class: "video-url",
                value: "{url}",
                placeholder: "Video URL (YouTube watch links are converted)",
                oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::setting(SettingChange::Url(event.value()))),
            }
            MediaSizeSelect {
                value: settings.size,
                on_select: move |size: MediaSize| on_patch.call(BlockPatch::setting(SettingChange::MediaSize(size)))
            }
            if !url.trim().is_empty() {
                iframe {
                    class: "video-preview",
                    src: "{embed}",
                    style: "width: {width}; aspect-ratio: 16 / 9; border: 0;",
                    allowfullscreen: true,
                }
            }
        }
    }
}
