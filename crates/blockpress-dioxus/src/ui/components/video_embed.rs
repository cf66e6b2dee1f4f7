use blockpress_engine::models::MediaSize;
use dioxus::prelude::*;

#[component]
pub fn VideoEmbed(embed_url: String, size: MediaSize) -> Element {
    let width = size.css_width();
    let size = size.as_str();
    rsx! {
        div {
            class: "video size-{size}",
            iframe {
                src: "{embed_url}",
                style: "width: {width}",
                allowfullscreen: true,
            }
        }
    }
}
