use blockpress_engine::models::MediaSize;
use dioxus::prelude::*;

#[component]
pub fn Figure(
    url: String,
    alt: String,
    #[props(!optional)] caption: Option<String>,
    size: MediaSize,
) -> Element {
    let width = size.css_width();
    let size = size.as_str();
    rsx! {
        figure {
            class: "image size-{size}",
            img { src: "{url}", alt: "{alt}", style: "width: {width}" }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
