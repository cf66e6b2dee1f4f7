use blockpress_engine::models::TextSize;
use dioxus::prelude::*;

#[component]
pub fn Paragraph(text: String, size: TextSize) -> Element {
    let size = size.as_str();
    rsx! {
        p { class: "paragraph size-{size}", "{text}" }
    }
}
