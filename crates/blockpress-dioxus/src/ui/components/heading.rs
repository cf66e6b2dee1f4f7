use blockpress_engine::models::{HeadingLevel, TextSize};
use dioxus::prelude::*;

#[component]
pub fn Heading(text: String, level: HeadingLevel, size: TextSize) -> Element {
    let class_name = format!("heading size-{}", size.as_str());

    match level {
        HeadingLevel::H1 => rsx! { h1 { class: "{class_name}", "{text}" } },
        HeadingLevel::H2 => rsx! { h2 { class: "{class_name}", "{text}" } },
        HeadingLevel::H3 => rsx! { h3 { class: "{class_name}", "{text}" } },
        HeadingLevel::H4 => rsx! { h4 { class: "{class_name}", "{text}" } },
        HeadingLevel::H5 => rsx! { h5 { class: "{class_name}", "{text}" } },
        HeadingLevel::H6 => rsx! { h6 { class: "{class_name}", "{text}" } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_heading_renders_its_rank() {
        let mut dom = VirtualDom::new_with_props(
            Heading,
            HeadingProps {
                text: "Hello".to_string(),
                level: HeadingLevel::H2,
                size: TextSize::Normal,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<h2"));
        assert!(html.contains("Hello"));
        assert!(html.contains("size-normal"));
    }
}
