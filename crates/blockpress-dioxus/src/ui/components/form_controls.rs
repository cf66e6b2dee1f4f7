use blockpress_engine::models::{HeadingLevel, MediaSize, TextSize};
use dioxus::prelude::*;

/// Selector for paragraph and heading text size
#[component]
pub fn TextSizeSelect(value: TextSize, on_select: Callback<TextSize>) -> Element {
    rsx! {
        select {
            class: "size-select",
            onchange: move |event: Event<FormData>| {
                if let Some(size) = TextSize::parse(&event.value()) {
                    on_select.call(size);
                }
            },
            for (size, name) in TextSize::ALL.map(|s| (s, s.as_str())) {
                option { value: name, selected: size == value, "{name}" }
            }
        }
    }
}

/// Selector for the four image/video width presets
#[component]
pub fn MediaSizeSelect(value: MediaSize, on_select: Callback<MediaSize>) -> Element {
    rsx! {
        select {
            class: "size-select",
            onchange: move |event: Event<FormData>| {
                if let Some(size) = MediaSize::parse(&event.value()) {
                    on_select.call(size);
                }
            },
            for (size, name) in MediaSize::ALL.map(|s| (s, s.as_str())) {
                option { value: name, selected: size == value, "{name}" }
            }
        }
    }
}

#[component]
pub fn HeadingLevelSelect(value: HeadingLevel, on_select: Callback<HeadingLevel>) -> Element {
    rsx! {
        select {
            class: "level-select",
            onchange: move |event: Event<FormData>| {
                if let Some(level) = HeadingLevel::parse(&event.value()) {
                    on_select.call(level);
                }
            },
            for (level, tag) in HeadingLevel::ALL.map(|l| (l, l.tag())) {
                option { value: tag, selected: level == value, "{tag}" }
            }
        }
    }
}

/// Rows for a textarea: enough for the content, at least `min_rows`, at most 20
pub fn calculate_textarea_rows(content: &str, min_rows: u32) -> u32 {
    let line_count = content.lines().count() as u32;
    line_count.max(min_rows).min(20)
}

/// Minimum textarea height for a text size
pub fn rows_for_size(size: TextSize) -> u32 {
    match size {
        TextSize::Small => 2,
        TextSize::Normal => 3,
        TextSize::Large => 5,
    }
}

/// Font size that gives a heading input the weight of its rank
pub fn heading_font_size(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "2em",
        HeadingLevel::H2 => "1.5em",
        HeadingLevel::H3 => "1.25em",
        HeadingLevel::H4 => "1.1em",
        HeadingLevel::H5 => "1em",
        HeadingLevel::H6 => "0.9em",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_calculate_textarea_rows() {
        assert_eq!(calculate_textarea_rows("Single line", 1), 1);
        assert_eq!(calculate_textarea_rows("Line 1\nLine 2\nLine 3", 1), 3);
        assert_eq!(calculate_textarea_rows("", 3), 3);
        assert_eq!(calculate_textarea_rows(&"Line\n".repeat(30), 1), 20);
    }

    #[test]
    fn test_heading_weight_decreases_with_rank() {
        assert_eq!(heading_font_size(HeadingLevel::H1), "2em");
        assert_eq!(heading_font_size(HeadingLevel::H6), "0.9em");
    }

    fn level_select() -> Element {
        rsx! {
            HeadingLevelSelect { value: HeadingLevel::H3, on_select: move |_: HeadingLevel| {} }
        }
    }

    #[test]
    fn test_level_select_offers_six_ranks() {
        let mut dom = VirtualDom::new(level_select);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches("<option").count(), 6);
        assert!(html.contains("h1"));
        assert!(html.contains("h6"));
    }
}
