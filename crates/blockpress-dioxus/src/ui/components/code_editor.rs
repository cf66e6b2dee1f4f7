use crate::ui::components::form_controls::calculate_textarea_rows;
use blockpress_engine::editing::BlockPatch;
use dioxus::prelude::*;

#[component]
pub fn CodeEditor(content: String, on_patch: Callback<BlockPatch>) -> Element {
    let row_count = calculate_textarea_rows(&content, 4);

    rsx! {
        textarea {
            class: "block-textarea code-textarea",
            style: "font-family: monospace; white-space: pre;",
            value: "{content}",
            rows: row_count,
            spellcheck: "false",
            wrap: "off",
            placeholder: "Code",
            oninput: move |event: Event<FormData>| on_patch.call(BlockPatch::content(event.value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn snippet() -> Element {
        rsx! {
            CodeEditor {
                content: "fn main() {}\n".to_string(),
                on_patch: move |_: BlockPatch| {},
            }
        }
    }

    #[test]
    fn test_code_is_not_spellchecked_or_wrapped() {
        let mut dom = VirtualDom::new(snippet);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("spellcheck=\"false\""));
        assert!(html.contains("wrap=\"off\""));
        assert!(html.contains("fn main() {}"));
    }
}
