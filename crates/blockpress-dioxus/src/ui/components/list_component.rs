use dioxus::prelude::*;

/// Renders list items as `ol` or `ul`
#[component]
pub fn ListComponent(items: Vec<String>, ordered: bool) -> Element {
    if ordered {
        rsx! {
            ol {
                class: "list",
                for item in items {
                    li { "{item}" }
                }
            }
        }
    } else {
        rsx! {
            ul {
                class: "list",
                for item in items {
                    li { "{item}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_list(ordered: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            ListComponent,
            ListComponentProps {
                items: vec!["Shoes".to_string(), "Hats".to_string()],
                ordered,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_bulleted_list() {
        let html = render_list(false);
        assert!(html.contains("<ul"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_numbered_list() {
        let html = render_list(true);
        assert!(html.contains("<ol"));
        assert!(html.find("Shoes") < html.find("Hats"));
    }
}
