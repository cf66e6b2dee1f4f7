use dioxus::prelude::*;

/// Full-window error display for failures before the editor can start
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Posts folder missing".to_string(),
                message: "Pass a posts folder or set posts_path in the config file".to_string(),
                details: Some("Invalid posts directory: Directory does not exist".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Posts folder missing"));
        assert!(html.contains("posts_path"));
        assert!(html.contains("Directory does not exist"));
    }
}
