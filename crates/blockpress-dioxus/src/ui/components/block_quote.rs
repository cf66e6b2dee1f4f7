use dioxus::prelude::*;

#[component]
pub fn BlockQuote(text: String, #[props(!optional)] author: Option<String>) -> Element {
    rsx! {
        blockquote {
            class: "quote",
            p { "{text}" }
            if let Some(author) = author {
                cite { "— {author}" }
            }
        }
    }
}
