use blockpress_engine::models::PostFile;
use dioxus::prelude::*;

/// Sidebar listing of post files, plus a form for starting a new post
#[component]
pub fn PostList(
    posts: Vec<PostFile>,
    #[props(!optional)] selected: Option<PostFile>,
    on_select: Callback<PostFile>,
    on_create: Callback<String>,
) -> Element {
    let mut new_title = use_signal(String::new);
    let rows: Vec<_> = posts
        .into_iter()
        .map(|post| {
            let class = if selected.as_ref() == Some(&post) {
                "post-item selected"
            } else {
                "post-item"
            };
            let name = post.display_name().to_string();
            (post, name, class)
        })
        .collect();

    rsx! {
        div {
            class: "post-list",
            for (post, name, class) in rows {
                div {
                    class: "{class}",
                    onclick: move |_| on_select.call(post.clone()),
                    "{name}"
                }
            }
            form {
                class: "new-post",
                onsubmit: move |event: Event<FormData>| {
                    event.prevent_default();
                    let title = new_title.read().trim().to_string();
                    if !title.is_empty() {
                        on_create.call(title);
                        new_title.set(String::new());
                    }
                },
                input {
                    r#type: "text",
                    value: "{new_title}",
                    placeholder: "New post title",
                    oninput: move |event: Event<FormData>| new_title.set(event.value()),
                }
                button { r#type: "submit", "Create" }
            }
        }
    }
}
