use crate::ui::components::{BlockEditor, PostList};
use blockpress_engine::models::{Block, Post, PostFile};
use blockpress_engine::io;
use dioxus::prelude::*;
use std::path::PathBuf;

pub const EDITOR_CSS: &str = include_str!("../assets/editor.css");

/// A post as it was when opened; the editor owns the blocks from then on
#[derive(Debug, Clone, PartialEq)]
struct OpenPost {
    file: PostFile,
    title: String,
    blocks: Vec<Block>,
}

#[component]
pub fn App(posts_path: PathBuf) -> Element {
    let mut posts = use_signal(|| match io::scan_posts(&posts_path) {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Error scanning posts: {e}");
            Vec::new()
        }
    });
    let mut open_post = use_signal(|| None::<OpenPost>);
    let mut status = use_signal(|| None::<String>);

    let open = {
        let posts_path = posts_path.clone();
        move |file: PostFile| match io::read_post(file.relative_path(), &posts_path) {
            Ok(post) => {
                log::info!("opened {}", file.relative_path());
                status.set(None);
                open_post.set(Some(OpenPost {
                    file,
                    title: post.title,
                    blocks: post.blocks,
                }));
            }
            Err(e) => {
                log::error!("Error reading post {}: {e}", file.relative_path());
                status.set(Some(format!("Could not open {}: {e}", file.display_name())));
            }
        }
    };

    let on_create = {
        let posts_path = posts_path.clone();
        let mut open = open.clone();
        move |title: String| match io::create_post(&posts_path, &title) {
            Ok(file) => {
                match io::scan_posts(&posts_path) {
                    Ok(rescanned) => posts.set(rescanned),
                    Err(e) => log::error!("Error scanning posts: {e}"),
                }
                open(file);
            }
            Err(e) => {
                log::warn!("Error creating post: {e}");
                status.set(Some(e.to_string()));
            }
        }
    };

    let on_change = {
        let posts_path = posts_path.clone();
        move |blocks: Vec<Block>| {
            let (file, title) = match open_post.peek().as_ref() {
                Some(current) => (current.file.clone(), current.title.clone()),
                None => return,
            };
            let post = Post { title, blocks };
            match io::write_post(file.relative_path(), &posts_path, &post) {
                Ok(()) => {
                    if status.peek().is_some() {
                        status.set(None);
                    }
                }
                Err(e) => {
                    log::error!("Error saving post {}: {e}", file.relative_path());
                    status.set(Some(format!("Could not save: {e}")));
                }
            }
        }
    };

    let current = open_post.read().clone();
    let selected = current.as_ref().map(|post| post.file.clone());
    let editor_key = selected
        .as_ref()
        .map(|file| file.relative_path().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Posts" }
                PostList {
                    posts: posts.read().clone(),
                    selected,
                    on_select: open,
                    on_create,
                }
            }
            div {
                class: "main-content",
                if let Some(message) = status.read().clone() {
                    div { class: "status-error", "{message}" }
                }
                if let Some(post) = current {
                    h1 { class: "post-title", "{post.title}" }
                    BlockEditor {
                        key: "{editor_key}",
                        initial_blocks: post.blocks,
                        on_change,
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "blockpress" }
                        p { "Select a post from the sidebar or create a new one" }
                    }
                }
            }
        }
    }
}
