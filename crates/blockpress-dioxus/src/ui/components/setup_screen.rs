use blockpress_config::Config;
use blockpress_engine::io;
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

/// Check the typed folder, creating it when missing, and remember it in the
/// config file at `config_path`
pub fn choose_posts_folder(input: &str, config_path: &Path) -> Result<PathBuf, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a path".to_string());
    }

    let path = PathBuf::from(input);
    if !path.exists() {
        std::fs::create_dir_all(&path).map_err(|e| format!("Failed to create directory: {e}"))?;
        log::info!("Created posts folder {}", path.display());
    }
    io::validate_posts_dir(&path).map_err(|e| e.to_string())?;

    let config = Config {
        posts_path: path.clone(),
    };
    config
        .save_to_path(config_path)
        .map_err(|e| format!("Failed to save config: {e}"))?;

    Ok(path)
}

/// First-run screen shown when no posts folder is given or configured
#[component]
pub fn SetupScreen(config_path: PathBuf, on_complete: Callback<PathBuf>) -> Element {
    let mut path_input = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let config_display = config_path.display().to_string();

    rsx! {
        div {
            class: "setup-screen",
            h1 { "Welcome to blockpress" }
            p { "Choose the folder your posts live in. It is created if it doesn't exist yet." }
            p { class: "setup-note", "The choice is saved to {config_display}" }
            form {
                class: "setup-form",
                onsubmit: move |event: Event<FormData>| {
                    event.prevent_default();
                    let input = path_input.read().clone();
                    match choose_posts_folder(&input, &config_path) {
                        Ok(path) => {
                            error_message.set(None);
                            on_complete.call(path);
                        }
                        Err(message) => error_message.set(Some(message)),
                    }
                },
                label { "Posts folder:" }
                input {
                    r#type: "text",
                    value: "{path_input}",
                    placeholder: "/path/to/posts",
                    oninput: move |event: Event<FormData>| path_input.set(event.value()),
                }
                button { r#type: "submit", "Use this folder" }
            }
            if let Some(error) = error_message.read().as_ref() {
                p { class: "setup-error", "{error}" }
            }
        }
    }
}
