use blockpress_config::Config;
use blockpress_engine::io;
use dioxus::prelude::*;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::components::{ErrorScreen, SetupScreen};
use ui::{App, EDITOR_CSS};

fn posts_argument() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn program_name() -> String {
    env::args()
        .next()
        .unwrap_or_else(|| "blockpress-dioxus".to_string())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("blockpress starting up");

    if env::args().count() > 2 {
        eprintln!("Usage: {} [posts-folder-path]", program_name());
        process::exit(1);
    }

    match Config::resolve_posts_path(posts_argument()) {
        Ok(Some(resolved)) => {
            if let Err(e) = io::validate_posts_dir(&resolved.path) {
                eprintln!(
                    "Error: Posts path '{}' from {} is invalid: {e}",
                    resolved.path.display(),
                    resolved.source
                );
                process::exit(1);
            }
            log::info!("Using posts folder {}", resolved.path.display());
        }
        Ok(None) => log::info!("No posts folder configured, starting setup"),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} [posts-folder-path]", program_name());
            process::exit(1);
        }
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    let mut folder = use_signal(|| {
        Config::resolve_posts_path(posts_argument())
            .map(|resolved| resolved.map(|posts| posts.path))
            .map_err(|e| e.to_string())
    });
    let resolved = folder.read().clone();

    rsx! {
        style { {EDITOR_CSS} }
        match resolved {
            Ok(Some(posts_path)) => rsx! {
                App { posts_path }
            },
            Ok(None) => rsx! {
                SetupScreen {
                    config_path: Config::config_path(),
                    on_complete: move |chosen: PathBuf| folder.set(Ok(Some(chosen))),
                }
            },
            Err(message) => rsx! {
                ErrorScreen {
                    title: "Cannot open posts".to_string(),
                    message,
                    details: Some(format!("Usage: {} [posts-folder-path]", program_name())),
                }
            },
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("blockpress")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
