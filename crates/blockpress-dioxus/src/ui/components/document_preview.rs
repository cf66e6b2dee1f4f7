use crate::ui::components::{
    BlockQuote, CodeFence, Figure, Heading, ListComponent, Paragraph, VideoEmbed,
};
use blockpress_engine::render::RenderBlock;
use dioxus::prelude::*;

/// Read-only rendering of a whole document
///
/// Blocks with nothing to show are already gone from `blocks`, so an empty
/// list here does not mean an empty document.
#[component]
pub fn DocumentPreview(blocks: Vec<RenderBlock>) -> Element {
    rsx! {
        article {
            class: "document-preview",
            for (key, block) in blocks.into_iter().map(|b| (b.id().to_string(), b)) {
                PreviewBlock { key: "{key}", block }
            }
        }
    }
}

#[component]
pub fn PreviewBlock(block: RenderBlock) -> Element {
    match block {
        RenderBlock::Paragraph { text, size, .. } => rsx! { Paragraph { text, size } },
        RenderBlock::Heading {
            text, level, size, ..
        } => rsx! { Heading { text, level, size } },
        RenderBlock::Figure {
            url,
            alt,
            caption,
            size,
            ..
        } => rsx! { Figure { url, alt, caption, size } },
        RenderBlock::Video {
            embed_url, size, ..
        } => rsx! { VideoEmbed { embed_url, size } },
        RenderBlock::Quote { text, author, .. } => rsx! { BlockQuote { text, author } },
        RenderBlock::List { ordered, items, .. } => rsx! { ListComponent { items, ordered } },
        RenderBlock::Code { code, .. } => rsx! { CodeFence { code } },
    }
}
