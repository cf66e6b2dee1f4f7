//! Read-only view model shared by every preview surface
//!
//! Front-ends never interpret block settings themselves for preview: they
//! render [`RenderBlock`]s, which are derived from the block sequence and
//! nothing else.

pub mod html;

use crate::models::{
    Block, BlockId, BlockSettings, HeadingLevel, MediaSize, TextSize,
};

/// Preview-ready form of one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBlock {
    Paragraph {
        id: BlockId,
        text: String,
        size: TextSize,
    },
    Heading {
        id: BlockId,
        text: String,
        level: HeadingLevel,
        size: TextSize,
    },
    Figure {
        id: BlockId,
        url: String,
        alt: String,
        caption: Option<String>,
        size: MediaSize,
    },
    Video {
        id: BlockId,
        embed_url: String,
        size: MediaSize,
    },
    Quote {
        id: BlockId,
        text: String,
        author: Option<String>,
    },
    List {
        id: BlockId,
        ordered: bool,
        items: Vec<String>,
    },
    Code {
        id: BlockId,
        code: String,
    },
}

impl RenderBlock {
    pub fn id(&self) -> &BlockId {
        match self {
            RenderBlock::Paragraph { id, .. }
            | RenderBlock::Heading { id, .. }
            | RenderBlock::Figure { id, .. }
            | RenderBlock::Video { id, .. }
            | RenderBlock::Quote { id, .. }
            | RenderBlock::List { id, .. }
            | RenderBlock::Code { id, .. } => id,
        }
    }
}

/// Derive the preview of a block sequence
///
/// Images and videos without a URL have nothing to show and are skipped.
pub fn render_blocks(blocks: &[Block]) -> Vec<RenderBlock> {
    blocks.iter().filter_map(render_block).collect()
}

pub fn render_block(block: &Block) -> Option<RenderBlock> {
    let id = block.id().clone();
    let rendered = match block.settings() {
        BlockSettings::Paragraph(settings) => RenderBlock::Paragraph {
            id,
            text: block.content.clone(),
            size: settings.size,
        },
        BlockSettings::Heading(settings) => RenderBlock::Heading {
            id,
            text: block.content.clone(),
            level: settings.level,
            size: settings.size,
        },
        BlockSettings::Image(settings) => {
            if settings.url.trim().is_empty() {
                return None;
            }
            RenderBlock::Figure {
                id,
                url: settings.url.clone(),
                alt: settings.alt.clone(),
                caption: non_blank(&settings.caption),
                size: settings.size,
            }
        }
        BlockSettings::Video(settings) => {
            if settings.url.trim().is_empty() {
                return None;
            }
            RenderBlock::Video {
                id,
                embed_url: embed_url(&settings.url),
                size: settings.size,
            }
        }
        BlockSettings::Quote(settings) => RenderBlock::Quote {
            id,
            text: block.content.clone(),
            author: settings.author.as_deref().and_then(non_blank),
        },
        BlockSettings::List(settings) => RenderBlock::List {
            id,
            ordered: settings.ordered,
            items: list_items(&block.content),
        },
        BlockSettings::Code(_) => RenderBlock::Code {
            id,
            code: block.content.clone(),
        },
    };
    Some(rendered)
}

/// Turn a `watch?v=` video link into its embeddable form
pub fn embed_url(url: &str) -> String {
    url.replace("watch?v=", "embed/")
}

/// One list item per line, blank lines dropped
///
/// Stored content keeps its blank lines; they only disappear here.
pub fn list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageSettings, ListSettings, QuoteSettings, VideoSettings};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a\n\nb\n", vec!["a", "b"])]
    #[case("", vec![])]
    #[case("  \n\t\n", vec![])]
    #[case("one\r\ntwo", vec!["one", "two"])]
    #[case("  padded  ", vec!["padded"])]
    fn test_list_items(#[case] content: &str, #[case] expected: Vec<&str>) {
        assert_eq!(list_items(content), expected);
    }

    #[rstest]
    #[case("https://youtube.com/watch?v=XYZ", "https://youtube.com/embed/XYZ")]
    #[case("https://www.youtube.com/watch?v=abc123&t=5", "https://www.youtube.com/embed/abc123&t=5")]
    #[case("https://player.vimeo.com/video/1", "https://player.vimeo.com/video/1")]
    fn test_embed_url(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(embed_url(url), expected);
    }

    #[test]
    fn test_list_block_keeps_blank_lines_in_storage() {
        let block = Block::with_parts("l", "a\n\nb\n", BlockSettings::List(ListSettings { ordered: true }));

        let rendered = render_block(&block).unwrap();

        assert_eq!(block.content, "a\n\nb\n");
        assert_eq!(
            rendered,
            RenderBlock::List {
                id: BlockId::from("l"),
                ordered: true,
                items: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn test_video_renders_embed_url() {
        let block = Block::with_parts(
            "v",
            "",
            BlockSettings::Video(VideoSettings {
                url: "https://youtube.com/watch?v=XYZ".to_string(),
                size: MediaSize::Large,
            }),
        );

        let Some(RenderBlock::Video { embed_url, size, .. }) = render_block(&block) else {
            panic!("expected a video");
        };
        assert!(embed_url.contains("embed/XYZ"));
        assert_eq!(size, MediaSize::Large);
    }

    #[test]
    fn test_media_without_url_is_skipped() {
        let blocks = vec![
            Block::with_parts("i", "", BlockSettings::Image(ImageSettings::default())),
            Block::with_parts("v", "", BlockSettings::Video(VideoSettings::default())),
        ];
        assert!(render_blocks(&blocks).is_empty());
    }

    #[test]
    fn test_blank_author_and_caption_are_dropped() {
        let quote = Block::with_parts(
            "q",
            "Less is more",
            BlockSettings::Quote(QuoteSettings {
                author: Some("  ".to_string()),
            }),
        );
        let image = Block::with_parts(
            "i",
            "",
            BlockSettings::Image(ImageSettings {
                url: "a.png".to_string(),
                caption: String::new(),
                ..Default::default()
            }),
        );

        assert!(matches!(render_block(&quote), Some(RenderBlock::Quote { author: None, .. })));
        assert!(matches!(render_block(&image), Some(RenderBlock::Figure { caption: None, .. })));
    }

    #[test]
    fn test_render_preserves_order() {
        let blocks = crate::tests::sample_blocks();
        let ids: Vec<_> = render_blocks(&blocks)
            .iter()
            .map(|b| b.id().as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }
}
