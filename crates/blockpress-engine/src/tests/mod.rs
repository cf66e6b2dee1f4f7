use crate::models::{
    Block, BlockSettings, HeadingLevel, HeadingSettings, ListSettings, ParagraphSettings,
    QuoteSettings, TextSize,
};
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_posts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(Path::new(name));
    std::fs::write(&path, content).unwrap();
    path
}

pub fn paragraph(id: &str, text: &str) -> Block {
    Block::with_parts(
        id,
        text,
        BlockSettings::Paragraph(ParagraphSettings::default()),
    )
}

/// Four blocks with ids `a` to `d`: paragraph, heading, list, quote
pub fn sample_blocks() -> Vec<Block> {
    vec![
        paragraph("a", "Welcome to the sale."),
        Block::with_parts(
            "b",
            "Deals",
            BlockSettings::Heading(HeadingSettings {
                level: HeadingLevel::H3,
                size: TextSize::Large,
            }),
        ),
        Block::with_parts(
            "c",
            "Shoes\n\nHats",
            BlockSettings::List(ListSettings { ordered: false }),
        ),
        Block::with_parts(
            "d",
            "Best prices in town",
            BlockSettings::Quote(QuoteSettings {
                author: Some("A customer".to_string()),
            }),
        ),
    ]
}

pub fn block_ids(blocks: &[Block]) -> Vec<&str> {
    blocks.iter().map(|block| block.id().as_str()).collect()
}
