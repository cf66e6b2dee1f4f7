use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::models::settings::BlockSettings;

/// Opaque identifier of a block within its document
///
/// New ids are random UUIDs; ids loaded from stored documents are kept
/// verbatim whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The closed set of block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Paragraph,
    Heading,
    Image,
    Video,
    Quote,
    List,
    Code,
}

impl BlockType {
    /// All types in the order the type picker offers them
    pub const ALL: [BlockType; 7] = [
        BlockType::Paragraph,
        BlockType::Heading,
        BlockType::Image,
        BlockType::Video,
        BlockType::Quote,
        BlockType::List,
        BlockType::Code,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::Quote => "quote",
            BlockType::List => "list",
            BlockType::Code => "code",
        }
    }

    /// Human-readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "Paragraph",
            BlockType::Heading => "Heading",
            BlockType::Image => "Image",
            BlockType::Video => "Video",
            BlockType::Quote => "Quote",
            BlockType::List => "List",
            BlockType::Code => "Code",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed, ordered unit of content
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "StoredBlock")]
pub struct Block {
    pub(crate) id: BlockId,
    pub content: String,
    pub(crate) settings: BlockSettings,
}

impl Block {
    /// A fresh block of `block_type` with empty content and default settings
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::new(),
            content: String::new(),
            settings: BlockSettings::defaults_for(block_type),
        }
    }

    /// Build a block from existing parts, e.g. when importing or in tests
    pub fn with_parts(id: impl Into<BlockId>, content: impl Into<String>, settings: BlockSettings) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            settings,
        }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn block_type(&self) -> BlockType {
        self.settings.block_type()
    }

    pub fn settings(&self) -> &BlockSettings {
        &self.settings
    }

    pub(crate) fn reassign_id(&mut self, id: BlockId) {
        self.id = id;
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Block", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.block_type())?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("settings", &self.settings)?;
        state.end()
    }
}

/// Wire shape of a block before its settings are checked against its type
#[derive(Deserialize)]
struct StoredBlock {
    id: StoredId,
    #[serde(rename = "type")]
    block_type: BlockType,
    #[serde(default)]
    content: String,
    #[serde(default)]
    settings: serde_json::Value,
}

/// Ids as stored documents carry them: strings, or bare numbers in documents
/// keyed by timestamps
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(serde_json::Number),
}

impl From<StoredId> for BlockId {
    fn from(stored: StoredId) -> Self {
        match stored {
            StoredId::Text(text) => BlockId(text),
            StoredId::Number(number) => BlockId(number.to_string()),
        }
    }
}

impl TryFrom<StoredBlock> for Block {
    type Error = serde_json::Error;

    fn try_from(stored: StoredBlock) -> Result<Self, Self::Error> {
        let settings = BlockSettings::from_value(stored.block_type, stored.settings)?;
        Ok(Self {
            id: stored.id.into(),
            content: stored.content,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeadingLevel, HeadingSettings, ListSettings, TextSize};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_block_has_defaults() {
        let block = Block::new(BlockType::Heading);

        assert_eq!(block.block_type(), BlockType::Heading);
        assert!(block.content.is_empty());
        assert_eq!(
            block.settings(),
            &BlockSettings::Heading(HeadingSettings {
                level: HeadingLevel::H2,
                size: TextSize::Normal,
            })
        );
    }

    #[test]
    fn test_new_blocks_get_distinct_ids() {
        let a = Block::new(BlockType::Paragraph);
        let b = Block::new(BlockType::Paragraph);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_serialize_uses_stored_shape() {
        let block = Block::with_parts(
            "b1",
            "one\ntwo",
            BlockSettings::List(ListSettings { ordered: true }),
        );

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "id": "b1",
                "type": "list",
                "content": "one\ntwo",
                "settings": {"ordered": true}
            })
        );
    }

    #[test]
    fn test_deserialize_legacy_block_without_settings() {
        let block: Block = serde_json::from_value(json!({
            "id": "1699999999",
            "type": "heading",
            "content": "Hello"
        }))
        .unwrap();

        assert_eq!(block.id().as_str(), "1699999999");
        assert_eq!(block.settings(), &BlockSettings::defaults_for(BlockType::Heading));
    }

    #[test]
    fn test_deserialize_numeric_id_as_string() {
        let block: Block =
            serde_json::from_str(r#"{"id": 1699999999, "type": "paragraph", "content": "x"}"#)
                .unwrap();

        assert_eq!(block.id().as_str(), "1699999999");
        assert_eq!(serde_json::to_value(&block).unwrap()["id"], json!("1699999999"));
    }

    #[test]
    fn test_deserialize_rejects_non_scalar_id() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "id": {"n": 1},
            "type": "paragraph",
            "content": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let result: Result<Block, _> = serde_json::from_value(json!({
            "id": "x",
            "type": "table",
            "content": ""
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_quote_author() {
        let text = r#"{"id":"q","type":"quote","content":"Be brief.","settings":{"author":"Anon"}}"#;
        let block: Block = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&block).unwrap(), text);
    }
}
