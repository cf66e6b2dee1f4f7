use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::BlockType;

/// Relative text size for paragraphs and headings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl TextSize {
    pub const ALL: [TextSize; 3] = [TextSize::Small, TextSize::Normal, TextSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Normal => "normal",
            TextSize::Large => "large",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

/// Heading rank, `h1` through `h6`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Numeric rank, 1 for `h1`
    pub fn rank(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// HTML tag name for this rank
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.tag() == value)
    }
}

/// Named width preset for images and videos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

impl MediaSize {
    pub const ALL: [MediaSize; 4] = [
        MediaSize::Small,
        MediaSize::Medium,
        MediaSize::Large,
        MediaSize::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSize::Small => "small",
            MediaSize::Medium => "medium",
            MediaSize::Large => "large",
            MediaSize::Full => "full",
        }
    }

    /// CSS width the preset renders at
    pub fn css_width(&self) -> &'static str {
        match self {
            MediaSize::Small => "25%",
            MediaSize::Medium => "50%",
            MediaSize::Large => "75%",
            MediaSize::Full => "100%",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphSettings {
    pub size: TextSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSettings {
    pub level: HeadingLevel,
    pub size: TextSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub size: MediaSize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub url: String,
    pub size: MediaSize,
}

/// Quotes start without settings; the author is attached later
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    pub ordered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSettings {}

/// Per-type block settings
///
/// The variant *is* the block's type: a block cannot carry settings that
/// belong to another type, and since nothing replaces the variant after
/// construction the type is fixed for the block's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockSettings {
    Paragraph(ParagraphSettings),
    Heading(HeadingSettings),
    Image(ImageSettings),
    Video(VideoSettings),
    Quote(QuoteSettings),
    List(ListSettings),
    Code(CodeSettings),
}

impl BlockSettings {
    /// Default settings applied once when a block of `block_type` is created
    pub fn defaults_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Paragraph => BlockSettings::Paragraph(ParagraphSettings::default()),
            BlockType::Heading => BlockSettings::Heading(HeadingSettings::default()),
            BlockType::Image => BlockSettings::Image(ImageSettings::default()),
            BlockType::Video => BlockSettings::Video(VideoSettings::default()),
            BlockType::Quote => BlockSettings::Quote(QuoteSettings::default()),
            BlockType::List => BlockSettings::List(ListSettings::default()),
            BlockType::Code => BlockSettings::Code(CodeSettings::default()),
        }
    }

    /// Decode the stored settings object for `block_type`, defaulting missing fields
    pub fn from_value(
        block_type: BlockType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        // Older documents store `null` or nothing at all for setting-less types
        let value = if value.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            value
        };

        Ok(match block_type {
            BlockType::Paragraph => BlockSettings::Paragraph(serde_json::from_value(value)?),
            BlockType::Heading => BlockSettings::Heading(serde_json::from_value(value)?),
            BlockType::Image => BlockSettings::Image(serde_json::from_value(value)?),
            BlockType::Video => BlockSettings::Video(serde_json::from_value(value)?),
            BlockType::Quote => BlockSettings::Quote(serde_json::from_value(value)?),
            BlockType::List => BlockSettings::List(serde_json::from_value(value)?),
            BlockType::Code => BlockSettings::Code(CodeSettings::default()),
        })
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockSettings::Paragraph(_) => BlockType::Paragraph,
            BlockSettings::Heading(_) => BlockType::Heading,
            BlockSettings::Image(_) => BlockType::Image,
            BlockSettings::Video(_) => BlockType::Video,
            BlockSettings::Quote(_) => BlockType::Quote,
            BlockSettings::List(_) => BlockType::List,
            BlockSettings::Code(_) => BlockType::Code,
        }
    }

    /// Whether `change` names a setting this block type has
    pub fn accepts(&self, change: &SettingChange) -> bool {
        matches!(
            (self, change),
            (BlockSettings::Paragraph(_), SettingChange::Size(_))
                | (
                    BlockSettings::Heading(_),
                    SettingChange::Size(_) | SettingChange::Level(_)
                )
                | (
                    BlockSettings::Image(_),
                    SettingChange::Url(_)
                        | SettingChange::Alt(_)
                        | SettingChange::Caption(_)
                        | SettingChange::MediaSize(_)
                )
                | (
                    BlockSettings::Video(_),
                    SettingChange::Url(_) | SettingChange::MediaSize(_)
                )
                | (BlockSettings::Quote(_), SettingChange::Author(_))
                | (BlockSettings::List(_), SettingChange::Ordered(_))
        )
    }

    /// Write `change` into the matching field. Returns false when the
    /// setting does not exist for this type, leaving settings untouched.
    pub(crate) fn apply(&mut self, change: SettingChange) -> bool {
        match (self, change) {
            (BlockSettings::Paragraph(s), SettingChange::Size(size)) => s.size = size,
            (BlockSettings::Heading(s), SettingChange::Size(size)) => s.size = size,
            (BlockSettings::Heading(s), SettingChange::Level(level)) => s.level = level,
            (BlockSettings::Image(s), SettingChange::Url(url)) => s.url = url,
            (BlockSettings::Image(s), SettingChange::Alt(alt)) => s.alt = alt,
            (BlockSettings::Image(s), SettingChange::Caption(caption)) => s.caption = caption,
            (BlockSettings::Image(s), SettingChange::MediaSize(size)) => s.size = size,
            (BlockSettings::Video(s), SettingChange::Url(url)) => s.url = url,
            (BlockSettings::Video(s), SettingChange::MediaSize(size)) => s.size = size,
            (BlockSettings::Quote(s), SettingChange::Author(author)) => s.author = author,
            (BlockSettings::List(s), SettingChange::Ordered(ordered)) => s.ordered = ordered,
            _ => return false,
        }
        true
    }
}

/// A single named setting value to merge into a block's settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    Size(TextSize),
    Level(HeadingLevel),
    Url(String),
    Alt(String),
    Caption(String),
    MediaSize(MediaSize),
    Ordered(bool),
    Author(Option<String>),
}

impl SettingChange {
    /// Name of the setting as it appears in stored documents
    pub fn name(&self) -> &'static str {
        match self {
            SettingChange::Size(_) | SettingChange::MediaSize(_) => "size",
            SettingChange::Level(_) => "level",
            SettingChange::Url(_) => "url",
            SettingChange::Alt(_) => "alt",
            SettingChange::Caption(_) => "caption",
            SettingChange::Ordered(_) => "ordered",
            SettingChange::Author(_) => "author",
        }
    }
}

impl fmt::Display for SettingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
