use crate::models::SettingChange;

/// Partial update merged into one block
///
/// A patch cannot name a block type; the type is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPatch {
    /// Replacement content, if any
    pub content: Option<String>,
    /// Setting values to merge, applied in order
    pub settings: Vec<SettingChange>,
}

impl BlockPatch {
    /// Patch that only replaces the content
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            settings: Vec::new(),
        }
    }

    /// Patch that only merges one setting
    pub fn setting(change: SettingChange) -> Self {
        Self {
            content: None,
            settings: vec![change],
        }
    }

    pub fn with_content(mut self, text: impl Into<String>) -> Self {
        self.content = Some(text.into());
        self
    }

    pub fn with_setting(mut self, change: SettingChange) -> Self {
        self.settings.push(change);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.settings.is_empty()
    }
}
