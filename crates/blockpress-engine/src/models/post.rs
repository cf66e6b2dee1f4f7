use serde::{Deserialize, Serialize};

use crate::models::Block;

/// A titled block document as persisted in one post file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Post {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }
}
