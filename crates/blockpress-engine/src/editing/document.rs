use std::collections::HashSet;

use crate::editing::{BlockPatch, EditError};
use crate::models::{Block, BlockId, BlockType};

/// Direction for swapping a block with its neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Index of the neighbour of `index`, if it is inside `len`
    fn neighbour(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            MoveDirection::Up => index.checked_sub(1)?,
            MoveDirection::Down => index.checked_add(1)?,
        };
        (index < len && target < len).then_some(target)
    }
}

/// Ordered sequence of blocks with structural edit operations
///
/// Order is render order. Block ids are unique within a document; a
/// sequence loaded with duplicate ids has the later duplicates re-keyed.
/// The document does no I/O and no change notification; see
/// [`Editor`](crate::editing::Editor) for the owner-facing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDocument {
    blocks: Vec<Block>,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut seen = HashSet::with_capacity(blocks.len());
        let mut blocks = blocks;

        for block in blocks.iter_mut() {
            if !seen.insert(block.id().clone()) {
                let fresh = fresh_id(&seen);
                log::warn!(
                    "duplicate block id {} in loaded document, re-keyed as {fresh}",
                    block.id()
                );
                seen.insert(fresh.clone());
                block.reassign_id(fresh);
            }
        }

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    /// Append a new block of `block_type` with default settings
    pub fn add_block(&mut self, block_type: BlockType) -> &Block {
        let mut block = Block::new(block_type);
        while self.get(block.id()).is_some() {
            block.reassign_id(BlockId::new());
        }

        log::debug!("add {block_type} block {}", block.id());
        self.blocks.push(block);
        &self.blocks[self.blocks.len() - 1]
    }

    /// Merge `patch` into the block with `id`
    ///
    /// Returns `Ok(false)` when no block has that id: an edit racing with a
    /// delete of the same block is tolerated. Setting changes are checked
    /// against the block type before anything is written, so a mismatched
    /// patch leaves the block untouched.
    pub fn update_block(&mut self, id: &BlockId, patch: BlockPatch) -> Result<bool, EditError> {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id() == id) else {
            log::debug!("update ignored, no block {id}");
            return Ok(false);
        };

        if let Some(change) = patch.settings.iter().find(|c| !block.settings.accepts(c)) {
            return Err(EditError::SettingMismatch {
                id: id.clone(),
                block_type: block.block_type(),
                setting: change.name(),
            });
        }

        if let Some(content) = patch.content {
            block.content = content;
        }
        for change in patch.settings {
            block.settings.apply(change);
        }

        log::debug!("updated block {id}");
        Ok(true)
    }

    /// Swap the block at `index` with its neighbour in `direction`
    ///
    /// Moving the first block up or the last block down is a no-op and
    /// returns false.
    pub fn move_block(&mut self, index: usize, direction: MoveDirection) -> bool {
        let Some(target) = direction.neighbour(index, self.blocks.len()) else {
            return false;
        };

        self.blocks.swap(index, target);
        log::debug!("moved block {index} -> {target}");
        true
    }

    /// Remove the block with `id` without asking anyone
    pub fn remove_block(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.position(id)?;
        log::debug!("removed block {id}");
        Some(self.blocks.remove(index))
    }
}

impl From<Vec<Block>> for BlockDocument {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

fn fresh_id(taken: &HashSet<BlockId>) -> BlockId {
    loop {
        let id = BlockId::new();
        if !taken.contains(&id) {
            return id;
        }
    }
}
