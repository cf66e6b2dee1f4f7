/*!
 * # Block editing core
 *
 * The editing model is a flat, ordered sequence of typed blocks.
 *
 * - **`document`**: [`BlockDocument`], the sequence and its structural
 *   operations (add, update, move, remove)
 * - **`patch`**: [`BlockPatch`], partial updates merged into one block
 * - **`confirm`**: the request/response protocol that gates deletion
 * - **`editor`**: [`Editor`], the document plus view mode, type-picker
 *   state, the pending delete request and change notification
 *
 * ## Usage Pattern
 *
 * ```rust
 * use blockpress_engine::editing::*;
 * use blockpress_engine::models::BlockType;
 *
 * // 1. Seed the editor from stored blocks and tell it where changes go
 * let mut editor = Editor::new(Vec::new(), |blocks| {
 *     // persist `blocks` here
 *     let _ = blocks.len();
 * });
 *
 * // 2. Edit
 * let id = editor.add_block(BlockType::Paragraph);
 * editor.update_block(&id, BlockPatch::content("Hi there")).unwrap();
 *
 * // 3. Deletion goes through a confirmation round-trip
 * let request = editor.request_delete(&id).unwrap();
 * editor.resolve_delete(&request, Confirmation::Declined);
 * assert_eq!(editor.blocks().len(), 1);
 * ```
 */

pub mod confirm;
pub mod document;
pub mod editor;
pub mod patch;

pub use confirm::{Confirmation, DeleteRequest};
pub use document::{BlockDocument, MoveDirection};
pub use editor::{ChangeListener, Editor, ViewMode};
pub use patch::BlockPatch;

use crate::models::{BlockId, BlockType};

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("block {id} is a {block_type} block and has no `{setting}` setting")]
    SettingMismatch {
        id: BlockId,
        block_type: BlockType,
        setting: &'static str,
    },
}
