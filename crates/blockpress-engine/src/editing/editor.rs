use std::fmt;

use crate::editing::{
    BlockDocument, BlockPatch, Confirmation, DeleteRequest, EditError, MoveDirection,
};
use crate::models::{Block, BlockId, BlockType};
use crate::render::{RenderBlock, render_blocks};

/// Listener invoked with the full block sequence after every mutation
pub type ChangeListener = Box<dyn FnMut(&[Block])>;

/// Which of the two views the editor is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

/// Block editor state: the document plus transient UI state
///
/// The editor owns the block sequence for as long as its owner keeps it
/// alive. After every mutation that changes the sequence it calls the
/// change listener synchronously with the whole sequence; the listener
/// only borrows it, so it cannot mutate the editor from inside the call.
/// Persisting what the listener receives is the owner's job.
///
/// ```rust
/// # use blockpress_engine::editing::{BlockPatch, Editor, ViewMode};
/// # use blockpress_engine::models::BlockType;
/// let mut editor = Editor::new(Vec::new(), |blocks| println!("{} blocks", blocks.len()));
/// let id = editor.add_block(BlockType::Heading);
/// editor.update_block(&id, BlockPatch::content("Hello")).unwrap();
/// editor.set_mode(ViewMode::Preview);
/// assert_eq!(editor.preview().len(), 1);
/// ```
pub struct Editor {
    document: BlockDocument,
    mode: ViewMode,
    picker_open: bool,
    pending_delete: Option<DeleteRequest>,
    next_ticket: u64,
    on_change: ChangeListener,
}

impl Editor {
    pub fn new(initial_blocks: Vec<Block>, on_change: impl FnMut(&[Block]) + 'static) -> Self {
        Self {
            document: BlockDocument::new(initial_blocks),
            mode: ViewMode::default(),
            picker_open: false,
            pending_delete: None,
            next_ticket: 0,
            on_change: Box::new(on_change),
        }
    }

    pub fn document(&self) -> &BlockDocument {
        &self.document
    }

    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Edit => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Edit,
        };
    }

    pub fn is_preview(&self) -> bool {
        self.mode == ViewMode::Preview
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn set_picker_open(&mut self, open: bool) {
        self.picker_open = open;
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Append a new block of `block_type`, close the type picker and notify
    pub fn add_block(&mut self, block_type: BlockType) -> BlockId {
        let id = self.document.add_block(block_type).id().clone();
        self.picker_open = false;
        self.notify();
        id
    }

    /// Merge `patch` into the block with `id`; unknown ids are ignored
    pub fn update_block(&mut self, id: &BlockId, patch: BlockPatch) -> Result<(), EditError> {
        if self.document.update_block(id, patch)? {
            self.notify();
        }
        Ok(())
    }

    /// Swap the block at `index` with its neighbour; out-of-range moves are ignored
    pub fn move_block(&mut self, index: usize, direction: MoveDirection) {
        if self.document.move_block(index, direction) {
            self.notify();
        }
    }

    /// Ask for confirmation before deleting the block with `id`
    ///
    /// Returns `None` when no such block exists. A new request supersedes
    /// any unanswered one.
    pub fn request_delete(&mut self, id: &BlockId) -> Option<DeleteRequest> {
        self.document.get(id)?;

        self.next_ticket += 1;
        let request = DeleteRequest {
            ticket: self.next_ticket,
            block_id: id.clone(),
        };
        self.pending_delete = Some(request.clone());
        Some(request)
    }

    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    /// Answer a delete request
    ///
    /// Stale requests (superseded or already answered) are ignored.
    /// Declining clears the request and changes nothing else. Confirming
    /// removes the block if it still exists, notifies, and returns it.
    pub fn resolve_delete(&mut self, request: &DeleteRequest, answer: Confirmation) -> Option<Block> {
        if self.pending_delete.as_ref() != Some(request) {
            log::warn!("ignoring stale delete confirmation for block {}", request.block_id);
            return None;
        }
        self.pending_delete = None;

        match answer {
            Confirmation::Declined => None,
            Confirmation::Confirmed => {
                let removed = self.document.remove_block(&request.block_id)?;
                self.notify();
                Some(removed)
            }
        }
    }

    /// Answer whatever request is currently pending
    pub fn resolve_pending_delete(&mut self, answer: Confirmation) -> Option<Block> {
        let request = self.pending_delete.clone()?;
        self.resolve_delete(&request, answer)
    }

    /// Read-only rendering of the current sequence
    pub fn preview(&self) -> Vec<RenderBlock> {
        render_blocks(self.document.blocks())
    }

    fn notify(&mut self) {
        (self.on_change)(self.document.blocks());
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("document", &self.document)
            .field("mode", &self.mode)
            .field("picker_open", &self.picker_open)
            .field("pending_delete", &self.pending_delete)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockSettings, HeadingLevel, HeadingSettings, TextSize};
    use crate::tests::{block_ids, sample_blocks};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Editor that records every sequence it is notified with
    fn recording_editor(initial: Vec<Block>) -> (Editor, Rc<RefCell<Vec<Vec<Block>>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let editor = Editor::new(initial, move |blocks: &[Block]| {
            sink.borrow_mut().push(blocks.to_vec());
        });
        (editor, calls)
    }

    #[test]
    fn test_add_notifies_with_full_sequence_and_closes_picker() {
        let (mut editor, calls) = recording_editor(sample_blocks());
        editor.set_picker_open(true);

        let id = editor.add_block(BlockType::Quote);

        assert!(!editor.is_picker_open());
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 5);
        assert_eq!(calls[0].last().unwrap().id(), &id);
    }

    #[test]
    fn test_heading_scenario() {
        let (mut editor, calls) = recording_editor(Vec::new());

        let id = editor.add_block(BlockType::Heading);
        assert_eq!(editor.blocks().len(), 1);
        assert_eq!(
            editor.blocks()[0].settings(),
            &BlockSettings::Heading(HeadingSettings {
                level: HeadingLevel::H2,
                size: TextSize::Normal,
            })
        );

        editor.update_block(&id, BlockPatch::content("Hello")).unwrap();
        assert_eq!(editor.blocks()[0].content, "Hello");

        editor.toggle_mode();
        assert!(editor.is_preview());
        assert_eq!(
            editor.preview(),
            vec![RenderBlock::Heading {
                id: id.clone(),
                text: "Hello".to_string(),
                level: HeadingLevel::H2,
                size: TextSize::Normal,
            }]
        );
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let (mut editor, calls) = recording_editor(sample_blocks());

        editor
            .update_block(&BlockId::from("nope"), BlockPatch::content("x"))
            .unwrap();
        editor.move_block(0, MoveDirection::Up);
        editor.move_block(3, MoveDirection::Down);

        assert!(calls.borrow().is_empty());
        assert_eq!(block_ids(editor.blocks()), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_move_notifies_new_order() {
        let (mut editor, calls) = recording_editor(sample_blocks());

        editor.move_block(2, MoveDirection::Up);

        assert_eq!(block_ids(&calls.borrow()[0]), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_confirmed_delete_removes_block() {
        let (mut editor, calls) = recording_editor(sample_blocks());

        let request = editor.request_delete(&BlockId::from("c")).unwrap();
        assert_eq!(request.prompt(), crate::editing::confirm::DELETE_PROMPT);
        assert!(calls.borrow().is_empty());

        let removed = editor.resolve_delete(&request, Confirmation::Confirmed);

        assert_eq!(removed.unwrap().id().as_str(), "c");
        assert_eq!(block_ids(editor.blocks()), vec!["a", "b", "d"]);
        assert!(editor.pending_delete().is_none());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let (mut editor, calls) = recording_editor(sample_blocks());
        let before = editor.blocks().to_vec();

        let request = editor.request_delete(&BlockId::from("a")).unwrap();
        assert!(editor.resolve_delete(&request, Confirmation::Declined).is_none());

        assert_eq!(editor.blocks(), &before[..]);
        assert!(editor.pending_delete().is_none());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_stale_request_is_ignored() {
        let (mut editor, _calls) = recording_editor(sample_blocks());

        let first = editor.request_delete(&BlockId::from("a")).unwrap();
        let second = editor.request_delete(&BlockId::from("b")).unwrap();

        assert!(editor.resolve_delete(&first, Confirmation::Confirmed).is_none());
        assert_eq!(editor.blocks().len(), 4);
        assert_eq!(editor.pending_delete(), Some(&second));

        assert!(editor.resolve_delete(&second, Confirmation::Confirmed).is_some());
        // Answering twice does nothing the second time
        assert!(editor.resolve_delete(&second, Confirmation::Confirmed).is_none());
        assert_eq!(block_ids(editor.blocks()), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_request_delete_unknown_block() {
        let (mut editor, _calls) = recording_editor(sample_blocks());
        assert!(editor.request_delete(&BlockId::from("zz")).is_none());
        assert!(editor.pending_delete().is_none());
    }

    #[test]
    fn test_deleted_block_cannot_be_requested_again() {
        let (mut editor, calls) = recording_editor(sample_blocks());
        let request = editor.request_delete(&BlockId::from("d")).unwrap();
        editor.resolve_pending_delete(Confirmation::Confirmed);
        assert_eq!(calls.borrow().len(), 1);

        // The same id requested again after it is gone
        assert!(editor.request_delete(request.block_id()).is_none());
    }
}
