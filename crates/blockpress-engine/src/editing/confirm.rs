use crate::models::BlockId;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this block?";

/// A question put to the user before a block is deleted
///
/// The editor hands one of these out and keeps a copy; the UI shows
/// [`prompt`](Self::prompt) and answers with
/// [`Editor::resolve_delete`](crate::editing::Editor::resolve_delete).
/// Only the most recent request is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub(crate) ticket: u64,
    pub(crate) block_id: BlockId,
}

impl DeleteRequest {
    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn prompt(&self) -> &'static str {
        DELETE_PROMPT
    }
}

/// The user's answer to a [`DeleteRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}
