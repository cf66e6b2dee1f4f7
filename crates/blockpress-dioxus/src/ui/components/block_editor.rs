use crate::ui::components::{
    BlockTypePicker, ConfirmDialog, DocumentPreview, EditorBlock, EmptyDocument,
};
use blockpress_engine::editing::{BlockPatch, Confirmation, Editor, MoveDirection, ViewMode};
use blockpress_engine::models::{Block, BlockId, BlockType};
use dioxus::prelude::*;

/// The block editor for one document
///
/// `initial_blocks` seeds the editor once; afterwards the editor owns the
/// sequence and hands every new version to `on_change`. Give the component
/// a key per document so switching documents starts a fresh editor.
#[component]
pub fn BlockEditor(
    initial_blocks: Vec<Block>,
    on_change: Callback<Vec<Block>>,
    #[props(default)] start_in_preview: bool,
) -> Element {
    let mut editor = use_signal(|| {
        let mut editor = Editor::new(initial_blocks.clone(), move |blocks: &[Block]| {
            on_change.call(blocks.to_vec())
        });
        if start_in_preview {
            editor.set_mode(ViewMode::Preview);
        }
        editor
    });

    let on_update = Callback::new(move |(id, patch): (BlockId, BlockPatch)| {
        if let Err(e) = editor.write().update_block(&id, patch) {
            log::warn!("rejected edit: {e}");
        }
    });
    let on_move = Callback::new(move |(index, direction): (usize, MoveDirection)| {
        editor.write().move_block(index, direction);
    });
    let on_delete = Callback::new(move |id: BlockId| {
        editor.write().request_delete(&id);
    });

    let state = editor.read();
    let mode = state.mode();
    let picker_open = state.is_picker_open();
    let blocks = state.blocks().to_vec();
    let rendered = if state.is_preview() { state.preview() } else { Vec::new() };
    let prompt = state.pending_delete().map(|request| request.prompt().to_string());
    drop(state);

    let block_count = blocks.len();
    let is_empty = blocks.is_empty();
    let mode_buttons = [(ViewMode::Edit, "Edit"), (ViewMode::Preview, "Preview")].map(|(m, label)| {
        let class = if m == mode { "mode-button active" } else { "mode-button" };
        (m, label, class)
    });

    rsx! {
        div {
            class: "block-editor",
            div {
                class: "editor-toolbar",
                for (target, label, class) in mode_buttons {
                    button {
                        class: "{class}",
                        onclick: move |_| editor.write().set_mode(target),
                        "{label}"
                    }
                }
            }
            if mode == ViewMode::Preview {
                if is_empty {
                    EmptyDocument {}
                } else {
                    DocumentPreview { blocks: rendered }
                }
            } else {
                div {
                    class: "editor-blocks",
                    if is_empty {
                        EmptyDocument {}
                    }
                    for (index, key, block) in blocks.into_iter().enumerate().map(|(i, b)| (i, b.id().to_string(), b)) {
                        EditorBlock {
                            key: "{key}",
                            block,
                            index,
                            is_last: index + 1 == block_count,
                            on_update,
                            on_move,
                            on_delete,
                        }
                    }
                    BlockTypePicker {
                        open: picker_open,
                        on_toggle: move |_| editor.write().toggle_picker(),
                        on_select: move |block_type: BlockType| {
                            editor.write().add_block(block_type);
                        },
                    }
                }
            }
            if let Some(message) = prompt {
                ConfirmDialog {
                    message,
                    on_answer: move |confirmed: bool| {
                        editor.write().resolve_pending_delete(Confirmation::from(confirmed));
                    },
                }
            }
        }
    }
}
