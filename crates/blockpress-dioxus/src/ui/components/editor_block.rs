use crate::ui::components::{
    CodeEditor, HeadingEditor, ImageEditor, ListEditor, ParagraphEditor, QuoteEditor, VideoEditor,
};
use blockpress_engine::editing::{BlockPatch, MoveDirection};
use blockpress_engine::models::{Block, BlockId, BlockSettings};
use dioxus::prelude::*;

/// One block in the edit view: the input surface for its type plus
/// move and delete controls
#[component]
pub fn EditorBlock(
    block: Block,
    index: usize,
    is_last: bool,
    on_update: Callback<(BlockId, BlockPatch)>,
    on_move: Callback<(usize, MoveDirection)>,
    on_delete: Callback<BlockId>,
) -> Element {
    let id = block.id().clone();
    let type_label = block.block_type().label();
    let block_type = block.block_type().as_str();
    let content = block.content.clone();

    let on_patch = {
        let id = id.clone();
        Callback::new(move |patch: BlockPatch| on_update.call((id.clone(), patch)))
    };

    let fields = match block.settings().clone() {
        BlockSettings::Paragraph(settings) => rsx! { ParagraphEditor { content, settings, on_patch } },
        BlockSettings::Heading(settings) => rsx! { HeadingEditor { content, settings, on_patch } },
        BlockSettings::Image(settings) => rsx! { ImageEditor { settings, on_patch } },
        BlockSettings::Video(settings) => rsx! { VideoEditor { settings, on_patch } },
        BlockSettings::Quote(settings) => rsx! { QuoteEditor { content, settings, on_patch } },
        BlockSettings::List(settings) => rsx! { ListEditor { content, settings, on_patch } },
        BlockSettings::Code(_) => rsx! { CodeEditor { content, on_patch } },
    };

    rsx! {
        div {
            class: "editor-block block-{block_type}",
            div {
                class: "block-controls",
                span { class: "block-type-label", "{type_label}" }
                button {
                    class: "move-up",
                    title: "Move up",
                    disabled: index == 0,
                    onclick: move |_| on_move.call((index, MoveDirection::Up)),
                    "↑"
                }
                button {
                    class: "move-down",
                    title: "Move down",
                    disabled: is_last,
                    onclick: move |_| on_move.call((index, MoveDirection::Down)),
                    "↓"
                }
                button {
                    class: "delete-block",
                    title: "Delete block",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
            {fields}
        }
    }
}
