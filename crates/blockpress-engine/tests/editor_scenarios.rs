//! End-to-end editing scenarios through the public API: load a stored
//! document, edit it, and check what the owner is handed and what the
//! preview shows.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

use blockpress_engine::editing::{BlockPatch, Confirmation, Editor, MoveDirection, ViewMode};
use blockpress_engine::models::{
    Block, BlockSettings, BlockType, HeadingLevel, MediaSize, SettingChange,
};
use blockpress_engine::render::{RenderBlock, html::to_html};

const STORED_POST: &str = r#"[
  {"id": "1", "type": "heading", "content": "Spring launch", "settings": {"level": "h1", "size": "large"}},
  {"id": "2", "type": "paragraph", "content": "Everything is new.", "settings": {"size": "normal"}},
  {"id": "3", "type": "video", "content": "", "settings": {"url": "https://youtube.com/watch?v=XYZ", "size": "full"}},
  {"id": "4", "type": "list", "content": "a\n\nb\n", "settings": {"ordered": false}}
]"#;

fn load() -> Vec<Block> {
    serde_json::from_str(STORED_POST).unwrap()
}

fn editor_with_log(blocks: Vec<Block>) -> (Editor, Rc<RefCell<Vec<String>>>) {
    let saved = Rc::new(RefCell::new(Vec::new()));
    let sink = saved.clone();
    let editor = Editor::new(blocks, move |blocks: &[Block]| {
        sink.borrow_mut()
            .push(serde_json::to_string(blocks).unwrap());
    });
    (editor, saved)
}

#[test]
fn test_stored_document_previews_as_expected() {
    let (editor, _) = editor_with_log(load());

    let html = to_html(&editor.preview());

    assert!(html.contains("<h1 class=\"heading size-large\">Spring launch</h1>"));
    assert!(html.contains("embed/XYZ"));
    assert!(html.contains("<ul class=\"list\"><li>a</li><li>b</li></ul>"));
}

#[test]
fn test_every_mutation_hands_owner_the_whole_document() {
    let (mut editor, saved) = editor_with_log(load());

    let id = editor.add_block(BlockType::Image);
    editor
        .update_block(
            &id,
            BlockPatch::setting(SettingChange::Url("https://cdn.example.com/hero.png".into()))
                .with_setting(SettingChange::MediaSize(MediaSize::Large)),
        )
        .unwrap();
    editor.move_block(4, MoveDirection::Up);
    let request = editor.request_delete(&"2".into()).unwrap();
    editor.resolve_delete(&request, Confirmation::Confirmed);

    let saved = saved.borrow();
    assert_eq!(saved.len(), 4);

    // The last snapshot is the document as it now stands
    let last: Vec<Block> = serde_json::from_str(saved.last().unwrap()).unwrap();
    assert_eq!(last, editor.blocks());
    let ids: Vec<_> = last.iter().map(|b| b.id().as_str().to_string()).collect();
    assert_eq!(ids, vec!["1".to_string(), "3".to_string(), id.to_string(), "4".to_string()]);
}

#[test]
fn test_preview_follows_edits_without_separate_state() {
    let (mut editor, _) = editor_with_log(load());

    editor.set_mode(ViewMode::Preview);
    editor
        .update_block(
            &"1".into(),
            BlockPatch::content("Summer launch").with_setting(SettingChange::Level(HeadingLevel::H3)),
        )
        .unwrap();

    match &editor.preview()[0] {
        RenderBlock::Heading { text, level, .. } => {
            assert_eq!(text, "Summer launch");
            assert_eq!(*level, HeadingLevel::H3);
        }
        other => panic!("expected heading, got {other:?}"),
    }
}

#[test]
fn test_type_cannot_change_through_update() {
    let (mut editor, saved) = editor_with_log(load());

    let result = editor.update_block(&"4".into(), BlockPatch::setting(SettingChange::Level(HeadingLevel::H1)));

    assert!(result.is_err());
    assert_eq!(editor.blocks()[3].block_type(), BlockType::List);
    assert!(matches!(editor.blocks()[3].settings(), BlockSettings::List(_)));
    assert!(saved.borrow().is_empty());
}
