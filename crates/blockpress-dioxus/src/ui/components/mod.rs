pub mod block_editor;
pub mod block_quote;
pub mod block_type_picker;
pub mod code_editor;
pub mod code_fence;
pub mod confirm_dialog;
pub mod document_preview;
pub mod editor_block;
pub mod empty_document;
pub mod error_screen;
pub mod figure;
pub mod form_controls;
pub mod heading;
pub mod heading_editor;
pub mod image_editor;
pub mod list_component;
pub mod list_editor;
pub mod paragraph;
pub mod paragraph_editor;
pub mod post_list;
pub mod quote_editor;
pub mod setup_screen;
pub mod video_editor;
pub mod video_embed;

pub use block_editor::BlockEditor;
pub use block_quote::BlockQuote;
pub use block_type_picker::BlockTypePicker;
pub use code_editor::CodeEditor;
pub use code_fence::CodeFence;
pub use confirm_dialog::ConfirmDialog;
pub use document_preview::{DocumentPreview, PreviewBlock};
pub use editor_block::EditorBlock;
pub use empty_document::EmptyDocument;
pub use error_screen::ErrorScreen;
pub use figure::Figure;
pub use heading::Heading;
pub use heading_editor::HeadingEditor;
pub use image_editor::ImageEditor;
pub use list_component::ListComponent;
pub use list_editor::ListEditor;
pub use paragraph::Paragraph;
pub use paragraph_editor::ParagraphEditor;
pub use post_list::PostList;
pub use quote_editor::QuoteEditor;
pub use setup_screen::SetupScreen;
pub use video_editor::VideoEditor;
pub use video_embed::VideoEmbed;
