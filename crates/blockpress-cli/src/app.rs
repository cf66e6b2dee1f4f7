use anyhow::Result;
use blockpress_engine::editing::{Confirmation, Editor, MoveDirection};
use blockpress_engine::models::{Block, BlockSettings, BlockType, Post, PostFile};
use blockpress_engine::render::RenderBlock;
use blockpress_engine::io;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Posts,
    Blocks,
}

pub struct App {
    posts_path: PathBuf,
    pub posts: Vec<PostFile>,
    pub post_list_state: ListState,
    pub editor: Option<Editor>,
    pub block_list_state: ListState,
    pub focus: Focus,
    /// Last save or load failure, shown in the help bar
    pub status: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(posts_path: PathBuf) -> Result<Self> {
        let posts = io::scan_posts(&posts_path)?;

        let mut app = Self {
            posts_path,
            posts,
            post_list_state: ListState::default(),
            editor: None,
            block_list_state: ListState::default(),
            focus: Focus::Posts,
            status: Rc::new(RefCell::new(None)),
        };

        if !app.posts.is_empty() {
            app.post_list_state.select(Some(0));
            app.open_selected_post();
        }

        Ok(app)
    }

    /// Apply one key press; returns `false` when the app should quit
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if let Some(editor) = self.editor.as_mut() {
            if editor.pending_delete().is_some() {
                match code {
                    KeyCode::Char('y') => {
                        editor.resolve_pending_delete(Confirmation::Confirmed);
                        self.clamp_block_selection();
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        editor.resolve_pending_delete(Confirmation::Declined);
                    }
                    _ => {}
                }
                return true;
            }

            if editor.is_picker_open() {
                match code {
                    KeyCode::Char(c @ '1'..='7') => {
                        let index = c as usize - '1' as usize;
                        editor.add_block(BlockType::ALL[index]);
                        let last = editor.blocks().len() - 1;
                        self.block_list_state.select(Some(last));
                        self.focus = Focus::Blocks;
                    }
                    KeyCode::Esc | KeyCode::Char('a') => editor.set_picker_open(false),
                    _ => {}
                }
                return true;
            }
        }

        // Preview is read-only: only navigation and the mode toggle apply
        let read_only = self.editor.as_ref().is_some_and(|editor| editor.is_preview());

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('J') if !read_only => self.move_selected_block(MoveDirection::Down),
            KeyCode::Char('K') if !read_only => self.move_selected_block(MoveDirection::Up),
            KeyCode::Char('a') if !read_only => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.toggle_picker();
                }
            }
            KeyCode::Char('d') if !read_only => self.request_delete_selected(),
            KeyCode::Char('p') => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.toggle_mode();
                }
            }
            _ => {}
        }
        true
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Posts if self.editor.is_some() => Focus::Blocks,
            _ => Focus::Posts,
        };
    }

    fn next(&mut self) {
        match self.focus {
            Focus::Posts => {
                if self.posts.is_empty() {
                    return;
                }
                let i = match self.post_list_state.selected() {
                    Some(i) => (i + 1) % self.posts.len(),
                    None => 0,
                };
                self.post_list_state.select(Some(i));
                self.open_selected_post();
            }
            Focus::Blocks => {
                let len = self.block_count();
                if len == 0 {
                    return;
                }
                let i = match self.block_list_state.selected() {
                    Some(i) => (i + 1).min(len - 1),
                    None => 0,
                };
                self.block_list_state.select(Some(i));
            }
        }
    }

    fn previous(&mut self) {
        match self.focus {
            Focus::Posts => {
                if self.posts.is_empty() {
                    return;
                }
                let i = match self.post_list_state.selected() {
                    Some(0) | None => self.posts.len() - 1,
                    Some(i) => i - 1,
                };
                self.post_list_state.select(Some(i));
                self.open_selected_post();
            }
            Focus::Blocks => {
                if self.block_count() == 0 {
                    return;
                }
                let i = self.block_list_state.selected().unwrap_or(0).saturating_sub(1);
                self.block_list_state.select(Some(i));
            }
        }
    }

    fn block_count(&self) -> usize {
        self.editor.as_ref().map_or(0, |editor| editor.blocks().len())
    }

    fn open_selected_post(&mut self) {
        let Some(file) = self
            .post_list_state
            .selected()
            .and_then(|index| self.posts.get(index))
            .cloned()
        else {
            return;
        };

        match io::read_post(file.relative_path(), &self.posts_path) {
            Ok(post) => {
                let writer = PostWriter {
                    posts_path: self.posts_path.clone(),
                    file,
                    title: post.title,
                    status: self.status.clone(),
                };
                let editor = Editor::new(post.blocks, move |blocks: &[Block]| writer.save(blocks));
                let first = (!editor.blocks().is_empty()).then_some(0);
                self.block_list_state.select(first);
                self.editor = Some(editor);
                *self.status.borrow_mut() = None;
            }
            Err(e) => {
                log::error!("Error reading post {}: {e}", file.relative_path());
                *self.status.borrow_mut() = Some(format!("Error reading post: {e}"));
                self.editor = None;
                self.block_list_state.select(None);
            }
        }
    }

    fn move_selected_block(&mut self, direction: MoveDirection) {
        let (Some(editor), Some(index)) = (self.editor.as_mut(), self.block_list_state.selected())
        else {
            return;
        };
        let len = editor.blocks().len();
        editor.move_block(index, direction);

        let followed = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < len => index + 1,
            _ => index,
        };
        self.block_list_state.select(Some(followed));
    }

    fn request_delete_selected(&mut self) {
        let (Some(editor), Some(index)) = (self.editor.as_mut(), self.block_list_state.selected())
        else {
            return;
        };
        if let Some(id) = editor.blocks().get(index).map(|block| block.id().clone()) {
            editor.request_delete(&id);
        }
    }

    fn clamp_block_selection(&mut self) {
        let len = self.block_count();
        let selected = match self.block_list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.block_list_state.select(selected);
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.post_list_state
            .selected()
            .and_then(|index| self.posts.get(index))
            .map(|file| file.display_name())
    }
}

/// Change listener target: writes every new block sequence back to its post file
struct PostWriter {
    posts_path: PathBuf,
    file: PostFile,
    title: String,
    status: Rc<RefCell<Option<String>>>,
}

impl PostWriter {
    fn save(&self, blocks: &[Block]) {
        let post = Post {
            title: self.title.clone(),
            blocks: blocks.to_vec(),
        };
        match io::write_post(self.file.relative_path(), &self.posts_path, &post) {
            Ok(()) => *self.status.borrow_mut() = None,
            Err(e) => {
                log::error!("Error saving post {}: {e}", self.file.relative_path());
                *self.status.borrow_mut() = Some(format!("Error saving post: {e}"));
            }
        }
    }
}

/// One-line summary of a block for the edit pane
pub fn block_summary(block: &Block) -> String {
    let first_line = block.content.lines().next().unwrap_or_default();
    let detail = match block.settings() {
        BlockSettings::Heading(settings) => format!("{} {first_line}", settings.level.tag()),
        BlockSettings::Image(settings) => settings.url.clone(),
        BlockSettings::Video(settings) => settings.url.clone(),
        BlockSettings::List(settings) => {
            let kind = if settings.ordered { "numbered" } else { "bulleted" };
            format!("{kind}: {first_line}")
        }
        _ => first_line.to_string(),
    };
    format!("{:<10} {detail}", block.block_type().label())
}

/// Plain-text rendering of the preview for the terminal
pub fn preview_lines(blocks: &[RenderBlock]) -> Vec<String> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            RenderBlock::Paragraph { text, .. } => lines.extend(text.lines().map(str::to_string)),
            RenderBlock::Heading { text, level, .. } => {
                let prefix = "#".repeat(level.rank() as usize);
                lines.push(format!("{prefix} {text}"));
            }
            RenderBlock::Figure {
                url, alt, caption, ..
            } => {
                lines.push(format!("[image: {alt}] {url}"));
                if let Some(caption) = caption {
                    lines.push(format!("  {caption}"));
                }
            }
            RenderBlock::Video { embed_url, .. } => lines.push(format!("[video] {embed_url}")),
            RenderBlock::Quote { text, author, .. } => {
                lines.extend(text.lines().map(|line| format!("> {line}")));
                if let Some(author) = author {
                    lines.push(format!("  — {author}"));
                }
            }
            RenderBlock::List { ordered, items, .. } => {
                for (n, item) in items.iter().enumerate() {
                    if *ordered {
                        lines.push(format!("{}. {item}", n + 1));
                    } else {
                        lines.push(format!("• {item}"));
                    }
                }
            }
            RenderBlock::Code { code, .. } => {
                lines.push("```".to_string());
                lines.extend(code.lines().map(str::to_string));
                lines.push("```".to_string());
            }
        }
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_engine::models::{BlockId, HeadingLevel, TextSize};
    use pretty_assertions::assert_eq;
    use relative_path::RelativePath;
    use tempfile::TempDir;

    const POST: &str = r#"{
      "title": "Launch",
      "blocks": [
        {"id": "1", "type": "heading", "content": "Big news", "settings": {"level": "h1"}},
        {"id": "2", "type": "paragraph", "content": "Details", "settings": {}}
      ]
    }"#;

    fn posts_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("launch.json"), POST).unwrap();
        dir
    }

    fn saved_ids(dir: &TempDir) -> Vec<String> {
        let post = io::read_post(RelativePath::new("launch.json"), dir.path()).unwrap();
        post.blocks.iter().map(|b| b.id().to_string()).collect()
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_opens_first_post() {
        let dir = posts_dir();
        let app = App::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(app.selected_title(), Some("launch"));
        assert_eq!(app.editor.as_ref().unwrap().blocks().len(), 2);
        assert_eq!(app.block_list_state.selected(), Some(0));
    }

    #[test]
    fn test_move_is_saved_and_selection_follows() {
        let dir = posts_dir();
        let mut app = App::new(dir.path().to_path_buf()).unwrap();

        app.handle_key(KeyCode::Tab);
        press(&mut app, "J");

        assert_eq!(app.block_list_state.selected(), Some(1));
        assert_eq!(saved_ids(&dir), vec!["2", "1"]);
    }

    #[test]
    fn test_add_block_through_picker() {
        let dir = posts_dir();
        let mut app = App::new(dir.path().to_path_buf()).unwrap();

        press(&mut app, "a7");

        let editor = app.editor.as_ref().unwrap();
        assert!(!editor.is_picker_open());
        assert_eq!(editor.blocks()[2].block_type(), BlockType::Code);
        assert_eq!(app.block_list_state.selected(), Some(2));
        assert_eq!(saved_ids(&dir).len(), 3);
    }

    #[test]
    fn test_delete_waits_for_confirmation() {
        let dir = posts_dir();
        let mut app = App::new(dir.path().to_path_buf()).unwrap();
        app.handle_key(KeyCode::Tab);

        press(&mut app, "dn");
        assert_eq!(app.editor.as_ref().unwrap().blocks().len(), 2);

        // Quit is swallowed while the question is open
        press(&mut app, "d");
        assert!(app.handle_key(KeyCode::Char('q')));
        press(&mut app, "y");

        assert_eq!(saved_ids(&dir), vec!["2"]);
        assert_eq!(app.block_list_state.selected(), Some(0));
    }

    #[test]
    fn test_preview_ignores_editing_keys() {
        let dir = posts_dir();
        let mut app = App::new(dir.path().to_path_buf()).unwrap();
        app.handle_key(KeyCode::Tab);

        press(&mut app, "pJ");
        press(&mut app, "a3");
        press(&mut app, "dy");

        let editor = app.editor.as_ref().unwrap();
        assert!(editor.is_preview());
        assert!(!editor.is_picker_open());
        assert!(editor.pending_delete().is_none());
        assert_eq!(editor.blocks().len(), 2);
        let saved = std::fs::read_to_string(dir.path().join("launch.json")).unwrap();
        assert_eq!(saved, POST);

        // Back in edit mode the same keys apply again
        press(&mut app, "pJ");
        assert_eq!(saved_ids(&dir), vec!["2", "1"]);
    }

    #[test]
    fn test_quit() {
        let dir = posts_dir();
        let mut app = App::new(dir.path().to_path_buf()).unwrap();
        assert!(!app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn test_block_summary() {
        let dir = posts_dir();
        let app = App::new(dir.path().to_path_buf()).unwrap();
        let blocks = app.editor.as_ref().unwrap().blocks();

        assert_eq!(block_summary(&blocks[0]), "Heading    h1 Big news");
    }

    #[test]
    fn test_preview_lines() {
        let lines = preview_lines(&[
            RenderBlock::Heading {
                id: BlockId::from("h"),
                text: "Deals".to_string(),
                level: HeadingLevel::H3,
                size: TextSize::Normal,
            },
            RenderBlock::List {
                id: BlockId::from("l"),
                ordered: true,
                items: vec!["Shoes".to_string(), "Hats".to_string()],
            },
        ]);

        assert_eq!(lines, vec!["### Deals", "", "1. Shoes", "2. Hats", ""]);
    }
}
