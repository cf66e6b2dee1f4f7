use anyhow::{Context, Result, anyhow};
use blockpress_config::Config;
use blockpress_engine::io;
use blockpress_engine::models::BlockType;
use blockpress_engine::render::{html::to_html, render_blocks};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    fs::{File, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod app;

use app::{App, Focus, block_summary, preview_lines};

/// Print a post file's preview as HTML
fn export(post_path: &Path) -> Result<()> {
    let root = post_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = post_path
        .file_name()
        .ok_or_else(|| anyhow!("not a post file: {}", post_path.display()))?;
    let relative_path = RelativePathBuf::from_path(file_name)?;

    let post = io::read_post(&relative_path, root)
        .with_context(|| format!("exporting {}", post_path.display()))?;
    print!("{}", to_html(&render_blocks(&post.blocks)));
    Ok(())
}

fn open_log_file(log_path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(log_path)
}

/// Send log output to a file; the terminal UI owns stdout and stderr
fn init_logging() {
    let log_path = env::temp_dir().join("blockpress-cli.log");
    let file = match open_log_file(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {e}", log_path.display());
            return;
        }
    };
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = env::args().collect();

    if args.len() == 3 && args[1] == "export" {
        return export(Path::new(&args[2]));
    }
    if args.len() > 2 {
        eprintln!("Usage: {} [posts-folder-path]", args[0]);
        eprintln!("       {} export <post.json>", args[0]);
        process::exit(1);
    }

    let posts_path = match Config::resolve_posts_path(args.get(1).map(PathBuf::from)) {
        Ok(Some(resolved)) => {
            if let Err(e) = io::validate_posts_dir(&resolved.path) {
                eprintln!(
                    "Error: Posts path '{}' from {} is invalid: {e}",
                    resolved.path.display(),
                    resolved.source
                );
                process::exit(1);
            }
            resolved.path
        }
        Ok(None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("Usage: {} <posts-folder-path>", args[0]);
            eprintln!("       {} export <post.json>", args[0]);
            eprintln!(
                "Or create a config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} <posts-folder-path>", args[0]);
            process::exit(1);
        }
    };

    log::info!("Opening posts folder {}", posts_path.display());
    let mut app = App::new(posts_path)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[0]);

    // Post list panel
    let post_items: Vec<ListItem> = app
        .posts
        .iter()
        .map(|post| ListItem::new(Line::from(Span::raw(post.display_name().to_string()))))
        .collect();
    let posts_list = List::new(post_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_style(app.focus == Focus::Posts))
                .title("Posts"),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(posts_list, chunks[0], &mut app.post_list_state);

    // Blocks panel
    let title = app.selected_title().unwrap_or("Blocks").to_string();
    let blocks_border = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_style(app.focus == Focus::Blocks));

    match app.editor.as_ref() {
        None => {
            let empty = Paragraph::new("Select a post to edit its blocks")
                .block(blocks_border.title(title));
            f.render_widget(empty, chunks[1]);
        }
        Some(editor) if editor.is_preview() => {
            let lines: Vec<Line> = preview_lines(&editor.preview())
                .into_iter()
                .map(Line::from)
                .collect();
            let preview = Paragraph::new(lines)
                .block(blocks_border.title(format!("{title} (preview)")))
                .wrap(Wrap { trim: false });
            f.render_widget(preview, chunks[1]);
        }
        Some(editor) if editor.blocks().is_empty() => {
            let empty = Paragraph::new("No content yet. Press a to add a block.")
                .block(blocks_border.title(title));
            f.render_widget(empty, chunks[1]);
        }
        Some(editor) => {
            let block_items: Vec<ListItem> = editor
                .blocks()
                .iter()
                .map(|block| ListItem::new(Line::from(Span::raw(block_summary(block)))))
                .collect();
            let blocks_list = List::new(block_items)
                .block(blocks_border.title(title))
                .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
            f.render_stateful_widget(blocks_list, chunks[1], &mut app.block_list_state);
        }
    }

    // Overlays for the type picker and the delete question
    if let Some(editor) = app.editor.as_ref() {
        if let Some(request) = editor.pending_delete() {
            let area = centered(f.area(), 50, 5);
            let question = Paragraph::new(vec![
                Line::from(request.prompt()),
                Line::from(""),
                Line::from("y: Delete | n: Cancel"),
            ])
            .block(Block::default().borders(Borders::ALL).title("Delete block"));
            f.render_widget(Clear, area);
            f.render_widget(question, area);
        } else if editor.is_picker_open() {
            let lines: Vec<Line> = BlockType::ALL
                .iter()
                .enumerate()
                .map(|(n, block_type)| Line::from(format!("{}: {}", n + 1, block_type.label())))
                .collect();
            let area = centered(f.area(), 30, lines.len() as u16 + 2);
            let picker = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title("Add block"));
            f.render_widget(Clear, area);
            f.render_widget(picker, area);
        }
    }

    // Help bar, or the last error when there is one
    let help_text = match app.status.borrow().as_ref() {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red))),
        None => Line::from(vec![
            Span::raw("q: Quit | Tab: Switch pane | j/k: Select | "),
            Span::raw("a: Add | J/K: Move | d: Delete | p: Preview"),
        ]),
    };
    f.render_widget(Paragraph::new(help_text), rows[1]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
