use crate::models::{Post, PostFile};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse post {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Post already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
}

/// Read and parse a post file
pub fn read_post(relative_path: &RelativePath, posts_root: &Path) -> Result<Post, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let content = fs::read_to_string(&absolute_path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: absolute_path,
        source,
    })
}

/// Write a post file, creating parent directories as needed
pub fn write_post(relative_path: &RelativePath, posts_root: &Path, post: &Post) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(posts_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(post).map_err(|source| IoError::Parse {
        path: absolute_path.clone(),
        source,
    })?;
    fs::write(&absolute_path, content)?;
    log::debug!("wrote {} blocks to {}", post.blocks.len(), absolute_path.display());
    Ok(())
}

/// Create a new empty post named after `title`
pub fn create_post(posts_root: &Path, title: &str) -> Result<PostFile, IoError> {
    let relative_path = RelativePathBuf::from(format!("{}.json", slugify(title)));
    let absolute_path = relative_path.to_path(posts_root);
    if absolute_path.exists() {
        return Err(IoError::AlreadyExists(absolute_path));
    }

    write_post(&relative_path, posts_root, &Post::new(title))?;
    log::info!("created post {}", relative_path);
    Ok(PostFile::new(relative_path))
}

/// All post files under `posts_root`, sorted by path
pub fn scan_posts(posts_root: &Path) -> Result<Vec<PostFile>, IoError> {
    if !posts_root.exists() {
        return Err(IoError::InvalidPostsDir(
            "posts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(posts_root, &mut files)?;
    files.sort();

    Ok(files
        .iter()
        .filter_map(|path| path.strip_prefix(posts_root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .map(PostFile::new)
        .collect())
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// File-name-safe form of a title: lowercase ASCII words joined by dashes
pub fn slugify(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
