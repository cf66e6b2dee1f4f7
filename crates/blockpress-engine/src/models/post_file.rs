use relative_path::{RelativePath, RelativePathBuf};

/// A post's `.json` file, addressed relative to the posts root
#[derive(Debug, Clone, PartialEq)]
pub struct PostFile {
    relative_path: RelativePathBuf,
}

impl PostFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Name shown in post lists: the file name without `.json`
    pub fn display_name(&self) -> &str {
        self.relative_path
            .file_name()
            .map(|name| name.strip_suffix(".json").unwrap_or(name))
            .unwrap_or("Untitled")
    }
}
