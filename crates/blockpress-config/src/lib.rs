//! Where blockpress keeps its posts.
//!
//! Both front-ends take the posts folder from their first argument and fall
//! back to `posts_path` in `~/.config/blockpress/config.toml`. The desktop app
//! writes that file when the user picks a folder on first run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {config_path}: {source}")]
    Write {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the post files
    pub posts_path: PathBuf,
}

/// Where a posts folder came from
#[derive(Debug, Clone, PartialEq)]
pub enum PostsPathSource {
    Argument,
    ConfigFile(PathBuf),
}

impl fmt::Display for PostsPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostsPathSource::Argument => write!(f, "command line"),
            PostsPathSource::ConfigFile(path) => write!(f, "config file '{}'", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostsPath {
    pub path: PathBuf,
    pub source: PostsPathSource,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        config.posts_path = Self::expand_path(&config.posts_path).unwrap_or(config.posts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Write the config, creating its directory first
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::Write {
            config_path: config_path.to_path_buf(),
            source,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)?;
        log::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockpress");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Posts folder from a command-line argument, else from the config file
    ///
    /// `Ok(None)` means neither is present, so there is nothing to open yet.
    pub fn resolve_posts_path(argument: Option<PathBuf>) -> Result<Option<PostsPath>, ConfigError> {
        Self::resolve_posts_path_with(argument, &Self::config_path())
    }

    pub fn resolve_posts_path_with(
        argument: Option<PathBuf>,
        config_path: &Path,
    ) -> Result<Option<PostsPath>, ConfigError> {
        if let Some(path) = argument {
            return Ok(Some(PostsPath {
                path,
                source: PostsPathSource::Argument,
            }));
        }

        Ok(Self::load_from_path(config_path)?.map(|config| PostsPath {
            path: config.posts_path,
            source: PostsPathSource::ConfigFile(config_path.to_path_buf()),
        }))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
