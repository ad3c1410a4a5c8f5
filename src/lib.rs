//! learnarai: a small bilingual blog server
//!
//! Posts are markdown files with an optional frontmatter header. They are
//! read from disk on every request, rendered to HTML and wrapped in a
//! shared page template.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod pages;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Process-wide, read-only blog context
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding `<slug>.md` posts
    pub posts_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Directory served under `/images`
    pub images_dir: PathBuf,
    /// Base page template
    pub template_path: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::BlogConfig) -> Self {
        let posts_dir = base_dir.join(&config.posts_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let images_dir = base_dir.join(&config.images_dir);
        let template_path = base_dir.join(&config.template);

        Self {
            config,
            base_dir,
            posts_dir,
            static_dir,
            images_dir,
            template_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("posts"));
        assert_eq!(blog.template_path, dir.path().join("templates/base.html"));
    }

    #[test]
    fn test_blog_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "posts_dir: writing\nimages_dir: media\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.posts_dir, dir.path().join("writing"));
        assert_eq!(blog.images_dir, dir.path().join("media"));
        assert_eq!(blog.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_blog_rejects_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "port: [not a number\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }
}
