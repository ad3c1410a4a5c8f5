//! Post reader - loads a single post's raw markdown by slug

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension of post files in the posts directory
pub const POST_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("post not found")]
    NotFound,
    #[error("failed to read post: {0}")]
    Io(#[from] io::Error),
}

/// Source of raw post content.
///
/// Callers must validate the slug with [`super::is_valid_slug`] first;
/// implementations are free to join it into a path.
pub trait PostReader: Send + Sync {
    fn read(&self, slug: &str) -> Result<String, ReadError>;
}

/// Reads `<slug>.md` from a posts directory
#[derive(Debug, Clone)]
pub struct FileReader {
    posts_dir: PathBuf,
}

impl FileReader {
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, slug: &str) -> PathBuf {
        self.posts_dir.join(format!("{}.{}", slug, POST_EXTENSION))
    }
}

impl PostReader for FileReader {
    fn read(&self, slug: &str) -> Result<String, ReadError> {
        match fs::read_to_string(self.path_for(slug)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ReadError::NotFound),
            Err(e) => Err(ReadError::Io(e)),
        }
    }
}
