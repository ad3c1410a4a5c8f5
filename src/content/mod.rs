//! Content module - post files, their frontmatter and the post index

mod frontmatter;
pub mod index;
mod markdown;
pub mod reader;
mod slug;

pub use frontmatter::FrontMatter;
pub use index::{build_index, PostSummary};
pub use markdown::MarkdownRenderer;
pub use reader::{FileReader, PostReader, ReadError};
pub use slug::{humanize_slug, is_valid_slug, slug_language, strip_language_prefix};
