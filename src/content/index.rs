//! Post index - the sorted, language-filtered listing shown on the home page

use chrono::{DateTime, Local, Utc};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

use super::reader::POST_EXTENSION;
use super::slug::{humanize_slug, slug_language};
use super::FrontMatter;
use crate::helpers::{display_date, display_datetime, parse_ymd};
use crate::i18n::Lang;

/// Listing entry for a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    /// File stem, used in the post URL
    pub slug: String,
    pub title: String,
    /// Frontmatter date at midnight UTC, or the file modification time
    pub date: Option<DateTime<Utc>>,
    /// Empty when no date source exists
    pub date_display: String,
}

impl PostSummary {
    /// Combine a post's frontmatter with its fallbacks.
    ///
    /// The title falls back to the humanized slug and the date falls back
    /// to `modified` when the frontmatter date is missing or unparsable.
    pub fn from_content(slug: &str, content: &str, modified: Option<SystemTime>) -> Self {
        let (fm, _) = FrontMatter::parse(content);

        let title = fm.title.unwrap_or_else(|| humanize_slug(slug));

        let from_frontmatter = fm.date.as_deref().and_then(parse_ymd).and_then(|day| {
            let midnight = day.and_hms_opt(0, 0, 0)?.and_utc();
            Some((midnight, display_date(&day)))
        });

        let (date, date_display) = match from_frontmatter {
            Some((date, display)) => (Some(date), display),
            None => match modified {
                Some(mtime) => {
                    let local = DateTime::<Local>::from(mtime);
                    (Some(local.with_timezone(&Utc)), display_datetime(&local))
                }
                None => (None, String::new()),
            },
        };

        Self {
            slug: slug.to_string(),
            title,
            date,
            date_display,
        }
    }
}

/// Whether a post belongs in the listing for `lang`.
///
/// Language-tagged slugs only show under their own locale; untagged
/// slugs show under every locale.
pub fn is_listed(slug: &str, lang: Lang) -> bool {
    match slug_language(slug) {
        Some(tag) => tag == lang,
        None => true,
    }
}

/// Slug of a post file name, `None` for anything that is not a post
pub fn post_slug(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(POST_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .filter(|stem| !stem.is_empty())
}

/// Sort newest first; undated posts go last.
///
/// The sort is stable, so posts with equal dates keep their input order.
pub fn sort_posts(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Build the listing for `lang` from every post file in `posts_dir`.
///
/// Files are visited in file name order, which makes the order of posts
/// with equal dates ascending by slug. A post that cannot be read is
/// skipped; only failing to enumerate the directory itself is an error.
pub fn build_index(posts_dir: &Path, lang: Lang) -> io::Result<Vec<PostSummary>> {
    let mut posts = Vec::new();

    for entry in WalkDir::new(posts_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {:?}: {}", posts_dir, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(slug) = entry.file_name().to_str().and_then(post_slug) else {
            continue;
        };
        if !is_listed(slug, lang) {
            continue;
        }

        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Error reading post {:?}: {}", entry.path(), e);
                continue;
            }
        };
        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());

        posts.push(PostSummary::from_content(slug, &content, modified));
    }

    sort_posts(&mut posts);
    tracing::debug!("Indexed {} posts for {}", posts.len(), lang);

    Ok(posts)
}
