//! List posts as the home page would show them

use anyhow::{Context, Result};

use crate::content::build_index;
use crate::i18n::Lang;
use crate::Blog;

/// Print the post index for a locale
pub fn run(blog: &Blog, lang: Lang) -> Result<()> {
    let posts = build_index(&blog.posts_dir, lang)
        .with_context(|| format!("Could not read posts from {:?}", blog.posts_dir))?;

    println!("Posts ({}, {}):", lang, posts.len());
    for post in posts {
        let date = if post.date_display.is_empty() {
            "-"
        } else {
            post.date_display.as_str()
        };
        println!("  {:>12}  {} [{}]", date, post.title, post.slug);
    }

    Ok(())
}
