//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::is_valid_slug;
use crate::i18n::Lang;
use crate::Blog;

/// Write `<posts_dir>/[lang-]<slug>.md` with a frontmatter header
pub fn create_post(
    blog: &Blog,
    title: &str,
    lang: Option<Lang>,
    date: NaiveDate,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    let slug = match lang {
        Some(lang) => format!("{}{}", lang.slug_prefix(), slug),
        None => slug,
    };

    if slug.is_empty() || !is_valid_slug(&slug) || slug.ends_with('-') {
        anyhow::bail!("Cannot derive a post slug from title {:?}", title);
    }

    fs::create_dir_all(&blog.posts_dir)?;
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Let YAML decide whether the title needs quoting
    let yaml_title = serde_yaml::to_string(title)?;
    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        yaml_title.trim_end(),
        date.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, lang: Option<Lang>) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(blog, title, lang, today)?;
    println!("Created: {:?}", path);
    Ok(())
}
