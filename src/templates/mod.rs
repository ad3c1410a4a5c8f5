//! Base page template using the Tera template engine
//!
//! The template is compiled once at startup and shared read-only by every
//! request. It sees two variables: `title`, which is escaped, and
//! `content`, trusted HTML that the template must emit with `| safe`.

use anyhow::{Context as _, Result};
use std::path::Path;
use tera::{Context, Tera};

/// Name the base template is registered under; the `.html` suffix turns
/// on Tera's autoescaping
const BASE_TEMPLATE: &str = "base.html";

/// Final unit handed to the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Plain text, escaped by the template
    pub title: String,
    /// Already escaped or sanitized HTML, inserted verbatim
    pub body_html: String,
}

/// Compiled base page template
pub struct PageTemplate {
    tera: Tera,
}

impl PageTemplate {
    /// Compile the template stored at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(BASE_TEMPLATE))
            .with_context(|| format!("Failed to parse template {:?}", path))?;
        Ok(Self { tera })
    }

    /// Compile a template from its source text
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(BASE_TEMPLATE, source)
            .context("Failed to parse template")?;
        Ok(Self { tera })
    }

    /// Render a page
    pub fn render(&self, page: &PageContent) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &page.title);
        context.insert("content", &page.body_html);
        Ok(self.tera.render(BASE_TEMPLATE, &context)?)
    }
}
