//! Page composer - builds the HTML fragments that go into the base template
//!
//! Everything derived from files or requests (titles, dates, slugs) is
//! escaped here. Only rendered markdown and the contact fragments are
//! trusted as-is.

mod contact;

use crate::content::{humanize_slug, FrontMatter, PostSummary};
use crate::helpers::{display_date, html_escape, parse_ymd, post_url};
use crate::i18n::Lang;
use crate::templates::PageContent;

/// Home page: localized welcome text followed by the post listing
pub fn home_page(lang: Lang, posts: &[PostSummary]) -> PageContent {
    let strings = lang.strings();

    let mut html = String::new();
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(strings.welcome_title)));
    html.push_str(&format!(
        "<p class=\"about-me\">{}</p>\n",
        html_escape(strings.welcome_text)
    ));
    html.push_str(&format!(
        "<h2 class=\"posts-heading\">{}</h2>\n",
        html_escape(strings.posts_heading)
    ));

    html.push_str("<ul class=\"post-list\">\n");
    for post in posts {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a><span class=\"post-date\">{}</span></li>\n",
            html_escape(&post_url(&post.slug)),
            html_escape(&post.title),
            html_escape(&post.date_display)
        ));
    }
    html.push_str("</ul>\n");

    PageContent {
        title: "Home".to_string(),
        body_html: html,
    }
}

/// Post page: escaped title, optional date and the rendered markdown body
pub fn post_page(slug: &str, fm: &FrontMatter, body_html: &str) -> PageContent {
    let title = fm.title.clone().unwrap_or_else(|| humanize_slug(slug));

    let mut html = String::from("<article>\n<div class=\"post-header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&title)));
    if let Some(date) = fm.date.as_deref().and_then(parse_ymd) {
        html.push_str(&format!(
            "<span class=\"post-meta\">{}</span>\n",
            html_escape(&display_date(&date))
        ));
    }
    html.push_str("</div>\n");
    html.push_str(body_html);
    html.push_str("</article>");

    PageContent {
        title,
        body_html: html,
    }
}

/// Contact page: one of two fixed fragments
pub fn contact_page(lang: Lang) -> PageContent {
    let body = match lang {
        Lang::En => contact::CONTACT_EN,
        Lang::Th => contact::CONTACT_TH,
    };

    PageContent {
        title: "Contact".to_string(),
        body_html: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slug: &str, title: &str, date_display: &str) -> PostSummary {
        PostSummary {
            slug: slug.to_string(),
            title: title.to_string(),
            date: None,
            date_display: date_display.to_string(),
        }
    }

    #[test]
    fn test_home_page_lists_posts_in_order() {
        let posts = [
            summary("newer", "Newer", "Jan 20, 2026"),
            summary("older", "Older", "Jan 15, 2026"),
        ];
        let page = home_page(Lang::En, &posts);

        assert_eq!(page.title, "Home");
        assert!(page.body_html.contains("<h1>Welcome to LearnArai</h1>"));
        assert!(page.body_html.contains("<h2 class=\"posts-heading\">Posts</h2>"));
        assert!(page.body_html.contains(
            "<li><a href=\"/posts/newer\">Newer</a><span class=\"post-date\">Jan 20, 2026</span></li>"
        ));
        let newer = page.body_html.find("Newer").unwrap();
        let older = page.body_html.find("Older").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_home_page_thai() {
        let page = home_page(Lang::Th, &[]);
        assert!(page.body_html.contains("ยินดีต้อนรับสู่ LearnArai"));
        assert!(page.body_html.contains("<ul class=\"post-list\">\n</ul>"));
    }

    #[test]
    fn test_home_page_escapes_titles() {
        let posts = [summary("xss", "<script>alert(1)</script>", "")];
        let page = home_page(Lang::En, &posts);
        assert!(!page.body_html.contains("<script>"));
        assert!(page.body_html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_post_page_with_frontmatter() {
        let fm = FrontMatter {
            title: Some("Test Post".to_string()),
            date: Some("2026-01-15".to_string()),
        };
        let page = post_page("test-post", &fm, "<h1>Hi</h1>\n");

        assert_eq!(page.title, "Test Post");
        assert!(page.body_html.starts_with("<article>"));
        assert!(page.body_html.contains("<h1>Test Post</h1>"));
        assert!(page
            .body_html
            .contains("<span class=\"post-meta\">Jan 15, 2026</span>"));
        assert!(page.body_html.contains("<h1>Hi</h1>"));
        assert!(page.body_html.ends_with("</article>"));
    }

    #[test]
    fn test_post_page_without_frontmatter() {
        let page = post_page("en-getting-started", &FrontMatter::default(), "<p>x</p>");
        assert_eq!(page.title, "Getting Started");
        assert!(!page.body_html.contains("post-meta"));
    }

    #[test]
    fn test_post_page_ignores_bad_date() {
        let fm = FrontMatter {
            title: None,
            date: Some("someday".to_string()),
        };
        let page = post_page("post", &fm, "");
        assert!(!page.body_html.contains("post-meta"));
    }

    #[test]
    fn test_post_page_escapes_title() {
        let fm = FrontMatter {
            title: Some("Fish & Chips".to_string()),
            date: None,
        };
        let page = post_page("fish", &fm, "");
        assert!(page.body_html.contains("<h1>Fish &amp; Chips</h1>"));
        // The template escapes the page title itself
        assert_eq!(page.title, "Fish & Chips");
    }

    #[test]
    fn test_contact_page_per_locale() {
        assert!(contact_page(Lang::Th).body_html.contains("ธีรภัทร ยาใจ"));
        assert!(contact_page(Lang::En).body_html.contains("Teerapat Yajai"));
        assert_eq!(contact_page(Lang::En).title, "Contact");
    }
}
