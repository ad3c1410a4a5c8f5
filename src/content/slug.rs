//! Post slugs and the language prefixes encoded in them

use regex::Regex;
use std::sync::LazyLock;

use crate::helpers::title_case;
use crate::i18n::Lang;

static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Check that a slug only contains ASCII letters, digits, `-` and `_`.
///
/// Every slug that arrives from a request must pass this before it is
/// turned into a file path.
pub fn is_valid_slug(slug: &str) -> bool {
    VALID_SLUG.is_match(slug)
}

/// Language a slug is tagged with through its `en-` / `th-` prefix
pub fn slug_language(slug: &str) -> Option<Lang> {
    Lang::ALL
        .into_iter()
        .find(|lang| slug.starts_with(lang.slug_prefix()))
}

/// Strip a recognised language prefix from a slug
pub fn strip_language_prefix(slug: &str) -> &str {
    match slug_language(slug) {
        Some(lang) => &slug[lang.slug_prefix().len()..],
        None => slug,
    }
}

/// Display title derived from a slug, e.g. `en-getting-started` -> `Getting Started`
pub fn humanize_slug(slug: &str) -> String {
    title_case(&strip_language_prefix(slug).replace('-', " "))
}
