//! Internationalization (i18n) support
//!
//! Two locales are supported. The locale for a request comes from the
//! `lang` query parameter, then the `lang` cookie, and anything that is
//! not exactly `en` or `th` falls back to Thai.

use std::fmt;

/// Name of the query parameter and cookie carrying the locale
pub const LANG_KEY: &str = "lang";

/// How long the locale cookie lives, in seconds (one year)
pub const LANG_COOKIE_MAX_AGE: i64 = 31_536_000;

/// Supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    En,
    #[default]
    Th,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Th];

    /// Parse an exact locale code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "th" => Some(Lang::Th),
            _ => None,
        }
    }

    /// Resolve the locale for a request.
    ///
    /// A non-empty query value wins over the cookie even when it is not a
    /// recognised code, in which case the default applies.
    pub fn resolve(query: Option<&str>, cookie: Option<&str>) -> Self {
        let requested = match query {
            Some(q) if !q.is_empty() => Some(q),
            _ => cookie,
        };

        requested.and_then(Lang::from_code).unwrap_or_default()
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Th => "th",
        }
    }

    /// Filename prefix marking a post as written in this locale
    pub fn slug_prefix(self) -> &'static str {
        match self {
            Lang::En => "en-",
            Lang::Th => "th-",
        }
    }

    /// Translated strings for this locale
    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Th => &TH,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Plain-text strings shown on the home page
#[derive(Debug)]
pub struct Strings {
    pub welcome_title: &'static str,
    pub welcome_text: &'static str,
    pub posts_heading: &'static str,
}

static EN: Strings = Strings {
    welcome_title: "Welcome to LearnArai",
    welcome_text: "Hi!! I'm someone who likes to create and learn new things. This is my personal space where I can share ideas or projects I'm currently working on.",
    posts_heading: "Posts",
};

static TH: Strings = Strings {
    welcome_title: "ยินดีต้อนรับสู่ LearnArai",
    welcome_text: "สวัสดีครับ!! ผมคือคนที่ชอบสร้างสรรค์และเรียนรู้สิ่งต่างๆ นี่คือพื้นที่ส่วนตัวของผมซึ่งเอาไว้สำหรับแชร์ความคิด สิ่งที่ได้เรียนรู้ หรือโปรเจกต์ที่กำลังทำอยู่",
    posts_heading: "บทความ",
};
