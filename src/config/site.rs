//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,

    // Server
    pub port: u16,
    pub request_timeout_secs: u64,
    pub shutdown_grace_secs: u64,

    // Directory
    pub posts_dir: String,
    pub static_dir: String,
    pub images_dir: String,
    pub template: String,

    // Writing
    pub highlight_theme: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "LearnArai".to_string(),

            port: 3030,
            request_timeout_secs: 15,
            shutdown_grace_secs: 30,

            posts_dir: "posts".to_string(),
            static_dir: "static".to_string(),
            images_dir: "images".to_string(),
            template: "templates/base.html".to_string(),

            highlight_theme: "base16-ocean.dark".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// How long in-flight requests may run once shutdown has started
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.port, 3030);
        assert_eq!(config.posts_dir, "posts");
        assert_eq!(config.template, "templates/base.html");
        assert_eq!(config.shutdown_grace(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
title: My Blog
port: 8080
posts_dir: content
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.port, 8080);
        assert_eq!(config.posts_dir, "content");
        // Unset keys keep their defaults
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "shutdown_grace_secs: 5\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert_eq!(config.shutdown_grace(), Duration::from_secs(5));
    }
}
