//! # Client configuration: `myblog.toml`
//!
//! Tells the client where the blog backend lives and how the gallery renders.
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:5001"   # scheme + host + port of the REST server
//! collection = "blogs"                 # path segment of the post collection
//!
//! [gallery]
//! excerpt_chars = 100                  # content characters shown on each card
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or empty
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::models::EXCERPT_CHARS;

/// Top-level configuration stored in `myblog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

/// Where the REST backend is reachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_base_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_collection() -> String {
    "blogs".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

/// Gallery rendering options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,
}

fn default_excerpt_chars() -> usize {
    EXCERPT_CHARS
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            excerpt_chars: default_excerpt_chars(),
        }
    }
}

impl BlogConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig {
                base_url,
                ..BackendConfig::default()
            },
            gallery: GalleryConfig::default(),
        }
    }

    /// Builder method to set the excerpt length.
    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.gallery.excerpt_chars = chars;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "myblog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = BlogConfig::from_toml("").unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.backend.base_url, "http://localhost:5001");
        assert_eq!(config.backend.collection, "blogs");
        assert_eq!(config.gallery.excerpt_chars, 100);
    }

    #[test]
    fn test_partial_sections() {
        let config = BlogConfig::from_toml("[backend]\nbase_url = \"https://blog.example\"\n").unwrap();
        assert_eq!(config.backend.base_url, "https://blog.example");
        assert_eq!(config.backend.collection, "blogs");
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BlogConfig::new("http://10.0.0.2:8080".to_string()).with_excerpt_chars(40);
        let text = config.to_toml().unwrap();
        assert_eq!(BlogConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(BlogConfig::from_toml("[backend\nbase_url = 1").is_err());
    }
}
