//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::content::ContentKind;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Display
    pub date_format: String,
    pub excerpt_length: usize,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Collections
    #[serde(default = "CollectionConfig::blog", deserialize_with = "blog_collection")]
    pub blog: CollectionConfig,
    #[serde(default = "CollectionConfig::poems", deserialize_with = "poems_collection")]
    pub poems: CollectionConfig,

    // Preferences
    pub prefs_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Tokenized Thoughts".to_string(),
            author: "Pruthvi Shetty".to_string(),
            language: "en".to_string(),

            url: "https://pruthvishetty.com".to_string(),

            date_format: "MMMM D, YYYY".to_string(),
            excerpt_length: 200,
            highlight: HighlightConfig::default(),

            blog: CollectionConfig::blog(),
            poems: CollectionConfig::poems(),

            prefs_file: ".folio/prefs.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Collection settings for a content kind
    pub fn collection(&self, kind: ContentKind) -> &CollectionConfig {
        match kind {
            ContentKind::Blog => &self.blog,
            ContentKind::Poem => &self.poems,
        }
    }
}

/// Settings for one content collection (blog posts or poems)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionConfig {
    /// Directory holding the collection, relative to the site root
    pub dir: String,
    /// JSON array of embedded records, tried first
    pub embedded_file: String,
    /// JSON manifest listing document filenames
    pub manifest_file: String,
    /// Filenames to try when neither embedded records nor a manifest exist
    pub default_files: Vec<String>,
    /// Category assigned to items that declare none (blog only)
    pub default_category: Option<String>,
    /// Page the collection is served from, used for share links
    pub page: String,
    /// Query parameter carrying the item id in share links
    pub link_param: String,
}

/// The keys a `_config.yml` collection section may set; the rest keep the
/// collection's own defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionOverrides {
    dir: Option<String>,
    embedded_file: Option<String>,
    manifest_file: Option<String>,
    default_files: Option<Vec<String>>,
    /// An empty string clears the default category
    default_category: Option<String>,
    page: Option<String>,
    link_param: Option<String>,
}

impl CollectionOverrides {
    fn apply(self, mut base: CollectionConfig) -> CollectionConfig {
        if let Some(dir) = self.dir {
            base.dir = dir;
        }
        if let Some(embedded_file) = self.embedded_file {
            base.embedded_file = embedded_file;
        }
        if let Some(manifest_file) = self.manifest_file {
            base.manifest_file = manifest_file;
        }
        if let Some(default_files) = self.default_files {
            base.default_files = default_files;
        }
        if let Some(category) = self.default_category {
            let category = category.trim();
            base.default_category = (!category.is_empty()).then(|| category.to_string());
        }
        if let Some(page) = self.page {
            base.page = page;
        }
        if let Some(link_param) = self.link_param {
            base.link_param = link_param;
        }
        base
    }
}

fn blog_collection<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CollectionConfig, D::Error> {
    Ok(CollectionOverrides::deserialize(deserializer)?.apply(CollectionConfig::blog()))
}

fn poems_collection<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CollectionConfig, D::Error> {
    Ok(CollectionOverrides::deserialize(deserializer)?.apply(CollectionConfig::poems()))
}

fn default_embedded_file() -> String {
    "embedded.json".to_string()
}

impl CollectionConfig {
    pub fn blog() -> Self {
        Self {
            dir: "blogs".to_string(),
            embedded_file: default_embedded_file(),
            manifest_file: "posts.json".to_string(),
            default_files: Vec::new(),
            default_category: Some("General".to_string()),
            page: "blog.html".to_string(),
            link_param: "post".to_string(),
        }
    }

    pub fn poems() -> Self {
        Self {
            dir: "poems".to_string(),
            embedded_file: default_embedded_file(),
            manifest_file: "poems.json".to_string(),
            default_files: Vec::new(),
            default_category: None,
            page: "poems.html".to_string(),
            link_param: "poem".to_string(),
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
