//! folio: blog posts and poems from markdown, filtered and presented
//!
//! This crate loads a personal site's writing from whichever source is
//! available (embedded records, a manifest, known filenames or a directory
//! scan), derives excerpts, ids and reading times, and lets callers filter,
//! search and sort the result before handing it to a presenter.

pub mod commands;
pub mod config;
pub mod content;
pub mod filter;
pub mod helpers;
pub mod prefs;
pub mod presenter;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use content::loader::LoadGuard;
use content::{Catalog, ContentKind, ContentLoader};

/// The main folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Set while a blog catalog load is running
    loading_blog: Arc<AtomicBool>,
    /// Set while a poem catalog load is running
    loading_poems: Arc<AtomicBool>,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
            loading_blog: Arc::new(AtomicBool::new(false)),
            loading_poems: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Directory holding a collection's documents
    pub fn collection_dir(&self, kind: ContentKind) -> PathBuf {
        self.base_dir.join(&self.config.collection(kind).dir)
    }

    /// Preference file location
    pub fn prefs_path(&self) -> PathBuf {
        prefs::prefs_path(&self.base_dir, &self.config.prefs_file)
    }

    fn load_flag(&self, kind: ContentKind) -> &Arc<AtomicBool> {
        match kind {
            ContentKind::Blog => &self.loading_blog,
            ContentKind::Poem => &self.loading_poems,
        }
    }

    /// Load a collection into a catalog.
    ///
    /// Fails only when another load of the same kind is already in flight;
    /// unavailable or malformed content is reported through the catalog's
    /// status instead.
    pub async fn load_catalog(&self, kind: ContentKind) -> Result<Catalog> {
        let _guard = LoadGuard::acquire(self.load_flag(kind), kind)?;
        let catalog = ContentLoader::new(self, kind).load_all().await;
        tracing::info!("Loaded {} {}: {:?}", catalog.len(), kind, catalog.status());
        Ok(catalog)
    }
}
