//! Content loader - builds a catalog from the first available source

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use super::source::{
    DefaultFiles, DirectoryScan, Document, DocumentBody, EmbeddedRecords, Manifest,
    SourceOutcome, SourceProvider,
};
use super::{Catalog, ContentItem, ContentKind, DocumentError, FrontMatter, ItemDefaults};
use crate::Folio;

/// Errors raised around a catalog load
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("A {0} catalog load is already in progress")]
    AlreadyLoading(ContentKind),
}

/// Loads one collection from its prioritized source providers
pub struct ContentLoader {
    kind: ContentKind,
    defaults: ItemDefaults,
    providers: Vec<Box<dyn SourceProvider>>,
}

impl ContentLoader {
    /// Create a loader using the site's configured sources for `kind`
    pub fn new(folio: &Folio, kind: ContentKind) -> Self {
        let collection = folio.config.collection(kind);
        let dir = folio.collection_dir(kind);

        let providers: Vec<Box<dyn SourceProvider>> = vec![
            Box::new(EmbeddedRecords::new(dir.join(&collection.embedded_file))),
            Box::new(Manifest::new(&dir, dir.join(&collection.manifest_file))),
            Box::new(DefaultFiles::new(&dir, collection.default_files.clone())),
            Box::new(DirectoryScan::new(&dir)),
        ];

        Self::with_providers(kind, ItemDefaults::from_config(&folio.config, kind), providers)
    }

    /// Create a loader over an explicit provider list, tried in order
    pub fn with_providers(
        kind: ContentKind,
        defaults: ItemDefaults,
        providers: Vec<Box<dyn SourceProvider>>,
    ) -> Self {
        Self {
            kind,
            defaults,
            providers,
        }
    }

    /// Load every item from the first available provider.
    ///
    /// Documents that cannot be fetched or parsed are logged and skipped.
    /// When no provider is available, or a provider lists documents but none
    /// of them can be fetched, the catalog is reported as not loaded.
    pub async fn load_all(&self) -> Catalog {
        for provider in &self.providers {
            let documents = match provider.fetch().await {
                SourceOutcome::Available(documents) => documents,
                SourceOutcome::Unavailable => {
                    tracing::debug!("{} source unavailable for {}", provider.name(), self.kind);
                    continue;
                }
            };

            tracing::debug!(
                "Loading {} from {} source ({} documents)",
                self.kind,
                provider.name(),
                documents.len()
            );

            let listed = documents.len();
            let mut fetched = 0;
            let mut items = Vec::with_capacity(listed);

            for document in documents {
                let document = match document {
                    Ok(document) => document,
                    Err(failure) => {
                        tracing::warn!("Failed to fetch {:?}: {}", failure.name, failure.error);
                        continue;
                    }
                };
                fetched += 1;

                let name = document.name.clone();
                match self.build_item(document) {
                    Ok(item) => items.push(item),
                    Err(e) => tracing::warn!("Failed to load {} {:?}: {}", self.kind.label(), name, e),
                }
            }

            if listed > 0 && fetched == 0 {
                tracing::warn!(
                    "None of the {} documents listed by the {} source could be fetched",
                    listed,
                    provider.name()
                );
                return Catalog::unloaded(self.kind);
            }

            let catalog = Catalog::from_items(self.kind, items);
            tracing::info!("Loaded {} {} items", catalog.len(), self.kind);
            return catalog;
        }

        tracing::warn!("No source available for {}", self.kind);
        Catalog::unloaded(self.kind)
    }

    /// Turn a fetched document into a content item
    fn build_item(&self, document: Document) -> Result<ContentItem, DocumentError> {
        match document.body {
            DocumentBody::Text(content) => {
                let (fm, body) = FrontMatter::parse(&content)?;
                ContentItem::from_parts(self.kind, &document.name, fm, body, &self.defaults)
            }
            DocumentBody::Parsed { front_matter, body } => ContentItem::from_parts(
                self.kind,
                &document.name,
                front_matter,
                &body,
                &self.defaults,
            ),
        }
    }
}

/// Marks a catalog load as in flight; released on drop
pub(crate) struct LoadGuard {
    flag: Arc<AtomicBool>,
}

impl LoadGuard {
    pub(crate) fn acquire(flag: &Arc<AtomicBool>, kind: ContentKind) -> Result<Self, LoadError> {
        if flag
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LoadError::AlreadyLoading(kind));
        }
        Ok(Self { flag: flag.clone() })
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LoadStatus;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::fs;

    fn defaults() -> ItemDefaults {
        ItemDefaults {
            author: "Pruthvi Shetty".to_string(),
            category: Some("General".to_string()),
            excerpt_length: 200,
            today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    /// Provider that is never available
    struct Offline;

    #[async_trait]
    impl SourceProvider for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        async fn fetch(&self) -> SourceOutcome {
            SourceOutcome::Unavailable
        }
    }

    fn post(title: &str, date: &str) -> String {
        format!("---\ntitle: {}\ndate: {}\n---\n\nWords about {}.\n", title, date, title)
    }

    #[tokio::test]
    async fn test_load_sorts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("oct.md"), post("October", "2024-10-20")).unwrap();
        fs::write(dir.path().join("dec.md"), post("December", "2024-12-01")).unwrap();
        fs::write(dir.path().join("nov.md"), post("November", "2024-11-15")).unwrap();

        let loader = ContentLoader::with_providers(
            ContentKind::Blog,
            defaults(),
            vec![Box::new(DirectoryScan::new(dir.path()))],
        );
        let catalog = loader.load_all().await;

        let dates: Vec<String> = catalog
            .items()
            .iter()
            .map(|i| i.published.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-12-01", "2024-11-15", "2024-10-20"]);
        assert_eq!(catalog.status(), LoadStatus::Loaded { count: 3 });
    }

    #[tokio::test]
    async fn test_malformed_documents_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.md"), post("Good", "2024-01-01")).unwrap();
        fs::write(dir.path().join("bad-date.md"), post("Bad", "the ides of march")).unwrap();
        fs::write(dir.path().join("open.md"), "---\ntitle: Open\n\nNo closing line").unwrap();
        fs::write(dir.path().join("empty.md"), "---\ntitle: Empty\n---\n\n").unwrap();

        let loader = ContentLoader::with_providers(
            ContentKind::Blog,
            defaults(),
            vec![Box::new(DirectoryScan::new(dir.path()))],
        );
        let catalog = loader.load_all().await;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].id, "good");
        assert!(catalog.items().iter().all(|i| i.reading_time_minutes >= 1));
    }

    #[tokio::test]
    async fn test_first_available_provider_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("listed.md"), post("Listed", "2024-02-02")).unwrap();
        fs::write(dir.path().join("unlisted.md"), post("Unlisted", "2024-03-03")).unwrap();
        let manifest = dir.path().join("posts.json");
        fs::write(&manifest, r#"{"posts": ["listed.md"]}"#).unwrap();

        let loader = ContentLoader::with_providers(
            ContentKind::Blog,
            defaults(),
            vec![
                Box::new(Offline),
                Box::new(Manifest::new(dir.path(), &manifest)),
                Box::new(DirectoryScan::new(dir.path())),
            ],
        );
        let catalog = loader.load_all().await;

        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_id("listed").is_some());
        assert!(catalog.find_by_id("unlisted").is_none());
    }

    #[tokio::test]
    async fn test_no_provider_means_not_loaded() {
        let loader =
            ContentLoader::with_providers(ContentKind::Poem, defaults(), vec![Box::new(Offline)]);
        let catalog = loader.load_all().await;
        assert_eq!(catalog.status(), LoadStatus::NotLoaded);
    }

    #[tokio::test]
    async fn test_unreachable_documents_mean_not_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ContentLoader::with_providers(
            ContentKind::Blog,
            defaults(),
            vec![Box::new(DefaultFiles::new(
                dir.path(),
                vec!["building-ai-at-scale.md".to_string()],
            ))],
        );
        assert_eq!(loader.load_all().await.status(), LoadStatus::NotLoaded);
    }

    #[tokio::test]
    async fn test_empty_directory_is_loaded_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ContentLoader::with_providers(
            ContentKind::Poem,
            defaults(),
            vec![Box::new(DirectoryScan::new(dir.path()))],
        );
        assert_eq!(loader.load_all().await.status(), LoadStatus::Empty);
    }

    #[tokio::test]
    async fn test_poems_without_header() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("digital-dreams.md"),
            "# Digital Dreams\n\n*In circuits bright and silicon deep,*\n",
        )
        .unwrap();

        let loader = ContentLoader::with_providers(
            ContentKind::Poem,
            defaults(),
            vec![Box::new(DirectoryScan::new(dir.path()))],
        );
        let catalog = loader.load_all().await;
        let poem = catalog.find_by_id("digital-dreams").unwrap();
        assert_eq!(poem.title, "digital dreams");
        assert_eq!(poem.category, None);
        assert_eq!(poem.published, defaults().today);
    }

    #[test]
    fn test_load_guard_rejects_second_load() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = LoadGuard::acquire(&flag, ContentKind::Blog).unwrap();
        assert!(matches!(
            LoadGuard::acquire(&flag, ContentKind::Blog),
            Err(LoadError::AlreadyLoading(ContentKind::Blog))
        ));
        drop(guard);
        assert!(LoadGuard::acquire(&flag, ContentKind::Blog).is_ok());
    }
}
