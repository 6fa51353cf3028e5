//! The loaded, read-only collection of content items

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use super::item::item_id;
use super::{ContentItem, ContentKind};

/// Whether the catalog has content to show, and why not if it doesn't
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum LoadStatus {
    /// Nothing loaded: no load has run, or every source was unavailable
    NotLoaded,
    /// A source was read but produced no usable items
    Empty,
    /// Loaded with `count` items
    Loaded { count: usize },
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, LoadStatus::NotLoaded)
    }
}

/// Immutable catalog of blog posts or poems, newest first
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: ContentKind,
    items: Arc<[ContentItem]>,
    status: LoadStatus,
}

impl Catalog {
    /// A catalog that has not been populated
    pub fn unloaded(kind: ContentKind) -> Self {
        Self {
            kind,
            items: Arc::from(Vec::new()),
            status: LoadStatus::NotLoaded,
        }
    }

    /// Build a catalog from loaded items.
    ///
    /// Later items whose id repeats an earlier one are dropped, then items
    /// are ordered newest first. Items sharing a date keep their source order.
    pub fn from_items(kind: ContentKind, items: Vec<ContentItem>) -> Self {
        let mut seen = HashSet::new();
        let mut items: Vec<ContentItem> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    tracing::warn!("Skipping {:?}: duplicate id {:?}", item.source, item.id);
                }
                fresh
            })
            .collect();

        items.sort_by(|a, b| b.published.cmp(&a.published));

        let status = if items.is_empty() {
            LoadStatus::Empty
        } else {
            LoadStatus::Loaded { count: items.len() }
        };

        Self {
            kind,
            items: Arc::from(items),
            status,
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// All items, newest first
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    ///
    /// The requested id is normalized the same way ids are derived, so a
    /// filename such as `Future-Of-GenAI.md` finds `future-of-genai`.
    pub fn find_by_id(&self, id: &str) -> Option<&ContentItem> {
        let id = item_id(id);
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct non-empty categories, sorted
    pub fn all_categories(&self) -> BTreeSet<String> {
        self.items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of items per category
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for category in self.items.iter().filter_map(|item| item.category.as_deref()) {
            if !category.trim().is_empty() {
                *counts.entry(category.trim().to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// The featured item with the lowest order; ties go to the earlier item
    pub fn primary_featured(&self) -> Option<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.is_featured)
            .min_by_key(|item| item.featured_order)
    }

    /// Combined reading time of every item, in minutes
    pub fn total_reading_time(&self) -> u32 {
        self.items.iter().map(|item| item.reading_time_minutes).sum()
    }
}
