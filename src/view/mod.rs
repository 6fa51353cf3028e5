//! View state and listing composition for the presentation layer
//!
//! `ViewState` is the explicit replacement for the filter and search fields
//! a page keeps while the reader narrows the list. It applies the engine's
//! steps in a fixed order: search, then the category (or featured)
//! selection, then sorting. Each step narrows the previous one.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::content::{Catalog, ContentItem, LoadStatus};
use crate::filter::{self, SortKey};

/// Which subset of the catalog the reader picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Featured,
    Category(String),
}

impl Selection {
    /// Selection for a category name. Unlike parsing a filter token, a
    /// category literally named `featured` stays a category.
    pub fn category(name: &str) -> Self {
        match name.trim() {
            "" | filter::ALL_CATEGORIES => Selection::All,
            category => Selection::Category(category.to_string()),
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" | filter::ALL_CATEGORIES => Selection::All,
            "featured" => Selection::Featured,
            category => Selection::Category(category.to_string()),
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(filter::ALL_CATEGORIES),
            Selection::Featured => f.write_str("featured"),
            Selection::Category(category) => f.write_str(category),
        }
    }
}

/// The reader's current filter, search term and ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selection: Selection,
    pub search: String,
    pub sort: SortKey,
}

impl ViewState {
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a non-blank search term is active
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Items matching this state, in display order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ContentItem> {
        let items = filter::by_search(catalog.items(), &self.search);

        let items = match &self.selection {
            Selection::All => items,
            Selection::Featured => filter::by_featured(items),
            Selection::Category(category) => filter::by_category(items, category),
        };

        filter::sort_by(items, self.sort)
    }

    /// Apply this state and split out the hero item
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        Listing::compose(catalog, self.apply(catalog))
    }
}

/// Why a listing has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyState {
    /// The catalog itself could not be loaded
    Unavailable,
    /// The catalog loaded but holds no items
    NothingPublished,
    /// Items exist but none match the current view
    NoMatches,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::Unavailable => "Content is unavailable right now.",
            EmptyState::NothingPublished => "Nothing has been published yet.",
            EmptyState::NoMatches => "No items match the current filters.",
        }
    }
}

/// What a list page shows: an optional hero and the remaining items
#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    pub hero: Option<&'a ContentItem>,
    pub items: Vec<&'a ContentItem>,
    pub status: LoadStatus,
}

impl<'a> Listing<'a> {
    /// Split filtered items into the hero and the rest.
    ///
    /// The hero is the catalog's primary featured item, shown only while it
    /// survives the current filters; it is then left out of `items` so it is
    /// not displayed twice.
    pub fn compose(catalog: &'a Catalog, filtered: Vec<&'a ContentItem>) -> Self {
        let hero = catalog
            .primary_featured()
            .filter(|hero| filtered.iter().any(|item| item.id == hero.id));

        let items = match hero {
            Some(hero) => filtered
                .into_iter()
                .filter(|item| item.id != hero.id)
                .collect(),
            None => filtered,
        };

        Self {
            hero,
            items,
            status: catalog.status(),
        }
    }

    /// Number of items shown, hero included
    pub fn len(&self) -> usize {
        self.items.len() + usize::from(self.hero.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The empty-state to show instead of an empty list, if any
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.is_empty() {
            return None;
        }
        Some(match self.status {
            LoadStatus::NotLoaded => EmptyState::Unavailable,
            LoadStatus::Empty => EmptyState::NothingPublished,
            LoadStatus::Loaded { .. } => EmptyState::NoMatches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::test_helpers::{post, sample_catalog};

    fn ids<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("featured".parse::<Selection>().unwrap(), Selection::Featured);
        assert_eq!(
            "AI Trends".parse::<Selection>().unwrap(),
            Selection::Category("AI Trends".to_string())
        );
    }

    #[test]
    fn test_category_named_featured() {
        assert_eq!(
            Selection::category("featured"),
            Selection::Category("featured".to_string())
        );
        assert_eq!(Selection::category(" all "), Selection::All);
        assert_eq!(Selection::category(""), Selection::All);

        let catalog = Catalog::from_items(
            ContentKind::Blog,
            vec![
                post("picks", "2024-05-01", "Editor Picks", "featured"),
                post("other", "2024-04-01", "Other", "Misc"),
            ],
        );
        let view = ViewState::default().with_selection(Selection::category("featured"));
        assert_eq!(ids(&view.apply(&catalog)), vec!["picks"]);
    }

    #[test]
    fn test_default_view_is_whole_catalog() {
        let catalog = sample_catalog();
        let shown = ViewState::default().apply(&catalog);
        assert_eq!(shown.len(), catalog.len());
        assert_eq!(ids(&shown)[0], "future-of-genai");
    }

    #[test]
    fn test_category_narrows_search_results() {
        let catalog = sample_catalog();

        // "AI" matches three posts; the category keeps only those also in it
        let view = ViewState::default()
            .with_search("ai")
            .with_selection(Selection::Category("AI Engineering".to_string()));
        assert_eq!(ids(&view.apply(&catalog)), vec!["ai-at-scale", "production"]);

        // A search that misses the category leaves nothing, not the category
        let view = ViewState::default()
            .with_search("ownership")
            .with_selection(Selection::Category("AI Engineering".to_string()));
        assert!(view.apply(&catalog).is_empty());
    }

    #[test]
    fn test_featured_selection_with_sort() {
        let catalog = sample_catalog();
        let view = ViewState::default()
            .with_selection(Selection::Featured)
            .with_sort(SortKey::DateAscending);
        assert_eq!(
            ids(&view.apply(&catalog)),
            vec!["ai-at-scale", "future-of-genai"]
        );
    }

    #[test]
    fn test_listing_excludes_hero_from_items() {
        let catalog = sample_catalog();
        let listing = ViewState::default().listing(&catalog);

        assert_eq!(listing.hero.unwrap().id, "ai-at-scale");
        assert_eq!(
            ids(&listing.items),
            vec!["future-of-genai", "production", "rust-notes"]
        );
        assert_eq!(listing.len(), 4);
        assert_eq!(listing.empty_state(), None);
    }

    #[test]
    fn test_hero_hidden_when_filtered_out() {
        let catalog = sample_catalog();
        let listing = ViewState::default()
            .with_selection(Selection::Category("Programming".to_string()))
            .listing(&catalog);

        assert!(listing.hero.is_none());
        assert_eq!(ids(&listing.items), vec!["rust-notes"]);
    }

    #[test]
    fn test_empty_category_keeps_loaded_status() {
        let catalog = sample_catalog();
        let listing = ViewState::default()
            .with_selection(Selection::Category("Poetry".to_string()))
            .listing(&catalog);

        assert!(listing.is_empty());
        assert_eq!(listing.status, LoadStatus::Loaded { count: 4 });
        assert_eq!(listing.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn test_empty_states_follow_load_status() {
        let unloaded = Catalog::unloaded(ContentKind::Blog);
        assert_eq!(
            ViewState::default().listing(&unloaded).empty_state(),
            Some(EmptyState::Unavailable)
        );

        let empty = Catalog::from_items(ContentKind::Poem, Vec::new());
        assert_eq!(
            ViewState::default().listing(&empty).empty_state(),
            Some(EmptyState::NothingPublished)
        );
    }
}
