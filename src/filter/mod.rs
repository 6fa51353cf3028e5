//! Filter and search engine
//!
//! Pure functions that narrow or reorder a sequence of content items.
//! Each takes anything iterable over `&ContentItem` (a catalog's slice or
//! the result of a previous step) so steps chain without copying items.

mod sort;

pub use sort::{sort_by, SortKey};

use crate::content::ContentItem;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Keep items whose category equals `category` exactly.
///
/// `"all"` or an empty value keeps everything.
pub fn by_category<'a, I>(items: I, category: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let category = category.trim();
    if category.is_empty() || category == ALL_CATEGORIES {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| item.category.as_deref() == Some(category))
        .collect()
}

/// Keep featured items
pub fn by_featured<'a, I>(items: I) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items.into_iter().filter(|item| item.is_featured).collect()
}

/// Keep items where any of title, excerpt, body, category or author contains
/// `query`, ignoring case.
///
/// A blank query keeps everything.
pub fn by_search<'a, I>(items: I, query: &str) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| matches_search(item, &needle))
        .collect()
}

/// Whether an item contains an already lowercased, non-empty needle
fn matches_search(item: &ContentItem, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&item.title)
        || contains(&item.excerpt)
        || contains(&item.body)
        || item.category.as_deref().is_some_and(contains)
        || contains(&item.author)
}
