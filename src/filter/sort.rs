//! Ordering of item lists

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::content::ContentItem;

/// How a list of items is ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    DateAscending,
    #[default]
    DateDescending,
    TitleAlphabetical,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::DateAscending => "date-ascending",
            SortKey::DateDescending => "date-descending",
            SortKey::TitleAlphabetical => "title-alphabetical",
        };
        f.write_str(name)
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date-ascending" | "date-asc" | "oldest" => Ok(SortKey::DateAscending),
            "date-descending" | "date-desc" | "newest" => Ok(SortKey::DateDescending),
            "title-alphabetical" | "title" => Ok(SortKey::TitleAlphabetical),
            other => anyhow::bail!(
                "Unknown sort: {}. Available: date-ascending, date-descending, title-alphabetical",
                other
            ),
        }
    }
}

/// Order items by `key`. The sort is stable: ties keep their input order.
pub fn sort_by<'a, I>(items: I, key: SortKey) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut items: Vec<&ContentItem> = items.into_iter().collect();

    match key {
        SortKey::DateAscending => items.sort_by(|a, b| a.published.cmp(&b.published)),
        SortKey::DateDescending => items.sort_by(|a, b| b.published.cmp(&a.published)),
        SortKey::TitleAlphabetical => items.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }

    items
}

/// Case-insensitive title order, falling back to the raw text for ties
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
