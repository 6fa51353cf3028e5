//! Shared test utilities: small content items and catalogs built in memory.

use chrono::NaiveDate;

use crate::content::{Catalog, ContentItem, ContentKind};

/// Minimal blog item with a given id and `YYYY-MM-DD` date
pub fn item(id: &str, date: &str) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        kind: ContentKind::Blog,
        title: id.replace('-', " "),
        published: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: None,
        author: "Pruthvi Shetty".to_string(),
        is_featured: false,
        featured_order: 999,
        body: format!("Body of {}", id),
        excerpt: format!("Excerpt of {}", id),
        theme: None,
        image: None,
        source: format!("{}.md", id),
        reading_time_minutes: 1,
    }
}

/// Blog item with a title and category
pub fn post(id: &str, date: &str, title: &str, category: &str) -> ContentItem {
    ContentItem {
        title: title.to_string(),
        category: Some(category.to_string()),
        ..item(id, date)
    }
}

/// A small blog catalog:
///
/// | id              | date       | category       | featured |
/// |-----------------|------------|----------------|----------|
/// | future-of-genai | 2024-12-01 | AI Trends      | order 2  |
/// | ai-at-scale     | 2024-11-15 | AI Engineering | order 1  |
/// | production      | 2024-10-20 | AI Engineering | no       |
/// | rust-notes      | 2024-09-01 | Programming    | no       |
pub fn sample_catalog() -> Catalog {
    let mut future = post(
        "future-of-genai",
        "2024-12-01",
        "The Future of GenAI in Enterprise",
        "AI Trends",
    );
    future.is_featured = true;
    future.featured_order = 2;

    let mut scale = post(
        "ai-at-scale",
        "2024-11-15",
        "Building AI Engineering Teams at Scale",
        "AI Engineering",
    );
    scale.is_featured = true;
    scale.featured_order = 1;

    let mut production = post(
        "production",
        "2024-10-20",
        "Lessons from Production",
        "AI Engineering",
    );
    production.body = "Latency budgets, retries and semantic caching.".to_string();

    let rust = post("rust-notes", "2024-09-01", "Notes on Ownership", "Programming");

    Catalog::from_items(ContentKind::Blog, vec![production, rust, future, scale])
}

/// Poem item with a title and verse body
pub fn poem(id: &str, date: &str, title: &str, body: &str) -> ContentItem {
    ContentItem {
        kind: ContentKind::Poem,
        title: title.to_string(),
        body: body.to_string(),
        ..item(id, date)
    }
}
