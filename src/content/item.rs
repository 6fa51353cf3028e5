//! Content item model shared by blog posts and poems

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::frontmatter::FrontMatter;
use super::text;
use super::DocumentError;
use crate::config::SiteConfig;

/// Which collection an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Prose blog posts
    Blog,
    /// Poems
    Poem,
}

impl ContentKind {
    /// Assumed reading pace; poetry is read more slowly than prose
    pub fn words_per_minute(self) -> u32 {
        match self {
            ContentKind::Blog => 200,
            ContentKind::Poem => 150,
        }
    }

    /// Title used when a document does not declare one
    pub fn default_title(self) -> &'static str {
        match self {
            ContentKind::Blog => "Untitled Post",
            ContentKind::Poem => "Untitled",
        }
    }

    /// Singular noun for messages
    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Blog => "post",
            ContentKind::Poem => "poem",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Blog => f.write_str("blog"),
            ContentKind::Poem => f.write_str("poems"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" | "post" | "posts" => Ok(ContentKind::Blog),
            "poem" | "poems" | "poetry" => Ok(ContentKind::Poem),
            other => anyhow::bail!("Unknown content kind: {}. Available: blog, poems", other),
        }
    }
}

/// A blog post or poem, with its derived fields filled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, the slug of the source filename
    pub id: String,

    pub kind: ContentKind,

    pub title: String,

    /// Publication date
    pub published: NaiveDate,

    /// Classification, blog posts only
    pub category: Option<String>,

    pub author: String,

    pub is_featured: bool,

    /// Rank among featured items; lower is more prominent
    pub featured_order: u32,

    /// Raw markdown body
    pub body: String,

    pub excerpt: String,

    /// One-line descriptor, poems only
    pub theme: Option<String>,

    /// Cover image filename, blog posts only
    pub image: Option<String>,

    /// Filename the item was loaded from
    pub source: String,

    pub reading_time_minutes: u32,
}

/// Fallback values applied while building items
#[derive(Debug, Clone)]
pub struct ItemDefaults {
    pub author: String,
    pub category: Option<String>,
    pub excerpt_length: usize,
    pub today: NaiveDate,
}

impl ItemDefaults {
    /// Defaults for a collection, taken from the site configuration
    pub fn from_config(config: &SiteConfig, kind: ContentKind) -> Self {
        Self {
            author: config.author.clone(),
            category: config.collection(kind).default_category.clone(),
            excerpt_length: config.excerpt_length,
            today: Local::now().date_naive(),
        }
    }
}

impl ContentItem {
    /// Build an item from parsed front-matter and its body
    pub fn from_parts(
        kind: ContentKind,
        source: &str,
        fm: FrontMatter,
        body: &str,
        defaults: &ItemDefaults,
    ) -> Result<Self, DocumentError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(DocumentError::EmptyBody);
        }

        let published = fm.parse_date()?.unwrap_or(defaults.today);

        let title = match fm.title {
            Some(title) => title,
            None if kind == ContentKind::Poem && !source.is_empty() => {
                file_stem(source).replace('-', " ")
            }
            None => kind.default_title().to_string(),
        };

        let id = if source.is_empty() {
            slug::slugify(&title)
        } else {
            item_id(source)
        };

        let excerpt = fm
            .excerpt
            .unwrap_or_else(|| text::derive_excerpt(body, defaults.excerpt_length));

        let (category, is_featured, featured_order, image, theme) = match kind {
            ContentKind::Blog => (
                fm.category.or_else(|| defaults.category.clone()),
                fm.featured,
                fm.order,
                fm.image,
                None,
            ),
            ContentKind::Poem => (None, false, fm.order, None, fm.theme),
        };

        Ok(Self {
            id,
            kind,
            title,
            published,
            category,
            author: fm.author.unwrap_or_else(|| defaults.author.clone()),
            is_featured,
            featured_order,
            body: body.to_string(),
            excerpt,
            theme,
            image,
            source: source.to_string(),
            reading_time_minutes: text::reading_time(body, kind.words_per_minute()),
        })
    }

    /// Description for share cards and meta tags
    pub fn share_description(&self) -> String {
        match self.kind {
            ContentKind::Blog => self.excerpt.clone(),
            ContentKind::Poem => self
                .theme
                .clone()
                .unwrap_or_else(|| text::plain_prefix(&self.body, 150)),
        }
    }
}

/// Filename without directories or markdown extension
fn file_stem(source: &str) -> &str {
    let name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    name.strip_suffix(".md")
        .or_else(|| name.strip_suffix(".markdown"))
        .unwrap_or(name)
}

/// Identifier for a source filename: its stem, slugified
pub fn item_id(source: &str) -> String {
    slug::slugify(file_stem(source.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ItemDefaults {
        ItemDefaults {
            author: "Pruthvi Shetty".to_string(),
            category: Some("General".to_string()),
            excerpt_length: 200,
            today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_item_id() {
        assert_eq!(item_id("building-ai-at-scale.md"), "building-ai-at-scale");
        assert_eq!(item_id("blogs/Future_Of_GenAI.markdown"), "future-of-genai");
        assert_eq!(item_id("  Lessons From Production "), "lessons-from-production");
    }

    #[test]
    fn test_blog_item_defaults() {
        let item = ContentItem::from_parts(
            ContentKind::Blog,
            "notes.md",
            FrontMatter::default(),
            "Just a few words here.",
            &defaults(),
        )
        .unwrap();

        assert_eq!(item.id, "notes");
        assert_eq!(item.title, "Untitled Post");
        assert_eq!(item.author, "Pruthvi Shetty");
        assert_eq!(item.category.as_deref(), Some("General"));
        assert_eq!(item.published, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(item.featured_order, 999);
        assert_eq!(item.excerpt, "Just a few words here....");
        assert_eq!(item.reading_time_minutes, 1);
    }

    #[test]
    fn test_poem_ignores_blog_fields() {
        let fm = FrontMatter {
            category: Some("Poetry".to_string()),
            featured: true,
            theme: Some("Code and conscience".to_string()),
            image: Some("cover.jpg".to_string()),
            ..Default::default()
        };
        let item = ContentItem::from_parts(
            ContentKind::Poem,
            "digital-dreams.md",
            fm,
            "*In circuits bright and silicon deep,*",
            &defaults(),
        )
        .unwrap();

        assert_eq!(item.title, "digital dreams");
        assert_eq!(item.category, None);
        assert!(!item.is_featured);
        assert_eq!(item.image, None);
        assert_eq!(item.theme.as_deref(), Some("Code and conscience"));
        assert_eq!(item.share_description(), "Code and conscience");
    }

    #[test]
    fn test_poem_reading_rate() {
        let body = vec!["verse"; 300].join(" ");
        let item = ContentItem::from_parts(
            ContentKind::Poem,
            "long.md",
            FrontMatter::default(),
            &body,
            &defaults(),
        )
        .unwrap();
        assert_eq!(item.reading_time_minutes, 2);
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let err = ContentItem::from_parts(
            ContentKind::Blog,
            "empty.md",
            FrontMatter::default(),
            " \n\n ",
            &defaults(),
        )
        .unwrap_err();
        assert!(matches!(err, DocumentError::EmptyBody));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let fm = FrontMatter {
            date: Some("someday".to_string()),
            ..Default::default()
        };
        let err = ContentItem::from_parts(ContentKind::Blog, "x.md", fm, "Body", &defaults())
            .unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDate(_)));
    }

    #[test]
    fn test_id_from_title_without_source() {
        let fm = FrontMatter {
            title: Some("The Future of GenAI".to_string()),
            ..Default::default()
        };
        let item =
            ContentItem::from_parts(ContentKind::Blog, "", fm, "Body", &defaults()).unwrap();
        assert_eq!(item.id, "the-future-of-genai");
    }

    #[test]
    fn test_content_kind_from_str() {
        assert_eq!("Blog".parse::<ContentKind>().unwrap(), ContentKind::Blog);
        assert_eq!("poetry".parse::<ContentKind>().unwrap(), ContentKind::Poem);
        assert!("videos".parse::<ContentKind>().is_err());
    }
}
