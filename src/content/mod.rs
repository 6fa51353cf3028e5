//! Content module - content items, the catalog, and how they are loaded

mod catalog;
mod error;
mod frontmatter;
mod item;
pub mod loader;
mod markdown;
pub mod source;
pub mod text;

pub use catalog::{Catalog, LoadStatus};
pub use error::DocumentError;
pub use frontmatter::{FrontMatter, DEFAULT_ORDER};
pub use item::{item_id, ContentItem, ContentKind, ItemDefaults};
pub use loader::{ContentLoader, LoadError};
pub use markdown::MarkdownRenderer;
