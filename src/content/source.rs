//! Source providers - where catalog documents come from
//!
//! A collection can be fed by embedded records, a manifest of filenames,
//! a configured list of default filenames, or a scan of its directory.
//! The loader asks each provider in priority order and uses the first one
//! that is available.

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::frontmatter::{parse_flag, parse_order, FrontMatter, DEFAULT_ORDER};
use super::DocumentError;

/// A fetched document, before it becomes a content item
#[derive(Debug, Clone)]
pub struct Document {
    /// Filename the document was read from (empty for untitled records)
    pub name: String,
    pub body: DocumentBody,
}

#[derive(Debug, Clone)]
pub enum DocumentBody {
    /// Markdown text, possibly with a leading header block
    Text(String),
    /// Metadata already separated from the body
    Parsed { front_matter: FrontMatter, body: String },
}

/// A document that could not be fetched or decoded
#[derive(Debug)]
pub struct DocumentFailure {
    pub name: String,
    pub error: DocumentError,
}

pub type Fetched = Result<Document, DocumentFailure>;

/// Result of asking one provider for documents
#[derive(Debug)]
pub enum SourceOutcome {
    Available(Vec<Fetched>),
    Unavailable,
}

/// A place documents can be loaded from
#[async_trait]
pub trait SourceProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> SourceOutcome;
}

/// Embedded JSON records carrying metadata and body together
pub struct EmbeddedRecords {
    path: PathBuf,
}

impl EmbeddedRecords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SourceProvider for EmbeddedRecords {
    fn name(&self) -> &str {
        "embedded"
    }

    async fn fetch(&self) -> SourceOutcome {
        let Ok(content) = tokio::fs::read_to_string(&self.path).await else {
            return SourceOutcome::Unavailable;
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring embedded records {:?}: {}", self.path, e);
                return SourceOutcome::Unavailable;
            }
        };

        if values.is_empty() {
            return SourceOutcome::Unavailable;
        }

        let documents = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<EmbeddedRecord>(value)
                    .map(EmbeddedRecord::into_document)
                    .map_err(|e| DocumentFailure {
                        name: format!("record #{}", index),
                        error: e.into(),
                    })
            })
            .collect();

        SourceOutcome::Available(documents)
    }
}

/// A JSON manifest listing the document filenames of a collection
pub struct Manifest {
    dir: PathBuf,
    path: PathBuf,
}

impl Manifest {
    pub fn new(dir: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            path: path.into(),
        }
    }
}

#[async_trait]
impl SourceProvider for Manifest {
    fn name(&self) -> &str {
        "manifest"
    }

    async fn fetch(&self) -> SourceOutcome {
        let Ok(content) = tokio::fs::read_to_string(&self.path).await else {
            return SourceOutcome::Unavailable;
        };

        let names = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(value) => manifest_names(&value),
            Err(e) => {
                tracing::warn!("Ignoring manifest {:?}: {}", self.path, e);
                return SourceOutcome::Unavailable;
            }
        };

        match names {
            Some(names) => SourceOutcome::Available(read_documents(&self.dir, names).await),
            None => {
                tracing::warn!("Manifest {:?} lists no filenames", self.path);
                SourceOutcome::Unavailable
            }
        }
    }
}

/// Filenames from a manifest: a bare array, or the first array-valued key
fn manifest_names(value: &serde_json::Value) -> Option<Vec<String>> {
    let array = match value {
        serde_json::Value::Array(array) => array,
        serde_json::Value::Object(map) => map.values().find_map(|v| v.as_array())?,
        _ => return None,
    };

    Some(
        array
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::to_string)
            .collect(),
    )
}

/// Filenames fixed in the site configuration
pub struct DefaultFiles {
    dir: PathBuf,
    files: Vec<String>,
}

impl DefaultFiles {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }
}

#[async_trait]
impl SourceProvider for DefaultFiles {
    fn name(&self) -> &str {
        "defaults"
    }

    async fn fetch(&self) -> SourceOutcome {
        if self.files.is_empty() {
            return SourceOutcome::Unavailable;
        }
        SourceOutcome::Available(read_documents(&self.dir, self.files.clone()).await)
    }
}

/// Every markdown file directly inside the collection directory
pub struct DirectoryScan {
    dir: PathBuf,
}

impl DirectoryScan {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SourceProvider for DirectoryScan {
    fn name(&self) -> &str {
        "directory"
    }

    async fn fetch(&self) -> SourceOutcome {
        if !self.dir.is_dir() {
            return SourceOutcome::Unavailable;
        }

        let names: Vec<String> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_markdown_file(e.path()))
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();

        SourceOutcome::Available(read_documents(&self.dir, names).await)
    }
}

/// Read documents concurrently, keeping the requested order
async fn read_documents(dir: &Path, names: Vec<String>) -> Vec<Fetched> {
    let reads = names.into_iter().map(|name| async move {
        let path = dir.join(&name);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Document {
                name,
                body: DocumentBody::Text(content),
            }),
            Err(e) => Err(DocumentFailure {
                name,
                error: e.into(),
            }),
        }
    });

    join_all(reads).await
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// One embedded record, as written in the collection's data file
#[derive(Debug, Deserialize)]
struct EmbeddedRecord {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default, deserialize_with = "loose_flag")]
    featured: bool,
    #[serde(default = "default_order", deserialize_with = "loose_order")]
    order: u32,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    theme: Option<String>,
    content: String,
}

impl EmbeddedRecord {
    fn into_document(self) -> Document {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let front_matter = FrontMatter {
            title: present(self.title),
            date: present(self.date),
            category: present(self.category),
            author: present(self.author),
            featured: self.featured,
            order: self.order,
            image: present(self.image),
            excerpt: present(self.excerpt),
            theme: present(self.theme),
            ..Default::default()
        };

        Document {
            name: self.filename.unwrap_or_default(),
            body: DocumentBody::Parsed {
                front_matter,
                body: self.content,
            },
        }
    }
}

fn default_order() -> u32 {
    DEFAULT_ORDER
}

/// JSON scalar that may arrive as a bool, a number or a string
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(b)) => b,
        Some(Loose::Text(s)) => parse_flag(&s),
        Some(Loose::Int(_)) | None => false,
    })
}

fn loose_order<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => u32::try_from(n).unwrap_or(DEFAULT_ORDER),
        Some(Loose::Text(s)) => parse_order(&s),
        Some(Loose::Bool(_)) | None => DEFAULT_ORDER,
    })
}
