//! Presenters turn listings and single items into output
//!
//! The engine hands over a composed [`Listing`] or one [`ContentItem`]; a
//! presenter decides how it looks. Text is meant for the terminal, HTML
//! mirrors the site's cards and detail view, JSON feeds other tools.

mod html;
mod json;
mod text;

pub use html::HtmlPresenter;
pub use json::JsonPresenter;
pub use text::TextPresenter;

use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::content::ContentItem;
use crate::view::Listing;

/// Shown on a poem card when no opening verse can be extracted
pub const VERSE_PLACEHOLDER: &str = "Click to read...";

/// Renders listings and item details
pub trait Presenter {
    /// Render a list page: the hero, the remaining items, or an empty state
    fn render(&mut self, listing: &Listing<'_>) -> Result<()>;

    /// Render one item in full
    fn render_detail(&mut self, item: &ContentItem) -> Result<()>;
}

/// Output format selectable on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Html,
}

impl Format {
    /// Presenter for this format writing to `out`
    pub fn presenter<'a, W: Write + 'a>(
        self,
        config: &'a SiteConfig,
        out: W,
    ) -> Box<dyn Presenter + 'a> {
        match self {
            Format::Text => Box::new(TextPresenter::new(config, out)),
            Format::Json => Box::new(JsonPresenter::new(out)),
            Format::Html => Box::new(HtmlPresenter::new(config, out)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
            Format::Html => f.write_str("html"),
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "html" => Ok(Format::Html),
            other => anyhow::bail!("Unknown format: {}. Available: text, json, html", other),
        }
    }
}
