//! Plain terminal output

use anyhow::Result;
use std::io::Write;

use super::{Presenter, VERSE_PLACEHOLDER};
use crate::config::SiteConfig;
use crate::content::{text, ContentItem, ContentKind};
use crate::helpers::{format_date, share_url};
use crate::view::Listing;

/// Writes listings as indented text, one card per item
pub struct TextPresenter<'a, W: Write> {
    config: &'a SiteConfig,
    out: W,
}

impl<'a, W: Write> TextPresenter<'a, W> {
    pub fn new(config: &'a SiteConfig, out: W) -> Self {
        Self { config, out }
    }

    /// `date · category · N min read`
    fn meta_line(&self, item: &ContentItem) -> String {
        let mut parts = vec![format_date(&item.published, &self.config.date_format)];
        if let Some(category) = &item.category {
            parts.push(category.clone());
        }
        parts.push(format!("{} min read", item.reading_time_minutes));
        parts.join(" · ")
    }

    fn card(&mut self, item: &ContentItem, marker: &str) -> Result<()> {
        let meta = self.meta_line(item);
        writeln!(self.out, "{}{} [{}]", marker, item.title, item.id)?;
        writeln!(self.out, "    {}", meta)?;

        match item.kind {
            ContentKind::Blog => writeln!(self.out, "    {}", item.excerpt)?,
            ContentKind::Poem => {
                if let Some(theme) = &item.theme {
                    writeln!(self.out, "    {}", theme)?;
                }
                let verse = text::first_verse(&item.body);
                if verse.is_empty() {
                    writeln!(self.out, "    {}", VERSE_PLACEHOLDER)?;
                }
                for line in verse {
                    writeln!(self.out, "    | {}", line)?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<'_, W> {
    fn render(&mut self, listing: &Listing<'_>) -> Result<()> {
        if let Some(empty) = listing.empty_state() {
            writeln!(self.out, "{}", empty.message())?;
            return Ok(());
        }

        if let Some(hero) = listing.hero {
            self.card(hero, "★ ")?;
            writeln!(self.out)?;
        }
        for item in &listing.items {
            self.card(item, "  ")?;
        }
        Ok(())
    }

    fn render_detail(&mut self, item: &ContentItem) -> Result<()> {
        let meta = self.meta_line(item);
        writeln!(self.out, "{}", item.title)?;
        writeln!(self.out, "by {} · {}", item.author, meta)?;
        if let Some(theme) = &item.theme {
            writeln!(self.out, "{}", theme)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", item.body)?;
        writeln!(self.out)?;
        let link = share_url(self.config, item);
        writeln!(self.out, "Share: {}", link)?;
        Ok(())
    }
}
