//! JSON output for scripting

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::Presenter;
use crate::content::ContentItem;
use crate::view::{EmptyState, Listing};

#[derive(Serialize)]
struct ListingOutput<'l, 'a> {
    #[serde(flatten)]
    listing: &'l Listing<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_state: Option<EmptyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Writes listings and items as pretty-printed JSON
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn write<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn render(&mut self, listing: &Listing<'_>) -> Result<()> {
        let empty_state = listing.empty_state();
        self.write(&ListingOutput {
            listing,
            empty_state,
            message: empty_state.map(|e| e.message()),
        })
    }

    fn render_detail(&mut self, item: &ContentItem) -> Result<()> {
        self.write(item)
    }
}
