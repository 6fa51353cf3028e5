//! Category and site statistics

use anyhow::Result;
use std::io::Write;

use crate::content::{Catalog, ContentKind};
use crate::Folio;

/// List a collection's categories with item counts, most used first
pub async fn categories<W: Write>(folio: &Folio, kind: ContentKind, mut out: W) -> Result<()> {
    let catalog = folio.load_catalog(kind).await?;

    let mut categories: Vec<_> = catalog.category_counts().into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    writeln!(out, "Categories ({}):", categories.len())?;
    for (category, count) in categories {
        writeln!(out, "  {} ({})", category, count)?;
    }
    Ok(())
}

/// Item counts and total reading time for every collection
pub async fn run<W: Write>(folio: &Folio, mut out: W) -> Result<()> {
    for kind in [ContentKind::Blog, ContentKind::Poem] {
        let catalog = folio.load_catalog(kind).await?;
        writeln!(out, "{}", summary(&catalog))?;
    }
    Ok(())
}

/// One-line summary of a catalog
fn summary(catalog: &Catalog) -> String {
    let kind = catalog.kind();
    if !catalog.status().is_loaded() {
        return format!("{}: unavailable", kind);
    }

    let featured = catalog.items().iter().filter(|i| i.is_featured).count();
    let mut line = format!(
        "{}: {} {}{}, {} min total reading time",
        kind,
        catalog.len(),
        kind.label(),
        if catalog.len() == 1 { "" } else { "s" },
        catalog.total_reading_time()
    );
    if featured > 0 {
        line.push_str(&format!(", {} featured", featured));
    }
    line
}
