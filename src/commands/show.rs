//! Show a single item

use anyhow::Result;
use std::io::Write;

use crate::content::{item_id, ContentKind};
use crate::helpers::deep_link_id;
use crate::presenter::Format;
use crate::Folio;

/// Id addressed by `target`, which is either a bare id or a share link
/// such as `blog.html?post=future-of-genai`
pub fn resolve_id(target: &str, link_param: &str) -> String {
    deep_link_id(target, link_param).unwrap_or_else(|| item_id(target))
}

/// Render the item `target` points at
pub async fn run<W: Write>(
    folio: &Folio,
    kind: ContentKind,
    target: &str,
    format: Format,
    out: W,
) -> Result<()> {
    let id = resolve_id(target, &folio.config.collection(kind).link_param);
    let catalog = folio.load_catalog(kind).await?;

    if !catalog.status().is_loaded() {
        anyhow::bail!("No {} content could be loaded", kind);
    }

    let item = catalog
        .find_by_id(&id)
        .ok_or_else(|| anyhow::anyhow!("No {} with id {:?}", kind.label(), id))?;

    format.presenter(&folio.config, out).render_detail(item)
}
