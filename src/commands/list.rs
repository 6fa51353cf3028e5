//! List a collection

use anyhow::Result;
use std::io::Write;

use crate::content::ContentKind;
use crate::presenter::Format;
use crate::view::ViewState;
use crate::Folio;

/// Load `kind`, apply the view and render the resulting listing
pub async fn run<W: Write>(
    folio: &Folio,
    kind: ContentKind,
    view: &ViewState,
    format: Format,
    out: W,
) -> Result<()> {
    let catalog = folio.load_catalog(kind).await?;
    let listing = view.listing(&catalog);

    if view.is_searching() {
        tracing::debug!("Searching {} for {:?}", kind, view.search.trim());
    }
    tracing::debug!(
        "Showing {} of {} {} (selection: {}, sort: {})",
        listing.len(),
        catalog.len(),
        kind,
        view.selection,
        view.sort
    );

    format.presenter(&folio.config, out).render(&listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Selection;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let blogs = dir.path().join("blogs");
        fs::create_dir_all(&blogs).unwrap();
        fs::write(
            blogs.join("posts.json"),
            r#"{"posts": ["ai-at-scale.md", "rust-notes.md"]}"#,
        )
        .unwrap();
        fs::write(
            blogs.join("ai-at-scale.md"),
            "---\ntitle: Building AI Engineering Teams at Scale\ndate: 2024-11-15\ncategory: AI Engineering\nfeatured: true\norder: 1\n---\n\nHiring, platforms and evaluation.",
        )
        .unwrap();
        fs::write(
            blogs.join("rust-notes.md"),
            "---\ntitle: Notes on Ownership\ndate: 2024-09-01\ncategory: Programming\n---\n\nBorrowing rules.",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let dir = site();
        let folio = Folio::new(dir.path()).unwrap();
        let view = ViewState::default().with_selection(Selection::Category("Programming".into()));

        let mut out = Vec::new();
        run(&folio, ContentKind::Blog, &view, Format::Text, &mut out)
            .await
            .unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("  Notes on Ownership [rust-notes]\n"));
        assert!(!output.contains("ai-at-scale"));
    }

    #[tokio::test]
    async fn test_list_json_reports_hero() {
        let dir = site();
        let folio = Folio::new(dir.path()).unwrap();

        let mut out = Vec::new();
        run(
            &folio,
            ContentKind::Blog,
            &ViewState::default(),
            Format::Json,
            &mut out,
        )
        .await
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["hero"]["id"], "ai-at-scale");
        assert_eq!(value["items"][0]["id"], "rust-notes");
    }

    #[tokio::test]
    async fn test_list_missing_collection() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let mut out = Vec::new();
        run(
            &folio,
            ContentKind::Poem,
            &ViewState::default(),
            Format::Text,
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Content is unavailable right now.\n"
        );
    }
}
