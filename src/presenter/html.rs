//! HTML fragments for list pages and standalone detail pages

use anyhow::Result;
use std::io::Write;

use super::{Presenter, VERSE_PLACEHOLDER};
use crate::config::SiteConfig;
use crate::content::{text, ContentItem, ContentKind, MarkdownRenderer};
use crate::helpers::{html_escape, image_tag, share_meta_tags, share_url, time_tag};
use crate::view::Listing;

/// Writes listing cards and full item pages as HTML
pub struct HtmlPresenter<'a, W: Write> {
    config: &'a SiteConfig,
    markdown: MarkdownRenderer,
    out: W,
}

impl<'a, W: Write> HtmlPresenter<'a, W> {
    pub fn new(config: &'a SiteConfig, out: W) -> Self {
        Self {
            config,
            markdown: MarkdownRenderer::from_config(&config.highlight),
            out,
        }
    }

    fn meta(&self, item: &ContentItem) -> String {
        let mut html = time_tag(&item.published, Some(self.config.date_format.as_str()));
        if let Some(category) = &item.category {
            html.push_str(&format!(
                r#" <span class="category">{}</span>"#,
                html_escape(category)
            ));
        }
        html.push_str(&format!(
            r#" <span class="reading-time">{} min read</span>"#,
            item.reading_time_minutes
        ));
        html
    }

    fn card(&self, item: &ContentItem, class: &str) -> String {
        let mut html = format!(r#"<article class="{}" id="{}">"#, class, html_escape(&item.id));
        html.push('\n');

        if let Some(image) = &item.image {
            let dir = &self.config.collection(item.kind).dir;
            html.push_str(&image_tag(self.config, dir, image, &item.title));
            html.push('\n');
        }

        html.push_str(&format!(
            r#"<h2><a href="{}">{}</a></h2>"#,
            html_escape(&share_url(self.config, item)),
            html_escape(&item.title)
        ));
        html.push('\n');
        html.push_str(&format!(r#"<div class="meta">{}</div>"#, self.meta(item)));
        html.push('\n');

        match item.kind {
            ContentKind::Blog => {
                html.push_str(&format!(
                    r#"<p class="excerpt">{}</p>"#,
                    html_escape(&item.excerpt)
                ));
            }
            ContentKind::Poem => {
                if let Some(theme) = &item.theme {
                    html.push_str(&format!(r#"<p class="theme">{}</p>"#, html_escape(theme)));
                    html.push('\n');
                }
                let verse = text::first_verse(&item.body);
                let preview = if verse.is_empty() {
                    html_escape(VERSE_PLACEHOLDER)
                } else {
                    verse
                        .iter()
                        .map(|line| html_escape(line))
                        .collect::<Vec<_>>()
                        .join("<br>\n")
                };
                html.push_str(&format!(r#"<div class="verse">{}</div>"#, preview));
            }
        }

        html.push_str("\n</article>\n");
        html
    }
}

impl<W: Write> Presenter for HtmlPresenter<'_, W> {
    fn render(&mut self, listing: &Listing<'_>) -> Result<()> {
        if let Some(empty) = listing.empty_state() {
            writeln!(
                self.out,
                r#"<p class="empty-state">{}</p>"#,
                html_escape(empty.message())
            )?;
            return Ok(());
        }

        let mut html = String::new();
        if let Some(hero) = listing.hero {
            html.push_str(&self.card(hero, "hero"));
        }
        html.push_str(r#"<section class="listing">"#);
        html.push('\n');
        for item in &listing.items {
            html.push_str(&self.card(item, "card"));
        }
        html.push_str("</section>\n");

        self.out.write_all(html.as_bytes())?;
        Ok(())
    }

    fn render_detail(&mut self, item: &ContentItem) -> Result<()> {
        let body = self.markdown.render(&item.body)?;
        let page_title = format!("{} | {}", item.title, self.config.title);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!(
            "<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n",
            html_escape(&self.config.language),
            html_escape(&page_title)
        ));
        html.push_str(&share_meta_tags(self.config, item));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!(
            r#"<article class="{}" id="{}">"#,
            item.kind.label(),
            html_escape(&item.id)
        ));
        html.push('\n');
        html.push_str(&format!("<h1>{}</h1>\n", html_escape(&item.title)));
        html.push_str(&format!(
            r#"<div class="meta"><span class="author">{}</span> {}</div>"#,
            html_escape(&item.author),
            self.meta(item)
        ));
        html.push('\n');
        if let Some(image) = &item.image {
            let dir = &self.config.collection(item.kind).dir;
            html.push_str(&image_tag(self.config, dir, image, &item.title));
            html.push('\n');
        }
        html.push_str(&format!(r#"<div class="content">{}</div>"#, body));
        html.push_str("\n</article>\n</body>\n</html>\n");

        self.out.write_all(html.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;
    use crate::test_helpers::{poem, sample_catalog};
    use crate::view::ViewState;

    fn render(config: &SiteConfig, listing: &Listing<'_>) -> String {
        let mut out = Vec::new();
        HtmlPresenter::new(config, &mut out).render(listing).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_listing_cards() {
        let config = SiteConfig::default();
        let catalog = sample_catalog();
        let html = render(&config, &ViewState::default().listing(&catalog));

        assert!(html.starts_with(r#"<article class="hero" id="ai-at-scale">"#));
        assert!(html.contains(r#"<article class="card" id="future-of-genai">"#));
        assert!(html.contains(
            r#"<a href="https://pruthvishetty.com/blog.html?post=production">Lessons from Production</a>"#
        ));
        assert!(html.contains(r#"<time datetime="2024-10-20">October 20, 2024</time>"#));
        assert!(html.contains(r#"<span class="category">AI Engineering</span>"#));
        assert_eq!(html.matches(r#"id="ai-at-scale""#).count(), 1);
    }

    #[test]
    fn test_poem_verse_preview() {
        let config = SiteConfig::default();
        let catalog = Catalog::from_items(
            ContentKind::Poem,
            vec![poem(
                "tokens",
                "2024-08-01",
                "Tokens",
                "Words & weights\nin quiet rows",
            )],
        );
        let html = render(&config, &ViewState::default().listing(&catalog));
        assert!(html.contains(r#"<div class="verse">Words &amp; weights<br>
in quiet rows</div>"#));
    }

    #[test]
    fn test_empty_listing() {
        let config = SiteConfig::default();
        let catalog = Catalog::from_items(ContentKind::Blog, Vec::new());
        assert_eq!(
            render(&config, &ViewState::default().listing(&catalog)),
            "<p class=\"empty-state\">Nothing has been published yet.</p>\n"
        );
    }

    #[test]
    fn test_detail_page() {
        let config = SiteConfig {
            language: "en-GB".to_string(),
            ..SiteConfig::default()
        };
        let mut post = sample_catalog().find_by_id("rust-notes").unwrap().clone();
        post.body = "## Borrowing\n\nOne `&mut` at a time.".to_string();
        post.image = Some("ownership.png".to_string());

        let mut out = Vec::new();
        HtmlPresenter::new(&config, &mut out)
            .render_detail(&post)
            .unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.contains(r#"<html lang="en-GB">"#));
        assert!(html.contains("<title>Notes on Ownership | Tokenized Thoughts</title>"));
        assert!(html.contains(r#"<meta property="og:url""#));
        assert!(html.contains("<h2>Borrowing</h2>"));
        assert!(html.contains("<code>&amp;mut</code>"));
        assert!(html.contains(r#"src="https://pruthvishetty.com/blogs/media/ownership.png""#));
    }
}
