//! HTML helper functions

use super::url::{full_url_for, share_url};
use crate::config::SiteConfig;
use crate::content::ContentItem;

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an image tag for a collection's media folder
///
/// # Examples
/// ```ignore
/// image_tag(&config, "blogs", "ai-scale.jpg", "Scale") // -> <img src="https://example.com/blogs/media/ai-scale.jpg" alt="Scale">
/// ```
pub fn image_tag(config: &SiteConfig, dir: &str, image: &str, alt: &str) -> String {
    let src = if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        full_url_for(config, &format!("{}/media/{}", dir.trim_matches('/'), image))
    };
    format!(
        r#"<img src="{}" alt="{}" loading="lazy">"#,
        html_escape(&src),
        html_escape(alt)
    )
}

/// Open Graph and Twitter card tags for sharing an item
pub fn share_meta_tags(config: &SiteConfig, item: &ContentItem) -> String {
    let title = html_escape(&format!("{} | {}", item.title, config.title));
    let description = html_escape(&item.share_description());
    let url = html_escape(&share_url(config, item));

    let mut html = String::new();
    for (property, content) in [
        ("og:title", &title),
        ("og:description", &description),
        ("og:url", &url),
    ] {
        html.push_str(&format!(
            r#"<meta property="{}" content="{}">"#,
            property, content
        ));
        html.push('\n');
    }
    for (name, content) in [
        ("twitter:title", &title),
        ("twitter:description", &description),
        ("twitter:url", &url),
    ] {
        html.push_str(&format!(r#"<meta name="{}" content="{}">"#, name, content));
        html.push('\n');
    }
    html
}
