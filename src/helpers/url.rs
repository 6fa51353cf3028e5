//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::content::{item_id, ContentItem};

/// Characters left as-is in query values: RFC 3986 unreserved
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "blog.html") // -> "https://example.com/blog.html"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Link that opens `item` directly on its collection page
///
/// # Examples
/// ```ignore
/// share_url(&config, &post) // -> "https://example.com/blog.html?post=future-of-genai"
/// ```
pub fn share_url(config: &SiteConfig, item: &ContentItem) -> String {
    let collection = config.collection(item.kind);
    format!(
        "{}?{}={}",
        full_url_for(config, &collection.page),
        collection.link_param,
        encode_url(&item.id)
    )
}

/// Item id addressed by a query string such as `?post=future-of-genai`.
///
/// Returns the normalized id of the first `param` value, or `None` when the
/// parameter is absent or blank.
pub fn deep_link_id(query: &str, param: &str) -> Option<String> {
    let query = query.split_once('?').map(|(_, q)| q).unwrap_or(query);
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == param)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            item_id(&percent_decode_str(&value).decode_utf8_lossy())
        })
        .filter(|id| !id.is_empty())
}

/// Encode a URL query value
pub fn encode_url(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
