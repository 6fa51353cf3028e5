//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;

use super::DocumentError;

/// Order given to items that do not declare one; sorts after any real rank.
pub const DEFAULT_ORDER: u32 = 999;

/// Metadata header of a post or poem
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub featured: bool,
    pub order: u32,
    pub image: Option<String>,
    pub excerpt: Option<String>,
    pub theme: Option<String>,

    /// Unrecognized keys, in the order they appear
    pub extra: IndexMap<String, String>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            category: None,
            author: None,
            featured: false,
            order: DEFAULT_ORDER,
            image: None,
            excerpt: None,
            theme: None,
            extra: IndexMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), DocumentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let mut lines = content.split_inclusive('\n');
        match lines.next() {
            Some(first) if first.trim() == "---" => {}
            _ => return Ok((FrontMatter::default(), content)),
        }

        let header_start = content.find('\n').map(|i| i + 1).unwrap_or(content.len());
        let mut offset = header_start;
        let mut closing = None;
        for line in lines {
            if line.trim() == "---" {
                closing = Some((offset, offset + line.len()));
                break;
            }
            offset += line.len();
        }

        let header = match closing {
            Some((end, _)) => &content[header_start..end],
            None => &content[header_start..],
        };

        // A leading --- followed by prose is a markdown divider, not a header
        if !header.lines().any(is_header_line) {
            return Ok((FrontMatter::default(), content));
        }

        let (end, body_start) = closing.ok_or(DocumentError::UnterminatedHeader)?;
        let fm = Self::from_header(&content[header_start..end]);

        Ok((fm, &content[body_start..]))
    }

    /// Build front-matter from the `key: value` lines of a header block
    fn from_header(header: &str) -> Self {
        let mut fm = FrontMatter::default();

        for line in header.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = strip_quotes(value.trim());

            match key {
                "title" => fm.title = non_empty(value),
                "date" => fm.date = non_empty(value),
                "category" => fm.category = non_empty(value),
                "author" => fm.author = non_empty(value),
                "featured" => fm.featured = parse_flag(value),
                "order" => fm.order = parse_order(value),
                "image" => fm.image = non_empty(value),
                "excerpt" => fm.excerpt = non_empty(value),
                "theme" => fm.theme = non_empty(value),
                _ => {
                    fm.extra.insert(key.to_string(), value.to_string());
                }
            }
        }

        fm
    }

    /// Parse the date string into a calendar date.
    ///
    /// `Ok(None)` means no date was given; an unreadable date is an error.
    pub fn parse_date(&self) -> Result<Option<NaiveDate>, DocumentError> {
        match &self.date {
            None => Ok(None),
            Some(s) => parse_date_string(s)
                .map(Some)
                .ok_or_else(|| DocumentError::InvalidDate(s.clone())),
        }
    }
}

/// `true`/`false` in any case; everything else reads as false
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Featured rank, falling back to [`DEFAULT_ORDER`] when unreadable
pub fn parse_order(value: &str) -> u32 {
    value.trim().parse().unwrap_or(DEFAULT_ORDER)
}

/// Whether a header line has a `key: value` shape
fn is_header_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }
    let Some((key, value)) = trimmed.split_once(':') else {
        return false;
    };
    let key = key.trim();
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !value.starts_with("//")
}

/// Drop one surrounding quote character from each end
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse a date string in various formats, keeping only the calendar date
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
