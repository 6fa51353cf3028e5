//! Plain-text derivations over markdown bodies

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Markdown punctuation removed before building an excerpt
    static ref MARKUP_CHARS: Regex = Regex::new(r"[#*`\[\]()]").unwrap();
    /// Heading and emphasis markers removed from share descriptions
    static ref EMPHASIS_CHARS: Regex = Regex::new(r"[#*]").unwrap();
}

/// Number of whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Minutes needed to read `text` at `words_per_minute`, never less than one
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let words = u32::try_from(word_count(text)).unwrap_or(u32::MAX);
    words.div_ceil(words_per_minute.max(1)).max(1)
}

/// Excerpt for items that do not provide one: markup stripped, cut to
/// `limit` characters, suffixed with an ellipsis.
///
/// Whitespace around the cut is trimmed before the ellipsis is added, so a
/// cut landing on a space or line break never yields `" ..."`.
pub fn derive_excerpt(body: &str, limit: usize) -> String {
    let plain = MARKUP_CHARS.replace_all(body, "");
    let cut: String = plain.chars().take(limit).collect();
    format!("{}...", cut.trim())
}

/// Short description for share cards: the first `limit` characters of the
/// body with heading and emphasis markers removed.
pub fn plain_prefix(body: &str, limit: usize) -> String {
    let cut: String = body.chars().take(limit).collect();
    EMPHASIS_CHARS.replace_all(&cut, "").trim().to_string()
}

/// Opening lines of a poem for preview cards.
///
/// Headings are skipped, a `---` divider ends the preview, and at most four
/// lines are kept.
pub fn first_verse(body: &str) -> Vec<&str> {
    let mut verse = Vec::new();

    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with('#') {
            continue;
        }
        if line == "---" {
            break;
        }
        verse.push(line);
        if verse.len() >= 4 {
            break;
        }
    }

    verse
}
