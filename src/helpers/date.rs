//! Date helper functions

use chrono::NaiveDate;

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// format_date(&date, "MMMM D, YYYY") // -> "January 15, 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format a date in ISO 8601 form
pub fn date_xml(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDate, format: Option<&str>) -> String {
    let display = match format {
        Some(format) => format_date(date, format),
        None => full_date(date),
    };
    format!(r#"<time datetime="{}">{}</time>"#, date_xml(date), display)
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longer tokens first so "DD" is not read as two "D"s
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
