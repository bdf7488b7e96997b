use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown wherever an article has no usable publish date.
pub const DATE_UNAVAILABLE: &str = "Date not available";

/// Format an optional date-like string as `"{Mon} {D}, {YYYY}"`.
///
/// Accepts bare dates (`2024-03-05`), naive datetimes and RFC 3339
/// timestamps, since the API has emitted all three over time. Absent or
/// unparseable input never panics; both collapse to [`DATE_UNAVAILABLE`].
pub fn format_date(input: Option<&str>) -> String {
    let Some(raw) = input.map(str::trim).filter(|value| !value.is_empty()) else {
        return DATE_UNAVAILABLE.to_string();
    };

    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| DATE_UNAVAILABLE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Truncate plain text for card excerpts, appending an ellipsis.
///
/// Splits on a char boundary, never inside a code point.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Excerpt for a card: the article's own excerpt, else a content prefix.
pub fn card_excerpt(explicit: Option<&str>, content: &str, max_chars: usize) -> String {
    match explicit.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None => excerpt(&strip_tags(content), max_chars),
    }
}

// Good enough for excerpt previews; the article body itself is rendered from
// the sanitized HTML, not from this.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {},
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_date_uses_literal_fallback() {
        assert_eq!(format_date(None), DATE_UNAVAILABLE);
        assert_eq!(format_date(Some("")), DATE_UNAVAILABLE);
        assert_eq!(format_date(Some("   ")), DATE_UNAVAILABLE);
    }

    #[test]
    fn iso_date_formats_as_short_month_day_year() {
        assert_eq!(format_date(Some("2024-03-05")), "Mar 5, 2024");
        assert_eq!(format_date(Some("2023-12-25")), "Dec 25, 2023");
    }

    #[test]
    fn timestamps_format_like_bare_dates() {
        assert_eq!(format_date(Some("2024-03-05T08:30:00Z")), "Mar 5, 2024");
        assert_eq!(format_date(Some("2024-03-05T08:30:00")), "Mar 5, 2024");
    }

    #[test]
    fn unparseable_date_degrades_instead_of_panicking() {
        assert_eq!(format_date(Some("yesterday")), DATE_UNAVAILABLE);
        assert_eq!(format_date(Some("03/05/2024")), DATE_UNAVAILABLE);
    }

    #[test]
    fn excerpt_truncates_on_char_boundaries() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("a long sentence here", 6), "a long...");
        // Multibyte input must not split a code point.
        assert_eq!(excerpt("日本語のテキスト", 3), "日本語...");
    }

    #[test]
    fn card_excerpt_prefers_explicit_text_and_strips_markup() {
        assert_eq!(card_excerpt(Some("Summary"), "<p>ignored</p>", 120), "Summary");
        assert_eq!(card_excerpt(None, "<p>From the body</p>", 120), "From the body");
        assert_eq!(card_excerpt(Some("  "), "<p>From the body</p>", 120), "From the body");
    }
}
