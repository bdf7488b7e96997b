use once_cell::sync::Lazy;
use regex::Regex;

/// One entry of an article's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 2 or 3.
    pub level: u8,
    pub text: String,
    /// Anchor id derived from the text.
    pub id: String,
}

// Matches <h2>/<h3> open tags (attributes allowed) whose body is flat inline
// text. Headings that contain nested markup (<em>, <code>, ...) do not match
// and are dropped from the table of contents.
static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<h([2-3])[^>]*>([^<]+)</h[2-3]>").expect("heading pattern compiles")
});

/// Scan an HTML content string for `<h2>`/`<h3>` headings, in document order.
///
/// Pure over the string: it never touches the live document, so it can run in
/// tests or ahead of rendering. Identical heading texts produce identical
/// anchor ids; callers that link into the document get the first occurrence.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    HEADING_PATTERN
        .captures_iter(content)
        .filter_map(|captures| {
            let level: u8 = captures.get(1)?.as_str().parse().ok()?;
            let text = captures.get(2)?.as_str().to_string();
            let id = anchor_id(&text);
            Some(Heading { level, text, id })
        })
        .collect()
}

/// Lowercase, collapse whitespace runs to hyphens, keep only word chars and
/// hyphens.
fn anchor_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    hyphenated
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '-' || *ch == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_headings_in_document_order() {
        let content = "<h2>Intro</h2><p>x</p><h3>Sub Point</h3>";
        let headings = extract_headings(content);

        assert_eq!(
            headings,
            vec![
                Heading { level: 2, text: "Intro".to_string(), id: "intro".to_string() },
                Heading { level: 3, text: "Sub Point".to_string(), id: "sub-point".to_string() },
            ]
        );
    }

    #[test]
    fn content_without_headings_yields_empty_sequence() {
        assert!(extract_headings("<p>just a paragraph</p>").is_empty());
        assert!(extract_headings("").is_empty());
    }

    #[test]
    fn h1_and_h4_are_out_of_scope() {
        let content = "<h1>Title</h1><h4>Deep</h4><h2>Kept</h2>";
        let headings = extract_headings(content);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].id, "kept");
    }

    #[test]
    fn attributes_on_the_open_tag_are_tolerated() {
        let headings = extract_headings(r#"<h2 class="section" id="x">Setup Guide</h2>"#);
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Setup Guide");
        assert_eq!(headings[0].id, "setup-guide");
    }

    #[test]
    fn anchor_ids_drop_punctuation() {
        let headings = extract_headings("<h2>What's Next?</h2>");
        assert_eq!(headings[0].id, "whats-next");
    }

    // Two identical headings yield two identical ids; the extractor does not
    // deduplicate. In-page links then resolve to the first occurrence.
    #[test]
    fn duplicate_headings_keep_duplicate_ids() {
        let headings = extract_headings("<h2>Recap</h2><p>a</p><h2>Recap</h2>");
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].id, headings[1].id);
    }

    // Known limitation: nested inline markup defeats the flat-text pattern.
    #[test]
    fn headings_with_nested_markup_are_skipped() {
        let headings = extract_headings("<h2>Plain</h2><h2>Has <em>emphasis</em></h2>");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Plain");
    }
}
