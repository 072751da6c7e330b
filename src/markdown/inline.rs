//! Inline span scanner for paragraph and list item text.

use regex::Regex;
use std::sync::LazyLock;

/// Combined inline pattern. Alternatives in priority order: bold, italic,
/// code. The first alternative matching at a position wins and scanning
/// resumes after the closing delimiter, so spans do not nest.
static INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*|\*([^*]+)\*|`([^`]+)`").expect("inline pattern"));

/// One inline segment of formatted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

/// Scans text left to right into inline spans.
///
/// Recognizes `**bold**`, `*italic*`, and `` `code` `` using the combined
/// pattern; unmatched segments pass through verbatim as plain text.
///
/// # Arguments
///
/// * `text`: Raw paragraph or list item text
///
/// # Returns
///
/// Ordered sequence of spans covering the whole input
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let matched = caps.get(0).expect("whole inline match");
        if matched.start() > last {
            spans.push(Span::Text(text[last..matched.start()].to_string()));
        }
        if let Some(bold) = caps.get(1) {
            spans.push(Span::Bold(bold.as_str().to_string()));
        } else if let Some(italic) = caps.get(2) {
            spans.push(Span::Italic(italic.as_str().to_string()));
        } else if let Some(code) = caps.get(3) {
            spans.push(Span::Code(code.as_str().to_string()));
        }
        last = matched.end();
    }

    if last < text.len() {
        spans.push(Span::Text(text[last..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        // Arrange & Act
        let spans = parse_inline("just words");

        // Assert
        assert_eq!(spans, vec![Span::Text("just words".to_string())]);
    }

    #[test]
    fn test_bold_italic_code_sequence() {
        // Arrange
        let text = "Use **bold** and *italic* and `code`";

        // Act
        let spans = parse_inline(text);

        // Assert
        assert_eq!(
            spans,
            vec![
                Span::Text("Use ".to_string()),
                Span::Bold("bold".to_string()),
                Span::Text(" and ".to_string()),
                Span::Italic("italic".to_string()),
                Span::Text(" and ".to_string()),
                Span::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn test_bold_wins_over_italic_at_same_position() {
        // Arrange: `**` must not parse as an empty italic pair
        let spans = parse_inline("**strong**");

        // Assert
        assert_eq!(spans, vec![Span::Bold("strong".to_string())]);
    }

    #[test]
    fn test_spans_do_not_nest() {
        // Arrange: markers inside a matched span stay verbatim
        let spans = parse_inline("`a *b* c`");

        // Assert
        assert_eq!(spans, vec![Span::Code("a *b* c".to_string())]);
    }

    #[test]
    fn test_unterminated_markers_stay_plain() {
        // Arrange & Act
        let spans = parse_inline("half **open");

        // Assert
        assert_eq!(spans, vec![Span::Text("half **open".to_string())]);
    }

    #[test]
    fn test_empty_input() {
        // Arrange & Act
        let spans = parse_inline("");

        // Assert
        assert!(spans.is_empty());
    }

    #[test]
    fn test_adjacent_spans_without_plain_text() {
        // Arrange & Act
        let spans = parse_inline("**a**`b`");

        // Assert
        assert_eq!(
            spans,
            vec![Span::Bold("a".to_string()), Span::Code("b".to_string())]
        );
    }
}
