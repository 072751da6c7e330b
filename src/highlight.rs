//! Syntax highlighting for fenced code blocks.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Highlights code block content with CSS class names.
///
/// Wraps syntect with the bundled syntax definitions and produces HTML
/// with `hljs-` prefixed class names to match the markdown stylesheet.
/// Unknown languages and highlighting failures fall back to escaped plain
/// text, so highlighting never fails a page build.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates a highlighter with the default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code for the given language tag.
    ///
    /// The language tag is matched by token first, then by file extension,
    /// mirroring how fence tags are written in practice (`rust`, `py`,
    /// `sh`). An empty or unrecognized tag yields escaped plain text.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `language`: Language tag from the code fence (possibly empty)
    ///
    /// # Returns
    ///
    /// HTML string with `<span class="hljs-*">` tags, or escaped plain text
    pub fn highlight(&self, code: &str, language: &str) -> String {
        if code.is_empty() {
            return String::new();
        }
        if language.is_empty() {
            return html_escape(code);
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return html_escape(code);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            if generator
                .parse_html_for_line_which_includes_newline(line)
                .is_err()
            {
                return html_escape(code);
            }
        }

        generator.finalize()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes HTML special characters for plain text fallback.
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
