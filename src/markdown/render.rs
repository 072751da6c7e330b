//! Renders parsed blocks to HTML markup.

use maud::{Markup, PreEscaped, html};

use super::inline::Span;
use super::parser::Block;
use crate::highlight::Highlighter;

/// Renders a block sequence to HTML.
///
/// Paragraph and list item spans render with their inline formatting,
/// code blocks go through syntax highlighting, tables render with a
/// header row and body rows. Rendering is total: any block sequence
/// produces markup.
///
/// # Arguments
///
/// * `blocks`: Parsed content blocks
/// * `highlighter`: Code block highlighter
///
/// # Returns
///
/// Markup for the whole post body
pub fn render_blocks(blocks: &[Block], highlighter: &Highlighter) -> Markup {
    html! {
        @for block in blocks {
            @match block {
                Block::Paragraph(spans) => p { (render_spans(spans)) },
                Block::Heading2(text) => h2 { (text) },
                Block::Heading3(text) => h3 { (text) },
                Block::UnorderedList(items) => ul {
                    @for item in items {
                        li { (render_spans(item)) }
                    }
                },
                Block::OrderedList(items) => ol {
                    @for item in items {
                        li { (render_spans(item)) }
                    }
                },
                Block::CodeBlock { language, code } => pre {
                    @if language.is_empty() {
                        code { (PreEscaped(highlighter.highlight(code, language))) }
                    } @else {
                        code class=(format!("language-{}", language)) {
                            (PreEscaped(highlighter.highlight(code, language)))
                        }
                    }
                },
                Block::Table { header, rows } => table {
                    thead {
                        tr {
                            @for cell in header {
                                th { (cell) }
                            }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                @for cell in row {
                                    td { (cell) }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Renders inline spans with their formatting tags.
fn render_spans(spans: &[Span]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                Span::Text(text) => (text),
                Span::Bold(text) => strong { (text) },
                Span::Italic(text) => em { (text) },
                Span::Code(text) => code { (text) },
            }
        }
    }
}
