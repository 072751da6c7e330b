//! Line-oriented block parser for the blog markdown subset.

use regex::Regex;
use std::sync::LazyLock;

use super::inline::{Span, parse_inline};

/// Matches an ordered list item prefix: digits, a period, a space.
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("ordered item pattern"));

/// One structural unit of rendered blog content.
///
/// A post body parses into an ordered sequence of blocks. Paragraph and
/// list item text carries inline spans; headings, code blocks, and table
/// cells are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    Heading2(String),
    Heading3(String),
    UnorderedList(Vec<Vec<Span>>),
    OrderedList(Vec<Vec<Span>>),
    CodeBlock { language: String, code: String },
    Table { header: Vec<String>, rows: Vec<Vec<String>> },
}

/// Parses a raw post body into an ordered block sequence.
///
/// Single forward pass over `\n` separated lines, no backtracking. The
/// parser performs no validation and cannot fail: every input string,
/// including the empty string, produces a (possibly empty) block sequence,
/// and the same input always yields the same blocks.
///
/// Consumption rules, checked in order per line:
/// - Three backticks open a code block; the remainder of the fence line
///   (trimmed) is the language tag. Lines are consumed verbatim until a
///   closing fence (consumed, not included) or end of input.
/// - A line containing `|` whose trimmed form starts with `|` begins a
///   table; contiguous matching lines are consumed. The first is the
///   header row, the second is discarded as the separator row, the rest
///   are data rows.
/// - Blank lines are skipped.
/// - `## ` and `### ` produce level 2 and level 3 headings.
/// - `<digits>. ` and `- ` prefixes open ordered and unordered lists;
///   contiguous matching lines join the list, so a blank line ends it.
/// - Anything else is a standalone paragraph of inline-formatted text.
///
/// # Arguments
///
/// * `input`: Raw post body using `\n` as the line separator
///
/// # Returns
///
/// Ordered sequence of content blocks
pub fn parse(input: &str) -> Vec<Block> {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.starts_with("```") {
            let language = line[3..].trim().to_string();
            i += 1;
            let start = i;
            while i < lines.len() && !lines[i].starts_with("```") {
                i += 1;
            }
            let code = lines[start..i].join("\n");
            if i < lines.len() {
                // Closing fence is consumed but not included
                i += 1;
            }
            blocks.push(Block::CodeBlock { language, code });
            continue;
        }

        if is_table_line(line) {
            let start = i;
            while i < lines.len() && is_table_line(lines[i]) {
                i += 1;
            }
            let table_lines = &lines[start..i];
            let header = split_row(table_lines[0]);
            // Second line is discarded as the separator row, even when a
            // malformed table has none; observed behavior, not corrected.
            let rows = table_lines.iter().skip(2).map(|l| split_row(l)).collect();
            blocks.push(Block::Table { header, rows });
            continue;
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            blocks.push(Block::Heading3(rest.to_string()));
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(Block::Heading2(rest.to_string()));
            i += 1;
            continue;
        }

        if ORDERED_ITEM.is_match(line) {
            let mut items = Vec::new();
            while i < lines.len() && ORDERED_ITEM.is_match(lines[i]) {
                items.push(parse_inline(&ORDERED_ITEM.replace(lines[i], "")));
                i += 1;
            }
            blocks.push(Block::OrderedList(items));
            continue;
        }

        if line.starts_with("- ") {
            let mut items = Vec::new();
            while i < lines.len() && lines[i].starts_with("- ") {
                items.push(parse_inline(&lines[i][2..]));
                i += 1;
            }
            blocks.push(Block::UnorderedList(items));
            continue;
        }

        blocks.push(Block::Paragraph(parse_inline(line)));
        i += 1;
    }

    blocks
}

/// Returns true when line belongs to a pipe table.
fn is_table_line(line: &str) -> bool {
    line.contains('|') && line.trim_start().starts_with('|')
}

/// Splits a table row on `|`, dropping empty cells and trimming the rest.
///
/// Leading and trailing separators produce empty fragments which are
/// dropped; surviving cells are trimmed.
fn split_row(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}
