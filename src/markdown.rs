//! Markdown rendering for blog post bodies.
//!
//! This module implements the restricted markdown subset used by blog
//! posts: fenced code blocks, pipe tables, level 2/3 headings, ordered and
//! unordered lists, paragraphs, and inline bold/italic/code spans. Parsing
//! is a single forward pass over lines with no backtracking; rendering maps
//! the parsed blocks to HTML with syntax highlighted code blocks.

mod inline;
mod parser;
mod render;

pub use inline::{Span, parse_inline};
pub use parser::{Block, parse};
pub use render::render_blocks;
