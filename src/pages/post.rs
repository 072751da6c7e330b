//! Single blog post page generation

use maud::{Markup, html};

use crate::api::BlogPost;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;
use crate::highlight::Highlighter;
use crate::markdown;

/// Generates one blog post page with its rendered markdown body.
///
/// # Arguments
///
/// * `post`: Full post record including the markdown body
/// * `highlighter`: Shared syntax highlighter for code blocks
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete post page markup
pub fn post_page(post: &BlogPost, highlighter: &Highlighter, site_name: &str) -> Markup {
    let blocks = markdown::parse(&post.content);
    let body = html! {
        article class="post" {
            header class="post-header" {
                h1 class="post-title" { (post.title) }
                div class="card-meta" {
                    span class="blog-category" { (post.category) }
                    span class="card-muted" { (post.date) }
                    span class="card-muted" { (post.read_time) " min read" }
                }
                @if !post.tags.is_empty() {
                    div class="chip-row" {
                        @for tag in &post.tags {
                            span class="chip" { (tag) }
                        }
                    }
                }
            }
            div class="post-body markdown" {
                (markdown::render_blocks(&blocks, highlighter))
            }
            a href="../index.html" class="card-link" { "\u{2190} all posts" }
        }
    };

    page_wrapper(
        &post.title,
        site_name,
        "../../",
        Some(Route::Blog),
        &["site.css", "markdown.css"],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_page_renders_markdown_body() {
        // Arrange
        let post = BlogPost {
            slug: "my-post".to_string(),
            title: "My Post".to_string(),
            excerpt: "Short.".to_string(),
            content: "## Setup\n\nUse **mutual TLS** here.".to_string(),
            date: "2024-12-15".to_string(),
            category: "Security".to_string(),
            tags: vec!["TLS".to_string()],
            read_time: 6,
        };
        let highlighter = Highlighter::new();

        // Act
        let html = post_page(&post, &highlighter, "Site").into_string();

        // Assert
        assert!(html.contains("<title>My Post | Site</title>"));
        assert!(html.contains("<h2>Setup</h2>"));
        assert!(html.contains("<strong>mutual TLS</strong>"));
        assert!(html.contains("href=\"../../assets/markdown.css\""));
        assert!(html.contains("href=\"../index.html\""));
    }

    #[test]
    fn test_post_page_highlights_code_blocks() {
        // Arrange
        let post = BlogPost {
            slug: "code".to_string(),
            title: "Code".to_string(),
            excerpt: "x".to_string(),
            content: "```rust\nfn main() {}\n```".to_string(),
            date: "2024-01-01".to_string(),
            category: "Security".to_string(),
            tags: vec![],
            read_time: 2,
        };
        let highlighter = Highlighter::new();

        // Act
        let html = post_page(&post, &highlighter, "Site").into_string();

        // Assert
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains("hljs-"), "Code should carry highlight classes");
    }
}
