//! Blog index page generation

use maud::{Markup, html};

use crate::api::BlogPost;
use crate::blog::ALL_CATEGORIES;
use crate::components::cards::blog_card;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;
use crate::util::{category_slug, relative_prefix};

/// Generates a blog index page for one category selection.
///
/// The unfiltered index lives at `blog/index.html` and each category at
/// `blog/category/<slug>/index.html`, so the same generator serves both
/// with a different directory depth. The category bar links between the
/// selections and highlights the active one.
///
/// # Arguments
///
/// * `posts`: Posts to list, already filtered
/// * `categories`: All distinct categories, for the filter bar
/// * `selected`: Active category, or the "All" sentinel
/// * `site_name`: Site name for title and navigation
/// * `depth`: Directory depth of the generated file below the site root
///
/// # Returns
///
/// Complete blog index page markup
pub fn blog_index(
    posts: &[&BlogPost],
    categories: &[String],
    selected: &str,
    site_name: &str,
    depth: usize,
) -> Markup {
    let prefix = relative_prefix(depth);
    let body = html! {
        h1 class="page-title" { "Blog" }
        (category_bar(categories, selected, &prefix))
        @if posts.is_empty() {
            p class="empty-state" { "No posts in this category." }
        } @else {
            div class="card-grid" {
                @for post in posts {
                    (blog_card(post, &prefix))
                }
            }
        }
    };

    let title = if selected == ALL_CATEGORIES {
        "Blog".to_string()
    } else {
        format!("Blog: {}", selected)
    };
    page_wrapper(&title, site_name, &prefix, Some(Route::Blog), &["site.css"], body)
}

/// Renders the category filter bar with the active selection marked.
fn category_bar(categories: &[String], selected: &str, prefix: &str) -> Markup {
    html! {
        div class="category-bar" {
            (category_link(ALL_CATEGORIES, format!("{}blog/index.html", prefix), selected))
            @for category in categories {
                (category_link(
                    category,
                    format!("{}blog/category/{}/index.html", prefix, category_slug(category)),
                    selected,
                ))
            }
        }
    }
}

fn category_link(category: &str, href: String, selected: &str) -> Markup {
    html! {
        @if category == selected {
            a href=(href) class="category-link category-active" { (category) }
        } @else {
            a href=(href) class="category-link" { (category) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, category: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: slug.to_string(),
            excerpt: "Short.".to_string(),
            content: String::new(),
            date: "2024-01-01".to_string(),
            category: category.to_string(),
            tags: vec![],
            read_time: 5,
        }
    }

    #[test]
    fn test_blog_index_all_categories() {
        // Arrange
        let posts = vec![post("a", "Security"), post("b", "Migration")];
        let refs: Vec<&BlogPost> = posts.iter().collect();
        let categories = vec!["Security".to_string(), "Migration".to_string()];

        // Act
        let html = blog_index(&refs, &categories, ALL_CATEGORIES, "Site", 1).into_string();

        // Assert
        assert!(html.contains("<title>Blog | Site</title>"));
        assert!(html.contains("category-active\">All<"));
        assert!(html.contains("href=\"../blog/category/security/index.html\""));
        assert!(html.contains("href=\"../blog/a/index.html\""));
    }

    #[test]
    fn test_blog_index_category_page_depth() {
        // Arrange
        let posts = vec![post("a", "Security")];
        let refs: Vec<&BlogPost> = posts.iter().collect();
        let categories = vec!["Security".to_string()];

        // Act
        let html = blog_index(&refs, &categories, "Security", "Site", 3).into_string();

        // Assert
        assert!(html.contains("<title>Blog: Security | Site</title>"));
        assert!(html.contains("category-active\">Security<"));
        assert!(html.contains("href=\"../../../blog/index.html\""));
        assert!(html.contains("href=\"../../../assets/site.css\""));
    }

    #[test]
    fn test_blog_index_empty_category() {
        // Arrange & Act
        let html = blog_index(&[], &["Security".to_string()], "Security", "Site", 3).into_string();

        // Assert
        assert!(html.contains("No posts in this category."));
    }
}
