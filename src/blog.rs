//! Blog post source and category filtering.

use crate::api::{ApiClient, ApiError, BlogPost};
use crate::content;

/// Category sentinel that bypasses the filter.
pub const ALL_CATEGORIES: &str = "All";

/// Source of blog posts: the backend API or the bundled builtin list.
///
/// In builtin mode no network I/O ever happens; listing strips post
/// bodies (matching the API list endpoint) and slug lookup fails with
/// [`ApiError::NotFound`] when nothing matches.
#[derive(Debug, Clone)]
pub enum BlogStore {
    Api(ApiClient),
    Builtin(Vec<BlogPost>),
}

impl BlogStore {
    /// Creates a store backed by the bundled builtin posts.
    pub fn builtin() -> Self {
        Self::Builtin(content::builtin_posts())
    }

    /// Lists all posts, excerpt-only.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure in API mode; builtin mode
    /// cannot fail.
    pub fn posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        match self {
            Self::Api(client) => client.fetch_posts(),
            Self::Builtin(posts) => Ok(posts
                .iter()
                .map(|post| BlogPost {
                    content: String::new(),
                    ..post.clone()
                })
                .collect()),
        }
    }

    /// Looks up one full post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no post matches the slug, or a
    /// transport error in API mode.
    pub fn post_by_slug(&self, slug: &str) -> Result<BlogPost, ApiError> {
        match self {
            Self::Api(client) => client.fetch_post(slug),
            Self::Builtin(posts) => posts
                .iter()
                .find(|post| post.slug == slug)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("post '{}'", slug))),
        }
    }
}

/// Filters posts by category, exact string match.
///
/// The [`ALL_CATEGORIES`] sentinel bypasses the filter and returns every
/// post.
///
/// # Arguments
///
/// * `posts`: Posts to filter
/// * `category`: Selected category or the "All" sentinel
///
/// # Returns
///
/// References to the matching posts, in their original order
pub fn filter_by_category<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| category == ALL_CATEGORIES || post.category == category)
        .collect()
}

/// Returns the distinct categories in first-appearance order.
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for post in posts {
        if !seen.iter().any(|c| *c == post.category) {
            seen.push(post.category.clone());
        }
    }
    seen
}
