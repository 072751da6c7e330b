//! Utility functions for foliogen

use anyhow::Result;
use chrono::{DateTime, Utc};

/// Builds the relative path prefix back to the site root.
///
/// Generated pages live at different directory depths (`index.html` at
/// root, `blog/<slug>/index.html` two levels down) and reference assets
/// and other routes relative to the root.
///
/// # Arguments
///
/// * `depth`: Directory depth of the page from the site root
///
/// # Returns
///
/// A `../` sequence reaching the site root, empty at depth 0
pub fn relative_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Formats an RFC 3339 timestamp as human readable relative time.
///
/// Used for repository "updated" labels. Unparseable input is returned
/// verbatim rather than failing the page; future timestamps are treated
/// as "just now".
///
/// # Arguments
///
/// * `rfc3339`: Timestamp string from the API, e.g. `2024-06-01T12:00:00Z`
///
/// # Returns
///
/// Relative time string like "3 weeks ago", or the input when unparseable
pub fn format_updated(rfc3339: &str) -> String {
    let Ok(timestamp) = DateTime::parse_from_rfc3339(rfc3339) else {
        return rfc3339.to_string();
    };

    let elapsed = Utc::now().signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);
    let days = elapsed.num_days().max(0);

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Validates a blog slug before it becomes an output path component.
///
/// Ensures the slug cannot escape the output directory or split into
/// extra path segments.
///
/// # Arguments
///
/// * `slug`: URL-safe blog post identifier
///
/// # Errors
///
/// Returns error if the slug is empty or contains path separators or ".."
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        anyhow::bail!("Slug is empty");
    }
    if slug.contains("..") {
        anyhow::bail!("Slug contains directory traversal: {}", slug);
    }
    if slug.contains('/') || slug.contains('\\') {
        anyhow::bail!("Slug contains path separator: {}", slug);
    }
    Ok(())
}

/// Lowercases a category label into a URL path segment.
///
/// Non-alphanumeric runs collapse to single hyphens, so "API & Middleware"
/// becomes "api-middleware".
pub fn category_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    let mut last_hyphen = true;
    for c in category.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
