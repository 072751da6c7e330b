//! 404 page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;

/// Generates the 404 page, emitted as `404.html` at the site root so
/// static hosts can serve it for unknown paths.
///
/// # Arguments
///
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete 404 page markup
pub fn not_found_page(site_name: &str) -> Markup {
    let body = html! {
        section class="not-found" {
            h1 class="page-title" { "404" }
            p { "That page does not exist." }
            a href="index.html" class="card-link" { "Back to home" }
        }
    };

    page_wrapper("Not Found", site_name, "", None, &["site.css"], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page_links_home() {
        // Arrange & Act
        let html = not_found_page("Site").into_string();

        // Assert
        assert!(html.contains("<title>Not Found | Site</title>"));
        assert!(html.contains("404"));
        assert!(html.contains("href=\"index.html\""));
        assert!(!html.contains("nav-active"), "No route is active on 404");
    }
}
