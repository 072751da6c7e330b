//! Projects page generation

use maud::{Markup, html};

use crate::components::cards::project_card;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;
use crate::github::GitHubRepo;

/// Generates the projects page from a repository listing.
///
/// A fetch failure renders an inline error state and an empty listing
/// renders an empty state; the page itself always exists.
///
/// # Arguments
///
/// * `repos`: Filtered and ranked repositories
/// * `error`: Fetch error message, if the listing could not be loaded
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete projects page markup
pub fn projects_page(repos: &[GitHubRepo], error: Option<&str>, site_name: &str) -> Markup {
    let body = html! {
        h1 class="page-title" { "Projects" }
        @if let Some(error) = error {
            div class="error-banner" { (error) }
        } @else if repos.is_empty() {
            p class="empty-state" { "No public repositories to show." }
        } @else {
            div class="card-grid" {
                @for repo in repos {
                    (project_card(repo))
                }
            }
        }
    };

    page_wrapper("Projects", site_name, "../", Some(Route::Projects), &["site.css"], body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> GitHubRepo {
        GitHubRepo {
            id: 1,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/user/{}", name),
            homepage: None,
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            topics: vec![],
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            fork: false,
        }
    }

    #[test]
    fn test_projects_page_lists_repos() {
        // Arrange
        let repos = vec![repo("alpha"), repo("beta")];

        // Act
        let html = projects_page(&repos, None, "Site").into_string();

        // Assert
        assert!(html.contains("alpha"));
        assert!(html.contains("beta"));
        assert!(!html.contains("empty-state"));
    }

    #[test]
    fn test_projects_page_empty_state() {
        // Arrange & Act
        let html = projects_page(&[], None, "Site").into_string();

        // Assert
        assert!(html.contains("No public repositories to show."));
    }

    #[test]
    fn test_projects_page_error_state() {
        // Arrange & Act
        let html = projects_page(&[], Some("Failed to load repositories."), "Site").into_string();

        // Assert
        assert!(html.contains("error-banner"));
        assert!(html.contains("Failed to load repositories."));
        assert!(!html.contains("empty-state"), "Error replaces the empty state");
    }
}
