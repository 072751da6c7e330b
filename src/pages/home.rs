//! Home page generation

use maud::{Markup, html};

use crate::api::Profile;
use crate::components::hero::{about, hero};
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;

/// Generates the home page: hero, biography, and an inline notice when
/// the live profile fetch failed and fallback content is shown.
///
/// # Arguments
///
/// * `profile`: Profile to present (live or fallback)
/// * `site_name`: Site name for title and navigation
/// * `profile_error`: Error message when the fallback was substituted
///
/// # Returns
///
/// Complete home page markup
pub fn home_page(profile: &Profile, site_name: &str, profile_error: Option<&str>) -> Markup {
    let body = html! {
        @if let Some(error) = profile_error {
            div class="error-banner" { (error) }
        }
        (hero(profile))
        @if !profile.bio.is_empty() {
            (about(&profile.bio))
        }
    };

    page_wrapper(site_name, site_name, "", Some(Route::Home), &["site.css"], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_home_page_renders_profile() {
        // Arrange
        let profile = content::fallback_profile();

        // Act
        let html = home_page(&profile, &profile.name, None).into_string();

        // Assert
        assert!(html.contains(&profile.name));
        assert!(html.contains(&profile.tagline));
        assert!(!html.contains("error-banner"));
    }

    #[test]
    fn test_home_page_surfaces_profile_error() {
        // Arrange
        let profile = content::fallback_profile();

        // Act
        let html = home_page(&profile, "Site", Some("Failed to load profile.")).into_string();

        // Assert
        assert!(html.contains("error-banner"));
        assert!(html.contains("Failed to load profile."));
    }
}
