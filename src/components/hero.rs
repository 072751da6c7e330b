//! Home page hero component

use maud::{Markup, html};

use crate::api::Profile;

/// Renders the hero header with name, title, tagline, and contact line.
///
/// The availability badge appears only when the profile flags it.
///
/// # Arguments
///
/// * `profile`: Profile to present
///
/// # Returns
///
/// Hero section markup
pub fn hero(profile: &Profile) -> Markup {
    html! {
        section class="hero" {
            @if profile.available {
                span class="hero-badge" { "Available for opportunities" }
            }
            h1 class="hero-name" { (profile.name) }
            p class="hero-title" { (profile.title) }
            p class="hero-tagline" { (profile.tagline) }
            div class="hero-meta" {
                span class="hero-location" { (profile.location) }
                span { "\u{00b7}" }
                a href=(format!("mailto:{}", profile.email)) class="hero-email" { (profile.email) }
            }
        }
    }
}

/// Renders the biography paragraphs.
pub fn about(bio: &[String]) -> Markup {
    html! {
        section class="about" {
            div class="section-label" { "About" }
            @for paragraph in bio {
                p class="about-paragraph" { (paragraph) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_hero_shows_availability_badge() {
        // Arrange
        let profile = content::fallback_profile();

        // Act
        let html = hero(&profile).into_string();

        // Assert
        assert!(html.contains("Available for opportunities"));
        assert!(html.contains(&profile.name));
        assert!(html.contains(&profile.tagline));
        assert!(html.contains("mailto:"));
    }

    #[test]
    fn test_hero_hides_badge_when_unavailable() {
        // Arrange
        let profile = Profile {
            available: false,
            ..content::fallback_profile()
        };

        // Act
        let html = hero(&profile).into_string();

        // Assert
        assert!(!html.contains("hero-badge"));
    }

    #[test]
    fn test_about_renders_every_paragraph() {
        // Arrange
        let bio = content::fallback_profile().bio;

        // Act
        let html = about(&bio).into_string();

        // Assert
        for paragraph in &bio {
            assert!(html.contains(paragraph.as_str()));
        }
    }
}
