//! Education section component

use maud::{Markup, html};

use crate::api::Education;

/// Renders the education history.
///
/// # Arguments
///
/// * `education`: Degrees in the order supplied by the source
///
/// # Returns
///
/// Education section markup, empty when there are no entries
pub fn education_section(education: &[Education]) -> Markup {
    if education.is_empty() {
        return html! {};
    }

    html! {
        section class="education" {
            div class="section-label" { "Education" }
            @for entry in education {
                article class="education-entry" {
                    h3 class="education-degree" { (entry.degree) ", " (entry.field) }
                    div class="education-meta" {
                        span { (entry.institution) }
                        span { "\u{00b7}" }
                        span { (entry.location) }
                        span { "\u{00b7}" }
                        span { (entry.year) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_section_renders_entries() {
        // Arrange
        let education = vec![Education {
            degree: "Master's".to_string(),
            field: "Computer Science".to_string(),
            institution: "Troy University".to_string(),
            location: "Alabama, USA".to_string(),
            year: 2017,
        }];

        // Act
        let html = education_section(&education).into_string();

        // Assert
        assert!(html.contains("Master&#39;s, Computer Science"));
        assert!(html.contains("Troy University"));
        assert!(html.contains("2017"));
    }

    #[test]
    fn test_education_section_empty_renders_nothing() {
        // Arrange & Act
        let html = education_section(&[]).into_string();

        // Assert
        assert!(html.is_empty());
    }
}
