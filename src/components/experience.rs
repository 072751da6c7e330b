//! Work history section component

use maud::{Markup, html};

use crate::api::Experience;

/// Renders the work history as stacked entries.
///
/// The SPA showed one tab per company; the static rendition stacks every
/// entry, first entry open, each with role, duration, location,
/// technology chips, and the responsibility list.
///
/// # Arguments
///
/// * `experience`: Positions, most recent first as supplied by the source
///
/// # Returns
///
/// Experience section markup, empty when there are no entries
pub fn experience_section(experience: &[Experience]) -> Markup {
    if experience.is_empty() {
        return html! {};
    }

    html! {
        section class="experience" {
            div class="section-label" { "Experience" }
            @for entry in experience {
                article class="experience-entry" id=(entry.id) {
                    header class="experience-header" {
                        h3 class="experience-role" { (entry.role) }
                        span class="experience-company" { (entry.company) }
                    }
                    div class="experience-meta" {
                        span { (entry.duration) }
                        span { "\u{00b7}" }
                        span { (entry.location) }
                    }
                    @if !entry.technologies.is_empty() {
                        div class="chip-row" {
                            @for tech in &entry.technologies {
                                span class="chip" { (tech) }
                            }
                        }
                    }
                    ul class="experience-duties" {
                        @for duty in &entry.responsibilities {
                            li { (duty) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Experience {
        Experience {
            id: "job1".to_string(),
            role: "Sr. IT Systems Engineer".to_string(),
            company: "Florida Blue".to_string(),
            duration: "January 2022 \u{2014} Present".to_string(),
            location: "Jacksonville, FL".to_string(),
            technologies: vec!["IBM DataPower".to_string(), "OpenShift".to_string()],
            responsibilities: vec!["API Connect administration.".to_string()],
        }
    }

    #[test]
    fn test_experience_section_renders_entry_fields() {
        // Arrange
        let experience = vec![entry()];

        // Act
        let html = experience_section(&experience).into_string();

        // Assert
        assert!(html.contains("Sr. IT Systems Engineer"));
        assert!(html.contains("Florida Blue"));
        assert!(html.contains("Jacksonville, FL"));
        assert!(html.contains("IBM DataPower"));
        assert!(html.contains("API Connect administration."));
        assert!(html.contains("id=\"job1\""));
    }

    #[test]
    fn test_experience_section_empty_renders_nothing() {
        // Arrange & Act
        let html = experience_section(&[]).into_string();

        // Assert
        assert!(html.is_empty());
    }

    #[test]
    fn test_experience_entry_without_technologies_has_no_chip_row() {
        // Arrange
        let experience = vec![Experience {
            technologies: vec![],
            ..entry()
        }];

        // Act
        let html = experience_section(&experience).into_string();

        // Assert
        assert!(!html.contains("chip-row"));
    }
}
