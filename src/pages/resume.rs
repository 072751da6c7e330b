//! Resume page generation

use maud::{Markup, html};

use crate::api::{Certification, Profile, SkillsGrouped};
use crate::components::education::education_section;
use crate::components::experience::experience_section;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;
use crate::components::skills::skills_section;

/// Generates the resume page: a single print-friendly view of the
/// profile header, work history, skills, certifications, and education.
///
/// # Arguments
///
/// * `profile`: Full profile record
/// * `skills`: Skills grouped by category
/// * `certifications`: Certification records
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete resume page markup
pub fn resume_page(
    profile: &Profile,
    skills: &SkillsGrouped,
    certifications: &[Certification],
    site_name: &str,
) -> Markup {
    let body = html! {
        header class="resume-header" {
            h1 { (profile.name) }
            p class="resume-title" { (profile.title) }
            div class="card-meta" {
                span { (profile.location) }
                span { "\u{00b7}" }
                a href=(format!("mailto:{}", profile.email)) { (profile.email) }
                @if !profile.phone.is_empty() {
                    span { "\u{00b7}" }
                    span { (profile.phone) }
                }
            }
        }
        @if let Some(summary) = profile.bio.first() {
            section class="resume-summary" {
                div class="section-label" { "Summary" }
                p { (summary) }
            }
        }
        (experience_section(&profile.experience))
        (skills_section(skills))
        @if !certifications.is_empty() {
            section class="certifications" {
                div class="section-label" { "Certifications" }
                ul class="resume-certifications" {
                    @for certification in certifications {
                        li {
                            (certification.name) " \u{00b7} " (certification.issuer)
                            " (" (certification.date) ")"
                        }
                    }
                }
            }
        }
        (education_section(&profile.education))
    };

    page_wrapper("Resume", site_name, "../", Some(Route::Resume), &["site.css"], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::group_skills;
    use crate::content;

    #[test]
    fn test_resume_page_renders_header_and_sections() {
        // Arrange
        let mut profile = content::fallback_profile();
        profile.bio = vec!["Middleware engineer with a decade on gateways.".to_string()];
        let skills = group_skills(&profile.skills);
        let certifications = content::builtin_certifications();

        // Act
        let html = resume_page(&profile, &skills, &certifications, "Site").into_string();

        // Assert
        assert!(html.contains("<title>Resume | Site</title>"));
        assert!(html.contains(&profile.name));
        assert!(html.contains("Summary"));
        assert!(html.contains("Middleware engineer"));
        assert!(html.contains("Certifications"));
    }

    #[test]
    fn test_resume_page_without_bio_omits_summary() {
        // Arrange
        let mut profile = content::fallback_profile();
        profile.bio.clear();

        // Act
        let html = resume_page(&profile, &Vec::new(), &[], "Site").into_string();

        // Assert
        assert!(!html.contains("resume-summary"));
    }
}
