//! Career page generation

use maud::{Markup, html};

use crate::api::{Certification, Profile, SkillsGrouped};
use crate::components::cards::certification_card;
use crate::components::education::education_section;
use crate::components::experience::experience_section;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;
use crate::components::skills::skills_section;

/// Generates the career page: work history, skill matrix,
/// certifications, and education.
///
/// # Arguments
///
/// * `profile`: Profile carrying experience and education
/// * `skills`: Skills grouped by category
/// * `certifications`: Certification records
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete career page markup
pub fn career_page(
    profile: &Profile,
    skills: &SkillsGrouped,
    certifications: &[Certification],
    site_name: &str,
) -> Markup {
    let body = html! {
        h1 class="page-title" { "Career" }
        (experience_section(&profile.experience))
        (skills_section(skills))
        @if !certifications.is_empty() {
            section class="certifications" {
                div class="section-label" { "Certifications" }
                div class="card-grid" {
                    @for certification in certifications {
                        (certification_card(certification))
                    }
                }
            }
        }
        (education_section(&profile.education))
    };

    page_wrapper("Career", site_name, "../", Some(Route::Career), &["site.css"], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::group_skills;
    use crate::content;

    #[test]
    fn test_career_page_composes_sections() {
        // Arrange
        let mut profile = content::fallback_profile();
        profile.experience.push(crate::api::Experience {
            id: "e1".to_string(),
            role: "Integration Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2020 - Present".to_string(),
            location: "Remote".to_string(),
            technologies: vec!["DataPower".to_string()],
            responsibilities: vec!["Gateway operations".to_string()],
        });
        let skills = group_skills(&profile.skills);
        let certifications = content::builtin_certifications();

        // Act
        let html = career_page(&profile, &skills, &certifications, "Site").into_string();

        // Assert
        assert!(html.contains("<title>Career | Site</title>"));
        assert!(html.contains("Integration Engineer"));
        assert!(html.contains("Certifications"));
        assert!(html.contains("href=\"../assets/site.css\""));
    }

    #[test]
    fn test_career_page_omits_empty_certifications() {
        // Arrange
        let profile = content::fallback_profile();

        // Act
        let html = career_page(&profile, &Vec::new(), &[], "Site").into_string();

        // Assert
        assert!(!html.contains("class=\"certifications\""));
    }
}
