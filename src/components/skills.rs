//! Skills grid component

use maud::{Markup, html};

use crate::api::SkillsGrouped;

/// Renders the skills grid, one card per category.
///
/// # Arguments
///
/// * `skills`: Skills grouped by category in display order
///
/// # Returns
///
/// Skills section markup, empty when there are no groups
pub fn skills_section(skills: &SkillsGrouped) -> Markup {
    if skills.is_empty() {
        return html! {};
    }

    html! {
        section class="skills" {
            div class="section-label" { "Skills" }
            div class="skills-grid" {
                @for (category, names) in skills {
                    div class="skill-card" {
                        h3 class="skill-category" { (category) }
                        ul class="skill-list" {
                            @for name in names {
                                li { (name) }
                            }
                        }
                    }
                }
            }
        }
    }
}
