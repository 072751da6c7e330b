//! Card components for projects, blog posts, and certifications

use maud::{Markup, html};

use crate::api::{BlogPost, Certification};
use crate::github::GitHubRepo;
use crate::util::format_updated;

/// Renders one repository as a project card.
///
/// Shows name, description, primary language, star and fork counts,
/// topic chips, homepage link when present, and a relative "updated"
/// label.
///
/// # Arguments
///
/// * `repo`: Repository listing entry
///
/// # Returns
///
/// Project card markup
pub fn project_card(repo: &GitHubRepo) -> Markup {
    html! {
        article class="card project-card" {
            h3 class="card-title" {
                a href=(repo.html_url) target="_blank" { (repo.name) }
            }
            p class="card-text" {
                @if let Some(description) = &repo.description {
                    (description)
                } @else {
                    "No description"
                }
            }
            @if !repo.topics.is_empty() {
                div class="chip-row" {
                    @for topic in &repo.topics {
                        span class="chip" { (topic) }
                    }
                }
            }
            div class="card-meta" {
                @if let Some(language) = &repo.language {
                    span class="project-language" { (language) }
                }
                span { "\u{2605} " (repo.stargazers_count) }
                span { "\u{2442} " (repo.forks_count) }
                span class="card-muted" { "updated " (format_updated(&repo.updated_at)) }
            }
            @if let Some(homepage) = &repo.homepage
                && !homepage.is_empty() {
                a href=(homepage) target="_blank" class="card-link" { "homepage" }
            }
        }
    }
}

/// Renders one blog post as a card linking to its page.
///
/// List entries carry no body; the card shows the excerpt, category,
/// date label, read time, and tag chips.
///
/// # Arguments
///
/// * `post`: Excerpt-only post record
/// * `prefix`: Relative path prefix back to the site root
///
/// # Returns
///
/// Blog card markup
pub fn blog_card(post: &BlogPost, prefix: &str) -> Markup {
    html! {
        article class="card blog-card" {
            div class="card-meta" {
                span class="blog-category" { (post.category) }
                span class="card-muted" { (post.date) }
                span class="card-muted" { (post.read_time) " min read" }
            }
            h3 class="card-title" {
                a href=(format!("{}blog/{}/index.html", prefix, post.slug)) { (post.title) }
            }
            p class="card-text" { (post.excerpt) }
            @if !post.tags.is_empty() {
                div class="chip-row" {
                    @for tag in &post.tags {
                        span class="chip" { (tag) }
                    }
                }
            }
        }
    }
}

/// Renders one certification card.
///
/// # Arguments
///
/// * `certification`: Certification record
///
/// # Returns
///
/// Certification card markup with an optional credential link
pub fn certification_card(certification: &Certification) -> Markup {
    html! {
        article class="card certification-card" {
            h3 class="card-title" { (certification.name) }
            div class="card-meta" {
                span { (certification.issuer) }
                span class="card-muted" { (certification.date) }
            }
            @if let Some(credential_id) = &certification.credential_id {
                div class="card-muted" { "Credential: " (credential_id) }
            }
            @if let Some(url) = &certification.credential_url {
                a href=(url) target="_blank" class="card-link" { "verify" }
            }
        }
    }
}
