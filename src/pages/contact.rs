//! Contact page generation

use maud::{Markup, html};

use crate::api::Profile;
use crate::components::contact::contact_form;
use crate::components::layout::page_wrapper;
use crate::components::nav::Route;

/// Generates the contact page with direct details and the contact form.
///
/// # Arguments
///
/// * `profile`: Profile carrying email, phone, and location
/// * `api_url`: Configured portfolio API base URL, if any
/// * `site_name`: Site name for title and navigation
///
/// # Returns
///
/// Complete contact page markup
pub fn contact_page(profile: &Profile, api_url: Option<&str>, site_name: &str) -> Markup {
    let body = html! {
        h1 class="page-title" { "Contact" }
        section class="contact-details" {
            div class="card-meta" {
                a href=(format!("mailto:{}", profile.email)) { (profile.email) }
                @if !profile.phone.is_empty() {
                    span { "\u{00b7}" }
                    span { (profile.phone) }
                }
                span { "\u{00b7}" }
                span { (profile.location) }
            }
            @if profile.available {
                p class="hero-badge" { "Available for opportunities" }
            }
        }
        (contact_form(api_url, &profile.email))
    };

    page_wrapper("Contact", site_name, "../", Some(Route::Contact), &["site.css"], body)
}
