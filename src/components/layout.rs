//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::nav::{Route, nav_bar};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, navigation, and container
/// structure across all page types. The wrapper handles viewport
/// configuration, charset, and stylesheet loading while the caller
/// provides page-specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `site_name`: Site name for the title suffix and navigation brand
/// * `prefix`: Relative path prefix back to the site root
/// * `active`: Route of the page being rendered, if any
/// * `stylesheets`: CSS file names under `assets/` to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    site_name: &str,
    prefix: &str,
    active: Option<Route>,
    stylesheets: &[&str],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if title == site_name {
                    title { (title) }
                } @else {
                    title { (title) " | " (site_name) }
                }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(format!("{}assets/{}", prefix, stylesheet));
                }
            }
            body {
                (nav_bar(site_name, prefix, active))
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}

/// Renders the shared page footer
fn footer() -> Markup {
    html! {
        footer {
            p {
                "Generated by "
                a href="https://github.com/anilkumarravuri/foliogen" target="_blank" { "foliogen" }
            }
        }
    }
}
