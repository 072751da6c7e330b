//! Top navigation bar component

use maud::{Markup, html};

/// Site routes reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Career,
    Projects,
    Blog,
    Resume,
    Contact,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Career,
        Route::Projects,
        Route::Blog,
        Route::Resume,
        Route::Contact,
    ];

    /// Navigation label for this route.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Career => "career",
            Route::Projects => "projects",
            Route::Blog => "blog",
            Route::Resume => "resume",
            Route::Contact => "contact",
        }
    }

    /// Href for this route relative to the site root.
    ///
    /// # Arguments
    ///
    /// * `prefix`: Relative path prefix back to the site root
    pub fn href(self, prefix: &str) -> String {
        match self {
            Route::Home => format!("{}index.html", prefix),
            Route::Career => format!("{}career/index.html", prefix),
            Route::Projects => format!("{}projects/index.html", prefix),
            Route::Blog => format!("{}blog/index.html", prefix),
            Route::Resume => format!("{}resume/index.html", prefix),
            Route::Contact => format!("{}contact/index.html", prefix),
        }
    }
}

/// Renders the top navigation bar.
///
/// Shows the site name as the home link and one entry per route with the
/// active route highlighted.
///
/// # Arguments
///
/// * `site_name`: Brand text linking to the home page
/// * `prefix`: Relative path prefix back to the site root
/// * `active`: Route of the page being rendered, if any
///
/// # Returns
///
/// Navigation bar markup
pub fn nav_bar(site_name: &str, prefix: &str, active: Option<Route>) -> Markup {
    html! {
        nav class="nav" {
            a href=(Route::Home.href(prefix)) class="nav-brand" { (site_name) }
            div class="nav-links" {
                @for route in Route::ALL {
                    @if active == Some(route) {
                        a href=(route.href(prefix)) class="nav-link nav-active" { (route.label()) }
                    } @else {
                        a href=(route.href(prefix)) class="nav-link" { (route.label()) }
                    }
                }
            }
        }
    }
}
