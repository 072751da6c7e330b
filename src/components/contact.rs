//! Contact form component

use maud::{Markup, html};

/// Renders the contact form.
///
/// With an API base URL configured the form posts to the backend contact
/// endpoint. Without one there is nothing to post to, so the form is
/// replaced by a mailto link.
///
/// # Arguments
///
/// * `api_url`: Configured portfolio API base URL, if any
/// * `email`: Contact email for the mailto fallback
///
/// # Returns
///
/// Contact form or mailto fallback markup
pub fn contact_form(api_url: Option<&str>, email: &str) -> Markup {
    let Some(api_url) = api_url else {
        return html! {
            div class="contact-fallback" {
                p { "Prefer email? Reach me directly:" }
                a href=(format!("mailto:{}", email)) class="card-link" { (email) }
            }
        };
    };

    html! {
        form class="contact-form" method="post" action=(format!("{}/api/contact/", api_url.trim_end_matches('/'))) {
            label { "Name"
                input type="text" name="name" required;
            }
            label { "Email"
                input type="email" name="email" required;
            }
            label { "Subject"
                input type="text" name="subject" required;
            }
            label { "Message"
                textarea name="message" rows="6" required {}
            }
            button type="submit" { "Send message" }
        }
    }
}
