//! Portfolio REST API client and content entities.
//!
//! All entities are plain records deserialized from the backend wire
//! format and never mutated after receipt. Optional nested sequences
//! default to empty rather than absent. The client is a thin blocking
//! wrapper with a single fixed transport timeout; failures surface as
//! [`ApiError`] and are recovered per call site (fallback content or an
//! inline error state), never by retrying.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::content;

/// Fixed transport-level timeout for every API request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure taxonomy for content fetches.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or protocol failure talking to a backend.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A response body did not match the expected wire shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// The requested record does not exist.
    #[error("{0} not found")]
    NotFound(String),
}

/// One skill with its grouping category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

/// One position in the work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// One degree in the education history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub year: i32,
}

/// Full biographical profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub bio: Vec<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub available: bool,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

/// One professional certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

/// One blog article. List responses carry an empty `content`; the
/// single-post endpoint carries the full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub read_time: u32,
}

/// Contact form submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact endpoint result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Skills keyed by category, in display order.
pub type SkillsGrouped = Vec<(String, Vec<String>)>;

/// Groups a flat skill list into categories.
///
/// Categories appear in first-encounter order so the output is stable for
/// a given input. Used when the server does not supply a pre-grouped
/// structure.
///
/// # Arguments
///
/// * `skills`: Flat skill list from the profile
///
/// # Returns
///
/// Category and skill-name pairs in first-appearance order
pub fn group_skills(skills: &[Skill]) -> SkillsGrouped {
    let mut grouped: SkillsGrouped = Vec::new();
    for skill in skills {
        match grouped.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, names)) => names.push(skill.name.clone()),
            None => grouped.push((skill.category.clone(), vec![skill.name.clone()])),
        }
    }
    grouped
}

/// Profile load outcome: always a usable profile, plus the error message
/// when the live fetch failed and the fallback was substituted.
#[derive(Debug, Clone)]
pub struct ProfileLoad {
    pub profile: Profile,
    pub error: Option<String>,
}

/// Loads the profile from the API, degrading to the bundled fallback.
///
/// With no client configured the fallback profile is used directly and no
/// network I/O happens. A fetch failure substitutes the fallback and
/// records the error so pages can surface it; the site always remains
/// navigable.
///
/// # Arguments
///
/// * `api`: Optional configured API client
///
/// # Returns
///
/// A profile and the fetch error, if any
pub fn load_profile(api: Option<&ApiClient>) -> ProfileLoad {
    match api {
        Some(client) => match client.fetch_profile() {
            Ok(profile) => ProfileLoad {
                profile,
                error: None,
            },
            Err(err) => ProfileLoad {
                profile: content::fallback_profile(),
                error: Some(format!("Failed to load profile. Using cached data. ({err})")),
            },
        },
        None => ProfileLoad {
            profile: content::fallback_profile(),
            error: None,
        },
    }
}

/// Blocking client for the portfolio backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given API base URL.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Returns the configured API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(format!("{}{}", self.base_url, path)).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }
        Ok(response.error_for_status()?.json()?)
    }

    /// Fetches the full profile.
    pub fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.get("/api/profile/")
    }

    /// Fetches the lightweight profile summary.
    ///
    /// The summary shape is backend-defined and loosely typed; callers
    /// pick the fields they need.
    pub fn fetch_summary(&self) -> Result<serde_json::Value, ApiError> {
        self.get("/api/profile/summary")
    }

    /// Fetches skills pre-grouped by category.
    ///
    /// Category order follows the wire order, which the backend emits in
    /// first-appearance order, matching [`group_skills`].
    pub fn fetch_skills(&self) -> Result<SkillsGrouped, ApiError> {
        let grouped: serde_json::Map<String, serde_json::Value> =
            self.get("/api/profile/skills")?;
        skills_from_wire(grouped)
    }

    /// Fetches the work history.
    pub fn fetch_experience(&self) -> Result<Vec<Experience>, ApiError> {
        self.get("/api/profile/experience")
    }

    /// Fetches all certifications.
    pub fn fetch_certifications(&self) -> Result<Vec<Certification>, ApiError> {
        self.get("/api/certifications/")
    }

    /// Fetches all blog posts, excerpt-only.
    pub fn fetch_posts(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.get("/api/blog/")
    }

    /// Fetches one full blog post by slug.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no post matches the slug.
    pub fn fetch_post(&self, slug: &str) -> Result<BlogPost, ApiError> {
        self.get(&format!("/api/blog/{}", slug))
    }

    /// Submits a contact form message.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub fn send_contact(&self, form: &ContactForm) -> Result<ContactResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/contact/", self.base_url))
            .json(form)
            .send()?;
        Ok(response.error_for_status()?.json()?)
    }
}

/// Converts the grouped-skills wire object, keeping its key order.
fn skills_from_wire(
    grouped: serde_json::Map<String, serde_json::Value>,
) -> Result<SkillsGrouped, ApiError> {
    grouped
        .into_iter()
        .map(|(category, names)| Ok((category, serde_json::from_value(names)?)))
        .collect()
}
