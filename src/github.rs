//! GitHub public repository fetcher with a session-scoped cache.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Public GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Page size for the repository listing request.
const REPOS_PER_PAGE: u32 = 30;

/// One public repository listing entry, GitHub wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    pub updated_at: String,
    pub fork: bool,
}

/// Drops forks and ranks the rest by star count descending.
///
/// Tie order among equal star counts is left unspecified.
///
/// # Arguments
///
/// * `repos`: Raw repository listing from the API
///
/// # Returns
///
/// Non-fork repositories, most-starred first
pub fn filter_and_rank(mut repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    repos.retain(|repo| !repo.fork);
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos
}

/// Fetches public repositories for a user, caching for the session.
///
/// The cache is a single slot checked before any network call; it lives
/// for the duration of the generator run and is never persisted. Failure
/// surfaces to the caller as an error state with no retry.
#[derive(Debug)]
pub struct RepoFetcher {
    http: reqwest::blocking::Client,
    base_url: String,
    cache: Option<Vec<GitHubRepo>>,
}

impl RepoFetcher {
    /// Creates a fetcher against the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base(GITHUB_API_BASE)
    }

    /// Creates a fetcher against an alternate API base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn with_base(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // GitHub rejects requests without a User-Agent
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("foliogen/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            cache: None,
        })
    }

    /// Returns the user's public repositories, excluding forks, sorted by
    /// star count descending.
    ///
    /// A cache hit returns immediately without a network call; the first
    /// successful fetch fills the cache.
    ///
    /// # Arguments
    ///
    /// * `username`: GitHub account to list
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub fn public_repos(&mut self, username: &str) -> Result<Vec<GitHubRepo>, ApiError> {
        if let Some(cached) = &self.cache {
            return Ok(cached.clone());
        }

        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, username, REPOS_PER_PAGE
        );
        let repos: Vec<GitHubRepo> = self.http.get(url).send()?.error_for_status()?.json()?;

        let ranked = filter_and_rank(repos);
        self.cache = Some(ranked.clone());
        Ok(ranked)
    }
}
