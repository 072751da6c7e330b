//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::api::Profile;
use crate::github::GITHUB_API_BASE;

/// Command line configuration for foliogen.
#[derive(Debug, Clone, Parser)]
#[command(name = "foliogen", version, about, long_about = None)]
pub struct Config {
    /// Portfolio API base URL (omit to build from bundled content)
    #[arg(long)]
    pub api_url: Option<String>,

    /// GitHub username for the projects page
    #[arg(long)]
    pub github_user: Option<String>,

    /// GitHub API base URL
    #[arg(long, default_value = GITHUB_API_BASE)]
    pub github_api: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name (defaults to the profile name)
    #[arg(long)]
    pub name: Option<String>,

    /// Open the generated site in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a configured base URL is not http(s).
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!("API URL must be http(s): {}", url);
        }
        if !self.github_api.starts_with("http://") && !self.github_api.starts_with("https://") {
            bail!("GitHub API URL must be http(s): {}", self.github_api);
        }
        Ok(())
    }

    /// Returns the site name from configuration or the profile.
    pub fn site_name(&self, profile: &Profile) -> String {
        self.name.clone().unwrap_or_else(|| profile.name.clone())
    }
}
