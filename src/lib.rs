//! Static portfolio site generator.

mod assets;
pub mod api;
pub mod blog;
pub mod components;
mod config;
pub mod content;
pub mod github;
mod highlight;
mod markdown;
pub mod pages;
mod util;

pub use api::{
    ApiClient, ApiError, BlogPost, Certification, ContactForm, ContactResponse, Education,
    Experience, Profile, ProfileLoad, Skill, SkillsGrouped, group_skills, load_profile,
};
pub use assets::write_css_assets;
pub use blog::{ALL_CATEGORIES, BlogStore, categories, filter_by_category};
pub use config::Config;
pub use content::{builtin_certifications, builtin_posts, fallback_profile};
pub use github::{GITHUB_API_BASE, GitHubRepo, RepoFetcher, filter_and_rank};
pub use highlight::{Highlighter, html_escape};
pub use markdown::{Block, Span, parse, parse_inline, render_blocks};
pub use util::{category_slug, format_updated, relative_prefix, validate_slug};
