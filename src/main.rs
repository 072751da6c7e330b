use anyhow::{Context, Result};
use foliogen::{ALL_CATEGORIES, ApiClient, BlogStore, Config, Highlighter, RepoFetcher};
use foliogen::pages::{blog, career, contact, home, not_found, post, projects, resume};
use maud::Markup;
use std::fs;
use std::path::Path;

/// Writes one rendered page, creating parent directories as needed.
///
/// # Arguments
///
/// * `path`: Output file path
/// * `markup`: Rendered page
///
/// # Returns
///
/// Ok on success
///
/// # Errors
///
/// Returns error if directory creation or the write fails
fn write_page(path: &Path, markup: Markup) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let api = match &config.api_url {
        Some(url) => Some(ApiClient::new(url.clone()).context("Failed to build API client")?),
        None => None,
    };

    let load = foliogen::load_profile(api.as_ref());
    if let Some(error) = &load.error {
        eprintln!("Warning: {}", error);
    }
    let mut profile = load.profile;
    let site_name = config.site_name(&profile);

    // The dedicated experience endpoint wins over the record embedded in
    // the profile; on failure the embedded record stands.
    if let Some(client) = &api {
        match client.fetch_experience() {
            Ok(experience) => profile.experience = experience,
            Err(e) => eprintln!("Warning: Failed to fetch experience: {:#}", e),
        }
    }

    // Pre-grouped skills from the API when available, grouped locally
    // from the profile otherwise.
    let skills = match &api {
        Some(client) => client.fetch_skills().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to fetch skills: {:#}", e);
            foliogen::group_skills(&profile.skills)
        }),
        None => foliogen::group_skills(&profile.skills),
    };

    let certifications = match &api {
        Some(client) => client.fetch_certifications().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to fetch certifications: {:#}", e);
            foliogen::builtin_certifications()
        }),
        None => foliogen::builtin_certifications(),
    };

    let store = match &api {
        Some(client) => BlogStore::Api(client.clone()),
        None => BlogStore::builtin(),
    };
    let posts = store.posts().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to fetch blog posts: {:#}", e);
        vec![]
    });

    let (repos, repos_error) = match &config.github_user {
        Some(username) => {
            let mut fetcher = RepoFetcher::with_base(config.github_api.clone())
                .context("Failed to build GitHub client")?;
            match fetcher.public_repos(username) {
                Ok(repos) => (repos, None),
                Err(e) => {
                    eprintln!("Warning: Failed to fetch repositories: {:#}", e);
                    (vec![], Some(format!("Failed to load repositories. ({e})")))
                }
            }
        }
        None => (vec![], None),
    };

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    foliogen::write_css_assets(&assets_dir)?;

    write_page(
        &config.output.join("index.html"),
        home::home_page(&profile, &site_name, load.error.as_deref()),
    )?;
    write_page(
        &config.output.join("career").join("index.html"),
        career::career_page(&profile, &skills, &certifications, &site_name),
    )?;
    write_page(
        &config.output.join("projects").join("index.html"),
        projects::projects_page(&repos, repos_error.as_deref(), &site_name),
    )?;
    write_page(
        &config.output.join("resume").join("index.html"),
        resume::resume_page(&profile, &skills, &certifications, &site_name),
    )?;
    write_page(
        &config.output.join("contact").join("index.html"),
        contact::contact_page(&profile, config.api_url.as_deref(), &site_name),
    )?;
    write_page(
        &config.output.join("404.html"),
        not_found::not_found_page(&site_name),
    )?;

    let categories = foliogen::categories(&posts);

    let all_posts = foliogen::filter_by_category(&posts, ALL_CATEGORIES);
    write_page(
        &config.output.join("blog").join("index.html"),
        blog::blog_index(&all_posts, &categories, ALL_CATEGORIES, &site_name, 1),
    )?;

    for category in &categories {
        let filtered = foliogen::filter_by_category(&posts, category);
        let category_dir = config
            .output
            .join("blog")
            .join("category")
            .join(foliogen::category_slug(category));
        write_page(
            &category_dir.join("index.html"),
            blog::blog_index(&filtered, &categories, category, &site_name, 3),
        )?;
    }

    println!("Generating blog post pages...");

    let highlighter = Highlighter::new();
    let mut post_count = 0;
    for listed in &posts {
        foliogen::validate_slug(&listed.slug)
            .with_context(|| format!("Invalid blog slug: {}", listed.slug))?;

        match store.post_by_slug(&listed.slug) {
            Ok(full) => {
                write_page(
                    &config.output.join("blog").join(&full.slug).join("index.html"),
                    post::post_page(&full, &highlighter, &site_name),
                )?;
                post_count += 1;
            }
            Err(e) => {
                eprintln!("Warning: Failed to fetch post {}: {:#}", listed.slug, e);
            }
        }
    }

    println!(
        "Generated {} pages ({} blog posts, {} categories) in {}",
        6 + 1 + post_count + categories.len(),
        post_count,
        categories.len(),
        config.output.display()
    );

    if config.open {
        let index_path = config.output.join("index.html");
        open::that(&index_path)
            .with_context(|| format!("Failed to open {}", index_path.display()))?;
    }

    Ok(())
}
