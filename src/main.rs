use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};

use repofolio::classify::Classification;
use repofolio::config::{self, ProjectsConfig, DEFAULT_CONFIG_PATH};
use repofolio::error::{Result, SiteError};
use repofolio::github;
use repofolio::render::{self, SiteMeta};

#[derive(Parser, Debug)]
#[command(name = "repofolio", about = "Generate a static personal site from public GitHub repositories")]
struct Cli {
    /// GitHub username; falls back to the GITHUB_USERNAME environment variable
    #[arg(long)]
    username: Option<String>,

    /// Path of the projects config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output path for the rendered page
    #[arg(long, default_value = "index.html")]
    out: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Update the projects config and render the site (the default)
    Generate,
    /// Only refresh projects-config.yaml, without rendering HTML
    UpdateConfig,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(username) = cli.username.or_else(|| env::var("GITHUB_USERNAME").ok()) else {
        return Err(SiteError::Config(
            "no GitHub user: pass --username or set GITHUB_USERNAME".to_string(),
        ));
    };
    let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

    info!("fetching repositories from GitHub for user: {username}");
    let profile = github::fetch_profile(&username, token.as_deref())?;
    let repos = github::fetch_public_repos(&username, token.as_deref())?;
    info!("found {} public repositories", repos.len());

    let existing = ProjectsConfig::load(&cli.config);
    let mut merged = config::merge(&existing, &repos);

    let render_site = !matches!(cli.command, Some(Command::UpdateConfig));
    if render_site {
        let out_dir = cli.out.parent().filter(|p| !p.as_os_str().is_empty());
        render::write_logos(&mut merged.projects, out_dir.unwrap_or(Path::new(".")))?;
    }

    merged.save(&cli.config)?;
    info!("config file updated successfully: {}", cli.config.display());
    info!("total projects: {}", merged.projects.len());
    info!("training: {}", merged.count_by(Classification::Training));
    info!("projects: {}", merged.count_by(Classification::Project));

    if render_site {
        let meta = resolve_meta(&profile);
        let html = render::render_index(&meta, &merged);
        fs::write(&cli.out, html)?;
        info!("rendered static site to {}", cli.out.display());
    }

    Ok(())
}

/// Site header fields: GitHub profile values first, env overrides as
/// fallback, then generic defaults.
fn resolve_meta(profile: &github::Profile) -> SiteMeta {
    let name = profile
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .or_else(|| env::var("SITE_NAME").ok())
        .unwrap_or_else(|| profile.login.clone());
    let tagline = env::var("SITE_TAGLINE")
        .unwrap_or_else(|_| "Developer \u{2022} Designer \u{2022} Builder".to_string());
    let bio = profile
        .bio
        .clone()
        .filter(|b| !b.is_empty())
        .or_else(|| env::var("SITE_BIO").ok())
        .unwrap_or_else(|| {
            "Hi \u{2014} I build small web apps, experiment with design, and open-source \
             useful utilities."
                .to_string()
        });
    SiteMeta { name, tagline, bio }
}
