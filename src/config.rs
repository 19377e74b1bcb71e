//! The `projects-config.yaml` file: load, merge with fetched metadata, save.
//!
//! The file is regenerated on every run but stays hand-editable: a manually
//! set `classification` survives the merge, as does an existing `image`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{self, Classification};
use crate::error::Result;
use crate::github::Repo;

pub const DEFAULT_CONFIG_PATH: &str = "projects-config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub logo: String,
}

impl Project {
    pub fn classification(&self) -> Classification {
        self.classification.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectsConfig {
    /// Load the config, tolerating a missing or malformed file: editing
    /// mistakes must never block a regeneration.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(text: &str) -> Self {
        serde_yaml::from_str(text).unwrap_or_default()
    }

    /// Write the config with its commented edit-instructions header.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        fs::write(path, format!("{}{yaml}", header(&stamp)))?;
        Ok(())
    }

    pub fn count_by(&self, classification: Classification) -> usize {
        self.projects
            .iter()
            .filter(|p| p.classification() == classification)
            .count()
    }
}

fn header(timestamp: &str) -> String {
    format!(
        "# Projects Configuration\n\
         # This file is regenerated with all public repositories from GitHub\n\
         # You can manually edit the 'classification' field for each project\n\
         # Classification options: training, project\n\
         # The 'image' field is an animal emoji derived from the project name\n\
         #\n\
         # To update this file, run: repofolio update-config\n\
         #\n\
         # Last updated: {timestamp}\n\n"
    )
}

/// Merge fetched repository metadata into the existing config. Standard
/// fields always take the fetched value; manual edits to `classification`
/// and a previously chosen `image` are preserved. The result is sorted by
/// `updated_at`, newest first.
pub fn merge(existing: &ProjectsConfig, repos: &[Repo]) -> ProjectsConfig {
    let prior: HashMap<&str, &Project> = existing
        .projects
        .iter()
        .map(|p| (p.name.as_str(), p))
        .collect();

    let mut projects: Vec<Project> = repos
        .iter()
        .map(|repo| {
            let kept = prior.get(repo.name.as_str());
            let classification = kept
                .and_then(|p| p.classification)
                .unwrap_or_else(|| classify::auto_classify(repo));
            let image = kept
                .map(|p| p.image.clone())
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| classify::animal_badge(&repo.name).to_string());

            Project {
                name: repo.name.clone(),
                description: repo.description.clone().unwrap_or_default(),
                url: repo.html_url.clone(),
                classification: Some(classification),
                image,
                language: repo
                    .language
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                stars: repo.stargazers_count,
                forks: repo.forks_count,
                topics: repo.topics.clone(),
                updated_at: repo.updated_at.clone().unwrap_or_default(),
                logo: kept.map(|p| p.logo.clone()).unwrap_or_default(),
            }
        })
        .collect();

    projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    ProjectsConfig { projects }
}
