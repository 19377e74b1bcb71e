//! Blocking GitHub REST v3 client for the handful of fields the site needs.

use serde::Deserialize;

use crate::error::{Result, SiteError};

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("repofolio/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Only the 100 most recently updated repositories are considered.
const MAX_REPOS: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn get(url: &str, token: Option<&str>) -> Result<minreq::Response> {
    let mut request = minreq::get(url)
        .with_header("User-Agent", USER_AGENT)
        .with_header("Accept", "application/vnd.github+json")
        .with_timeout(REQUEST_TIMEOUT_SECS);
    if let Some(token) = token {
        request = request.with_header("Authorization", format!("Bearer {token}"));
    }
    let response = request.send()?;
    if !(200..300).contains(&response.status_code) {
        return Err(SiteError::GitHub {
            status: response.status_code,
            url: url.to_string(),
        });
    }
    Ok(response)
}

pub fn fetch_profile(username: &str, token: Option<&str>) -> Result<Profile> {
    let url = format!("{API_ROOT}/users/{username}");
    Ok(get(&url, token)?.json()?)
}

/// Fetch the user's public repositories, most recently updated first.
pub fn fetch_public_repos(username: &str, token: Option<&str>) -> Result<Vec<Repo>> {
    let url = format!(
        "{API_ROOT}/users/{username}/repos?type=owner&sort=updated&per_page={MAX_REPOS}"
    );
    let mut repos: Vec<Repo> = get(&url, token)?.json()?;
    // The users endpoint only returns public repos, but a token-authenticated
    // call for one's own account may include private ones.
    repos.retain(|repo| !repo.private);
    repos.truncate(MAX_REPOS);
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_deserializes_api_payload() {
        let json = r#"{
            "name": "demo-site",
            "description": "A demo",
            "html_url": "https://github.com/someone/demo-site",
            "language": "Rust",
            "stargazers_count": 3,
            "forks_count": 1,
            "topics": ["web", "demo"],
            "fork": false,
            "private": false,
            "updated_at": "2025-06-01T12:00:00Z",
            "watchers_count": 3
        }"#;
        let repo: Repo = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "demo-site");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.stargazers_count, 3);
        assert_eq!(repo.topics, vec!["web", "demo"]);
        assert!(!repo.fork);
    }

    #[test]
    fn test_repo_tolerates_missing_optional_fields() {
        let repo: Repo = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        assert_eq!(repo.name, "bare");
        assert!(repo.description.is_none());
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_profile_deserializes_nulls() {
        let profile: Profile =
            serde_json::from_str(r#"{"login": "someone", "name": null, "bio": null}"#).unwrap();
        assert_eq!(profile.login, "someone");
        assert!(profile.name.is_none());
        assert!(profile.bio.is_none());
    }
}
