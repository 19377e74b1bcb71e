use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("GitHub API returned status {status} for {url}")]
    GitHub { status: i32, url: String },

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for Results with SiteError
pub type Result<T> = std::result::Result<T, SiteError>;
