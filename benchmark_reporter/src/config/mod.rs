//!
//! The reporter configuration.
//!

pub mod error;
pub mod repository;


use self::error::Error;
use self::repository::Repository;

///
/// The reporter configuration.
///
/// Read once at startup and passed by reference to the GitHub client.
///
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// The GitHub API access token.
    pub token: String,
    /// The target repository.
    pub repository: Repository,
    /// The target pull request number.
    pub pr_number: u64,
    /// The GitHub REST API base URL.
    pub api_url: String,
}

impl Config {
    /// The access token variable.
    pub const VARIABLE_TOKEN: &'static str = "GITHUB_TOKEN";

    /// The `owner/name` repository variable.
    pub const VARIABLE_REPOSITORY: &'static str = "GITHUB_REPOSITORY";

    /// The pull request number variable.
    pub const VARIABLE_PR_NUMBER: &'static str = "PR_NUMBER";

    /// The optional API URL variable, set by GitHub Actions on Enterprise Server as well.
    pub const VARIABLE_API_URL: &'static str = "GITHUB_API_URL";

    /// The public GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    ///
    /// Reads the configuration from the process environment.
    ///
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    ///
    /// Reads the configuration using the provided variable lookup.
    ///
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| -> Result<String, Error> {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(Error::MissingVariable { name })
        };

        let token = required(Self::VARIABLE_TOKEN)?;
        let repository = required(Self::VARIABLE_REPOSITORY)?
            .trim()
            .parse::<Repository>()?;
        let pr_number = required(Self::VARIABLE_PR_NUMBER)?;
        let pr_number = pr_number
            .trim()
            .parse::<u64>()
            .map_err(|error| Error::InvalidPullRequestNumber {
                error,
                value: pr_number.clone(),
            })?;
        let api_url = lookup(Self::VARIABLE_API_URL)
            .map(|value| value.trim().trim_end_matches('/').to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_URL.to_owned());

        Ok(Self {
            token,
            repository,
            pr_number,
            api_url,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("repository", &self.repository)
            .field("pr_number", &self.pr_number)
            .field("api_url", &self.api_url)
            .finish()
    }
}
