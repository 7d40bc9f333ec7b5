//!
//! The GitHub REST API client.
//!

pub mod comment;
pub mod pull_request;

#[cfg(test)]
mod tests;

use std::time::Duration;

use reqwest::header;
use reqwest::Method;

use crate::config::Config;
use crate::sink::error::Error;

///
/// The GitHub REST API client.
///
#[derive(Debug)]
pub struct Client<'a> {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The reporter configuration.
    config: &'a Config,
}

///
/// The partial update request changing the `body` field.
///
#[derive(Debug, serde::Serialize)]
pub(crate) struct BodyUpdate<'a> {
    /// The new text.
    pub body: &'a str,
}

///
/// The error response, reduced to the fields in use.
///
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    /// The human-readable error description.
    message: String,
}

impl<'a> Client<'a> {
    /// The media type of GitHub JSON responses.
    pub const MEDIA_TYPE: &'static str = "application/vnd.github+json";

    /// The API version header name.
    pub const API_VERSION_HEADER: &'static str = "X-GitHub-Api-Version";

    /// The REST API version the client is written against.
    pub const API_VERSION: &'static str = "2022-11-28";

    /// The client identification required by GitHub.
    pub const USER_AGENT: &'static str =
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// The timeout of a single request.
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &'a Config) -> Result<Self, Error> {
        let http_client = reqwest::blocking::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    ///
    /// Returns the configuration.
    ///
    pub fn config(&self) -> &Config {
        self.config
    }

    ///
    /// Returns the target repository URL.
    ///
    pub fn repository_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.config.api_url, self.config.repository.owner, self.config.repository.name,
        )
    }

    ///
    /// Sends a `GET` request and deserializes the JSON response.
    ///
    pub fn get<T>(&self, url: &str) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(Method::GET, url, None)?;
        Ok(response.json()?)
    }

    ///
    /// Sends a `PATCH` request replacing the `body` field of the resource.
    ///
    pub fn patch_body(&self, url: &str, body: &str) -> Result<(), Error> {
        self.send(Method::PATCH, url, Some(BodyUpdate { body }))?;
        Ok(())
    }

    ///
    /// Sends an authenticated request and fails on client or server error statuses.
    ///
    fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<BodyUpdate<'_>>,
    ) -> Result<reqwest::blocking::Response, Error> {
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .bearer_auth(self.config.token.as_str())
            .header(header::ACCEPT, Self::MEDIA_TYPE)
            .header(Self::API_VERSION_HEADER, Self::API_VERSION);
        if let Some(payload) = payload {
            request = request.json(&payload);
        }

        let response = request.send()?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let message = Self::error_message(response.text().unwrap_or_default());
            return Err(Error::Status {
                method,
                url: url.to_owned(),
                status,
                message,
            });
        }
        Ok(response)
    }

    ///
    /// Extracts the `message` field from an error response, falling back to the raw text.
    ///
    pub(crate) fn error_message(text: String) -> String {
        match serde_json::from_str::<ErrorResponse>(text.as_str()) {
            Ok(response) => response.message,
            Err(_) => text,
        }
    }
}
