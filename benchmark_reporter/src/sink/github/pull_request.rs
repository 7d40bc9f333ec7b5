//!
//! The pull request description sink.
//!

use crate::sink::error::Error;
use crate::sink::github::Client;
use crate::sink::TextSink;

///
/// The pull request resource, reduced to the fields in use.
///
#[derive(Debug, serde::Deserialize)]
pub struct PullRequest {
    /// The pull request number.
    pub number: u64,
    /// The description. Is `null` if the description has never been written.
    pub body: Option<String>,
}

///
/// The pull request description sink.
///
#[derive(Debug)]
pub struct PullRequestBody<'a> {
    /// The GitHub client.
    client: &'a Client<'a>,
}

impl<'a> PullRequestBody<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: &'a Client<'a>) -> Self {
        Self { client }
    }

    ///
    /// Returns the pull request URL.
    ///
    pub fn url(&self) -> String {
        format!(
            "{}/pulls/{}",
            self.client.repository_url(),
            self.client.config().pr_number,
        )
    }
}

impl TextSink for PullRequestBody<'_> {
    fn fetch(&mut self) -> Result<String, Error> {
        let pull_request: PullRequest = self.client.get(self.url().as_str())?;
        Ok(pull_request.body.unwrap_or_default())
    }

    fn replace(&mut self, text: &str) -> Result<(), Error> {
        self.client.patch_body(self.url().as_str(), text)
    }
}
