//!
//! The pull request comment sink.
//!

use crate::sink::error::Error;
use crate::sink::github::Client;
use crate::sink::TextSink;

///
/// The issue comment resource, reduced to the fields in use.
///
#[derive(Debug, serde::Deserialize)]
pub struct Comment {
    /// The comment identifier.
    pub id: u64,
    /// The comment text.
    pub body: Option<String>,
}

///
/// The sink writing to the first comment of the pull request.
///
#[derive(Debug)]
pub struct PullRequestComment<'a> {
    /// The GitHub client.
    client: &'a Client<'a>,
    /// The comment found by the last fetch.
    comment_id: Option<u64>,
}

impl<'a> PullRequestComment<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(client: &'a Client<'a>) -> Self {
        Self {
            client,
            comment_id: None,
        }
    }

    ///
    /// Returns the URL listing the first pull request comment.
    ///
    pub fn comments_url(&self) -> String {
        format!(
            "{}/issues/{}/comments?per_page=1",
            self.client.repository_url(),
            self.client.config().pr_number,
        )
    }

    ///
    /// Returns the URL of a single comment.
    ///
    pub fn comment_url(&self, comment_id: u64) -> String {
        format!(
            "{}/issues/comments/{comment_id}",
            self.client.repository_url(),
        )
    }

    ///
    /// Returns the error reported when there is no comment to update.
    ///
    fn missing_target(&self) -> Error {
        Error::MissingTarget {
            pr_number: self.client.config().pr_number,
        }
    }
}

impl TextSink for PullRequestComment<'_> {
    fn fetch(&mut self) -> Result<String, Error> {
        let comments: Vec<Comment> = self.client.get(self.comments_url().as_str())?;
        let comment = comments
            .into_iter()
            .next()
            .ok_or_else(|| self.missing_target())?;
        self.comment_id = Some(comment.id);
        Ok(comment.body.unwrap_or_default())
    }

    fn replace(&mut self, text: &str) -> Result<(), Error> {
        let comment_id = self.comment_id.ok_or_else(|| self.missing_target())?;
        self.client
            .patch_body(self.comment_url(comment_id).as_str(), text)
    }
}
