//!
//! The pull request text to update.
//!

use crate::sink::github::comment::PullRequestComment;
use crate::sink::github::pull_request::PullRequestBody;
use crate::sink::github::Client;
use crate::sink::TextSink;

///
/// The pull request text to update.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The pull request description.
    #[default]
    Body,
    /// The first comment of the pull request.
    Comment,
}

impl Target {
    ///
    /// Creates the sink writing to this target.
    ///
    pub fn sink<'a>(self, client: &'a Client<'a>) -> Box<dyn TextSink + 'a> {
        match self {
            Self::Body => Box::new(PullRequestBody::new(client)),
            Self::Comment => Box::new(PullRequestComment::new(client)),
        }
    }
}

impl std::str::FromStr for Target {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "body" => Ok(Self::Body),
            "comment" => Ok(Self::Comment),
            string => anyhow::bail!(
                "Unknown target `{string}`. Supported targets: {}",
                [Self::Body, Self::Comment]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Body => write!(f, "body"),
            Target::Comment => write!(f, "comment"),
        }
    }
}
