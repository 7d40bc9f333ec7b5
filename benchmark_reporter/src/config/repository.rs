//!
//! The GitHub repository identifier.
//!

use crate::config::error::Error;

///
/// The GitHub repository identifier.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The repository owner.
    pub owner: String,
    /// The repository name.
    pub name: String,
}

impl std::str::FromStr for Repository {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => Err(Error::InvalidRepository {
                value: string.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
