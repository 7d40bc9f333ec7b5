//!
//! The pull request text sink.
//!

pub mod error;
pub mod github;
pub mod target;

#[cfg(test)]
mod tests;

use crate::output::section::Section;

use self::error::Error;

///
/// A persisted text which can be read and overwritten, such as a pull request description.
///
pub trait TextSink {
    ///
    /// Returns the current text.
    ///
    fn fetch(&mut self) -> Result<String, Error>;

    ///
    /// Overwrites the text.
    ///
    fn replace(&mut self, text: &str) -> Result<(), Error>;
}

///
/// Returns the current sink text with the section merged in, without writing it back.
///
pub fn preview(sink: &mut dyn TextSink, section: &Section) -> Result<String, Error> {
    let existing = sink.fetch()?;
    Ok(section.merge_into(existing.as_str()))
}

///
/// Merges the section into the sink text and writes the result back.
///
/// Returns the written text.
///
pub fn update(sink: &mut dyn TextSink, section: &Section) -> Result<String, Error> {
    let updated = preview(sink, section)?;
    sink.replace(updated.as_str())?;
    Ok(updated)
}
