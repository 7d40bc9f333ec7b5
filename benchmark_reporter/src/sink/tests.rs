//!
//! The pull request text sink tests.
//!

use super::error::Error;
use super::target::Target;
use super::TextSink;
use crate::output::section::Section;
use crate::output::table::Table;
use crate::record::Record;

///
/// The in-memory sink.
///
#[derive(Debug, Default)]
struct MemorySink {
    /// The stored text. `None` simulates a missing target.
    text: Option<String>,
    /// The number of fetches.
    fetches: usize,
    /// The number of writes.
    writes: usize,
}

impl MemorySink {
    fn new(text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            ..Self::default()
        }
    }
}

impl TextSink for MemorySink {
    fn fetch(&mut self) -> Result<String, Error> {
        self.fetches += 1;
        self.text
            .clone()
            .ok_or(Error::MissingTarget { pr_number: 1 })
    }

    fn replace(&mut self, text: &str) -> Result<(), Error> {
        self.writes += 1;
        self.text = Some(text.to_owned());
        Ok(())
    }
}

fn section(pr: &str) -> Section {
    let records = vec![Record {
        name: "latency".to_owned(),
        base: Some("12ms".to_owned()),
        pr: Some(pr.to_owned()),
    }];
    Section::new(&Table::from(records.as_slice()))
}

#[test]
fn update_appends_once() {
    let mut sink = MemorySink::new("Intro text");

    let written = super::update(&mut sink, &section("11ms")).expect("Always valid");
    assert_eq!(written, format!("Intro text\n\n{}", section("11ms")));
    assert_eq!(sink.text.as_deref(), Some(written.as_str()));
    assert_eq!(sink.fetches, 1);
    assert_eq!(sink.writes, 1);
}

#[test]
fn update_converges() {
    let mut sink = MemorySink::new("Intro text\n\nFooter");

    super::update(&mut sink, &section("11ms")).expect("Always valid");
    let first = super::update(&mut sink, &section("10ms")).expect("Always valid");
    let second = super::update(&mut sink, &section("10ms")).expect("Always valid");

    assert_eq!(first, second);
    assert_eq!(first.matches(Section::START_MARKER).count(), 1);
    assert!(first.starts_with("Intro text\n\nFooter\n\n"));
    assert!(first.contains("<pre>10ms</pre>"));
    assert!(!first.contains("<pre>11ms</pre>"));
}

#[test]
fn preview_does_not_write() {
    let mut sink = MemorySink::new("");

    let preview = super::preview(&mut sink, &section("11ms")).expect("Always valid");
    assert_eq!(preview, section("11ms").content);
    assert_eq!(sink.text.as_deref(), Some(""));
    assert_eq!(sink.writes, 0);
}

#[test]
fn missing_target_aborts() {
    let mut sink = MemorySink::default();

    let result = super::update(&mut sink, &section("11ms"));
    assert!(matches!(result, Err(Error::MissingTarget { .. })));
    assert_eq!(sink.writes, 0);
}

#[test]
fn target_parsing() {
    assert_eq!("body".parse::<Target>().expect("Always valid"), Target::Body);
    assert_eq!(
        "Comment".parse::<Target>().expect("Always valid"),
        Target::Comment
    );
    assert!("review".parse::<Target>().is_err());
    assert_eq!(Target::default().to_string(), "body");
}
