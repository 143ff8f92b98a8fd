//! parser for syntax rule listings

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::compile;

mod fields;
mod groups;
mod lines;
mod specials;

// Re-export all public symbols
pub use fields::*;
pub use groups::*;
pub use lines::*;
pub use specials::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// Read a rule listing from a file, or from standard input when the
/// filename is "-", and return an owned String for parsing.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => Err(LoadingError {
                problem: "Failed reading standard input".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            }),
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse a whole rule listing into the deduplicated set of identifier-like
/// words it mentions. The listing may instead be an editor error message or
/// an announcement that no rules are active; both resolve to the empty set
/// rather than being parsed.
pub fn parse_listing(dump: &str) -> HashSet<String> {
    if compile!(r"^E\d+:").is_match(dump) || compile!(r"^No Syntax items").is_match(dump) {
        debug!("listing reports no syntax items");
        return HashSet::new();
    }

    let mut words = HashSet::new();

    for line in dump.lines() {
        if let Some(residue) = parse_line(line) {
            collect_words(&residue, &mut words);
        }
    }

    debug!("extracted {} distinct words", words.len());
    words
}

/// Pull every identifier-like run out of the residual text: maximal runs of
/// word characters, at least two long, not starting with a digit.
fn collect_words(residue: &str, words: &mut HashSet<String>) {
    for found in compile!(r"[A-Za-z0-9_]\w*").find_iter(residue) {
        let word = found.as_str();
        if word.len() >= 2
            && !word.starts_with(|c: char| c.is_ascii_digit())
        {
            words.insert(word.to_string());
        }
    }
}
