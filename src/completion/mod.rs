//! candidate records, their ordering, and the per-filetype cache

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::parsing;

/// A single completion candidate offered to the editor.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Candidate {
    pub text: String,
}

/// Swap the case of every character in the string. Candidate lists are
/// ordered by this form of their text, which puts lowercase identifiers
/// ahead of uppercase ones. Note that this is not the same ordering as a
/// case-insensitive sort.
pub fn swap_case(text: &str) -> String {
    let mut swapped = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_uppercase() {
            swapped.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            swapped.extend(c.to_uppercase());
        } else {
            swapped.push(c);
        }
    }

    swapped
}

/// Parse a rule listing and return its candidates, ordered by their
/// case-swapped form.
pub fn extract_candidates(dump: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = parsing::parse_listing(dump)
        .into_iter()
        .map(|text| Candidate { text })
        .collect();

    candidates.sort_by_key(|candidate| swap_case(&candidate.text));
    candidates
}

/// Per-filetype store of extracted candidates. Entries are created the
/// first time a filetype is refreshed and live for the rest of the process.
///
/// A refresh replaces the whole entry for its key, and mutation requires
/// exclusive access, so a lookup can never observe a partially built list.
/// The host is expected to serialize refreshes per key; there is no
/// invalidation beyond the next refresh event.
#[derive(Debug, Default)]
pub struct CandidateCache {
    entries: HashMap<String, Vec<Candidate>>,
}

impl CandidateCache {
    pub fn new() -> CandidateCache {
        CandidateCache {
            entries: HashMap::new(),
        }
    }

    /// Re-parse the current rule listing for this filetype and overwrite
    /// whatever was cached for it before.
    pub fn refresh(&mut self, filetype: &str, dump: &str) {
        let candidates = extract_candidates(dump);

        info!(
            "caching {} candidates for filetype {}",
            candidates.len(),
            filetype
        );

        self.entries
            .insert(filetype.to_string(), candidates);
    }

    /// The candidates recorded for this filetype. A filetype that has never
    /// been refreshed has no candidates yet, which is not an error.
    pub fn lookup(&self, filetype: &str) -> &[Candidate] {
        self.entries
            .get(filetype)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Write the candidate texts to the given destination, one per line, in
/// plain lexicographic order. A diagnostic affordance; completion results
/// keep their case-swapped ordering instead.
pub fn dump_words<W: Write>(candidates: &[Candidate], out: &mut W) -> io::Result<()> {
    let mut words: Vec<&str> = candidates
        .iter()
        .map(|candidate| {
            candidate
                .text
                .as_str()
        })
        .collect();
    words.sort();

    debug!("writing {} words", words.len());

    for word in words {
        writeln!(out, "{}", word)?;
    }

    Ok(())
}
