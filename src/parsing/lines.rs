//! classification and noise stripping for individual listing lines

use crate::compile;

use super::fields::{extract_quoted, resolve_delimiter};
use super::groups::expand_alternations;
use super::specials::strip_specials;

/// What kind of rule a listing line describes, decided by simple prefix and
/// substring tests once the leading rule name and noise keywords have been
/// stripped away. The payload is the residual line text.
#[derive(Debug, Eq, PartialEq)]
pub enum RuleLine {
    /// a plain list of keywords, usable as-is
    KeywordList(String),
    /// a `match` rule with a single quoted pattern body
    MatchRule(String),
    /// a region rule carrying start=, skip=, and end= pattern fields
    RegionRule(String),
    /// headers, cluster references, and "links to" aliases
    Ignorable,
}

/// Classify one raw line from the rule listing. This is pure; extraction of
/// the pattern fields themselves happens afterwards, per kind.
pub fn classify(line: &str) -> RuleLine {
    // the listing echoes the rule name and an "xxx" placeholder at the
    // start of each definition; neither is a candidate. Continuation lines
    // are indented and keep their text.
    let line = compile!(r"^\S+\s*").replace(line, " ");
    let line = compile!(r"^\s*xxx").replace(&line, " ");

    if line.contains("Syntax items")
        || compile!(r"^\s*links to").is_match(&line)
        || compile!(r"^\s*cluster").is_match(&line)
    {
        return RuleLine::Ignorable;
    }

    // containment and whitespace handling flags carry no identifiers. This
    // is textual replacement, not flag interpretation; rarer flags survive
    // and are discarded later by the word shape rule.
    let line = line
        .replace("contained", " ")
        .replace("oneline", " ")
        .replace("skipwhite", " ")
        .replace("skipnl", " ");

    let line = compile!(r"^\s*nextgroup=\S+").replace(&line, " ");
    let line = compile!(r"contains=\S+").replace_all(&line, " ");

    if compile!(r"^\s*match\s").is_match(&line) {
        RuleLine::MatchRule(line.into_owned())
    } else if compile!(r"^\s*matchgroup=").is_match(&line) || compile!(r"^\s*start=").is_match(&line)
    {
        RuleLine::RegionRule(line.into_owned())
    } else {
        RuleLine::KeywordList(line.into_owned())
    }
}

/// The text one listing line contributes to the word pool, or None when the
/// line carries nothing of interest.
pub fn parse_line(line: &str) -> Option<String> {
    match classify(line) {
        RuleLine::Ignorable => None,
        RuleLine::KeywordList(rest) => Some(rest),
        RuleLine::MatchRule(rest) => Some(parse_match(&rest)),
        RuleLine::RegionRule(rest) => Some(parse_region(&rest)),
    }
}

/// Extract the quoted body of a `match` rule and reduce it to literal text.
fn parse_match(line: &str) -> String {
    let delimiter = resolve_delimiter(line, r"match\s+");
    let bodies = extract_quoted(line, r"match\s+", delimiter);

    match bodies.into_iter().next() {
        // the pattern body was malformed; the line has already been
        // consumed so it contributes a blank, not the raw text
        None => " ".to_string(),
        Some(body) => strip_specials(&expand_alternations(&body)),
    }
}

/// Extract the start=, skip=, and end= fields of a region rule. Each field
/// resolves its own delimiter, and a field repeated on one line has all its
/// bodies extracted. The reduced fragments are joined with spaces.
fn parse_region(line: &str) -> String {
    let mut fragments = Vec::new();

    for field in ["start=", "skip=", "end="] {
        let delimiter = resolve_delimiter(line, field);
        for body in extract_quoted(line, field, delimiter) {
            fragments.push(strip_specials(&expand_alternations(&body)));
        }
    }

    fragments.join(" ")
}
