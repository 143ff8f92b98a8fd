//! delimiter resolution and quoted field extraction

use regex::Regex;
use tracing::warn;

/// The delimiter character in effect for a pattern field on this line. Rule
/// definitions quote their pattern bodies with whatever character happens to
/// follow the field prefix, most commonly but not necessarily a slash. When
/// the prefix is absent from the line entirely we fall back to `/`.
///
/// The prefix is a small fixed regex fragment such as `start=` or
/// `match\s+`. Resolution happens once per field name; every quoted span for
/// that field on this line is then read with the same delimiter.
pub fn resolve_delimiter(line: &str, prefix: &str) -> char {
    let pattern = format!("{}(.)", prefix);

    Regex::new(&pattern)
        .ok()
        .and_then(|regex| {
            regex
                .captures(line)
                .and_then(|found| found.get(1))
                .and_then(|first| {
                    first
                        .as_str()
                        .chars()
                        .next()
                })
        })
        .unwrap_or('/')
}

/// Every substring enclosed by a pair of the given delimiter following an
/// occurrence of the field prefix on this line. The interior excludes the
/// delimiter character, so each span stops at the nearest closing delimiter
/// rather than running greedily across the line. A prefix with no
/// well-formed pair contributes nothing; that is not an error.
pub fn extract_quoted(line: &str, prefix: &str, delimiter: char) -> Vec<String> {
    let quote = regex::escape(&delimiter.to_string());
    let pattern = format!("{}{}([^{}]*){}", prefix, quote, quote, quote);

    let regex = match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(error) => {
            // can only happen if the resolved delimiter somehow defeats
            // escaping; the field then simply contributes no fragments
            warn!("unusable field pattern {:?}: {}", pattern, error);
            return vec![];
        }
    };

    regex
        .captures_iter(line)
        .filter_map(|found| found.get(1))
        .map(|body| {
            body.as_str()
                .to_string()
        })
        .collect()
}
