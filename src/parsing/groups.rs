//! expansion of alternation groups within pattern bodies

use std::collections::VecDeque;

// the three grouping syntaxes are equivalent for extraction purposes
const OPENERS: [&str; 3] = ["\\(", "\\z(", "\\%("];
const CLOSER: &str = "\\)";
const BRANCH: &str = "\\|";

/// Expand every parenthesized alternation group in the fragment, producing
/// the space-joined concatenation of all fully expanded leaves. A group
/// `\(b\|c\)` splits the enclosing fragment into one copy per alternative;
/// nested groups multiply out, so `a\(b\|c\(d\|e\)\)f` yields leaves
/// covering `abf`, `acdf`, and `acef`.
///
/// This is an explicit worklist rather than recursion: nesting depth is
/// input-controlled and in principle unbounded. Each step eliminates one
/// group, so the queue always drains. Duplicate leaves can occur across
/// branches; downstream tokenization deduplicates.
pub fn expand_alternations(fragment: &str) -> String {
    // a literal backslash pair would otherwise read as a spurious marker
    let seed = fragment.replace("\\\\", " ");

    let mut work = VecDeque::new();
    work.push_back(seed);

    let mut leaves: Vec<String> = Vec::new();

    while let Some(current) = work.pop_front() {
        match innermost_group(&current) {
            None => leaves.push(current),
            Some(group) => {
                let interior = &current[group.interior_start..group.closer_start];
                for alternative in interior.split(BRANCH) {
                    let mut next = String::with_capacity(current.len());
                    next.push_str(&current[..group.opener_start]);
                    next.push_str(alternative);
                    next.push_str(&current[group.closer_start + CLOSER.len()..]);
                    work.push_back(next);
                }
            }
        }
    }

    leaves.join(" ")
}

struct Group {
    opener_start: usize,
    interior_start: usize,
    closer_start: usize,
}

/// Locate a group whose interior contains no further group opener, by
/// pairing the first closer on the line with the last opener before it.
/// Returns None when the fragment holds no resolvable group, making it a
/// finished leaf. An unbalanced closer with no opener in front of it is
/// likewise left alone; the stray marker is stripped later with the other
/// escapes.
fn innermost_group(fragment: &str) -> Option<Group> {
    let closer_start = fragment.find(CLOSER)?;

    let mut innermost: Option<(usize, usize)> = None;
    for opener in OPENERS {
        let mut from = 0;
        while let Some(found) = fragment[from..closer_start].find(opener) {
            let at = from + found;
            if innermost.map_or(true, |(best, _)| at > best) {
                innermost = Some((at, at + opener.len()));
            }
            from = at + 1;
        }
    }

    let (opener_start, interior_start) = innermost?;

    Some(Group {
        opener_start,
        interior_start,
        closer_start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment_is_a_single_leaf() {
        assert_eq!(expand_alternations("foobar"), "foobar");
        assert_eq!(expand_alternations(r"foo\|bar"), r"foo\|bar");
    }

    #[test]
    fn single_group_expands_to_alternatives() {
        assert_eq!(expand_alternations(r"a\(b\|c\)d"), "abd acd");
    }

    #[test]
    fn nested_groups_multiply_out() {
        assert_eq!(
            expand_alternations(r"a\(b\|c\(d\|e\)\)f"),
            "abf acdf abf acef"
        );
    }

    #[test]
    fn named_and_noncapturing_forms_are_equivalent() {
        assert_eq!(expand_alternations(r"a\z(b\|c\)d"), "abd acd");
        assert_eq!(expand_alternations(r"a\%(b\|c\)d"), "abd acd");
    }

    #[test]
    fn literal_backslash_pairs_are_not_markers() {
        // the \\ must not combine with the following ( into an opener
        assert_eq!(expand_alternations(r"x\\(y"), "x (y");
    }

    #[test]
    fn unbalanced_closer_is_left_for_the_stripper() {
        assert_eq!(expand_alternations(r"ab\)cd"), r"ab\)cd");
    }
}
