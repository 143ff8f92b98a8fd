//! stripping of escape sequences and character classes

use crate::compile;

/// Blank out every escape sequence, anchor, and character class the pattern
/// mini-language recognizes, leaving only literal text. Each construct is
/// replaced with a single space rather than deleted outright, so that the
/// words on either side of it stay separated for tokenization.
///
/// The substitutions run in a fixed order, multi-character forms ahead of
/// the generic single-character escape, with the bracket classes last.
pub fn strip_specials(fragment: &str) -> String {
    // positional anchors, with optional offset, naming a mark or column
    let line = compile!(r"\\%[<>]?'.").replace_all(fragment, " ");
    let line = compile!(r"\\%[<>]?\d*.").replace_all(&line, " ");

    // screen position anchors, character code escapes, engine pragma
    let line = compile!(r"\\%[CV]").replace_all(&line, " ");
    let line = compile!(r"\\%(d\d+|o[0-7]+|x[0-9A-Fa-f]{0,2})").replace_all(&line, " ");
    let line = compile!(r"\\%(u[0-9A-Fa-f]{0,4}|U[0-9A-Fa-f]{0,8})").replace_all(&line, " ");
    let line = compile!(r"\\%#=\d").replace_all(&line, " ");

    // the \_x forms of the single letter classes, and zero-width markers
    let line = compile!(r"\\_[$^.adfhiklopsuwxADFHIKLOPSUWX]").replace_all(&line, " ");
    let line = compile!(r"\\(ze|zs|z[0-9])").replace_all(&line, " ");

    // POSIX class names inside bracket expressions
    let line = compile!(r"\[:.*:\]").replace_all(&line, " ");

    // whatever escapes remain are single backslash forms; clear literal
    // backslash pairs first so they cannot pair with a following character
    let line = line.replace("\\\\", " ");
    let line = compile!(r"\\.").replace_all(&line, " ");

    // and finally any leftover bracket expression
    let line = compile!(r"\[.[^\]]*\]").replace_all(&line, " ");

    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_markers_leave_a_word_boundary() {
        assert_eq!(strip_specials(r"\%23lfoo\zsbar"), " foo bar");
    }

    #[test]
    fn bracket_classes_are_removed() {
        assert_eq!(strip_specials(r"[0-9]end"), " end");
        assert_eq!(strip_specials(r"x[[:alpha:]]y"), "x y");
    }

    #[test]
    fn single_escapes_become_spaces() {
        assert_eq!(strip_specials(r"foo\|bar"), "foo bar");
        assert_eq!(strip_specials(r"\<word\>"), " word ");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_specials("BEGIN END"), "BEGIN END");
    }
}
