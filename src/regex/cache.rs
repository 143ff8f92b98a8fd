/// Compile a pattern once per call site, on first use. The patterns handed
/// to this macro are fixed strings so a failure to compile is a programming
/// error, and panicking is appropriate.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
