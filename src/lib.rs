//! Completion candidates extracted from syntax highlighting rules.
//!
//! The editor hands us the textual listing of its active highlighting rules
//! (keyword lists, match patterns, and region start/skip/end patterns). We
//! pull identifier-like words out of that listing so they can be offered as
//! completion candidates for the current filetype.

pub mod completion;
pub mod parsing;

mod regex;
