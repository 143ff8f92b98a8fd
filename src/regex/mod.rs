//! regular expression compilation, cached per call site

mod cache;
