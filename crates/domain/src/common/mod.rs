//! Shared helpers used across the domain layer.

mod string;

pub use string::{dedupe_case_insensitive, nocase_cmp, none_if_blank, sort_nocase};
