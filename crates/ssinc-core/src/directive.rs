/*
 * directive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The include directive grammar
//!
//! A comment is an include marker when its text, after trimming
//! surrounding whitespace, starts with the literal `#include`. The
//! resource name is then:
//!
//! - the contents of the first double-quoted substring anywhere in the
//!   remainder, if the remainder contains a `"`, or
//! - the whole remainder, trimmed, otherwise.
//!
//! No separator is required between the prefix and the name. A
//! directive with an unterminated quote or an empty name is malformed
//! and ignored. Matching is case-sensitive.

use once_cell::sync::Lazy;
use regex::Regex;

const INCLUDE_PREFIX: &str = "#include";

/// First complete double-quoted substring; group 1 is the name between
/// the quotes.
static QUOTED_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Extract the resource name from a comment's text, or `None` if the
/// comment is not a well-formed include directive.
///
/// ```
/// use ssinc_core::directive::include_target;
///
/// assert_eq!(include_target(r#" #include "nav.html" "#), Some("nav.html"));
/// assert_eq!(include_target("#include nav.html"), Some("nav.html"));
/// assert_eq!(include_target("just a comment"), None);
/// ```
pub fn include_target(comment_text: &str) -> Option<&str> {
    let text = comment_text.trim();
    let rest = text.strip_prefix(INCLUDE_PREFIX)?;
    let target = if rest.contains('"') {
        QUOTED_TARGET.captures(rest)?.get(1)?.as_str()
    } else {
        rest.trim()
    };
    if target.is_empty() {
        return None;
    }
    Some(target)
}

/// Whether the comment text carries the directive prefix at all,
/// well-formed or not. Lets the scanner tell a malformed directive from
/// an ordinary comment.
pub(crate) fn has_include_prefix(comment_text: &str) -> bool {
    comment_text.trim().starts_with(INCLUDE_PREFIX)
}
