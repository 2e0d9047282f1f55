//! Replacement template interpolation
//!
//! Templates hold literal text plus `$N` backreferences (one or two digits).
//! References to groups that did not participate, or that do not exist,
//! expand to nothing.

use regex::{Captures, Regex};
use std::sync::OnceLock;

static BACKREFERENCE: OnceLock<Regex> = OnceLock::new();

fn backreference() -> &'static Regex {
    BACKREFERENCE.get_or_init(|| {
        Regex::new(r"\$(\d{1,2})").expect("backreference pattern is a valid literal")
    })
}

/// Expand `$N` references in `template` against `captures`
pub fn interpolate(template: &str, captures: &Captures<'_>) -> String {
    if !template.contains('$') {
        return template.to_string();
    }

    backreference()
        .replace_all(template, |reference: &Captures<'_>| {
            reference[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| captures.get(index))
                .map_or("", |group| group.as_str())
                .to_string()
        })
        .into_owned()
}
