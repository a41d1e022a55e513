//! Prefix cycling
//!
//! Every decoratable character (`[A-Za-z0-9_]`) of the input gets the next
//! marker of the list written in front of it. Markers are handed out
//! round-robin and only decoratable characters consume one:
//! - "Hi" with ["A", "B"] → "~AH~Bi"
//! - "Hi!" with ["A", "B"] → "~AH~Bi!" (`!` passes through)
//! - "A1_b" with ["X"] → "~XA~X1~X_~Xb"
//!
//! Markers are normalized first so each one starts with the `~` sentinel.
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

/// Leading character every normalized marker carries.
pub const SENTINEL: char = '~';

lazy_static! {
    // ASCII only: accented letters and other scripts are passed through.
    static ref DECORATABLE: Regex = Regex::new(r"[A-Za-z0-9_]").unwrap();
}

/// Returns true if `ch` receives a marker.
///
/// This is the character class; `DECORATABLE` must match exactly the same
/// characters.
pub fn is_decoratable(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Number of decoratable characters in `text`.
pub fn count_decoratable(text: &str) -> usize {
    text.chars().filter(|ch| is_decoratable(*ch)).count()
}

/// Ensures every marker starts with the sentinel.
///
/// Length, order and duplicates are preserved; an empty marker becomes `"~"`.
pub fn normalize_markers<S: AsRef<str>>(markers: &[S]) -> Vec<String> {
    markers
        .iter()
        .map(|marker| {
            let marker = marker.as_ref();
            if marker.starts_with(SENTINEL) {
                marker.to_string()
            } else {
                format!("{SENTINEL}{marker}")
            }
        })
        .collect()
}

/// Decorates `text` by cycling the normalized `markers` over its
/// decoratable characters.
///
/// Empty text or an empty marker list returns the text unchanged.
pub fn decorate<S: AsRef<str>>(text: &str, markers: &[S]) -> String {
    if text.is_empty() || markers.is_empty() {
        return text.to_string();
    }

    let markers = normalize_markers(markers);
    let mut consumed = 0usize;

    let decorated = DECORATABLE.replace_all(text, |caps: &Captures<'_>| {
        let marker = &markers[consumed % markers.len()];
        consumed += 1;
        format!("{marker}{}", &caps[0])
    });

    debug!(
        "decorated {} characters with {} markers",
        consumed,
        markers.len()
    );

    decorated.into_owned()
}
