use super::prefix::{count_decoratable, normalize_markers};
use std::collections::HashSet;

/// Numbers shown under a decorated result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorateStats {
    /// Decoratable characters in the original text
    pub decoratable_chars: usize,
    /// Length of the decorated result in characters
    pub result_chars: usize,
    /// Distinct markers after normalization ("A" and "~A" count once)
    pub distinct_markers: usize,
}

impl DecorateStats {
    pub fn collect<S: AsRef<str>>(original: &str, result: &str, markers: &[S]) -> Self {
        let normalized = normalize_markers(markers);
        let distinct: HashSet<&str> = normalized.iter().map(String::as_str).collect();
        Self {
            decoratable_chars: count_decoratable(original),
            result_chars: result.chars().count(),
            distinct_markers: distinct.len(),
        }
    }
}
