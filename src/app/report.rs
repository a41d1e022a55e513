use crate::clipboard::CopyStatus;
use crate::engine::{decorate, normalize_markers, DecorateStats};

/// Which algorithm produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Cycled,
    Stride,
}

/// Everything the display needs about one transformation
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: PatternKind,
    pub original: String,
    /// Markers as the operator typed them
    pub markers: Vec<String>,
    pub normalized: Vec<String>,
    pub result: String,
    pub stats: DecorateStats,
    pub copy_status: CopyStatus,
}

impl Report {
    pub fn new(
        kind: PatternKind,
        original: String,
        markers: Vec<String>,
        result: String,
        copy_status: CopyStatus,
    ) -> Self {
        let normalized = normalize_markers(&markers);
        let stats = DecorateStats::collect(&original, &result, &markers);
        Self {
            kind,
            original,
            markers,
            normalized,
            result,
            stats,
            copy_status,
        }
    }
}

/// One built-in demonstration
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleReport {
    pub text: &'static str,
    pub markers: Vec<String>,
    pub normalized: Vec<String>,
    pub result: String,
}

const EXAMPLES: &[(&str, &[&str])] = &[
    ("Hello World!", &["A", "B"]),
    ("Python123", &["1", "2"]),
    ("Test", &["red", "blue", "green"]),
    ("Regex!", &["X", "Y", "Z"]),
];

pub fn build_examples() -> Vec<ExampleReport> {
    EXAMPLES
        .iter()
        .map(|&(text, markers)| ExampleReport {
            text,
            markers: markers.iter().map(|m| m.to_string()).collect(),
            normalized: normalize_markers(markers),
            result: decorate(text, markers),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_normalizes_and_counts() {
        let report = Report::new(
            PatternKind::Cycled,
            "Hi!".to_string(),
            vec!["A".to_string(), "~B".to_string()],
            "~AH~Bi!".to_string(),
            CopyStatus::Unavailable,
        );
        assert_eq!(report.normalized, vec!["~A", "~B"]);
        assert_eq!(report.stats.decoratable_chars, 2);
        assert_eq!(report.stats.result_chars, 7);
        assert_eq!(report.stats.distinct_markers, 2);
    }

    #[test]
    fn test_build_examples() {
        let examples = build_examples();
        assert_eq!(examples.len(), 4);
        assert_eq!(examples[0].result, "~AH~Be~Al~Bl~Ao ~BW~Ao~Br~Al~Bd!");
        assert_eq!(examples[1].result, "~1P~2y~1t~2h~1o~2n~11~22~13");
        assert_eq!(examples[2].normalized, vec!["~red", "~blue", "~green"]);
        assert_eq!(examples[3].result, "~XR~Ye~Zg~Xe~Yx!");
    }
}
