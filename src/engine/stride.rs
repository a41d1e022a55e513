//! Stride patterns
//!
//! A fixed-position alternative to prefix cycling. Every character of the
//! text owns a slot by its absolute position, so spaces and punctuation
//! still advance the pattern:
//! - Alternating: positions 0, 1 → first, second
//! - Triple alternating: positions 0, 1, 2, 3 → first, second, third, second
//!
//! Only a literal space is left bare; every other character is prefixed.
//! Markers are written verbatim, no sentinel is added here.
use super::error::InputError;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StridePattern {
    Alternating {
        first: String,
        second: String,
    },
    TripleAlternating {
        first: String,
        second: String,
        third: String,
    },
}

impl StridePattern {
    /// Picks the pattern from the number of markers: two alternate, three
    /// triple-alternate.
    pub fn from_markers<S: AsRef<str>>(markers: &[S]) -> Result<Self, InputError> {
        match markers {
            [first, second] => Ok(StridePattern::Alternating {
                first: first.as_ref().to_string(),
                second: second.as_ref().to_string(),
            }),
            [first, second, third] => Ok(StridePattern::TripleAlternating {
                first: first.as_ref().to_string(),
                second: second.as_ref().to_string(),
                third: third.as_ref().to_string(),
            }),
            _ => Err(InputError::StrideMarkerCount(markers.len())),
        }
    }

    /// Marker owning absolute position `index`.
    pub fn marker_at(&self, index: usize) -> &str {
        match self {
            StridePattern::Alternating { first, second } => {
                if index % 2 == 0 {
                    first
                } else {
                    second
                }
            }
            StridePattern::TripleAlternating {
                first,
                second,
                third,
            } => match index % 4 {
                0 => first,
                1 | 3 => second,
                _ => third,
            },
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 3);
        for (index, ch) in text.chars().enumerate() {
            if ch != ' ' {
                out.push_str(self.marker_at(index));
            }
            out.push(ch);
        }
        debug!("applied {:?} to {} characters", self, text.chars().count());
        out
    }
}
