//! Composite-key codec for fitness questionnaire answers.
//!
//! Draft payloads flatten the questionnaire into a map whose keys are
//! `individual::section::question`. The codec is strict in both
//! directions: exactly three segments, none empty. Individual and question
//! codes never contain the delimiter by construction.

use std::fmt;

pub const SEGMENT_DELIMITER: &str = "::";

/// Decoded form of a fitness answer key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FitnessKey {
    pub individual: String,
    pub section: String,
    pub question: String,
}

impl FitnessKey {
    pub fn new(individual: &str, section: &str, question: &str) -> Self {
        Self {
            individual: individual.to_string(),
            section: section.to_string(),
            question: question.to_string(),
        }
    }

    pub fn encode(&self) -> String {
        [
            self.individual.as_str(),
            self.section.as_str(),
            self.question.as_str(),
        ]
        .join(SEGMENT_DELIMITER)
    }

    pub fn decode(raw: &str) -> Result<Self, FitnessKeyError> {
        let segments: Vec<&str> = raw.split(SEGMENT_DELIMITER).collect();
        if segments.len() != 3 {
            return Err(FitnessKeyError::SegmentCount {
                raw: raw.to_string(),
                found: segments.len(),
            });
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(FitnessKeyError::EmptySegment(raw.to_string()));
        }
        Ok(Self::new(segments[0], segments[1], segments[2]))
    }
}

impl fmt::Display for FitnessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitnessKeyError {
    #[error("fitness key '{raw}' must have exactly three '::' separated segments, found {found}")]
    SegmentCount { raw: String, found: usize },
    #[error("fitness key '{0}' contains an empty segment")]
    EmptySegment(String),
}
