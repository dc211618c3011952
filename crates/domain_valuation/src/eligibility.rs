//! Money-back guarantee eligibility
//!
//! The wizard asks for a coarse pre-accident value bucket (not the dollar
//! figure) and derives a boolean guarantee flag from it. The mapping is a
//! fixed business rule enumerated exhaustively below; it feeds the guarantee
//! gate only and never the dollar estimate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight ordered pre-accident value ranges offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PreAccidentValueBucket {
    #[serde(rename = "<5000")]
    Under5000,
    #[serde(rename = "5000-7500")]
    From5000To7500,
    #[serde(rename = "7500-10000")]
    From7500To10000,
    #[serde(rename = "10000-20000")]
    From10000To20000,
    #[serde(rename = "20000-30000")]
    From20000To30000,
    #[serde(rename = "30000-50000")]
    From30000To50000,
    #[serde(rename = "50000-75000")]
    From50000To75000,
    #[serde(rename = ">75000")]
    Over75000,
}

impl PreAccidentValueBucket {
    /// All buckets in ascending value order
    pub const ALL: [PreAccidentValueBucket; 8] = [
        PreAccidentValueBucket::Under5000,
        PreAccidentValueBucket::From5000To7500,
        PreAccidentValueBucket::From7500To10000,
        PreAccidentValueBucket::From10000To20000,
        PreAccidentValueBucket::From20000To30000,
        PreAccidentValueBucket::From30000To50000,
        PreAccidentValueBucket::From50000To75000,
        PreAccidentValueBucket::Over75000,
    ];

    /// The wizard-facing label for this bucket
    pub fn label(&self) -> &'static str {
        match self {
            PreAccidentValueBucket::Under5000 => "<5000",
            PreAccidentValueBucket::From5000To7500 => "5000-7500",
            PreAccidentValueBucket::From7500To10000 => "7500-10000",
            PreAccidentValueBucket::From10000To20000 => "10000-20000",
            PreAccidentValueBucket::From20000To30000 => "20000-30000",
            PreAccidentValueBucket::From30000To50000 => "30000-50000",
            PreAccidentValueBucket::From50000To75000 => "50000-75000",
            PreAccidentValueBucket::Over75000 => ">75000",
        }
    }

    /// Parses a wizard label; unknown or empty labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == label.trim())
    }

    /// Whether this bucket qualifies for the money-back guarantee.
    ///
    /// Fixed rule table: below $7,500 of pre-accident value the recoverable
    /// diminished value does not clear the appraisal fee, so the guarantee
    /// is not offered.
    pub fn guarantee_eligible(&self) -> bool {
        match self {
            PreAccidentValueBucket::Under5000 => false,
            PreAccidentValueBucket::From5000To7500 => false,
            PreAccidentValueBucket::From7500To10000 => true,
            PreAccidentValueBucket::From10000To20000 => true,
            PreAccidentValueBucket::From20000To30000 => true,
            PreAccidentValueBucket::From30000To50000 => true,
            PreAccidentValueBucket::From50000To75000 => true,
            PreAccidentValueBucket::Over75000 => true,
        }
    }
}

impl fmt::Display for PreAccidentValueBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Guarantee eligibility for a raw wizard label.
///
/// Total over all strings: unrecognized or empty input is simply not
/// eligible, never an error.
pub fn is_guarantee_eligible(label: &str) -> bool {
    PreAccidentValueBucket::from_label(label)
        .map(|b| b.guarantee_eligible())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_bucket_not_eligible() {
        assert!(!is_guarantee_eligible("<5000"));
        assert!(!is_guarantee_eligible("5000-7500"));
    }

    #[test]
    fn test_upper_buckets_eligible() {
        assert!(is_guarantee_eligible("7500-10000"));
        assert!(is_guarantee_eligible("20000-30000"));
        assert!(is_guarantee_eligible(">75000"));
    }

    #[test]
    fn test_empty_and_unknown_labels_defined() {
        assert!(!is_guarantee_eligible(""));
        assert!(!is_guarantee_eligible("banana"));
        assert!(!is_guarantee_eligible("5000"));
    }

    #[test]
    fn test_label_roundtrip_for_all_buckets() {
        for bucket in PreAccidentValueBucket::ALL {
            assert_eq!(PreAccidentValueBucket::from_label(bucket.label()), Some(bucket));
        }
    }

    #[test]
    fn test_label_parsing_trims_whitespace() {
        assert_eq!(
            PreAccidentValueBucket::from_label(" 10000-20000 "),
            Some(PreAccidentValueBucket::From10000To20000)
        );
    }

    #[test]
    fn test_buckets_are_ordered() {
        let mut sorted = PreAccidentValueBucket::ALL;
        sorted.sort();
        assert_eq!(sorted, PreAccidentValueBucket::ALL);
    }

    #[test]
    fn test_serde_uses_wizard_labels() {
        let json = serde_json::to_string(&PreAccidentValueBucket::Over75000).unwrap();
        assert_eq!(json, "\">75000\"");
    }
}
