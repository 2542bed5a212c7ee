use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity grade the detection service assigns to each pothole it finds.
///
/// Variants are declared from least to most severe so the derived `Ord`
/// can be used to pick the worst grade in a detection. Any string the
/// backend sends that is not one of the known grades deserializes to
/// `Unknown` instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    Unknown,
    Minor,
    Moderate,
    Severe,
}

/// Per-grade counts, as returned in `severityCounts`.
pub type SeverityCounts = BTreeMap<Severity, u32>;

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "Unknown",
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    /// Marker fill colour used on the map views.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Severity::Severe => "#ff0000",
            Severity::Moderate => "#ffa500",
            Severity::Minor => "#ffff00",
            Severity::Unknown => "#808080",
        }
    }

    /// CSS modifier for severity chips (`chip-error`, `chip-warning`, ...).
    pub fn chip_class(&self) -> &'static str {
        match self {
            Severity::Severe => "chip-error",
            Severity::Moderate => "chip-warning",
            Severity::Minor => "chip-success",
            Severity::Unknown => "chip-default",
        }
    }

    /// Worst grade with a non-zero count, or `Unknown` when nothing counted.
    pub fn worst_of(counts: &SeverityCounts) -> Severity {
        counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(severity, _)| *severity)
            .max()
            .unwrap_or(Severity::Unknown)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "Minor" => Severity::Minor,
            "Moderate" => Severity::Moderate,
            "Severe" => Severity::Severe,
            _ => Severity::Unknown,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Severity::from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_of_picks_highest_non_zero_grade() {
        let mut counts = SeverityCounts::new();
        counts.insert(Severity::Minor, 3);
        counts.insert(Severity::Severe, 0);
        counts.insert(Severity::Moderate, 1);
        assert_eq!(Severity::worst_of(&counts), Severity::Moderate);
    }

    #[test]
    fn unknown_grade_never_outranks_a_known_one() {
        let counts: SeverityCounts =
            serde_json::from_str(r#"{"Unknown": 4, "Severe": 1}"#).unwrap();
        assert_eq!(counts.get(&Severity::Unknown), Some(&4));
        assert_eq!(Severity::worst_of(&counts), Severity::Severe);
        assert!(Severity::Unknown < Severity::Minor);
    }

    #[test]
    fn worst_of_empty_counts_is_unknown() {
        assert_eq!(Severity::worst_of(&SeverityCounts::new()), Severity::Unknown);
    }

    #[test]
    fn unrecognised_grade_deserializes_as_unknown() {
        let parsed: Vec<Severity> = serde_json::from_str(r#"["Severe", "Catastrophic"]"#).unwrap();
        assert_eq!(parsed, vec![Severity::Severe, Severity::Unknown]);
    }

    #[test]
    fn counts_deserialize_from_json_object() {
        let counts: SeverityCounts = serde_json::from_str(r#"{"Severe": 1, "Minor": 2}"#).unwrap();
        assert_eq!(counts.get(&Severity::Severe), Some(&1));
        assert_eq!(counts.get(&Severity::Minor), Some(&2));
    }
}
