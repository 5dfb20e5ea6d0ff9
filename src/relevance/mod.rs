//! Cross-industry relevance scoring
//!
//! Symmetric pairwise table of adjacent industry domains, consumed wherever
//! the pipeline needs to estimate how compatible an organization's industry
//! is with a program's industry. Identical industries score 1.0; an unknown
//! organization industry is neutral rather than penalized; pairs absent from
//! the table score a low-but-nonzero default.

use crate::models::Industry;

/// Score for an organization whose industry is unknown
pub const UNKNOWN_ORG_RELEVANCE: f64 = 0.5;

/// Score for industry pairs absent from the table
pub const DEFAULT_RELEVANCE: f64 = 0.2;

/// Symmetric adjacency table; each pair is listed once
static RELEVANCE_PAIRS: &[(Industry, Industry, f64)] = &[
    (Industry::Veterinary, Industry::Agriculture, 0.7),
    (Industry::BioHealth, Industry::Veterinary, 0.5),
    (Industry::Energy, Industry::Environment, 0.5),
    (Industry::Forestry, Industry::Agriculture, 0.4),
    (Industry::Agriculture, Industry::MarineFisheries, 0.4),
    (Industry::Ict, Industry::Manufacturing, 0.4),
    (Industry::Ict, Industry::Defense, 0.4),
    (Industry::Energy, Industry::Manufacturing, 0.4),
    (Industry::MarineFisheries, Industry::MarineSecurity, 0.3),
    (Industry::BioHealth, Industry::Agriculture, 0.3),
    (Industry::Environment, Industry::Agriculture, 0.3),
    (Industry::MarineFisheries, Industry::Environment, 0.3),
];

/// Estimate compatibility between an organization industry and a program
/// industry, in [0, 1]
///
/// Labels are uppercased before comparison and table lookup. Unknown labels
/// that are identical still score 1.0; unknown non-identical labels fall to
/// the default.
pub fn relevance(org_industry: Option<&str>, program_industry: &str) -> f64 {
    let Some(org) = org_industry.map(str::trim).filter(|s| !s.is_empty()) else {
        return UNKNOWN_ORG_RELEVANCE;
    };

    let org_label = org.to_uppercase();
    let program_label = program_industry.trim().to_uppercase();
    if org_label == program_label {
        return 1.0;
    }

    let (Some(a), Some(b)) = (
        Industry::parse(&org_label),
        Industry::parse(&program_label),
    ) else {
        return DEFAULT_RELEVANCE;
    };
    if a == b {
        return 1.0;
    }

    RELEVANCE_PAIRS
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, score)| *score)
        .unwrap_or(DEFAULT_RELEVANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_industries_score_one() {
        for industry in Industry::all() {
            assert_eq!(relevance(Some(industry.as_str()), industry.as_str()), 1.0);
        }
    }

    #[test]
    fn test_unknown_org_industry_is_neutral() {
        assert_eq!(relevance(None, "ICT"), UNKNOWN_ORG_RELEVANCE);
        assert_eq!(relevance(Some("   "), "ENERGY"), UNKNOWN_ORG_RELEVANCE);
    }

    #[test]
    fn test_table_is_symmetric() {
        assert_eq!(relevance(Some("MARINE_FISHERIES"), "MARINE_SECURITY"), 0.3);
        assert_eq!(relevance(Some("MARINE_SECURITY"), "MARINE_FISHERIES"), 0.3);
        assert_eq!(relevance(Some("VETERINARY"), "AGRICULTURE"), 0.7);
        assert_eq!(relevance(Some("AGRICULTURE"), "VETERINARY"), 0.7);
    }

    #[test]
    fn test_absent_pairs_fall_to_default() {
        assert_eq!(relevance(Some("DEFENSE"), "BIO_HEALTH"), DEFAULT_RELEVANCE);
    }

    #[test]
    fn test_lowercase_labels_resolve() {
        assert_eq!(relevance(Some("veterinary"), "agriculture"), 0.7);
    }

    #[test]
    fn test_unknown_labels() {
        // Identical unknown labels are still a perfect match
        assert_eq!(relevance(Some("ROBOTICS"), "robotics"), 1.0);
        assert_eq!(relevance(Some("ROBOTICS"), "ICT"), DEFAULT_RELEVANCE);
    }
}
