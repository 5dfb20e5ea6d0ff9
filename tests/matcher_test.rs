//! Integration tests for semantic sub-domain matching

mod common;

use common::{org_with_fields, program_with_fields, scalar, semantic_map, set};

use dari::matcher::{semantic_match, MatchReason, INFERRED_MATCH_SCORE, SCORE_CAP};
use dari::models::{FundingProgram, Organization};

use proptest::prelude::*;

#[test]
fn test_no_data_on_either_side() {
    let result = semantic_match(&Organization::default(), &FundingProgram::default());
    assert_eq!(result.score, 0);
    assert_eq!(result.reason, MatchReason::NoSemanticData);
    assert!(!result.is_hard_filter);
    assert!(result.matching_fields.is_empty());
    assert!(result.mismatched_fields.is_empty());
}

#[test]
fn test_animal_org_never_matches_human_program() {
    let org = org_with_fields("BIO_HEALTH", &[("targetOrganism", scalar("ANIMAL"))]);
    let program = program_with_fields("BIO_HEALTH", &[("targetOrganism", scalar("HUMAN"))]);

    let result = semantic_match(&org, &program);
    assert_eq!(result.score, 0);
    assert!(result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::OrganismMismatch);
    assert_eq!(result.mismatched_fields, vec!["targetOrganism"]);
    // Both organism display labels appear in the user-facing explanation
    assert!(result.explanation.contains("동물"));
    assert!(result.explanation.contains("인체"));
}

#[test]
fn test_identical_two_field_profiles_hit_exact_cap() {
    let fields = [
        ("targetOrganism", scalar("HUMAN")),
        ("researchStage", scalar("CLINICAL")),
    ];
    let result = semantic_match(
        &org_with_fields("BIO_HEALTH", &fields),
        &program_with_fields("BIO_HEALTH", &fields),
    );
    assert_eq!(result.score, SCORE_CAP as u32);
    assert_eq!(result.reason, MatchReason::SemanticMatch);
    assert!(!result.is_hard_filter);
    assert!(result.explanation.contains("일치"));
}

#[test]
fn test_one_match_one_soft_mismatch_scores_ten() {
    let org = org_with_fields(
        "BIO_HEALTH",
        &[
            ("targetOrganism", scalar("HUMAN")),
            ("researchStage", scalar("CLINICAL")),
        ],
    );
    let program = program_with_fields(
        "BIO_HEALTH",
        &[
            ("targetOrganism", scalar("HUMAN")),
            ("researchStage", scalar("PRECLINICAL")),
        ],
    );

    let result = semantic_match(&org, &program);
    assert_eq!(result.score, 10);
    assert_eq!(result.reason, MatchReason::SemanticMatch);
    assert!(!result.is_hard_filter);
}

#[test]
fn test_multi_select_org_market_accepts_member_program() {
    let org = org_with_fields("ICT", &[("targetMarket", set(&["CONSUMER", "ENTERPRISE"]))]);
    let program = program_with_fields("ICT", &[("targetMarket", scalar("ENTERPRISE"))]);

    let result = semantic_match(&org, &program);
    assert!(result.matching_fields.iter().any(|f| f == "targetMarket"));
    assert!(!result.is_hard_filter);
    assert!(result.score > 0);
}

#[test]
fn test_market_outside_org_set_hard_blocks() {
    let org = org_with_fields("ICT", &[("targetMarket", set(&["CONSUMER", "ENTERPRISE"]))]);
    let program = program_with_fields("ICT", &[("targetMarket", scalar("GOVERNMENT"))]);

    let result = semantic_match(&org, &program);
    assert!(result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::MarketMismatch);
    assert_eq!(result.score, 0);
}

#[test]
fn test_energy_source_hard_filter() {
    let org = org_with_fields("ENERGY", &[("energySource", scalar("SOLAR"))]);
    let program = program_with_fields("ENERGY", &[("energySource", scalar("NUCLEAR"))]);

    let result = semantic_match(&org, &program);
    assert!(result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::EnergySourceMismatch);
    assert!(result.explanation.contains("태양광"));
    assert!(result.explanation.contains("원자력"));
}

#[test]
fn test_defense_domain_hard_filter() {
    let org = org_with_fields("DEFENSE", &[("targetDomain", scalar("NAVAL"))]);
    let program = program_with_fields("DEFENSE", &[("targetDomain", scalar("CYBER"))]);

    let result = semantic_match(&org, &program);
    assert!(result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::DomainMismatch);
}

#[test]
fn test_unfiltered_categories_never_hard_block() {
    for category in ["MANUFACTURING", "ENVIRONMENT"] {
        let org = org_with_fields(
            category,
            &[
                ("processType", scalar("CASTING")),
                ("facilityScale", scalar("LARGE")),
            ],
        );
        let program = program_with_fields(
            category,
            &[
                ("processType", scalar("WELDING")),
                ("facilityScale", scalar("SMALL")),
            ],
        );

        let result = semantic_match(&org, &program);
        assert!(!result.is_hard_filter, "{category} must never hard-block");
        assert_eq!(result.score, 0);
        assert_eq!(result.reason, MatchReason::PartialMatch);
    }
}

#[test]
fn test_hard_filter_only_applies_to_designated_field() {
    // researchStage mismatches in BIO_HEALTH, but only targetOrganism can
    // hard-block there
    let org = org_with_fields("BIO_HEALTH", &[("researchStage", scalar("CLINICAL"))]);
    let program = program_with_fields("BIO_HEALTH", &[("researchStage", scalar("PRECLINICAL"))]);

    let result = semantic_match(&org, &program);
    assert!(!result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::PartialMatch);
}

#[test]
fn test_inferred_enterprise_market_matches() {
    let org = org_with_fields("ICT", &[("targetMarket", set(&["ENTERPRISE"]))]);
    let program = FundingProgram {
        title: "중소기업 업무용 클라우드 전환 지원".to_string(),
        category: Some("ICT".to_string()),
        keywords: vec!["B2B".to_string(), "기업".to_string()],
        ..Default::default()
    };

    let result = semantic_match(&org, &program);
    assert_eq!(result.reason, MatchReason::InferredMarketMatch);
    assert_eq!(result.score, INFERRED_MATCH_SCORE);
    assert!(!result.is_hard_filter);
    assert!(result.explanation.contains("키워드 분석"));
}

#[test]
fn test_inferred_government_market_mismatch_stays_soft() {
    let org = org_with_fields("ICT", &[("targetMarket", scalar("CONSUMER"))]);
    let program = FundingProgram {
        title: "공공기관 행정 서비스 지능화".to_string(),
        category: Some("ICT".to_string()),
        keywords: vec!["정부".to_string(), "지자체".to_string()],
        ..Default::default()
    };

    let result = semantic_match(&org, &program);
    assert_eq!(result.reason, MatchReason::InferredMarketMismatch);
    assert_eq!(result.score, 0);
    assert!(!result.is_hard_filter);
}

#[test]
fn test_weak_signal_yields_no_inference() {
    let org = org_with_fields("ICT", &[("targetMarket", scalar("ENTERPRISE"))]);
    let program = FundingProgram {
        title: "차세대 네트워크 장비 개발".to_string(),
        category: Some("ICT".to_string()),
        ..Default::default()
    };

    let result = semantic_match(&org, &program);
    assert_eq!(result.reason, MatchReason::NoSemanticData);
    assert_eq!(result.score, 0);
}

#[test]
fn test_org_category_backfills_missing_program_category() {
    // Program category missing: the org's sector resolves the hard filter
    let org = org_with_fields("BIO_HEALTH", &[("targetOrganism", scalar("ANIMAL"))]);
    let mut program = program_with_fields("", &[("targetOrganism", scalar("HUMAN"))]);
    program.category = None;

    let result = semantic_match(&org, &program);
    assert!(result.is_hard_filter);
    assert_eq!(result.reason, MatchReason::OrganismMismatch);
}

#[test]
fn test_wire_format_records_flow_through_matcher() {
    let org: Organization = serde_json::from_str(
        r#"{
            "industrySector": "ICT",
            "semanticSubDomain": { "targetMarket": ["CONSUMER", "ENTERPRISE"] }
        }"#,
    )
    .unwrap();
    let program: FundingProgram = serde_json::from_str(
        r#"{
            "title": "클라우드 서비스 보급 사업",
            "category": "ICT",
            "keywords": [],
            "semanticSubDomain": { "targetMarket": "CONSUMER" }
        }"#,
    )
    .unwrap();

    let result = semantic_match(&org, &program);
    assert_eq!(result.reason, MatchReason::SemanticMatch);
    assert!(result.matching_fields.iter().any(|f| f == "targetMarket"));
}

proptest! {
    /// Score stays bounded and the hard-filter invariant holds
    #[test]
    fn prop_score_bounded_and_hard_filter_zeroes(
        org_value in "[A-Z]{3,8}",
        program_value in "[A-Z]{3,8}",
        extra_match in proptest::bool::ANY,
    ) {
        let mut org_fields = vec![("targetOrganism", scalar(&org_value))];
        let mut program_fields = vec![("targetOrganism", scalar(&program_value))];
        if extra_match {
            org_fields.push(("researchStage", scalar("CLINICAL")));
            program_fields.push(("researchStage", scalar("CLINICAL")));
        }

        let result = semantic_match(
            &org_with_fields("BIO_HEALTH", &org_fields),
            &program_with_fields("BIO_HEALTH", &program_fields),
        );

        prop_assert!(result.score <= SCORE_CAP as u32);
        if result.is_hard_filter {
            prop_assert_eq!(result.score, 0);
        }
        for field in &result.matching_fields {
            prop_assert!(!result.mismatched_fields.contains(field));
        }
    }

    /// Disjointness of field sets holds for arbitrary shared maps
    #[test]
    fn prop_field_sets_disjoint(values in proptest::collection::vec("[A-Z]{2,6}", 1..5)) {
        let fields: Vec<(String, _)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("field{i}"), scalar(v)))
            .collect();
        let borrowed: Vec<(&str, _)> = fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();

        let org = Organization {
            industry_sector: Some("MANUFACTURING".to_string()),
            semantic_sub_domain: Some(semantic_map(&borrowed)),
        };
        let program = program_with_fields("MANUFACTURING", &borrowed);

        let result = semantic_match(&org, &program);
        prop_assert!(result.mismatched_fields.is_empty());
        prop_assert!(result.score <= SCORE_CAP as u32);
    }
}
