//! Semantic sub-domain compatibility matching
//!
//! Compares an organization's structured semantic attributes against a
//! funding program's, under the category-specific field schema. A mismatch
//! on the category's designated hard-filter field zeroes the score outright
//! (a human-pharma company never matches an animal-only program); other
//! mismatches only reduce it. The result is an ephemeral contribution to an
//! external composite ranking score and is never persisted.
//!
//! All functions are pure over the static schema tables; absent data
//! degrades the score instead of erroring.

pub mod market;
pub mod schema;

use serde::{Deserialize, Serialize};

use crate::models::{FundingProgram, Industry, Organization, SemanticMap, SemanticValue};

/// Maximum semantic match score
pub const SCORE_CAP: i32 = 25;

/// Score added per matching field
pub const FIELD_MATCH_SCORE: i32 = 12;

/// Score removed per mismatched non-hard field
pub const FIELD_MISMATCH_PENALTY: i32 = 3;

/// Score assigned to a keyword-inferred market match
pub const INFERRED_MATCH_SCORE: u32 = 10;

/// Why a semantic match scored the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchReason {
    NoSemanticData,
    SemanticMatch,
    PartialMatch,
    OrganismMismatch,
    MarketMismatch,
    EnergySourceMismatch,
    SectorMismatch,
    DomainMismatch,
    InferredMarketMatch,
    InferredMarketMismatch,
}

/// Result of one organization×program semantic comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticMatchResult {
    /// Bounded score in [0, 25]
    pub score: u32,

    pub reason: MatchReason,

    /// True when the mismatch hit the category's designated hard-filter
    /// field; implies `score == 0`
    pub is_hard_filter: bool,

    /// Field names that matched; disjoint from `mismatched_fields`
    pub matching_fields: Vec<String>,

    pub mismatched_fields: Vec<String>,

    /// Korean explanation rendered to end users
    pub explanation: String,
}

impl SemanticMatchResult {
    fn no_semantic_data() -> Self {
        Self {
            score: 0,
            reason: MatchReason::NoSemanticData,
            is_hard_filter: false,
            matching_fields: Vec::new(),
            mismatched_fields: Vec::new(),
            explanation: "비교할 수 있는 의미 정보가 없습니다".to_string(),
        }
    }
}

/// Score the semantic compatibility of an organization and a program
///
/// Pure function; recomputed fresh on every match-generation pass.
pub fn semantic_match(org: &Organization, program: &FundingProgram) -> SemanticMatchResult {
    let category = resolve_category(
        program.category.as_deref(),
        org.industry_sector.as_deref(),
    );

    let org_map = org.semantic_sub_domain.as_ref().filter(|m| !m.is_empty());
    let program_map = program
        .semantic_sub_domain
        .as_ref()
        .filter(|m| !m.is_empty());

    match (org_map, program_map) {
        (Some(org_fields), Some(program_fields)) => {
            compare_fields(org_fields, program_fields, category)
        }
        // Structured data missing on the program side: ICT programs fall
        // back to keyword market inference against the org's target market
        (Some(org_fields), None) if category == Some(Industry::Ict) => {
            match org_fields.get("targetMarket") {
                Some(org_market) => infer_against_program(org_market, program),
                None => SemanticMatchResult::no_semantic_data(),
            }
        }
        _ => SemanticMatchResult::no_semantic_data(),
    }
}

/// Resolve the effective category: program's persisted category first,
/// falling back to the organization's sector
///
/// Uppercasing happens inside [`Industry::parse`]; an unresolvable category
/// means hard filters never apply.
fn resolve_category(program_category: Option<&str>, org_sector: Option<&str>) -> Option<Industry> {
    program_category
        .filter(|s| !s.trim().is_empty())
        .or(org_sector)
        .and_then(Industry::parse)
}

fn compare_fields(
    org_fields: &SemanticMap,
    program_fields: &SemanticMap,
    category: Option<Industry>,
) -> SemanticMatchResult {
    let hard_field = category.and_then(schema::hard_filter_field);

    // Fields present on both sides only; absence is neither a match nor a
    // mismatch. Sorted for deterministic output order.
    let mut fields: Vec<&String> = org_fields
        .keys()
        .filter(|key| program_fields.contains_key(*key))
        .collect();
    fields.sort();

    let mut matching_fields: Vec<String> = Vec::new();
    let mut mismatched_fields: Vec<String> = Vec::new();
    let mut hard_block: Option<&String> = None;

    for field in fields {
        let org_value = &org_fields[field];
        let program_value = &program_fields[field];
        if values_match(org_value, program_value) {
            matching_fields.push(field.clone());
        } else {
            mismatched_fields.push(field.clone());
            if hard_field == Some(field.as_str()) {
                hard_block = Some(field);
            }
        }
    }

    if let (Some(field), Some(category)) = (hard_block, category) {
        let explanation = format!(
            "{} 불일치: 기관은 {}, 공고는 {} 대상입니다",
            schema::field_label(field),
            join_labels(&org_fields[field]),
            join_labels(&program_fields[field]),
        );
        return SemanticMatchResult {
            score: 0,
            reason: schema::hard_mismatch_reason(category),
            is_hard_filter: true,
            matching_fields,
            mismatched_fields,
            explanation,
        };
    }

    if matching_fields.is_empty() && mismatched_fields.is_empty() {
        // Both sides carry data but share no field
        return SemanticMatchResult::no_semantic_data();
    }

    let match_count = matching_fields.len() as i32;
    let bonus = match_count.min(2);
    let raw = FIELD_MATCH_SCORE * match_count + bonus
        - FIELD_MISMATCH_PENALTY * mismatched_fields.len() as i32;
    let score = raw.clamp(0, SCORE_CAP) as u32;

    let reason = if !matching_fields.is_empty() && score > 0 {
        MatchReason::SemanticMatch
    } else {
        MatchReason::PartialMatch
    };

    let explanation = if mismatched_fields.is_empty() {
        format!(
            "의미 정보 일치: {} 항목이 모두 일치합니다",
            join_field_labels(&matching_fields)
        )
    } else if matching_fields.is_empty() {
        format!(
            "세부 분야 불일치: {} 항목이 일치하지 않습니다",
            join_field_labels(&mismatched_fields)
        )
    } else {
        format!(
            "부분 일치: {} 항목 일치, {} 항목 불일치",
            join_field_labels(&matching_fields),
            join_field_labels(&mismatched_fields)
        )
    };

    SemanticMatchResult {
        score,
        reason,
        is_hard_filter: false,
        matching_fields,
        mismatched_fields,
        explanation,
    }
}

/// Field values match on non-empty intersection: scalar equality is the
/// degenerate case, a multi-select org profile matches any of its selections
fn values_match(org_value: &SemanticValue, program_value: &SemanticValue) -> bool {
    program_value
        .values()
        .into_iter()
        .any(|value| org_value.contains(value))
}

fn infer_against_program(
    org_market: &SemanticValue,
    program: &FundingProgram,
) -> SemanticMatchResult {
    let Some(inferred) = market::infer_market(&program.title, &program.keywords) else {
        return SemanticMatchResult::no_semantic_data();
    };

    if org_market.contains(inferred) {
        SemanticMatchResult {
            score: INFERRED_MATCH_SCORE,
            reason: MatchReason::InferredMarketMatch,
            is_hard_filter: false,
            matching_fields: vec!["targetMarket".to_string()],
            mismatched_fields: Vec::new(),
            explanation: format!(
                "키워드 분석 결과 추정 시장({})이 기관의 타깃 시장과 일치합니다",
                schema::value_label(inferred)
            ),
        }
    } else {
        SemanticMatchResult {
            score: 0,
            reason: MatchReason::InferredMarketMismatch,
            is_hard_filter: false,
            matching_fields: Vec::new(),
            mismatched_fields: vec!["targetMarket".to_string()],
            explanation: format!(
                "키워드 분석 결과 추정 시장({})이 기관의 타깃 시장({})과 다릅니다",
                schema::value_label(inferred),
                join_labels(org_market)
            ),
        }
    }
}

fn join_labels(value: &SemanticValue) -> String {
    value
        .values()
        .into_iter()
        .map(schema::value_label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_field_labels(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| schema::field_label(f).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
