//! Per-category semantic field schema
//!
//! Declares, for each industry category, which single semantic field (if
//! any) acts as a hard filter (a field whose mismatch zeroes the match
//! score outright), plus Korean display labels used to render explanations.
//! Categories absent from the dispatch (MANUFACTURING, ENVIRONMENT, ...)
//! can never hard-block.

use crate::matcher::MatchReason;
use crate::models::Industry;

/// The hard-filter field designated for a category, if any
pub fn hard_filter_field(category: Industry) -> Option<&'static str> {
    match category {
        Industry::BioHealth => Some("targetOrganism"),
        Industry::Ict => Some("targetMarket"),
        Industry::Energy => Some("energySource"),
        Industry::Agriculture => Some("targetSector"),
        Industry::Defense => Some("targetDomain"),
        _ => None,
    }
}

/// Mismatch reason reported when a category's hard filter fires
pub fn hard_mismatch_reason(category: Industry) -> MatchReason {
    match category {
        Industry::BioHealth => MatchReason::OrganismMismatch,
        Industry::Ict => MatchReason::MarketMismatch,
        Industry::Energy => MatchReason::EnergySourceMismatch,
        Industry::Agriculture => MatchReason::SectorMismatch,
        Industry::Defense => MatchReason::DomainMismatch,
        // Categories without a hard filter never reach this path
        _ => MatchReason::PartialMatch,
    }
}

/// Korean display label for a semantic field name
pub fn field_label(field: &str) -> &str {
    match field {
        "targetOrganism" => "지원 대상",
        "targetMarket" => "타깃 시장",
        "energySource" => "에너지원",
        "targetSector" => "대상 분야",
        "targetDomain" => "운용 영역",
        "researchStage" => "연구 단계",
        "therapeuticArea" => "치료 분야",
        other => other,
    }
}

/// Korean display label for a semantic field value
///
/// Unknown values display as themselves so explanations never lose
/// information.
pub fn value_label(value: &str) -> String {
    let label = match value.trim().to_uppercase().as_str() {
        "HUMAN" => "인체",
        "ANIMAL" => "동물",
        "PLANT" => "식물",
        "MICROBE" => "미생물",
        "CONSUMER" => "일반 소비자",
        "ENTERPRISE" => "기업",
        "GOVERNMENT" => "공공·정부",
        "INDUSTRIAL" => "산업 현장",
        "SOLAR" => "태양광",
        "WIND" => "풍력",
        "HYDROGEN" => "수소",
        "NUCLEAR" => "원자력",
        "BATTERY" => "이차전지",
        "FOSSIL" => "화석연료",
        "CROP" => "작물",
        "LIVESTOCK" => "축산",
        "FOOD" => "식품",
        "SMART_FARM" => "스마트팜",
        "GROUND" => "지상",
        "NAVAL" => "해상",
        "AERIAL" => "항공",
        "CYBER" => "사이버",
        "PRECLINICAL" => "전임상",
        "CLINICAL" => "임상",
        _ => return value.to_string(),
    };
    label.to_string()
}
