// Core data structures for the dari match engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Industry category assigned to funding programs and organization profiles
///
/// `General` is the guaranteed fallback: classification never produces a null
/// or out-of-range category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Industry {
    BioHealth,
    Ict,
    Energy,
    Agriculture,
    Veterinary,
    Forestry,
    MarineFisheries,
    MarineSecurity,
    Defense,
    Manufacturing,
    Environment,
    General,
}

impl Industry {
    /// Get the persisted label (matches the stored `category` column)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BioHealth => "BIO_HEALTH",
            Self::Ict => "ICT",
            Self::Energy => "ENERGY",
            Self::Agriculture => "AGRICULTURE",
            Self::Veterinary => "VETERINARY",
            Self::Forestry => "FORESTRY",
            Self::MarineFisheries => "MARINE_FISHERIES",
            Self::MarineSecurity => "MARINE_SECURITY",
            Self::Defense => "DEFENSE",
            Self::Manufacturing => "MANUFACTURING",
            Self::Environment => "ENVIRONMENT",
            Self::General => "GENERAL",
        }
    }

    /// Get Korean name
    pub fn korean_name(&self) -> &'static str {
        match self {
            Self::BioHealth => "바이오·의료",
            Self::Ict => "정보통신",
            Self::Energy => "에너지",
            Self::Agriculture => "농업",
            Self::Veterinary => "동물의료",
            Self::Forestry => "임업",
            Self::MarineFisheries => "해양수산",
            Self::MarineSecurity => "해양안보",
            Self::Defense => "국방",
            Self::Manufacturing => "제조",
            Self::Environment => "환경",
            Self::General => "일반",
        }
    }

    /// Create from a stored label or Korean name
    ///
    /// Labels are uppercased before lookup so that `"bio_health"` and
    /// `"BIO_HEALTH"` resolve identically; callers are not trusted to
    /// normalize case themselves.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BIO_HEALTH" | "바이오·의료" | "바이오" => Some(Self::BioHealth),
            "ICT" | "정보통신" => Some(Self::Ict),
            "ENERGY" | "에너지" => Some(Self::Energy),
            "AGRICULTURE" | "농업" => Some(Self::Agriculture),
            "VETERINARY" | "동물의료" => Some(Self::Veterinary),
            "FORESTRY" | "임업" => Some(Self::Forestry),
            "MARINE_FISHERIES" | "해양수산" => Some(Self::MarineFisheries),
            "MARINE_SECURITY" | "해양안보" => Some(Self::MarineSecurity),
            "DEFENSE" | "국방" => Some(Self::Defense),
            "MANUFACTURING" | "제조" => Some(Self::Manufacturing),
            "ENVIRONMENT" | "환경" => Some(Self::Environment),
            "GENERAL" | "일반" => Some(Self::General),
            _ => None,
        }
    }

    /// Get all categories in table order
    pub fn all() -> Vec<Self> {
        vec![
            Self::BioHealth,
            Self::Ict,
            Self::Energy,
            Self::Agriculture,
            Self::Veterinary,
            Self::Forestry,
            Self::MarineFisheries,
            Self::MarineSecurity,
            Self::Defense,
            Self::Manufacturing,
            Self::Environment,
            Self::General,
        ]
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A semantic-attribute value: single selection or multi-select
///
/// Profile and program records carry either a scalar string or an array of
/// strings per field. The ambiguity is resolved once at this boundary; the
/// matcher never inspects raw JSON shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemanticValue {
    Scalar(String),
    Set(Vec<String>),
}

impl SemanticValue {
    /// Membership test: a scalar matches on equality, a set on containment
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Scalar(s) => s == value,
            Self::Set(values) => values.iter().any(|v| v == value),
        }
    }

    /// All selected values, scalar treated as a one-element list
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Scalar(s) => vec![s.as_str()],
            Self::Set(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// First (or only) selected value
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s.as_str()),
            Self::Set(values) => values.first().map(String::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Set(values) => values.is_empty(),
        }
    }
}

/// Category-specific semantic attribute map (field name → value)
pub type SemanticMap = HashMap<String, SemanticValue>;

/// Organization profile, restricted to the fields the match core consumes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Industry category label (e.g. "BIO_HEALTH"), set by the profile editor
    #[serde(default)]
    pub industry_sector: Option<String>,

    /// Structured sub-domain attributes (e.g. targetOrganism, targetMarket)
    #[serde(default)]
    pub semantic_sub_domain: Option<SemanticMap>,
}

/// Funding program record as produced by the ingestion pipeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingProgram {
    pub title: String,

    /// Persisted classification label, written once at ingestion
    #[serde(default)]
    pub category: Option<String>,

    /// Scraped keywords, in announcement order
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Structured sub-domain attributes (e.g. targetOrganism, targetMarket)
    #[serde(default)]
    pub semantic_sub_domain: Option<SemanticMap>,

    /// Administering government ministry, when the announcement names one
    #[serde(default)]
    pub ministry: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
