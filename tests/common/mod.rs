//! Shared fixtures for integration tests

use std::collections::HashMap;

use dari::models::{FundingProgram, Organization, SemanticValue};

/// Organization with a semantic attribute map
pub fn org_with_fields(sector: &str, fields: &[(&str, SemanticValue)]) -> Organization {
    Organization {
        industry_sector: Some(sector.to_string()),
        semantic_sub_domain: Some(semantic_map(fields)),
    }
}

/// Program with a persisted category and a semantic attribute map
pub fn program_with_fields(category: &str, fields: &[(&str, SemanticValue)]) -> FundingProgram {
    FundingProgram {
        title: "테스트 지원사업 공고".to_string(),
        category: Some(category.to_string()),
        semantic_sub_domain: Some(semantic_map(fields)),
        ..Default::default()
    }
}

pub fn semantic_map(fields: &[(&str, SemanticValue)]) -> HashMap<String, SemanticValue> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn scalar(value: &str) -> SemanticValue {
    SemanticValue::Scalar(value.to_string())
}

pub fn set(values: &[&str]) -> SemanticValue {
    SemanticValue::Set(values.iter().map(|v| v.to_string()).collect())
}
