//! Score command: semantic compatibility of one organization against programs

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::matcher::{semantic_match, SemanticMatchResult};
use crate::models::{FundingProgram, Organization};
use crate::relevance;

/// Combined output for one organization×program pair
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredPair {
    title: String,
    relevance: f64,
    semantic: SemanticMatchResult,
}

/// Score an organization profile against a program record (JSON) or a
/// JSONL batch of program records
pub fn score(org_path: PathBuf, program_path: PathBuf, batch: bool) -> Result<()> {
    let org: Organization = super::read_json(&org_path)?;

    let programs: Vec<FundingProgram> = if batch {
        super::read_jsonl(&program_path)?
    } else {
        vec![super::read_json(&program_path)?]
    };
    tracing::info!(
        org = %org_path.display(),
        programs = %programs.len(),
        "Scoring organization against programs"
    );

    for program in &programs {
        let semantic = semantic_match(&org, program);
        let relevance = relevance::relevance(
            org.industry_sector.as_deref(),
            program.category.as_deref().unwrap_or(""),
        );
        tracing::debug!(
            title = %program.title,
            score = %semantic.score,
            reason = ?semantic.reason,
            hard_filter = %semantic.is_hard_filter,
            "Scored pair"
        );

        let pair = ScoredPair {
            title: program.title.clone(),
            relevance,
            semantic,
        };
        if batch {
            println!("{}", serde_json::to_string(&pair)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
    }

    Ok(())
}
