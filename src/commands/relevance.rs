//! Relevance command: cross-industry relevance lookup

use crate::error::Result;

/// Print the relevance score for an organization/program industry pair
pub fn relevance(org_industry: Option<String>, program_industry: String) -> Result<()> {
    let score = crate::relevance::relevance(org_industry.as_deref(), &program_industry);
    tracing::info!(
        org = %org_industry.as_deref().unwrap_or("(unknown)"),
        program = %program_industry,
        score = %score,
        "Relevance lookup"
    );
    println!("{score}");
    Ok(())
}
