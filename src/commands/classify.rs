//! Classify command: assign industry categories to funding programs

use std::path::PathBuf;

use serde::Serialize;

use crate::analytics::ClassificationReport;
use crate::classifier::{self, ClassificationResult};
use crate::error::{Error, Result};
use crate::models::FundingProgram;
use crate::normalize::normalize_text;

/// One line of batch output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifiedProgram {
    title: String,
    #[serde(flatten)]
    result: ClassificationResult,
}

/// Classify a single title from the command line, or a JSONL batch file
pub fn classify(
    title: Option<String>,
    ministry: Option<String>,
    description: Option<String>,
    input: Option<PathBuf>,
    report: bool,
) -> Result<()> {
    match (title, input) {
        (Some(title), None) => classify_single(&title, ministry.as_deref(), description.as_deref()),
        (None, Some(path)) => classify_batch(&path, report),
        _ => Err(Error::input(
            "Provide either a title argument or --input <programs.jsonl>, not both",
        )),
    }
}

fn classify_single(title: &str, ministry: Option<&str>, description: Option<&str>) -> Result<()> {
    let title = normalize_text(title);
    let description = description.map(normalize_text);

    let result = classifier::classify(&title, description.as_deref(), ministry);
    tracing::info!(
        industry = %result.industry,
        confidence = %result.confidence,
        ministry_based = %result.ministry_based,
        "Classified program"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn classify_batch(path: &PathBuf, report: bool) -> Result<()> {
    let programs: Vec<FundingProgram> = super::read_jsonl(path)?;
    tracing::info!(count = %programs.len(), input = %path.display(), "Classifying batch");

    let mut results = Vec::with_capacity(programs.len());
    for program in &programs {
        let title = normalize_text(&program.title);
        let description = program.description.as_deref().map(normalize_text);

        let result =
            classifier::classify(&title, description.as_deref(), program.ministry.as_deref());
        println!(
            "{}",
            serde_json::to_string(&ClassifiedProgram {
                title: program.title.clone(),
                result: result.clone(),
            })?
        );
        results.push(result);
    }

    if report {
        let report = ClassificationReport::from_results(&results);
        tracing::info!(
            total = %report.total,
            ministry_based_rate = %report.ministry_based_rate(),
            "Batch classification report"
        );
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
