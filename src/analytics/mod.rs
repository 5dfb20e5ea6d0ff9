//! Classification batch auditing
//!
//! Aggregates a batch of classification results into a report: industry
//! distribution, ministry-based share, confidence summary. Pure aggregation
//! over in-memory results; the CLI serializes the report for audit output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::classifier::ClassificationResult;

/// Results below this confidence are flagged for manual review
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Summary of one classification batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    /// Programs classified
    pub total: usize,

    /// Count per industry label
    pub by_industry: BTreeMap<String, usize>,

    /// Results where the ministry table decided the industry
    pub ministry_based: usize,

    /// Mean confidence across the batch
    pub mean_confidence: f64,

    /// Results under [`LOW_CONFIDENCE_THRESHOLD`]
    pub low_confidence: usize,

    pub generated_at: DateTime<Utc>,
}

impl ClassificationReport {
    /// Build a report from a batch of results
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ClassificationResult>,
    {
        let mut total = 0;
        let mut by_industry: BTreeMap<String, usize> = BTreeMap::new();
        let mut ministry_based = 0;
        let mut confidence_sum = 0.0;
        let mut low_confidence = 0;

        for result in results {
            total += 1;
            *by_industry
                .entry(result.industry.as_str().to_string())
                .or_insert(0) += 1;
            if result.ministry_based {
                ministry_based += 1;
            }
            confidence_sum += result.confidence;
            if result.confidence < LOW_CONFIDENCE_THRESHOLD {
                low_confidence += 1;
            }
        }

        let mean_confidence = if total == 0 {
            0.0
        } else {
            confidence_sum / total as f64
        };

        Self {
            total,
            by_industry,
            ministry_based,
            mean_confidence,
            low_confidence,
            generated_at: Utc::now(),
        }
    }

    /// Share of results decided by the ministry table, as a percentage
    pub fn ministry_based_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.ministry_based as f64 / self.total as f64) * 100.0
        }
    }
}
