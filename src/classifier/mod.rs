//! Program industry classification
//!
//! Assigns an industry category to a funding program from its title,
//! optional description, and administering ministry. Replaces the earlier
//! LLM enrichment step with a deterministic, auditable rule pass: the same
//! input always yields the same category, and every matched keyword is
//! reported as evidence.
//!
//! Classification never fails. When neither the ministry table nor the
//! keyword table produces a signal, the result is `GENERAL` with low
//! confidence.

pub mod keywords;
pub mod ministry;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Industry;

pub use ministry::MINISTRY_CONFIDENCE;

/// Confidence added per distinct matched keyword of the final industry
pub const KEYWORD_CONFIDENCE_STEP: f64 = 0.15;

/// Confidence assigned when neither ministry nor keywords yield a signal
pub const FALLBACK_CONFIDENCE: f64 = 0.2;

/// Result of classifying one funding program
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub industry: Industry,

    /// Additive confidence in [0, 1]: ministry agreement plus per-keyword
    /// increments, capped
    pub confidence: f64,

    /// Every keyword that matched, in scan order, regardless of which
    /// industry won
    pub matched_keywords: Vec<String>,

    /// True when the final industry came from (and agrees with) the
    /// ministry table
    pub ministry_based: bool,
}

/// Classify a funding program from its title, description, and ministry
///
/// Pure function over the static rule tables; safe to call from any number
/// of threads concurrently.
pub fn classify(
    title: &str,
    description: Option<&str>,
    ministry: Option<&str>,
) -> ClassificationResult {
    let ministry_industry = ministry.and_then(ministry::lookup);

    // Substring scan over title + description, all industries
    let mut matched_keywords: Vec<String> = Vec::new();
    let mut scores: HashMap<Industry, u32> = HashMap::new();
    let mut hits: HashMap<Industry, Vec<&'static str>> = HashMap::new();

    for rule in keywords::KEYWORD_RULES {
        for &(keyword, weight) in rule.keywords {
            let matched =
                title.contains(keyword) || description.is_some_and(|d| d.contains(keyword));
            if matched {
                *scores.entry(rule.industry).or_insert(0) += weight;
                hits.entry(rule.industry).or_default().push(keyword);
                if !matched_keywords.iter().any(|k| k == keyword) {
                    matched_keywords.push(keyword.to_string());
                }
            }
        }
    }

    // Keyword winner: highest weighted score, earlier table entry wins ties
    let mut keyword_winner: Option<(Industry, u32)> = None;
    for rule in keywords::KEYWORD_RULES {
        if let Some(&score) = scores.get(&rule.industry) {
            if score > 0 && keyword_winner.map_or(true, |(_, best)| score > best) {
                keyword_winner = Some((rule.industry, score));
            }
        }
    }

    let industry = decide(ministry_industry, keyword_winner.map(|(i, _)| i), &hits);

    let keyword_hits = hits.get(&industry).map_or(0, Vec::len);
    let mut confidence = 0.0;
    if ministry_industry == Some(industry) {
        confidence += MINISTRY_CONFIDENCE;
    }
    confidence += KEYWORD_CONFIDENCE_STEP * keyword_hits as f64;
    if confidence == 0.0 {
        confidence = FALLBACK_CONFIDENCE;
    }

    ClassificationResult {
        industry,
        confidence: confidence.min(1.0),
        matched_keywords,
        ministry_based: ministry_industry == Some(industry),
    }
}

/// Combine ministry and keyword signals into the final industry
///
/// Disagreements fall to the ministry default unless an override rule grants
/// the narrower keyword winner enough evidence.
fn decide(
    ministry_industry: Option<Industry>,
    keyword_winner: Option<Industry>,
    hits: &HashMap<Industry, Vec<&'static str>>,
) -> Industry {
    match (ministry_industry, keyword_winner) {
        (None, None) => Industry::General,
        (Some(industry), None) => industry,
        (None, Some(industry)) => industry,
        (Some(from_ministry), Some(from_keywords)) if from_ministry == from_keywords => {
            from_ministry
        }
        (Some(from_ministry), Some(from_keywords)) => {
            let matched = hits
                .get(&from_keywords)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if narrower_wins(from_keywords, from_ministry, matched) {
                from_keywords
            } else {
                from_ministry
            }
        }
    }
}

fn narrower_wins(narrower: Industry, broader: Industry, matched: &[&'static str]) -> bool {
    let Some(rule) = keywords::override_rule(narrower, broader) else {
        return false;
    };
    matched.len() >= rule.min_keyword_matches
        || matched.iter().any(|kw| rule.decisive.contains(kw))
}
