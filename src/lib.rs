//! dari - Deterministic R&D funding match core
//!
//! A rule engine that matches organizations to Korean government R&D
//! funding programs. It replaced an LLM-based semantic enrichment step with
//! deterministic, auditable, zero-cost classification and compatibility
//! scoring.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`classifier`] - Industry classification from title/ministry keyword rules
//! - [`matcher`] - Semantic sub-domain compatibility scoring with hard filters
//! - [`relevance`] - Cross-industry relevance matrix
//! - [`models`] - Core data structures and types
//! - [`analytics`] - Batch classification audit reports
//! - [`normalize`] - Text cleanup for scraped input
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error handling (boundary only; the core never fails)
//!
//! # Example
//!
//! ```
//! use dari::classifier::classify;
//! use dari::relevance::relevance;
//!
//! let result = classify("바이오의약품 임상시험 지원사업", None, Some("보건복지부"));
//! assert_eq!(result.industry.as_str(), "BIO_HEALTH");
//! assert!(result.ministry_based);
//!
//! assert_eq!(relevance(Some("VETERINARY"), "AGRICULTURE"), 0.7);
//! ```

pub mod analytics;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod relevance;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::classifier::{classify, ClassificationResult};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::matcher::{semantic_match, MatchReason, SemanticMatchResult};
    pub use crate::models::{FundingProgram, Industry, Organization, SemanticValue};
    pub use crate::relevance::relevance;
}

// Direct re-exports for convenience
pub use classifier::{classify, ClassificationResult};
pub use matcher::{semantic_match, MatchReason, SemanticMatchResult};
pub use models::{FundingProgram, Industry, Organization, SemanticValue};
pub use relevance::relevance;
