//! Data model for MyVariant.info batch responses.
//!
//! The service answers one JSON object per submitted identifier, in request
//! order: either a not-found marker or a mapping keyed by annotation source
//! (dbnsfp, cadd, snpeff, ...). The per-source payloads are not
//! schema-stable, so they are kept as raw [`serde_json::Value`] sub-records
//! and probed field by field in the summary passes.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

/// One element of the decoded annotation response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationEntry {
    /// The identifier this entry answers, as echoed by the service.
    pub query: Option<String>,
    /// Set when the service has no record for the queried variant.
    #[serde(default)]
    pub notfound: bool,
    /// dbNSFP pathogenicity predictions.
    pub dbnsfp: Option<Value>,
    /// CADD consequence predictions.
    pub cadd: Option<Value>,
    /// SnpEff effect predictions.
    pub snpeff: Option<Value>,
}

/// Reference genome build used for the annotation query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenomeBuild {
    Hg19,
    #[default]
    Hg38,
}

impl FromStr for GenomeBuild {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hg19" => Ok(GenomeBuild::Hg19),
            "hg38" => Ok(GenomeBuild::Hg38),
            _ => Err(format!("Invalid genome build: {} (expected hg19 or hg38)", s)),
        }
    }
}

impl std::fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenomeBuild::Hg19 => write!(f, "hg19"),
            GenomeBuild::Hg38 => write!(f, "hg38"),
        }
    }
}
