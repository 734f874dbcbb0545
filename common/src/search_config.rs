//! Field projections and facet definitions sent with every search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::search_const::{PAGE_SIZES, SNIPPET_LENGTH, TRANSCRIPT_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSpec {
    pub max_length: u64,
    pub fallback_to_raw: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldProjection {
    pub snippet: Option<SnippetSpec>,
    pub raw: bool,
}

impl FieldProjection {
    pub fn raw() -> Self {
        Self { snippet: None, raw: true }
    }

    pub fn snippet(max_length: u64, fallback_to_raw: bool) -> Self {
        Self { snippet: Some(SnippetSpec { max_length, fallback_to_raw }), raw: false }
    }

    /// The raw value is needed either for itself or as the snippet fallback.
    pub fn wants_raw(&self) -> bool {
        self.raw || self.snippet.map(|s| s.fallback_to_raw).unwrap_or(false)
    }
}

pub type ResultFieldSpec = BTreeMap<String, FieldProjection>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FacetKind {
    #[default]
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSpec {
    pub field: String,
    pub label: String,
    pub kind: FacetKind,
    pub max_buckets: u64,
}

impl FacetSpec {
    pub fn value(field: impl Into<String>, label: impl Into<String>, max_buckets: u64) -> Self {
        Self { field: field.into(), label: label.into(), kind: FacetKind::Value, max_buckets }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub search_fields: Vec<String>,
    pub result_fields: ResultFieldSpec,
    pub facets: Vec<FacetSpec>,
    pub page_sizes: Vec<u64>,
}

impl SearchConfig {
    /// Configuration for the Common Voice transcription index.
    pub fn transcripts() -> Self {
        let mut result_fields = ResultFieldSpec::new();
        result_fields.insert(TRANSCRIPT_FIELD.to_string(), FieldProjection::snippet(SNIPPET_LENGTH, true));
        for field in ["duration", "age", "gender", "accent", "filename", "path"] {
            result_fields.insert(field.to_string(), FieldProjection::raw());
        }

        Self {
            search_fields: vec![TRANSCRIPT_FIELD.to_string()],
            result_fields,
            facets: vec![
                FacetSpec::value("age", "Age", 50),
                FacetSpec::value("gender", "Gender", 10),
                FacetSpec::value("accent", "Accent", 100),
                FacetSpec::value("duration_bucket", "Duration", 10),
                FacetSpec::value("client_id", "Speaker", 20),
            ],
            page_sizes: PAGE_SIZES.to_vec(),
        }
    }

    pub fn facet(&self, field: &str) -> Option<&FacetSpec> {
        self.facets.iter().find(|f| f.field == field)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::transcripts()
    }
}
