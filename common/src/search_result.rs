use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
    pub facet_buckets: BTreeMap<String, Vec<FacetBucket>>,
    pub total_hits: u64,
    pub page: u64,
    pub page_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HitField {
    pub raw: Option<String>,
    /// Pre-highlighted excerpt produced by the backend highlighter.
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hit {
    pub fields: BTreeMap<String, HitField>,
}

impl Hit {
    pub fn field(&self, name: &str) -> Option<&HitField> {
        self.fields.get(name)
    }

    /// Raw value of a field, ignoring blank strings.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|f| f.raw.as_deref())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn snippet(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|f| f.snippet.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn with_raw(mut self, name: &str, raw: impl Into<String>) -> Self {
        self.fields.entry(name.to_string()).or_default().raw = Some(raw.into());
        self
    }

    pub fn with_snippet(mut self, name: &str, snippet: impl Into<String>) -> Self {
        self.fields.entry(name.to_string()).or_default().snippet = Some(snippet.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub value: String,
    pub count: u64,
}
