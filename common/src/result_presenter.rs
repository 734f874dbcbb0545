//! Shaping of backend responses into display records, facet options and
//! paging information.
//!
//! Rendering is best effort: a hit with missing or blank fields still yields a
//! record, with the missing parts left out.

use serde::{Deserialize, Serialize};

use crate::{
    search_config::FacetSpec,
    search_const::{MAX_RESULT_WINDOW, SNIPPET_LENGTH, TRANSCRIPT_FIELD, UNKNOWN_FILE},
    search_query::SearchQuery,
    search_result::{Hit, SearchResponse},
    text_highlight::{HighlightTextSpan, decompose_text_into_spans},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRule {
    pub field: String,
    pub label: String,
    pub suffix: String,
}

impl MetadataRule {
    pub fn new(field: &str, label: &str, suffix: &str) -> Self {
        Self { field: field.to_string(), label: label.to_string(), suffix: suffix.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRules {
    pub text_field: String,
    /// Raw fallbacks longer than this many characters are cut.
    pub max_text_length: usize,
    pub metadata: Vec<MetadataRule>,
    /// Tried in order; the first present value identifies the file.
    pub file_fields: Vec<String>,
}

impl DisplayRules {
    pub fn transcripts() -> Self {
        Self {
            text_field: TRANSCRIPT_FIELD.to_string(),
            max_text_length: SNIPPET_LENGTH as usize,
            metadata: vec![
                MetadataRule::new("duration", "Duration", "s"),
                MetadataRule::new("age", "Age", ""),
                MetadataRule::new("gender", "Gender", ""),
                MetadataRule::new("accent", "Accent", ""),
            ],
            file_fields: vec!["filename".to_string(), "path".to_string()],
        }
    }
}

impl Default for DisplayRules {
    fn default() -> Self {
        Self::transcripts()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayText {
    /// Highlighter output, only ever rendered through [`DisplayText::spans`].
    Snippet(String),
    /// Plain stored text.
    Raw(String),
    Empty,
}

impl DisplayText {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayText::Snippet(s) | DisplayText::Raw(s) => s,
            DisplayText::Empty => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn spans(&self) -> Vec<HighlightTextSpan> {
        match self {
            DisplayText::Snippet(s) => decompose_text_into_spans(s),
            DisplayText::Raw(s) => vec![HighlightTextSpan::plain(s.clone())],
            DisplayText::Empty => vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub text: DisplayText,
    pub metadata: Vec<MetadataEntry>,
    pub file: String,
    pub index_in_page: u64,
}

impl DisplayRecord {
    /// `Duration: 3.2s | Age: twenties | File: clip.mp3`
    pub fn metadata_line(&self) -> String {
        self.metadata
            .iter()
            .map(|e| format!("{}: {}", e.label, e.value))
            .chain(std::iter::once(format!("File: {}", self.file)))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub fn render_hits(response: &SearchResponse, rules: &DisplayRules) -> Vec<DisplayRecord> {
    response
        .hits
        .iter()
        .enumerate()
        .map(|(i, hit)| render_hit(hit, rules, i as u64))
        .collect()
}

pub fn render_hit(hit: &Hit, rules: &DisplayRules, index_in_page: u64) -> DisplayRecord {
    DisplayRecord {
        text: display_text(hit, &rules.text_field, rules.max_text_length),
        metadata: rules
            .metadata
            .iter()
            .filter_map(|rule| {
                hit.raw(&rule.field).map(|value| MetadataEntry {
                    label: rule.label.clone(),
                    value: format!("{}{}", value, rule.suffix),
                })
            })
            .collect(),
        file: file_identity(hit, &rules.file_fields),
        index_in_page,
    }
}

/// Snippet, then raw value, then nothing.
pub fn display_text(hit: &Hit, field: &str, max_length: usize) -> DisplayText {
    if let Some(snippet) = hit.snippet(field) {
        return DisplayText::Snippet(snippet.to_string());
    }
    if let Some(raw) = hit.raw(field) {
        return DisplayText::Raw(truncate_chars(raw, max_length));
    }
    DisplayText::Empty
}

pub fn file_identity(hit: &Hit, fields: &[String]) -> String {
    fields
        .iter()
        .find_map(|f| hit.raw(f))
        .unwrap_or(UNKNOWN_FILE)
        .to_string()
}

fn truncate_chars(text: &str, max_length: usize) -> String {
    match text.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub count: u64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub field: String,
    pub label: String,
    pub options: Vec<FacetOption>,
}

/// One group per configured facet, buckets in backend order. Selected values
/// the backend no longer returns are kept with a zero count so they can be
/// unticked.
pub fn facet_groups(response: &SearchResponse, query: &SearchQuery, facets: &[FacetSpec]) -> Vec<FacetGroup> {
    facets
        .iter()
        .map(|facet| {
            let mut options = response
                .facet_buckets
                .get(&facet.field)
                .map(|buckets| buckets.as_slice())
                .unwrap_or_default()
                .iter()
                .map(|bucket| FacetOption {
                    value: bucket.value.clone(),
                    count: bucket.count,
                    selected: query.is_selected(&facet.field, &bucket.value),
                })
                .collect::<Vec<_>>();

            if let Some(selected) = query.selected_facets.get(&facet.field) {
                for value in selected {
                    if !options.iter().any(|o| &o.value == value) {
                        options.push(FacetOption { value: value.clone(), count: 0, selected: true });
                    }
                }
            }

            FacetGroup { field: facet.field.clone(), label: facet.label.clone(), options }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    /// 1-based position of the first hit shown, 0 when nothing matched.
    pub start: u64,
    pub end: u64,
    pub total_results: u64,
    pub total_pages: u64,
    pub page: u64,
    pub page_size: u64,
}

impl PagingInfo {
    pub fn from_response(response: &SearchResponse) -> Self {
        let page_size = response.page_size.max(1);
        let page = response.page.max(1);
        let shown = response.hits.len() as u64;
        let start = if shown == 0 { 0 } else { (page - 1).saturating_mul(page_size).saturating_add(1) };
        let end = if shown == 0 { 0 } else { start.saturating_add(shown - 1) };
        let reachable = response.total_hits.min(MAX_RESULT_WINDOW);
        Self {
            start,
            end,
            total_results: response.total_hits,
            total_pages: reachable.div_ceil(page_size),
            page,
            page_size,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Page numbers shown around the current page, clamped to `1..=total_pages`.
pub fn page_window(current: u64, total_pages: u64, radius: u64) -> Vec<u64> {
    if total_pages == 0 {
        return vec![];
    }
    let current = current.clamp(1, total_pages);
    let first = current.saturating_sub(radius).max(1);
    let last = current.saturating_add(radius).min(total_pages);
    (first..=last).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{search_config::SearchConfig, search_result::FacetBucket};

    fn response(hits: Vec<Hit>) -> SearchResponse {
        SearchResponse { hits, page: 1, page_size: 10, ..Default::default() }
    }

    #[test]
    fn snippet_is_shown_verbatim_with_duration() {
        let hit = Hit::default()
            .with_snippet("generated_text", "<em>hi</em>")
            .with_raw("duration", "3.2");
        let records = render_hits(&response(vec![hit]), &DisplayRules::transcripts());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text.as_str(), "<em>hi</em>");
        assert_eq!(records[0].metadata_line(), "Duration: 3.2s | File: Unknown");
        assert_eq!(records[0].text.spans(), vec![HighlightTextSpan { text: "hi".into(), is_highlighted: true, index: 0 }]);
    }

    #[test]
    fn missing_transcript_gives_empty_text() {
        let hit = Hit::default().with_raw("age", "twenties");
        let record = render_hit(&hit, &DisplayRules::transcripts(), 0);
        assert_eq!(record.text, DisplayText::Empty);
        assert_eq!(record.text.as_str(), "");
        assert!(record.text.spans().is_empty());
    }

    #[test]
    fn raw_fallback_is_plain_and_truncated() {
        let long = "é".repeat(310);
        let hit = Hit::default().with_raw("generated_text", long.as_str());
        let record = render_hit(&hit, &DisplayRules::transcripts(), 0);
        let DisplayText::Raw(text) = &record.text else { panic!("expected raw text") };
        assert_eq!(text.chars().count(), 301);
        assert!(text.ends_with('…'));

        let hit = Hit::default().with_raw("generated_text", "<b>bold</b>");
        let record = render_hit(&hit, &DisplayRules::transcripts(), 0);
        assert_eq!(record.text.spans(), vec![HighlightTextSpan::plain("<b>bold</b>")]);
    }

    #[test]
    fn absent_metadata_is_omitted() {
        let hit = Hit::default()
            .with_raw("gender", "female")
            .with_raw("accent", "  ")
            .with_raw("path", "clips/a.mp3");
        let record = render_hit(&hit, &DisplayRules::transcripts(), 0);
        assert_eq!(record.metadata, vec![MetadataEntry { label: "Gender".into(), value: "female".into() }]);
        assert_eq!(record.file, "clips/a.mp3");
        assert_eq!(record.metadata_line(), "Gender: female | File: clips/a.mp3");
    }

    #[test]
    fn filename_wins_over_path() {
        let hit = Hit::default().with_raw("filename", "a.mp3").with_raw("path", "clips/a.mp3");
        assert_eq!(file_identity(&hit, &DisplayRules::transcripts().file_fields), "a.mp3");
    }

    #[test]
    fn facet_buckets_map_one_to_one() {
        let mut facet_buckets = BTreeMap::new();
        facet_buckets.insert(
            "accent".to_string(),
            vec![
                FacetBucket { value: "us".into(), count: 12 },
                FacetBucket { value: "england".into(), count: 7 },
                FacetBucket { value: "indian".into(), count: 2 },
            ],
        );
        let response = SearchResponse { facet_buckets, ..response(vec![]) };
        let config = SearchConfig::transcripts();
        let mut query = SearchQuery::from_text("hello");

        let groups = facet_groups(&response, &query, &config.facets);
        let accent = groups.iter().find(|g| g.field == "accent").unwrap();
        assert_eq!(accent.options.len(), 3);
        assert!(accent.options.iter().all(|o| !o.selected));
        assert_eq!(groups.len(), config.facets.len());

        query.toggle_facet("accent", &accent.options[1].value);
        query.toggle_facet("accent", "scotland");
        let groups = facet_groups(&response, &query, &config.facets);
        let accent = groups.iter().find(|g| g.field == "accent").unwrap();
        assert!(accent.options[1].selected);
        assert_eq!(accent.options.len(), 4);
        assert_eq!(accent.options[3], FacetOption { value: "scotland".into(), count: 0, selected: true });
    }

    #[test]
    fn paging_info_counts_from_one() {
        let hits = vec![Hit::default(); 10];
        let response = SearchResponse { hits, total_hits: 42, page: 2, page_size: 10, ..Default::default() };
        let info = PagingInfo::from_response(&response);
        assert_eq!((info.start, info.end, info.total_pages), (11, 20, 5));
        assert!(info.has_previous() && info.has_next());

        let empty = PagingInfo::from_response(&SearchResponse { page: 1, page_size: 10, ..Default::default() });
        assert_eq!((empty.start, empty.end, empty.total_pages), (0, 0, 0));
        assert!(!empty.has_next());
    }

    #[test]
    fn total_pages_respect_result_window() {
        let response = SearchResponse { total_hits: 1_000_000, page: 1, page_size: 50, ..Default::default() };
        assert_eq!(PagingInfo::from_response(&response).total_pages, 200);
    }

    #[test]
    fn page_window_is_clamped() {
        assert_eq!(page_window(1, 10, 2), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10, 2), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 2), vec![8, 9, 10]);
        assert_eq!(page_window(3, 0, 2), Vec::<u64>::new());
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let mut huge = response(vec![Hit::default().with_raw("generated_text", "late")]);
        huge.page = u64::MAX / 2;
        huge.total_hits = 31;
        let info = PagingInfo::from_response(&huge);
        assert_eq!((info.start, info.end), (u64::MAX, u64::MAX));
        assert_eq!(info.total_pages, 4);
        assert!(!info.has_next());
        assert!(info.has_previous());

        assert_eq!(page_window(u64::MAX, u64::MAX, 2), vec![u64::MAX - 2, u64::MAX - 1, u64::MAX]);
    }
}
