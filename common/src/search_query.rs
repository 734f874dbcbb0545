//! Shared search query models and helpers.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::search_const::DEFAULT_PAGE_SIZE;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub free_text: String,
    pub selected_facets: BTreeMap<String, BTreeSet<String>>,
    pub page: u64,
    pub page_size: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            selected_facets: BTreeMap::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    pub fn from_text(free_text: impl Into<String>) -> Self {
        Self { free_text: free_text.into(), ..Default::default() }
    }

    pub fn is_selected(&self, facet: &str, value: &str) -> bool {
        self.selected_facets.get(facet).map(|values| values.contains(value)).unwrap_or(false)
    }

    pub fn has_filter(&self, facet: &str) -> bool {
        self.selected_facets.get(facet).map(|values| !values.is_empty()).unwrap_or(false)
    }

    /// Adds or removes one facet value. A facet left with no values is dropped
    /// so that equal filter sets compare equal.
    pub fn toggle_facet(&mut self, facet: &str, value: &str) {
        let should_add = !self.is_selected(facet, value);
        let entry = self.selected_facets.entry(facet.to_string()).or_default();
        if should_add {
            entry.insert(value.to_string());
        } else {
            entry.remove(value);
        }
        if entry.is_empty() {
            self.selected_facets.remove(facet);
        }
        self.page = 1;
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.selected_facets.remove(facet);
        self.page = 1;
    }

    pub fn set_free_text(&mut self, free_text: impl Into<String>) {
        self.free_text = free_text.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: u64) {
        self.page_size = page_size;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_leaves_no_empty_facet() {
        let mut query = SearchQuery::from_text("hello");
        query.toggle_facet("accent", "us");
        assert!(query.is_selected("accent", "us"));
        query.toggle_facet("accent", "us");
        assert!(!query.is_selected("accent", "us"));
        assert!(query.selected_facets.is_empty());
        assert_eq!(query, SearchQuery::from_text("hello"));
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut query = SearchQuery { page: 4, ..Default::default() };
        query.toggle_facet("gender", "female");
        assert_eq!(query.page, 1);

        query.page = 3;
        query.set_page_size(50);
        assert_eq!((query.page, query.page_size), (1, 50));

        query.page = 2;
        query.set_free_text("cat");
        assert_eq!(query.page, 1);

        query.page = 2;
        query.clear_facet("gender");
        assert_eq!(query.page, 1);
        assert!(!query.has_filter("gender"));
    }

    #[test]
    fn set_page_keeps_filters_and_size() {
        let mut query = SearchQuery::from_text("cat");
        query.toggle_facet("age", "twenties");
        query.set_page_size(20);
        query.set_page(5);
        assert_eq!((query.page, query.page_size), (5, 20));
        assert!(query.is_selected("age", "twenties"));
    }

    #[test]
    fn partial_query_fills_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{"free_text": "hi", "selected_facets": {"gender": ["male"]}}"#).unwrap();
        assert_eq!((query.page, query.page_size), (1, DEFAULT_PAGE_SIZE));
        assert!(query.is_selected("gender", "male"));

        let empty: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchQuery::default());
    }
}
