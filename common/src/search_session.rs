//! UI-level search state: the current query, whether a search has completed,
//! and which in-flight request is allowed to update the view.

use serde::{Deserialize, Serialize};

use crate::{
    search_config::SearchConfig,
    search_query::SearchQuery,
    search_request::{BackendRequest, QueryError, build_request},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestTicket(pub u64);

/// Hands out increasing tickets; only the most recent one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequencer {
    issued: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSession {
    pub query: SearchQuery,
    pub phase: SearchPhase,
    sequencer: RequestSequencer,
}

impl SearchSession {
    pub fn new(query: SearchQuery) -> Self {
        Self { query, ..Default::default() }
    }

    /// Validates the current query and issues a ticket for it. An invalid
    /// query issues nothing, so the previous request stays current.
    pub fn begin(&mut self, config: &SearchConfig) -> Result<(RequestTicket, BackendRequest), QueryError> {
        let request = build_request(&self.query, config)?;
        Ok((self.sequencer.issue(), request))
    }

    /// True when the response for `ticket` should be displayed. Responses to
    /// superseded requests are rejected.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if !self.sequencer.is_latest(ticket) {
            return false;
        }
        self.phase = SearchPhase::Searched;
        true
    }

    pub fn was_searched(&self) -> bool {
        self.phase == SearchPhase::Searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_accepted_response_moves_to_searched() {
        let config = SearchConfig::transcripts();
        let mut session = SearchSession::new(SearchQuery::default());
        assert_eq!(session.phase, SearchPhase::Idle);

        let (ticket, _) = session.begin(&config).unwrap();
        assert!(!session.was_searched());
        assert!(session.accept(ticket));
        assert!(session.was_searched());
    }

    #[test]
    fn stale_response_is_discarded() {
        let config = SearchConfig::transcripts();
        let mut session = SearchSession::new(SearchQuery::from_text("he"));
        let (slow, _) = session.begin(&config).unwrap();
        session.query.set_free_text("hello");
        let (fast, request) = session.begin(&config).unwrap();
        assert_eq!(request.query_text, "hello");

        assert!(session.accept(fast));
        assert!(!session.accept(slow));
        assert!(session.was_searched());
    }

    #[test]
    fn invalid_query_issues_no_ticket() {
        let config = SearchConfig::transcripts();
        let mut session = SearchSession::default();
        let (ticket, _) = session.begin(&config).unwrap();

        session.query.set_page_size(15);
        assert!(matches!(session.begin(&config), Err(QueryError::InvalidPageSize { .. })));
        assert!(session.accept(ticket));
        assert!(session.was_searched());
    }

    #[test]
    fn facet_toggle_rebuilds_request_with_filter() {
        let config = SearchConfig::transcripts();
        let mut session = SearchSession::new(SearchQuery::from_text("hello"));
        session.query.page = 3;
        session.query.toggle_facet("accent", "canada");
        let (_, request) = session.begin(&config).unwrap();
        assert_eq!(request.pagination.page, 1);
        assert_eq!(request.query_text, "hello");
        assert!(request.filters["accent"].contains("canada"));
        assert_eq!(request.facets.len(), 5);
    }
}
