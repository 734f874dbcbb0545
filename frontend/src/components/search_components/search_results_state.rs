//! Search state shared by every component of the search page.

use dioxus::prelude::*;

use common::{
    search_config::SearchConfig, search_query::SearchQuery, search_result::SearchResponse,
    search_session::{RequestTicket, SearchSession},
};
use crate::{api::search_api::search_transcripts, routes::Route};

/// `None` when the response was superseded by a newer request.
pub type SearchOutcome = Option<Result<SearchResponse, ServerFnError>>;

#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub query: ReadSignal<SearchQuery>,
    pub search_result: ReadSignal<Option<SearchOutcome>>,
    pub was_searched: Memo<bool>,
    pub set_query: Callback<SearchQuery>,
}

/// Makes `query` current and issues its ticket. Invalid queries are reported
/// as a 400 without contacting the server.
fn begin_search(session: &mut SearchSession, query: SearchQuery) -> Result<RequestTicket, ServerFnError> {
    session.query = query;
    session
        .begin(&SearchConfig::transcripts())
        .map(|(ticket, _request)| ticket)
        .map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 400, details: None })
}

/// Runs the search for `query` and provides the result to child components.
pub fn use_search_results_state(query: ReadSignal<SearchQuery>) -> SearchResultsState {
    let mut session = use_signal(|| SearchSession::new(query.peek().clone()));

    let search_result = use_resource(move || {
        let q = query.read().clone();
        async move {
            // the session is only written once the task runs, never during render
            let ticket = match session.with_mut(|session| begin_search(session, q.clone())) {
                Ok(ticket) => ticket,
                Err(e) => return Some(Err(e)),
            };
            let result = search_transcripts(q).await;
            if !session.with_mut(|session| session.accept(ticket)) {
                dioxus::logger::tracing::debug!("Discarding stale search response {:?}", ticket);
                return None;
            }
            Some(result)
        }
    });

    let was_searched = use_memo(move || session.read().was_searched());

    let set_query = Callback::new(move |q: SearchQuery| {
        navigator().push(Route::search_page_from_query(q));
    });

    use_context_provider(move || SearchResultsState {
        query,
        search_result: search_result.into(),
        was_searched,
        set_query,
    })
}
