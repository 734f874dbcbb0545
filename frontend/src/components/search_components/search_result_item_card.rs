//! Search result list and item card components.

use dioxus::prelude::*;

use common::{
    result_presenter::{DisplayRecord, DisplayRules, render_hits},
    text_highlight::HighlightTextSpan,
};
use crate::components::{
    error_boundary::ComponentErrorDisplay,
    search_components::search_results_state::SearchResultsState,
    suspend_boundary::LoadingIndicator,
};

#[component]
pub fn SearchResultsView() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let search_result = search_results_state.search_result.read();
    let response = match search_result.as_ref() {
        Some(Some(Err(e))) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Some(Some(Ok(s))) => s,
        _ => return rsx! { LoadingIndicator{} },
    };

    let first_position = (response.page.max(1) - 1).saturating_mul(response.page_size);
    let records = render_hits(response, &DisplayRules::transcripts());

    if records.is_empty() {
        return rsx! {
            div {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); padding: 16px;",
                "No results found"
            }
        };
    }

    rsx! {
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
            ",
            for (position, record) in records.into_iter().map(|r| (first_position.saturating_add(r.index_in_page + 1), r)) {
                li {
                    key: "{position}",
                    SearchResultItemCard { position, record }
                }
            }
        }
    }
}

#[component]
pub fn SearchResultItemCard(record: DisplayRecord, position: u64) -> Element {
    let spans = record.text.spans();
    let metadata_line = record.metadata_line();

    rsx! {
        div {
            class: "x-result-card",
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
            ",
            // Row 1: INDEX - TEXT SNIPPET
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 18px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{position}."
                }
                HighlightTextSnippetSection { spans }
            }
            // Row 2: METADATA
            div {
                style: "
                    font-size: 14px;
                    line-height: 20px;
                    color: rgb(55, 65, 81);
                ",
                "{metadata_line}"
            }
        }
    }
}

#[component]
fn HighlightTextSnippetSection(spans: Vec<HighlightTextSpan>) -> Element {
    rsx! {
        div {
            // TEXT SNIPPET
            style: "
                font-size: 18px;
                line-height: 26px;
                font-weight: 400;
                color: rgb(0, 0, 0);
                flex: 1;
                min-width: 0;
            ",
            {render_highlight_text_span(spans)}
        }
    }
}

/// Highlights are styled spans around escaped text; backend markup is never
/// injected into the page.
fn render_highlight_text_span(spans: Vec<HighlightTextSpan>) -> Element {
    let spans = spans.into_iter().map(|i| {
        let color = if i.is_highlighted { "#EB3E014D" } else { "transparent" };
        let weight = if i.is_highlighted { "500" } else { "400" };
        rsx! {
            span {
                style: "background-color: {color}; font-weight: {weight}; color: rgb(0, 0, 0);",
                "{i.text}"
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
