use dioxus::prelude::*;

use common::search_query::SearchQuery;
use crate::{
    components::{
        search_components::{
            search_facets::FacetSidePanel,
            search_input_top_bar::SearchInputTopBar,
            search_result_item_card::SearchResultsView,
            search_result_list_controls::{PaginationControls, SearchResultListControls},
            search_results_state::use_search_results_state,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_param::UrlParam,
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(query: UrlParam<SearchQuery>) -> Element {
    rsx! {
        Title { "Common Voice Search: {title_ellipsis(&query.0.free_text)}" }
        SearchPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<SearchQuery>) -> Element {
    use_search_results_state(query);

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                h1 {
                    style: "font-size: 24px; font-weight: 500; margin: 0 0 0 24px; text-wrap: nowrap;",
                    "Common Voice Search"
                }
                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-side-panel",
                    style: "
                        height: 100%;
                        width: 300px;
                        flex-shrink: 0;
                        overflow-y: auto;
                        border-right: 1px solid rgba(0,0,0,0.1);
                        padding: 12px;
                    ",
                    SuspendWrapper { loading_text: "Loading filters...", FacetSidePanel {} }
                }
                div {
                    id: "x-search-results-body",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                        display: flex;
                        flex-direction: column;
                        padding: 7px;
                    ",
                    SearchResultListControls {}
                    div {
                        style: "flex-grow: 1; width: 100%; min-height: 0;",
                        SuspendWrapper { SearchResultsView {} }
                    }
                    PaginationControls {}
                }
            }
        }
    }
}
