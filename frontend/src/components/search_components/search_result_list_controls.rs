//! Paging information, results-per-page and page navigation controls.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use common::{
    result_presenter::{PagingInfo, page_window},
    search_config::SearchConfig,
};
use crate::components::search_components::search_results_state::SearchResultsState;

const PAGE_WINDOW_RADIUS: u64 = 2;

fn use_paging_info() -> Memo<Option<PagingInfo>> {
    let search_results_state = use_context::<SearchResultsState>();
    use_memo(move || {
        let search_result = search_results_state.search_result.read();
        match search_result.as_ref() {
            Some(Some(Ok(response))) => Some(PagingInfo::from_response(response)),
            _ => None,
        }
    })
}

/// Only shown once a search has completed.
#[component]
pub fn SearchResultListControls() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    if !*search_results_state.was_searched.read() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                PagingInfoLine { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            ResultsPerPage {}
        }
    }
}

#[component]
fn PagingInfoLine() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let paging_info = use_paging_info();
    let free_text = search_results_state.query.read().free_text.clone();

    let Some(info) = paging_info() else {
        return rsx! {"..."};
    };
    rsx! {
        "Showing {info.start} - {info.end} out of {info.total_results}"
        if !free_text.is_empty() {
            " for: "
            b { "{free_text}" }
        }
    }
}

#[component]
fn ResultsPerPage() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let page_size = search_results_state.query.read().page_size;
    let page_sizes = SearchConfig::transcripts().page_sizes;

    rsx! {
        label {
            style: "font-size: 16px; color: rgb(75, 87, 112); display: flex; align-items: center; gap: 8px;",
            "Show"
            select {
                style: "font-size: 16px; padding: 4px; border-radius: 4px;",
                onchange: move |event: Event<FormData>| {
                    if let Ok(size) = event.value().parse::<u64>() {
                        let mut q = search_results_state.query.read().clone();
                        q.set_page_size(size);
                        search_results_state.set_query.call(q);
                    }
                },
                for size in page_sizes {
                    option {
                        value: "{size}",
                        selected: size == page_size,
                        "{size}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PaginationControls() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let paging_info = use_paging_info();

    let Some(info) = paging_info() else {
        return rsx! {};
    };
    if info.total_pages <= 1 {
        return rsx! {};
    }

    let go_to_page = move |page: u64| {
        let mut q = search_results_state.query.read().clone();
        q.set_page(page);
        search_results_state.set_query.call(q);
    };

    rsx! {
        div {
            id: "x-search-results-paging",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 8px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !info.has_previous(),
                onclick: move |_| go_to_page(info.page.saturating_sub(1).max(1))
            }
            for page in page_window(info.page, info.total_pages, PAGE_WINDOW_RADIUS) {
                button {
                    key: "{page}",
                    disabled: page == info.page,
                    style: if page == info.page {
                        "font-size: 16px; padding: 4px 10px; border-radius: 4px; border: 1px solid rgb(75, 87, 112); background: rgb(75, 87, 112); color: white;"
                    } else {
                        "font-size: 16px; padding: 4px 10px; border-radius: 4px; border: 1px solid rgba(0,0,0,0.1); background: white; cursor: pointer;"
                    },
                    onclick: move |_| go_to_page(page),
                    "{page}"
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !info.has_next(),
                onclick: move |_| go_to_page(info.page + 1)
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                border: none;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
