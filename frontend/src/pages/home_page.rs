use dioxus::prelude::*;

use common::search_query::SearchQuery;

use crate::{data_definitions::url_param::UrlParam, pages::search_page::SearchPage};

/// Landing page: searches everything straight away.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        SearchPage { query: UrlParam::from(SearchQuery::default()) }
    }
}
