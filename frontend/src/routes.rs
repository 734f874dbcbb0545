use dioxus::prelude::*;

use common::search_query::SearchQuery;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},


    #[route("/search/:query")]
    SearchPage {
        query: UrlParam<SearchQuery>,
    },

}

impl Route {
    pub fn search_page_from_query(q: SearchQuery) -> Self {
        Self::SearchPage {
            query: UrlParam::from(q),
        }
    }
}
