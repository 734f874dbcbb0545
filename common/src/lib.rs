//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_config;
pub mod search_query;
pub mod search_request;
pub mod search_result;
pub mod search_session;
pub mod result_presenter;
pub mod text_highlight;
