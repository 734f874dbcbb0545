//! Server-side search: backend configuration, the Elasticsearch connector and
//! the search service used by the frontend's server functions.

pub mod api;
pub mod db_utils;
