pub mod backend_config;
pub mod elasticsearch_utils;
