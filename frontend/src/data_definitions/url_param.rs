//! Route segment codec: the whole search state travels in the URL as
//! url-safe base64 of its CBOR encoding, so a search page can be bookmarked
//! and reloaded.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> UrlParam<T> {
    pub fn encode(&self) -> Option<String> {
        let mut serialized = Vec::new();
        ciborium::into_writer(&self.0, &mut serialized).ok()?;
        Some(URL_SAFE.encode(serialized))
    }
}

// must stay parseable by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(encoded) = self.encode() {
            write!(f, "{encoded}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum UrlParamError {
    #[error("url segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("url segment does not hold a search state: {0}")]
    Cbor(#[from] ciborium::de::Error<std::io::Error>),
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE.decode(s.as_bytes())?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))?;
        Ok(UrlParam(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::SearchQuery;

    #[test]
    fn search_state_survives_the_url() {
        let mut query = SearchQuery::from_text("hello world");
        query.toggle_facet("gender", "female");
        query.set_page_size(20);
        query.page = 3;

        let segment = UrlParam::from(query.clone()).to_string();
        assert!(!segment.contains('/'));
        assert!(!segment.contains('+'));

        let parsed: UrlParam<SearchQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_segment_is_rejected() {
        let err = "not base64!!".parse::<UrlParam<SearchQuery>>().unwrap_err();
        assert!(matches!(err, UrlParamError::Base64(_)));

        let not_cbor = URL_SAFE.encode([0xff_u8, 0x00, 0x13]);
        let err = not_cbor.parse::<UrlParam<SearchQuery>>().unwrap_err();
        assert!(matches!(err, UrlParamError::Cbor(_)));
    }
}
