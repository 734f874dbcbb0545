//! Constants shared by the query builder, the presenter and the UI.

/// Allowed results-per-page values, in the order the UI offers them.
pub const PAGE_SIZES: [u64; 3] = [10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Text input is only sent once it has been stable for this long.
pub const DEBOUNCE_MS: u32 = 200;

/// Elasticsearch refuses `from + size` beyond its default `max_result_window`.
pub const MAX_RESULT_WINDOW: u64 = 10_000;

pub const SNIPPET_LENGTH: u64 = 300;

pub const TRANSCRIPT_FIELD: &str = "generated_text";

pub const UNKNOWN_FILE: &str = "Unknown";
