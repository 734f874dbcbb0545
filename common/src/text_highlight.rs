//! Utilities for highlighting text spans in search results.
//!
//! Highlighter output is never handed to the page as markup. Only the
//! highlighter's own `<em>` markers are recognised; every other character,
//! including any other tag, stays literal text.

use serde::{Deserialize, Serialize};

pub const START_TAG: &str = "<em>";
pub const END_TAG: &str = "</em>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

impl HighlightTextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_highlighted: false, index: 0 }
    }
}

/// Splits a highlighted snippet into plain and highlighted spans, numbering
/// the highlighted ones in order of appearance.
pub fn decompose_text_into_spans(text: &str) -> Vec<HighlightTextSpan> {
    let mut spans = do_decompose(text);
    let mut index = 0;
    for span in spans.iter_mut().filter(|s| s.is_highlighted) {
        span.index = index;
        index += 1;
    }
    spans
}

fn do_decompose(text: &str) -> Vec<HighlightTextSpan> {
    if text.is_empty() {
        return vec![];
    }
    if !text.contains(START_TAG) {
        return vec![HighlightTextSpan::plain(text)];
    }

    let mut spans: Vec<HighlightTextSpan> = Vec::new();
    let mut buffer = String::new();
    let mut depth: usize = 0;
    let mut i: usize = 0;

    // adjacent text with the same highlight state is merged into one span
    let flush = |spans: &mut Vec<HighlightTextSpan>, buffer: &mut String, highlighted: bool| {
        if buffer.is_empty() {
            return;
        }
        if let Some(last) = spans.last_mut() {
            if last.is_highlighted == highlighted {
                last.text.push_str(buffer);
                buffer.clear();
                return;
            }
        }
        spans.push(HighlightTextSpan {
            text: std::mem::take(buffer),
            is_highlighted: highlighted,
            index: 0,
        });
    };

    while i < text.len() {
        let next_open = text[i..].find(START_TAG).map(|p| p + i);
        let next_close = text[i..].find(END_TAG).map(|p| p + i);

        let (tag, pos) = match (next_open, next_close) {
            (None, None) => break,
            (Some(op), None) => (START_TAG, op),
            (None, Some(cp)) => (END_TAG, cp),
            (Some(op), Some(cp)) => {
                if op < cp { (START_TAG, op) } else { (END_TAG, cp) }
            }
        };

        buffer.push_str(&text[i..pos]);
        flush(&mut spans, &mut buffer, depth > 0);

        if tag == START_TAG {
            depth = depth.saturating_add(1);
        } else if depth > 0 {
            depth -= 1;
        } else {
            // stray closer stays literal
            buffer.push_str(END_TAG);
        }
        i = pos + tag.len();
    }

    if i < text.len() {
        buffer.push_str(&text[i..]);
    }
    // unterminated highlight runs to the end
    flush(&mut spans, &mut buffer, depth > 0);

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(spans: &[HighlightTextSpan]) -> Vec<(&str, bool)> {
        spans.iter().map(|s| (s.text.as_str(), s.is_highlighted)).collect()
    }

    #[test]
    fn splits_highlighted_words() {
        let spans = decompose_text_into_spans("say <em>hi</em> to <em>me</em>");
        assert_eq!(flat(&spans), vec![("say ", false), ("hi", true), (" to ", false), ("me", true)]);
        assert_eq!(spans[1].index, 0);
        assert_eq!(spans[3].index, 1);
    }

    #[test]
    fn other_markup_stays_literal() {
        let spans = decompose_text_into_spans("<script>alert(1)</script> <em>ok</em>");
        assert_eq!(flat(&spans), vec![("<script>alert(1)</script> ", false), ("ok", true)]);
    }

    #[test]
    fn stray_and_unterminated_tags() {
        let spans = decompose_text_into_spans("a</em><em>b");
        assert_eq!(flat(&spans), vec![("a</em>", false), ("b", true)]);

        let spans = decompose_text_into_spans("only </em> closer");
        assert_eq!(flat(&spans), vec![("only </em> closer", false)]);
    }

    #[test]
    fn nested_markers_merge() {
        let spans = decompose_text_into_spans("<em>a<em>b</em>c</em>d");
        assert_eq!(flat(&spans), vec![("abc", true), ("d", false)]);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(decompose_text_into_spans("").is_empty());
    }
}
