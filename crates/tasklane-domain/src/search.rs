//! Text matching for the board search box.

use serde::Serialize;

/// One run of text, flagged when it is the highlighted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSpan {
    fn new(text: &str, is_match: bool) -> Self {
        Self {
            text: text.to_string(),
            is_match,
        }
    }
}

/// Case-insensitive match of `query` against `text`.
///
/// An empty or whitespace-only query matches everything. Falls back to
/// requiring every space-separated query word to appear somewhere in the
/// text when the full phrase is absent. Not a subsequence or fuzzy
/// match.
pub fn matches(text: &str, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let lower_text = text.to_lowercase();
    let lower_query = query.to_lowercase();

    if lower_text.contains(&lower_query) {
        return true;
    }

    lower_query
        .split(' ')
        .filter(|word| !word.is_empty())
        .all(|word| lower_text.contains(word))
}

/// Split `text` into spans around the first case-insensitive occurrence
/// of the full query string, preserving original casing. Only the full
/// phrase is highlighted, never the word-fallback, and only its first
/// occurrence.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    if query.trim().is_empty() {
        return vec![HighlightSpan::new(text, false)];
    }

    let lower_query = query.to_lowercase();
    let Some((start, end)) = find_ignore_case(text, &lower_query) else {
        return vec![HighlightSpan::new(text, false)];
    };

    let mut spans = Vec::with_capacity(3);
    if start > 0 {
        spans.push(HighlightSpan::new(&text[..start], false));
    }
    spans.push(HighlightSpan::new(&text[start..end], true));
    if end < text.len() {
        spans.push(HighlightSpan::new(&text[end..], false));
    }
    spans
}

/// Find the first occurrence of an already-lowercased query in `text`,
/// returning the byte range in the original string. Walks chars instead
/// of searching a lowercased copy because lowercasing can change byte
/// lengths.
fn find_ignore_case(text: &str, lower_query: &str) -> Option<(usize, usize)> {
    if lower_query.is_empty() {
        return None;
    }
    for (start, _) in text.char_indices() {
        let mut remaining = lower_query.chars().peekable();
        let mut end = start;
        let mut mismatch = false;
        'text: for (offset, ch) in text[start..].char_indices() {
            for lowered in ch.to_lowercase() {
                match remaining.next() {
                    Some(expected) if expected == lowered => {}
                    _ => {
                        mismatch = true;
                        break 'text;
                    }
                }
            }
            end = start + offset + ch.len_utf8();
            if remaining.peek().is_none() {
                break;
            }
        }
        if !mismatch && remaining.peek().is_none() {
            return Some((start, end));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(&str, bool)]) -> Vec<HighlightSpan> {
        pairs
            .iter()
            .map(|(text, is_match)| HighlightSpan::new(text, *is_match))
            .collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches("Buy milk", ""));
        assert!(matches("Buy milk", "   "));
        assert!(matches("", ""));
    }

    #[test]
    fn test_full_phrase_containment() {
        assert!(matches("Buy groceries", "grocer"));
        assert!(matches("Buy groceries", "GROCERIES"));
        assert!(!matches("Buy groceries", "vegetables"));
    }

    #[test]
    fn test_word_subset_fallback() {
        // Full phrase fails, but both words appear.
        assert!(matches("Buy milk and eggs", "milk eggs"));
        assert!(!matches("Buy milk and eggs", "milk bread"));
    }

    #[test]
    fn test_fallback_is_not_a_subsequence_match() {
        assert!(!matches("Buy milk", "mlk"));
    }

    #[test]
    fn test_highlight_splits_around_first_occurrence() {
        assert_eq!(
            highlight("Buy groceries", "groceries"),
            spans(&[("Buy ", false), ("groceries", true)])
        );
    }

    #[test]
    fn test_highlight_preserves_original_casing() {
        assert_eq!(
            highlight("Fix THE Parser", "the"),
            spans(&[("Fix ", false), ("THE", true), (" Parser", false)])
        );
    }

    #[test]
    fn test_highlight_only_first_occurrence() {
        assert_eq!(
            highlight("abc abc", "abc"),
            spans(&[("abc", true), (" abc", false)])
        );
    }

    #[test]
    fn test_highlight_whole_text_match_is_single_span() {
        assert_eq!(highlight("milk", "MILK"), spans(&[("milk", true)]));
    }

    #[test]
    fn test_highlight_no_occurrence_is_one_plain_span() {
        assert_eq!(
            highlight("Buy milk", "eggs"),
            spans(&[("Buy milk", false)])
        );
        // The word fallback never highlights.
        assert_eq!(
            highlight("Buy milk and eggs", "milk eggs"),
            spans(&[("Buy milk and eggs", false)])
        );
    }

    #[test]
    fn test_highlight_empty_query_is_one_plain_span() {
        assert_eq!(highlight("Buy milk", "  "), spans(&[("Buy milk", false)]));
    }

    #[test]
    fn test_highlight_handles_non_ascii_text() {
        assert_eq!(
            highlight("Café order", "café"),
            spans(&[("Café", true), (" order", false)])
        );
    }
}
