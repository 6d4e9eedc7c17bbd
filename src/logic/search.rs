//! Search Logic
//!
//! Pure functions for validating queries, mapping responses to panels and
//! discarding out-of-order responses.

use crate::api::{SearchResponse, SearchResultItem};
use crate::logic::formatting::sanitize_display;
use crate::model::search::SearchPanel;

/// Placeholder shown when a result has no code word
pub const NO_CODE_WORD: &str = "None";

/// Whether a query may be sent
///
/// Only the empty string is rejected. Whitespace is a legitimate query and is
/// sent as typed.
pub fn is_valid_query(query: &str) -> bool {
    !query.is_empty()
}

/// Whether a response belongs to the most recent search
///
/// Each submission takes a strictly increasing sequence number; anything
/// older than `latest` was superseded while in flight.
///
/// # Examples
/// ```
/// use dcastui::logic::search::is_current_response;
///
/// assert!(is_current_response(3, 3));
/// assert!(!is_current_response(2, 3));
/// ```
pub fn is_current_response(seq: u64, latest: u64) -> bool {
    seq == latest
}

/// Code word to display for a result
pub fn code_word_label(item: &SearchResultItem) -> &str {
    item.code_word.as_deref().unwrap_or(NO_CODE_WORD)
}

/// Map a decoded search response to the panel that should be shown
///
/// Result order is preserved exactly as the server returned it.
pub fn panel_for_response(response: SearchResponse) -> SearchPanel {
    if response.results.is_empty() {
        return SearchPanel::NoResults;
    }

    let items = response
        .results
        .into_iter()
        .map(|item| SearchResultItem {
            filename: sanitize_display(&item.filename),
            hash: sanitize_display(&item.hash),
            code_word: item.code_word.as_deref().map(sanitize_display),
        })
        .collect();

    SearchPanel::Results(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(filename: &str, hash: &str, code_word: Option<&str>) -> SearchResultItem {
        SearchResultItem {
            filename: filename.to_string(),
            hash: hash.to_string(),
            code_word: code_word.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_query_invalid() {
        assert!(!is_valid_query(""));
        assert!(is_valid_query("a"));
        assert!(is_valid_query(" "));
    }

    #[test]
    fn test_stale_sequence_rejected() {
        assert!(is_current_response(7, 7));
        assert!(!is_current_response(6, 7));
        assert!(!is_current_response(8, 7));
    }

    #[test]
    fn test_code_word_placeholder() {
        assert_eq!(code_word_label(&item("a.txt", "h1", None)), "None");
        assert_eq!(code_word_label(&item("a.txt", "h1", Some("alpha"))), "alpha");
    }

    #[test]
    fn test_empty_results_is_no_results() {
        assert_eq!(
            panel_for_response(SearchResponse { results: vec![] }),
            SearchPanel::NoResults
        );
    }

    #[test]
    fn test_results_keep_server_order() {
        let response = SearchResponse {
            results: vec![
                item("zeta.txt", "h3", None),
                item("alpha.txt", "h1", None),
                item("mid.txt", "h2", Some("x")),
            ],
        };
        let SearchPanel::Results(items) = panel_for_response(response) else {
            panic!("expected results");
        };
        let names: Vec<&str> = items.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(names, vec!["zeta.txt", "alpha.txt", "mid.txt"]);
    }

    #[test]
    fn test_results_are_sanitized() {
        let response = SearchResponse {
            results: vec![item("bad\u{1b}[31m.txt", "h1", Some("c\u{7}w"))],
        };
        let SearchPanel::Results(items) = panel_for_response(response) else {
            panic!("expected results");
        };
        assert_eq!(items[0].filename, "bad[31m.txt");
        assert_eq!(items[0].code_word.as_deref(), Some("cw"));
    }
}
