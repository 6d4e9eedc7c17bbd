//! Search Model
//!
//! State owned by the search pane: the query, the result panel and the
//! sequence number of the most recent request.

use crate::api::{SearchResponse, SearchResultItem};
use crate::logic;

/// Rendered state of the search results area
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPanel {
    /// Nothing searched yet (or cleared)
    Idle,

    /// Empty query submitted; no request was sent
    Warning,

    /// Request in flight
    Loading,

    /// One block per item, in server order
    Results(Vec<SearchResultItem>),

    NoResults,

    /// Transport or parse failure
    Error { message: String },
}

#[derive(Clone, Debug)]
pub struct SearchModel {
    /// Pane attached at startup
    pub enabled: bool,

    pub query: String,

    /// Whether keystrokes edit the query (always true outside vim mode)
    pub editing: bool,

    pub panel: SearchPanel,

    /// Selected result block (only meaningful for `SearchPanel::Results`)
    pub selected: Option<usize>,

    /// Sequence number of the most recent submission (0 = none yet)
    pub latest_seq: u64,
}

impl SearchModel {
    pub fn new(enabled: bool, vim_mode: bool) -> Self {
        Self {
            enabled,
            query: String::new(),
            editing: !vim_mode,
            panel: SearchPanel::Idle,
            selected: None,
            latest_seq: 0,
        }
    }

    /// Validate and start a search
    ///
    /// Returns the sequence number and query to send, or None when the query
    /// is empty (the warning panel is shown instead and nothing is sent).
    pub fn submit(&mut self) -> Option<(u64, String)> {
        self.selected = None;

        if !logic::search::is_valid_query(&self.query) {
            self.panel = SearchPanel::Warning;
            return None;
        }

        self.latest_seq += 1;
        self.panel = SearchPanel::Loading;
        Some((self.latest_seq, self.query.clone()))
    }

    /// Apply a settled search response
    ///
    /// Returns false if the response was superseded by a later submission and
    /// has been discarded.
    pub fn apply_response(&mut self, seq: u64, outcome: anyhow::Result<SearchResponse>) -> bool {
        if !logic::search::is_current_response(seq, self.latest_seq) {
            return false;
        }

        self.panel = match outcome {
            Ok(response) => logic::search::panel_for_response(response),
            Err(e) => SearchPanel::Error {
                message: logic::formatting::sanitize_display(
                    &logic::errors::format_error_message(&e),
                ),
            },
        };
        self.selected = match &self.panel {
            SearchPanel::Results(_) => Some(0),
            _ => None,
        };
        true
    }

    pub fn results(&self) -> &[SearchResultItem] {
        match &self.panel {
            SearchPanel::Results(items) => items,
            _ => &[],
        }
    }

    pub fn selected_item(&self) -> Option<&SearchResultItem> {
        self.selected.and_then(|idx| self.results().get(idx))
    }

    pub fn select_next(&mut self) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.results().is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Clear the results area
    ///
    /// Any in-flight response is invalidated too, so it cannot repopulate the
    /// panel after the user dismissed it.
    pub fn clear_panel(&mut self) {
        if self.panel == SearchPanel::Loading {
            self.latest_seq += 1;
        }
        self.panel = SearchPanel::Idle;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> SearchResultItem {
        SearchResultItem {
            filename: name.to_string(),
            hash: format!("hash-{}", name),
            code_word: None,
        }
    }

    #[test]
    fn test_submit_increments_sequence() {
        let mut model = SearchModel::new(true, false);
        model.query = "a".to_string();
        assert_eq!(model.submit(), Some((1, "a".to_string())));
        assert_eq!(model.submit(), Some((2, "a".to_string())));
        assert_eq!(model.panel, SearchPanel::Loading);
    }

    #[test]
    fn test_empty_submit_does_not_consume_sequence() {
        let mut model = SearchModel::new(true, false);
        assert_eq!(model.submit(), None);
        assert_eq!(model.latest_seq, 0);
        assert_eq!(model.panel, SearchPanel::Warning);
    }

    #[test]
    fn test_selection_clamps() {
        let mut model = SearchModel::new(true, false);
        model.query = "x".to_string();
        let (seq, _) = model.submit().unwrap();
        model.apply_response(
            seq,
            Ok(SearchResponse {
                results: vec![item("a"), item("b")],
            }),
        );

        assert_eq!(model.selected, Some(0));
        model.select_next();
        model.select_next();
        assert_eq!(model.selected, Some(1));
        assert_eq!(model.selected_item().unwrap().filename, "b");
        model.select_previous();
        model.select_previous();
        assert_eq!(model.selected, Some(0));
    }

    #[test]
    fn test_selection_noop_without_results() {
        let mut model = SearchModel::new(true, false);
        model.select_next();
        model.select_previous();
        assert!(model.selected.is_none());
        assert!(model.selected_item().is_none());
    }

    #[test]
    fn test_clear_while_loading_discards_response() {
        let mut model = SearchModel::new(true, false);
        model.query = "x".to_string();
        let (seq, _) = model.submit().unwrap();
        model.clear_panel();

        let applied = model.apply_response(
            seq,
            Ok(SearchResponse {
                results: vec![item("a")],
            }),
        );
        assert!(!applied);
        assert_eq!(model.panel, SearchPanel::Idle);
    }

    #[test]
    fn test_vim_mode_starts_not_editing() {
        assert!(!SearchModel::new(true, true).editing);
        assert!(SearchModel::new(true, false).editing);
    }
}
