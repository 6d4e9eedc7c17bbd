//! Integration tests for the search pane
//!
//! Covers validation short-circuit, query encoding and each result panel.

use dcastui::api::{search_path, SearchResponse};
use dcastui::logic::search::code_word_label;
use dcastui::model::{Model, SearchPanel};

/// Test: empty query shows a warning and produces no request
#[test]
fn test_empty_query_warns_without_request() {
    let mut model = Model::new(false, true, true);

    let request = model.search.submit();

    assert!(request.is_none(), "No request for an empty query");
    assert_eq!(model.search.panel, SearchPanel::Warning);
    assert_eq!(model.search.latest_seq, 0);
}

/// Test: a query with a space is percent-encoded as %20
#[test]
fn test_query_with_space_is_encoded() {
    let mut model = Model::new(false, true, true);
    model.search.query = "foo bar".to_string();

    let (_, query) = model.search.submit().expect("request sent");

    assert_eq!(model.search.panel, SearchPanel::Loading);
    assert_eq!(search_path(&query), "/search?q=foo%20bar");
}

/// Test: one result without a code word renders one block with the placeholder
#[test]
fn test_single_result_without_code_word() {
    let mut model = Model::new(false, true, true);
    model.search.query = "a".to_string();
    let (seq, _) = model.search.submit().unwrap();

    let response: SearchResponse =
        serde_json::from_str(r#"{"results":[{"filename":"a.txt","hash":"h1"}]}"#).unwrap();
    assert!(model.search.apply_response(seq, Ok(response)));

    let items = model.search.results();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].filename, "a.txt");
    assert_eq!(items[0].hash, "h1");
    assert_eq!(code_word_label(&items[0]), "None");
    assert_eq!(model.search.selected, Some(0));
}

/// Test: empty results render the informational panel, not an error
#[test]
fn test_empty_results_is_no_results_panel() {
    let mut model = Model::new(false, true, true);
    model.search.query = "zzz".to_string();
    let (seq, _) = model.search.submit().unwrap();

    let response: SearchResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
    model.search.apply_response(seq, Ok(response));

    assert_eq!(model.search.panel, SearchPanel::NoResults);
    assert!(model.search.selected.is_none());
}

/// Test: absent results field is treated as empty
#[test]
fn test_absent_results_is_no_results_panel() {
    let mut model = Model::new(false, true, true);
    model.search.query = "zzz".to_string();
    let (seq, _) = model.search.submit().unwrap();

    let response: SearchResponse = serde_json::from_str("{}").unwrap();
    model.search.apply_response(seq, Ok(response));

    assert_eq!(model.search.panel, SearchPanel::NoResults);
}

/// Test: transport failure renders an error panel with the description
#[test]
fn test_transport_failure_is_error_panel() {
    let mut model = Model::new(false, true, true);
    model.search.query = "a".to_string();
    let (seq, _) = model.search.submit().unwrap();

    model
        .search
        .apply_response(seq, Err(anyhow::anyhow!("dns error: no such host")));

    assert_eq!(
        model.search.panel,
        SearchPanel::Error {
            message: "dns error: no such host".to_string()
        }
    );
}

/// Test: multiple results keep server order
#[test]
fn test_results_rendered_in_server_order() {
    let mut model = Model::new(false, true, true);
    model.search.query = "x".to_string();
    let (seq, _) = model.search.submit().unwrap();

    let response: SearchResponse = serde_json::from_str(
        r#"{"results":[
            {"filename":"c.txt","hash":"h3","codeWord":"gamma"},
            {"filename":"a.txt","hash":"h1"},
            {"filename":"b.txt","hash":"h2","codeWord":""}
        ]}"#,
    )
    .unwrap();
    model.search.apply_response(seq, Ok(response));

    let items = model.search.results();
    let names: Vec<&str> = items.iter().map(|i| i.filename.as_str()).collect();
    assert_eq!(names, vec!["c.txt", "a.txt", "b.txt"]);
    assert_eq!(code_word_label(&items[0]), "gamma");
    assert_eq!(code_word_label(&items[2]), "None", "Empty code word counts as absent");
}
