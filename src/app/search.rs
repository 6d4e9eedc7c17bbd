//! Search submission, result downloads and receive by code word

use crate::{log_debug, logic, services, App};

impl App {
    /// Submit the search form
    ///
    /// An empty query shows the warning panel and sends nothing.
    pub(crate) fn submit_search(&mut self) {
        if !self.model.search.enabled {
            return;
        }

        let Some((seq, query)) = self.model.search.submit() else {
            log_debug("DEBUG [submit_search]: empty query, no request");
            return;
        };

        log_debug(&format!(
            "DEBUG [submit_search]: #{} {}",
            seq,
            crate::api::search_path(&query)
        ));

        let request = services::api::ApiRequest::Search { seq, query };
        if self.api_tx.send(request).is_err() {
            self.model
                .search
                .apply_response(seq, Err(anyhow::anyhow!("API worker stopped")));
        }
    }

    /// Download the selected search result into the download directory
    pub(crate) fn download_selected(&mut self) {
        let Some(item) = self.model.search.selected_item() else {
            return;
        };

        let hash = item.hash.clone();
        let filename = item.filename.clone();

        log_debug(&format!(
            "DEBUG [download_selected]: {} -> {}",
            self.client.download_url(&hash),
            self.download_dir.display()
        ));

        let request = services::api::ApiRequest::Download {
            hash,
            filename: filename.clone(),
            dest_dir: self.download_dir.clone(),
        };

        if self.api_tx.send(request).is_ok() {
            self.model.show_toast(format!("Downloading {}...", filename));
        } else {
            self.model
                .show_toast("Error: API worker stopped".to_string());
        }
    }

    /// Retrieve the file stored under the code word typed in the search input
    ///
    /// The service matches on the code word alone; the saved file lands in
    /// the download directory like a normal download.
    pub(crate) fn receive_by_code_word(&mut self) {
        if !self.model.search.enabled {
            return;
        }

        let code_word = self.model.search.query.clone();
        if !logic::search::is_valid_query(&code_word) {
            self.model
                .show_toast("Error: Type a code word to receive".to_string());
            return;
        }

        log_debug(&format!(
            "DEBUG [receive_by_code_word]: {:?} -> {}",
            code_word,
            self.download_dir.display()
        ));

        let request = services::api::ApiRequest::Receive {
            code_word: code_word.clone(),
            hash: String::new(),
            dest_dir: self.download_dir.clone(),
        };

        if self.api_tx.send(request).is_ok() {
            self.model.show_toast(format!("Receiving {}...", code_word));
        } else {
            self.model
                .show_toast("Error: API worker stopped".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{search_path, SearchResultItem};
    use crate::app::test_app;
    use crate::model::SearchPanel;
    use crate::services::api::ApiRequest;

    #[test]
    fn test_empty_query_sends_nothing() {
        let (mut app, mut requests) = test_app(100);

        app.submit_search();

        assert!(requests.try_recv().is_err());
        assert_eq!(app.model.search.panel, SearchPanel::Warning);
    }

    #[test]
    fn test_query_sends_one_search() {
        let (mut app, mut requests) = test_app(100);
        app.model.search.query = "foo bar".to_string();

        app.submit_search();

        match requests.try_recv() {
            Ok(ApiRequest::Search { seq, query }) => {
                assert_eq!(seq, app.model.search.latest_seq);
                assert_eq!(search_path(&query), "/search?q=foo%20bar");
            }
            other => panic!("expected one search request, got {:?}", other),
        }
        assert!(requests.try_recv().is_err());
        assert_eq!(app.model.search.panel, SearchPanel::Loading);
    }

    #[test]
    fn test_download_needs_selection() {
        let (mut app, mut requests) = test_app(100);

        app.download_selected();
        assert!(requests.try_recv().is_err());

        app.model.search.panel = SearchPanel::Results(vec![SearchResultItem {
            filename: "a.txt".to_string(),
            hash: "h1".to_string(),
            code_word: None,
        }]);
        app.model.search.selected = Some(0);
        app.download_selected();

        assert!(matches!(
            requests.try_recv(),
            Ok(ApiRequest::Download { ref hash, .. }) if hash == "h1"
        ));
    }

    #[test]
    fn test_receive_uses_query_as_code_word() {
        let (mut app, mut requests) = test_app(100);
        app.model.search.query = "falcon".to_string();

        app.receive_by_code_word();

        match requests.try_recv() {
            Ok(ApiRequest::Receive {
                code_word, hash, ..
            }) => {
                assert_eq!(code_word, "falcon");
                assert!(hash.is_empty());
            }
            other => panic!("expected one receive request, got {:?}", other),
        }
        assert!(requests.try_recv().is_err());
    }

    #[test]
    fn test_receive_without_code_word_sends_nothing() {
        let (mut app, mut requests) = test_app(100);

        app.receive_by_code_word();

        assert!(requests.try_recv().is_err());
        assert!(app.model.ui.toast_message.is_some());
    }
}
