//! Location search backend: async suggestion lookups.
//! Source calls run off the update loop; results sent back via channel.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use skycast_weather::{LocationCandidate, LocationSource};

/// Error type for search operations
#[derive(Debug, Clone)]
pub enum SearchError {
    Source(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Source(s) => write!(f, "Search error: {}", s),
        }
    }
}

impl std::error::Error for SearchError {}

/// Messages sent from async operations back to the update loop
#[derive(Debug)]
pub enum SearchServiceMessage {
    /// Result of a suggestion lookup, tagged with the query that produced it
    SearchDone {
        query: String,
        result: Result<Vec<LocationCandidate>, SearchError>,
    },
}

/// Request a suggestion lookup asynchronously.
/// Sends `SearchDone` on the channel when complete.
/// Must be called from within a Tokio runtime.
pub fn request_search(
    tx: &UnboundedSender<SearchServiceMessage>,
    source: Arc<dyn LocationSource>,
    query: String,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = source
            .search(&query)
            .await
            .map_err(|e| SearchError::Source(e.to_string()));
        let _ = tx.send(SearchServiceMessage::SearchDone { query, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_display() {
        assert!(format!("{}", SearchError::Source("timeout".into())).contains("Search"));
    }

    #[test]
    fn search_service_message_variants() {
        let _done: SearchServiceMessage = SearchServiceMessage::SearchDone {
            query: "Lon".into(),
            result: Err(SearchError::Source("boom".into())),
        };
    }
}
