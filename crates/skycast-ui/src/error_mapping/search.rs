use crate::services::search_service::SearchError as UiSearchError;
use skycast_core::{AppError, SearchError};

impl From<UiSearchError> for AppError {
    fn from(e: UiSearchError) -> Self {
        match e {
            UiSearchError::Source(s) => AppError::Search(SearchError::LookupFailed(s)),
        }
    }
}
