//! Page interaction state as an explicit reducer.
//!
//! All mutable UI state lives in `PageModel`; every change flows through
//! `update`, which returns the side effects the update loop must execute.
//! This keeps the transition table testable without any toolkit or runtime.

use skycast_core::AppError;
use skycast_weather::{LocationCandidate, WeatherObservation};

use crate::services::{SearchError, WeatherError};

/// Interaction states of the lookup page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// No query, nothing in flight
    #[default]
    Idle,
    /// Debounce elapsed, suggestion lookup in flight
    Searching,
    /// Suggestion panel populated (possibly with zero rows)
    SuggestionsShown,
    /// Location chosen, observation fetch in flight
    WeatherLoading,
    /// Observation on screen
    WeatherShown,
}

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum PageEvent {
    /// The query text changed (user keystroke)
    QueryEdited(String),
    /// The debounce timer for `query` survived uncancelled
    DebounceElapsed { query: String },
    /// A suggestion lookup resolved
    SearchCompleted {
        query: String,
        result: Result<Vec<LocationCandidate>, SearchError>,
    },
    /// The user picked the suggestion at `index`
    SuggestionPicked(usize),
    /// An observation fetch resolved
    FetchCompleted {
        result: Result<WeatherObservation, WeatherError>,
    },
}

/// Side effects the update loop must execute after a reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    /// Supersede any pending debounce timer with a fresh one for `query`
    RestartDebounce { query: String },
    /// Drop the pending debounce timer, if any
    CancelDebounce,
    /// Dispatch a suggestion lookup
    Search { query: String },
    /// Dispatch an observation fetch
    Fetch { candidate: LocationCandidate },
}

/// The page's entire mutable state.
#[derive(Debug, Default)]
pub struct PageModel {
    state: PageState,
    query: String,
    suggestions: Vec<LocationCandidate>,
    observation: Option<WeatherObservation>,
    searching: bool,
    loading: bool,
    suggestions_visible: bool,
    error_message: Option<String>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the state, returning the effects to execute.
    pub fn update(&mut self, event: PageEvent) -> Vec<PageEffect> {
        match event {
            PageEvent::QueryEdited(text) => self.on_query_edited(text),
            PageEvent::DebounceElapsed { query } => self.on_debounce_elapsed(query),
            PageEvent::SearchCompleted { query, result } => {
                self.on_search_completed(query, result)
            }
            PageEvent::SuggestionPicked(index) => self.on_suggestion_picked(index),
            PageEvent::FetchCompleted { result } => self.on_fetch_completed(result),
        }
    }

    fn on_query_edited(&mut self, text: String) -> Vec<PageEffect> {
        self.query = text;
        self.error_message = None;

        if self.query.trim().is_empty() {
            // No service call for blank input; just clear the panel
            self.suggestions.clear();
            self.suggestions_visible = false;
            self.state = self.fallback_state();
            return vec![PageEffect::CancelDebounce];
        }

        vec![PageEffect::RestartDebounce {
            query: self.query.clone(),
        }]
    }

    fn on_debounce_elapsed(&mut self, query: String) -> Vec<PageEffect> {
        // A timer that no longer matches the field was superseded in
        // transit; drop it
        if query.trim().is_empty() || query != self.query {
            return Vec::new();
        }

        self.searching = true;
        self.state = PageState::Searching;
        vec![PageEffect::Search { query }]
    }

    fn on_search_completed(
        &mut self,
        query: String,
        result: Result<Vec<LocationCandidate>, SearchError>,
    ) -> Vec<PageEffect> {
        self.searching = false;

        match result {
            Ok(candidates) => {
                tracing::debug!(query = %query, count = candidates.len(), "search completed");
                self.suggestions = candidates;
                self.suggestions_visible = true;
                self.state = PageState::SuggestionsShown;
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "location search failed");
                let app_err: AppError = e.into();
                self.error_message = Some(app_err.user_message().to_string());
                self.state = self.fallback_state();
            }
        }

        Vec::new()
    }

    fn on_suggestion_picked(&mut self, index: usize) -> Vec<PageEffect> {
        let Some(candidate) = self.suggestions.get(index).cloned() else {
            tracing::warn!(index, "ignoring pick outside the suggestion list");
            return Vec::new();
        };

        self.suggestions_visible = false;
        self.query = candidate.display_name();
        self.error_message = None;
        self.loading = true;
        self.state = PageState::WeatherLoading;

        vec![PageEffect::CancelDebounce, PageEffect::Fetch { candidate }]
    }

    fn on_fetch_completed(
        &mut self,
        result: Result<WeatherObservation, WeatherError>,
    ) -> Vec<PageEffect> {
        self.loading = false;

        match result {
            Ok(observation) => {
                tracing::info!(
                    condition = observation.condition.label(),
                    location = %observation.location,
                    "weather observation ready"
                );
                self.observation = Some(observation);
                self.state = PageState::WeatherShown;
            }
            Err(e) => {
                tracing::error!(error = %e, "weather fetch failed");
                let app_err: AppError = e.into();
                self.error_message = Some(app_err.user_message().to_string());
                self.state = self.fallback_state();
            }
        }

        Vec::new()
    }

    /// Presentation to fall back to when a call fails or input clears.
    fn fallback_state(&self) -> PageState {
        if self.suggestions_visible {
            PageState::SuggestionsShown
        } else if self.observation.is_some() {
            PageState::WeatherShown
        } else {
            PageState::Idle
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[LocationCandidate] {
        &self.suggestions
    }

    pub fn observation(&self) -> Option<&WeatherObservation> {
        self.observation.as_ref()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
