//! Single update loop wiring the page model to its services.
//!
//! The controller owns the model, the debounce scheduler, and one channel
//! per service; user input and service completions all funnel through
//! `PageModel::update`, and the returned effects are executed here.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use skycast_weather::{LocationSource, WeatherSource};

use crate::debounce::Debouncer;
use crate::models::page_model::{PageEffect, PageEvent, PageModel};
use crate::services::{
    request_fetch, request_search, SearchServiceMessage, WeatherServiceMessage,
};

pub struct PageController {
    model: PageModel,
    debouncer: Debouncer,
    locations: Arc<dyn LocationSource>,
    weather: Arc<dyn WeatherSource>,
    search_tx: UnboundedSender<SearchServiceMessage>,
    search_rx: UnboundedReceiver<SearchServiceMessage>,
    weather_tx: UnboundedSender<WeatherServiceMessage>,
    weather_rx: UnboundedReceiver<WeatherServiceMessage>,
    debounce_tx: UnboundedSender<String>,
    debounce_rx: UnboundedReceiver<String>,
    debounce_pending: bool,
    searches_in_flight: usize,
    fetches_in_flight: usize,
}

impl PageController {
    pub fn new(
        locations: Arc<dyn LocationSource>,
        weather: Arc<dyn WeatherSource>,
        debounce: Duration,
    ) -> Self {
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        let (weather_tx, weather_rx) = mpsc::unbounded_channel();
        let (debounce_tx, debounce_rx) = mpsc::unbounded_channel();

        Self {
            model: PageModel::new(),
            debouncer: Debouncer::new(debounce),
            locations,
            weather,
            search_tx,
            search_rx,
            weather_tx,
            weather_rx,
            debounce_tx,
            debounce_rx,
            debounce_pending: false,
            searches_in_flight: 0,
            fetches_in_flight: 0,
        }
    }

    /// Apply a text edit from the user.
    pub fn input(&mut self, text: impl Into<String>) {
        let effects = self.model.update(PageEvent::QueryEdited(text.into()));
        self.run_effects(effects);
    }

    /// Apply a suggestion pick from the user.
    pub fn select(&mut self, index: usize) {
        let effects = self.model.update(PageEvent::SuggestionPicked(index));
        self.run_effects(effects);
    }

    /// Read access to the page state for rendering.
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// True while a debounce timer, search, or fetch is outstanding.
    pub fn is_busy(&self) -> bool {
        self.debounce_pending || self.searches_in_flight > 0 || self.fetches_in_flight > 0
    }

    /// Wait for the next completion and fold it into the model.
    ///
    /// Must only be called while `is_busy()`; otherwise it would wait on
    /// channels nothing will write to.
    pub async fn step(&mut self) {
        let event = tokio::select! {
            Some(query) = self.debounce_rx.recv() => {
                self.debounce_pending = false;
                PageEvent::DebounceElapsed { query }
            }
            Some(SearchServiceMessage::SearchDone { query, result }) = self.search_rx.recv() => {
                self.searches_in_flight -= 1;
                PageEvent::SearchCompleted { query, result }
            }
            Some(WeatherServiceMessage::FetchDone { result }) = self.weather_rx.recv() => {
                self.fetches_in_flight -= 1;
                PageEvent::FetchCompleted { result }
            }
        };

        let effects = self.model.update(event);
        self.run_effects(effects);
    }

    /// Drain completions until the page is quiescent.
    pub async fn settle(&mut self) {
        while self.is_busy() {
            self.step().await;
        }
    }

    fn run_effects(&mut self, effects: Vec<PageEffect>) {
        for effect in effects {
            match effect {
                PageEffect::RestartDebounce { query } => {
                    let tx = self.debounce_tx.clone();
                    self.debounce_pending = true;
                    self.debouncer.schedule(move || {
                        let _ = tx.send(query);
                    });
                }
                PageEffect::CancelDebounce => {
                    self.debouncer.cancel();
                    self.debounce_pending = false;
                }
                PageEffect::Search { query } => {
                    self.searches_in_flight += 1;
                    request_search(&self.search_tx, self.locations.clone(), query);
                }
                PageEffect::Fetch { candidate } => {
                    self.fetches_in_flight += 1;
                    request_fetch(&self.weather_tx, self.weather.clone(), candidate);
                }
            }
        }
    }
}
