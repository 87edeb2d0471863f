//! Location autocomplete: a pure state machine plus a tokio driver that owns
//! the debounce and blur timers.
//!
//! The machine never performs I/O. It tells the driver when to fetch and
//! tags every fetch with a generation so responses issued for an input that
//! has since changed are dropped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error};
use url::Url;

use crate::dto::places_dto::SuggestionsResponse;
use crate::error::{Error, Result};
use crate::services::places_service::{PlacesService, MIN_QUERY_LENGTH};

pub const DEBOUNCE: Duration = Duration::from_millis(300);
pub const BLUR_GRACE: Duration = Duration::from_millis(150);

const EVENT_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Debouncing,
    Loading,
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Down,
    Up,
    Enter,
    Escape,
}

/// What a renderer needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AutocompleteSnapshot {
    pub input: String,
    pub suggestions: Vec<String>,
    pub active_index: Option<usize>,
    pub phase: Phase,
}

impl AutocompleteSnapshot {
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn active_suggestion(&self) -> Option<&str> {
        self.active_index
            .and_then(|idx| self.suggestions.get(idx))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    view: AutocompleteSnapshot,
    generation: u64,
    focus_in_list: bool,
}

impl Autocomplete {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            view: AutocompleteSnapshot {
                input: initial.into(),
                ..AutocompleteSnapshot::default()
            },
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> &AutocompleteSnapshot {
        &self.view
    }

    /// Stores the keystroke and returns the generation the new debounce
    /// timer belongs to. Any earlier timer or response is now stale.
    pub fn input_changed(&mut self, value: impl Into<String>) -> u64 {
        self.view.input = value.into();
        self.view.active_index = None;
        self.view.phase = Phase::Debouncing;
        self.generation += 1;
        self.generation
    }

    pub fn debounce_elapsed(&mut self, generation: u64) -> Option<FetchRequest> {
        if generation != self.generation || self.view.phase != Phase::Debouncing {
            return None;
        }

        if self.view.input.chars().count() < MIN_QUERY_LENGTH {
            self.close(true);
            return None;
        }

        self.view.phase = Phase::Loading;
        Some(FetchRequest {
            generation,
            query: self.view.input.clone(),
        })
    }

    /// Returns `false` when the response was stale and ignored.
    pub fn suggestions_received(&mut self, generation: u64, result: Result<Vec<String>>) -> bool {
        if generation != self.generation || self.view.phase != Phase::Loading {
            debug!(generation, current = self.generation, "Discarding stale suggestions");
            return false;
        }

        match result {
            Ok(suggestions) if !suggestions.is_empty() => {
                self.view.suggestions = suggestions;
                self.view.active_index = None;
                self.view.phase = Phase::Open;
            }
            Ok(_) => self.close(true),
            Err(err) => {
                error!(query = %self.view.input, error = %err, "Error fetching suggestions");
                self.close(true);
            }
        }
        true
    }

    /// Keys only act while the list is open; returns the committed value on
    /// Enter.
    pub fn key(&mut self, key: Key) -> Option<String> {
        if !self.view.is_open() || self.view.suggestions.is_empty() {
            return None;
        }
        let last = self.view.suggestions.len() - 1;

        match key {
            Key::Down => {
                self.view.active_index = Some(match self.view.active_index {
                    Some(idx) => (idx + 1).min(last),
                    None => 0,
                });
                None
            }
            Key::Up => {
                self.view.active_index = match self.view.active_index {
                    Some(idx) if idx > 0 => Some(idx - 1),
                    _ => None,
                };
                None
            }
            Key::Enter => {
                let idx = self.view.active_index.filter(|idx| *idx <= last)?;
                self.commit(idx)
            }
            Key::Escape => {
                self.close(false);
                None
            }
        }
    }

    pub fn hover(&mut self, index: usize) {
        if self.view.is_open() && index < self.view.suggestions.len() {
            self.view.active_index = Some(index);
        }
    }

    pub fn select(&mut self, index: usize) -> Option<String> {
        if !self.view.is_open() {
            return None;
        }
        self.commit(index)
    }

    pub fn set_list_focus(&mut self, focused: bool) {
        self.focus_in_list = focused;
    }

    pub fn blur_elapsed(&mut self) {
        if self.focus_in_list {
            return;
        }
        if self.view.is_open() {
            self.view.phase = Phase::Closed;
        }
        self.view.active_index = None;
    }

    fn commit(&mut self, index: usize) -> Option<String> {
        let chosen = self.view.suggestions.get(index)?.clone();
        self.view.input = chosen.clone();
        self.generation += 1;
        self.close(true);
        Some(chosen)
    }

    fn close(&mut self, clear: bool) {
        if clear {
            self.view.suggestions.clear();
        }
        self.view.active_index = None;
        self.view.phase = Phase::Closed;
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl SuggestionSource for PlacesService {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        PlacesService::suggest(self, query).await
    }
}

/// Calls a running instance's `/api/places` endpoint.
#[derive(Clone)]
pub struct HttpSuggestionSource {
    client: Client,
    endpoint: Url,
}

impl HttpSuggestionSource {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let endpoint = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .and_then(|base| base.join("api/places"))
            .map_err(|e| Error::Config(format!("Invalid suggestions base url `{}`: {}", base_url, e)))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: "Failed to fetch suggestions".to_string(),
            });
        }

        Ok(response.json::<SuggestionsResponse>().await?.suggestions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    Input(String),
    Key(Key),
    Hover(usize),
    Select(usize),
    Blur,
    ListFocus(bool),
}

/// Runs an [`Autocomplete`] on its own task. Events go in through
/// [`AutocompleteSession::send`]; every change is published as a snapshot.
pub struct AutocompleteSession {
    events: mpsc::Sender<AutocompleteEvent>,
    state: watch::Receiver<AutocompleteSnapshot>,
    task: JoinHandle<()>,
}

impl AutocompleteSession {
    pub fn spawn(source: Arc<dyn SuggestionSource>, initial: impl Into<String>) -> Self {
        let machine = Autocomplete::new(initial);
        let (state_tx, state) = watch::channel(machine.snapshot().clone());
        let (events, events_rx) = mpsc::channel(EVENT_BUFFER);
        let task = tokio::spawn(run(machine, source, events_rx, state_tx));

        Self {
            events,
            state,
            task,
        }
    }

    pub async fn send(&self, event: AutocompleteEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| Error::Internal("autocomplete session has stopped".to_string()))
    }

    pub fn snapshot(&self) -> AutocompleteSnapshot {
        self.state.borrow().clone()
    }

    /// Drops the event channel and waits for pending work to be abandoned.
    pub async fn shutdown(self) {
        drop(self.events);
        if let Err(err) = self.task.await {
            error!(error = %err, "Autocomplete task ended abnormally");
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

async fn run(
    mut machine: Autocomplete,
    source: Arc<dyn SuggestionSource>,
    mut events: mpsc::Receiver<AutocompleteEvent>,
    state: watch::Sender<AutocompleteSnapshot>,
) {
    let (responses_tx, mut responses) = mpsc::channel::<(u64, Result<Vec<String>>)>(EVENT_BUFFER);
    let mut debounce: Option<(Instant, u64)> = None;
    let mut blur: Option<Instant> = None;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                match event {
                    AutocompleteEvent::Input(value) => {
                        let generation = machine.input_changed(value);
                        debounce = Some((Instant::now() + DEBOUNCE, generation));
                    }
                    AutocompleteEvent::Key(key) => {
                        if let Some(chosen) = machine.key(key) {
                            debug!(location = %chosen, "Suggestion committed");
                        }
                    }
                    AutocompleteEvent::Hover(index) => machine.hover(index),
                    AutocompleteEvent::Select(index) => {
                        if let Some(chosen) = machine.select(index) {
                            debug!(location = %chosen, "Suggestion committed");
                        }
                    }
                    AutocompleteEvent::Blur => blur = Some(Instant::now() + BLUR_GRACE),
                    AutocompleteEvent::ListFocus(focused) => machine.set_list_focus(focused),
                }
            }
            _ = wait_for(debounce.map(|(deadline, _)| deadline)) => {
                let generation = debounce.take().map(|(_, generation)| generation).unwrap_or_default();
                if let Some(request) = machine.debounce_elapsed(generation) {
                    let source = Arc::clone(&source);
                    let responses_tx = responses_tx.clone();
                    tokio::spawn(async move {
                        let result = source.suggest(&request.query).await;
                        let _ = responses_tx.send((request.generation, result)).await;
                    });
                }
            }
            _ = wait_for(blur) => {
                blur = None;
                machine.blur_elapsed();
            }
            Some((generation, result)) = responses.recv() => {
                machine.suggestions_received(generation, result);
            }
        }

        state.send_replace(machine.snapshot().clone());
    }
}
