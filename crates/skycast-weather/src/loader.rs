//! Asynchronous forecast loading.
//!
//! The loader owns the single in-memory cache of the last successful
//! result, allows exactly one fetch in flight at a time, and delivers
//! results to one registered observer over a channel. Fetch and parse
//! errors are collapsed into the absent-result sentinel; the observer only
//! ever sees presence or absence of data.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::client::WeatherClient;
use crate::parser;
use crate::types::ForecastQuery;

/// Formatted per-day lines shared read-only with the observer.
pub type ForecastResult = Arc<Vec<String>>;

/// Events delivered to the registered observer.
#[derive(Debug, Clone)]
pub enum ForecastEvent {
    /// A fresh fetch has started; show a loading indicator.
    Loading,
    /// A load finished. `None` means the fetch or parse failed.
    Loaded(Option<ForecastResult>),
}

/// Loader lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No cached result and nothing in flight.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded and its result is cached.
    Cached,
}

struct LoaderInner {
    client: WeatherClient,
    phase: LoadPhase,
    cache: Option<ForecastResult>,
    observer: Option<mpsc::UnboundedSender<ForecastEvent>>,
    in_flight: Option<AbortHandle>,
    /// Bumped by `invalidate` and observer replacement so a stale fetch
    /// completion can be recognized and dropped.
    generation: u64,
}

/// Fetches forecasts off the caller's task and delivers results to a
/// single observer.
#[derive(Clone)]
pub struct ForecastLoader {
    inner: Arc<Mutex<LoaderInner>>,
}

impl ForecastLoader {
    pub fn new(client: WeatherClient) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoaderInner {
                client,
                phase: LoadPhase::Idle,
                cache: None,
                observer: None,
                in_flight: None,
                generation: 0,
            })),
        }
    }

    /// Register the observer, replacing any previous one.
    ///
    /// An in-flight fetch started for the old observer is aborted rather
    /// than delivered stale. When a cached result exists it is delivered
    /// to the new observer immediately.
    pub fn attach(&self, observer: mpsc::UnboundedSender<ForecastEvent>) {
        let mut inner = self.inner.lock();
        if inner.observer.is_some() {
            Self::cancel_in_flight(&mut inner);
        }
        if let Some(cache) = inner.cache.clone() {
            let _ = observer.send(ForecastEvent::Loaded(Some(cache)));
        }
        inner.observer = Some(observer);
    }

    /// Begin a load.
    ///
    /// Cached data is delivered synchronously without a network call;
    /// otherwise a background fetch is spawned and `Loading` is emitted.
    /// A no-op while a fetch is already in flight.
    pub fn start(&self, query: ForecastQuery) {
        let mut inner = self.inner.lock();

        match inner.phase {
            LoadPhase::Cached => {
                let cache = inner.cache.clone();
                Self::deliver(&inner, ForecastEvent::Loaded(cache));
            }
            LoadPhase::Loading => {
                tracing::debug!("fetch already in flight, ignoring start");
            }
            LoadPhase::Idle => {
                inner.phase = LoadPhase::Loading;
                Self::deliver(&inner, ForecastEvent::Loading);

                let generation = inner.generation;
                let client = inner.client.clone();
                let loader = self.clone();
                let handle = tokio::spawn(async move {
                    let result = fetch_and_parse(&client, &query).await;
                    loader.complete(generation, result);
                });
                inner.in_flight = Some(handle.abort_handle());
            }
        }
    }

    /// Clear the cache and abort any in-flight fetch. The next `start`
    /// always fetches fresh data.
    pub fn invalidate(&self) {
        let mut inner = self.inner.lock();
        Self::cancel_in_flight(&mut inner);
        inner.cache = None;
        inner.phase = LoadPhase::Idle;
    }

    /// `invalidate` followed by `start`.
    pub fn restart(&self, query: ForecastQuery) {
        self.invalidate();
        self.start(query);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LoadPhase {
        self.inner.lock().phase
    }

    fn complete(&self, generation: u64, result: Option<Vec<String>>) {
        let mut inner = self.inner.lock();
        if inner.generation != generation {
            // Invalidated while in flight; the result is stale.
            return;
        }
        inner.in_flight = None;

        match result {
            Some(lines) => {
                let lines = Arc::new(lines);
                inner.cache = Some(Arc::clone(&lines));
                inner.phase = LoadPhase::Cached;
                Self::deliver(&inner, ForecastEvent::Loaded(Some(lines)));
            }
            None => {
                inner.cache = None;
                inner.phase = LoadPhase::Idle;
                Self::deliver(&inner, ForecastEvent::Loaded(None));
            }
        }
    }

    fn cancel_in_flight(inner: &mut LoaderInner) {
        inner.generation += 1;
        if let Some(handle) = inner.in_flight.take() {
            handle.abort();
            if inner.phase == LoadPhase::Loading {
                inner.phase = if inner.cache.is_some() {
                    LoadPhase::Cached
                } else {
                    LoadPhase::Idle
                };
            }
        }
    }

    fn deliver(inner: &LoaderInner, event: ForecastEvent) {
        if let Some(observer) = &inner.observer {
            // A dropped receiver is not an error; the loader keeps its state.
            let _ = observer.send(event);
        }
    }
}

async fn fetch_and_parse(client: &WeatherClient, query: &ForecastQuery) -> Option<Vec<String>> {
    let raw = match client.fetch(query).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!("forecast fetch failed: {err}");
            return None;
        }
    };

    match parser::parse_forecast(&raw, query.units) {
        Ok(lines) => Some(lines),
        Err(err) => {
            tracing::warn!("forecast parse failed: {err}");
            None
        }
    }
}
