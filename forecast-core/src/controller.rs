//! Load/success/error state for the presentation layer.
//!
//! The controller owns a single [`watch`] cell holding a [`FetchState`].
//! Published values are replaced wholesale, never edited, so subscribers only
//! ever observe complete states.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, warn};

use crate::{
    error::ForecastError,
    mapper::ForecastMapper,
    model::WeatherSnapshot,
    provider::ForecastSource,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Success(WeatherSnapshot),
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Drives fetch → map → publish and exposes the result as an observable value.
///
/// Cloning is cheap; clones share the same state cell.
#[derive(Debug, Clone)]
pub struct StateController {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    source: Arc<dyn ForecastSource>,
    mapper: ForecastMapper,
    state: watch::Sender<FetchState>,
    /// Generation of the most recent `refresh()`.
    latest: AtomicU64,
}

impl StateController {
    /// Publishes `Loading` and kicks off the first fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(source: Arc<dyn ForecastSource>, mapper: ForecastMapper) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);

        let controller = Self {
            inner: Arc::new(Inner { source, mapper, state, latest: AtomicU64::new(0) }),
        };
        controller.refresh();
        controller
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.inner.state.subscribe()
    }

    pub fn current(&self) -> FetchState {
        self.inner.state.borrow().clone()
    }

    /// Re-enter `Loading` and fetch again.
    ///
    /// `Loading` is published before this returns. The returned handle
    /// resolves once the fetch has finished, whether or not its result was
    /// published: a result is dropped if another `refresh()` started after it.
    pub fn refresh(&self) -> JoinHandle<()> {
        let mut generation = 0;
        self.inner.state.send_modify(|state| {
            generation = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading;
        });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run(generation).await })
    }
}

impl Inner {
    async fn run(&self, generation: u64) {
        let next = match self.load().await {
            Ok(snapshot) => {
                info!(
                    generation,
                    city = %snapshot.city,
                    days = snapshot.daily.len(),
                    "forecast loaded"
                );
                FetchState::Success(snapshot)
            }
            Err(err) => {
                warn!(generation, error = %err, "forecast fetch failed");
                FetchState::Error(err.to_string())
            }
        };

        let published = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != generation {
                return false;
            }
            *state = next;
            true
        });

        if !published {
            warn!(generation, "dropping stale forecast result");
        }
    }

    async fn load(&self) -> Result<WeatherSnapshot, ForecastError> {
        let raw = self.source.fetch_forecast().await?;
        Ok(self.mapper.to_snapshot(&raw)?)
    }
}
