//! Generic load lifecycle for one content resource.
//!
//! A [`ResourceFetcher`] owns the [`FetchState`] of a single mounted section.
//! Every load attempt is issued a [`FetchTicket`]; a result is applied only
//! when its ticket is the latest one and the mount is still alive, so a
//! response that arrives after teardown (or after a newer attempt started)
//! is dropped without touching state.
//!
//! ```ignore
//! let fetcher = Arc::new(Mutex::new(ResourceFetcher::<BanksPage>::new()));
//! fetch::load(&fetcher, api.as_ref()).await;
//! if let FetchState::Ready(page) = fetcher.lock().state() { /* render */ }
//! ```

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::api::{fetch_content, ContentApi};
use crate::error::{SiteError, SiteResult};
use crate::resource::{Content, Resource};

/// Observable state of a resource load.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No attempt issued yet
    Idle,
    /// Attempt in flight
    Loading,
    /// Payload decoded
    Ready(T),
    /// Attempt failed; message is user-facing
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// True until the first attempt resolves. Idle renders like loading.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one load attempt.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    mount: CancellationToken,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the owning mount was torn down.
    pub fn is_cancelled(&self) -> bool {
        self.mount.is_cancelled()
    }

    /// Drive `fut` unless the mount is torn down first.
    ///
    /// Returns `None` when teardown won the race; the request future is
    /// dropped at that point.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.mount.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

/// Load lifecycle owned by a single mounted section.
#[derive(Debug)]
pub struct ResourceFetcher<T> {
    resource: Resource,
    state: FetchState<T>,
    generation: u64,
    mount: CancellationToken,
}

/// Fetcher shared between a section and its load task.
pub type SharedFetcher<T> = Arc<Mutex<ResourceFetcher<T>>>;

impl<T: Content> ResourceFetcher<T> {
    pub fn new() -> Self {
        Self::with_mount(T::RESOURCE, CancellationToken::new())
    }

    pub fn shared() -> SharedFetcher<T> {
        Arc::new(Mutex::new(Self::new()))
    }
}

impl<T: Content> Default for ResourceFetcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceFetcher<T> {
    /// Fetcher bound to an externally owned mount token.
    ///
    /// Cancelling `mount` has the same effect as [`teardown`](Self::teardown).
    pub fn with_mount(resource: Resource, mount: CancellationToken) -> Self {
        Self {
            resource,
            state: FetchState::Idle,
            generation: 0,
            mount,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_alive(&self) -> bool {
        !self.mount.is_cancelled()
    }

    /// Start a new attempt: state goes to `Loading` and earlier tickets
    /// become stale. Returns `None` after teardown.
    pub fn begin(&mut self) -> Option<FetchTicket> {
        if !self.is_alive() {
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Loading;
        Some(FetchTicket {
            generation: self.generation,
            mount: self.mount.clone(),
        })
    }

    /// Apply the outcome of an attempt. Returns whether state changed.
    pub fn complete(&mut self, ticket: &FetchTicket, result: SiteResult<T>) -> bool {
        if ticket.is_cancelled() || !self.is_alive() {
            tracing::debug!("Dropping {} result: section torn down", self.resource);
            return false;
        }
        if ticket.generation != self.generation {
            tracing::debug!(
                "Dropping stale {} result (attempt {}, current {})",
                self.resource,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(data) => {
                tracing::info!("Loaded {}", self.resource);
                FetchState::Ready(data)
            }
            Err(err) => {
                tracing::warn!("Failed to load {}: {}", self.resource, err);
                FetchState::Failed(failure_message(self.resource, &err))
            }
        };
        true
    }

    /// Mark the owning section as gone. Later results are ignored.
    pub fn teardown(&mut self) {
        self.mount.cancel();
    }
}

/// User-facing message for a failed attempt.
///
/// Protocol and decode failures use the resource's own message; transport
/// failures surface the transport message.
pub fn failure_message(resource: Resource, err: &SiteError) -> String {
    match err {
        SiteError::Transport(message) if !message.is_empty() => message.clone(),
        _ => resource.failure_message().to_string(),
    }
}

/// Run one load attempt against `api` and apply its result.
///
/// Returns whether the fetcher state was updated with the outcome.
pub async fn load<C: Content>(fetcher: &SharedFetcher<C>, api: &dyn ContentApi) -> bool {
    let Some(ticket) = fetcher.lock().begin() else {
        return false;
    };
    match ticket.guard(fetch_content::<C>(api)).await {
        Some(result) => fetcher.lock().complete(&ticket, result),
        None => {
            tracing::debug!("{} load abandoned on teardown", C::RESOURCE);
            false
        }
    }
}
