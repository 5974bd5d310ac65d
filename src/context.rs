//! Site context for the landing page.
//!
//! Provides the validated [`SiteConfig`] and the shared content API client
//! to all sections via use_context, plus the hooks sections use to load
//! their content and follow the window width.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_context_provider(|| site.clone());
//!
//! // In a section
//! let banks = use_content::<BanksPage>();
//! match &*banks.state.read() { /* ... */ }
//! ```

use std::sync::Arc;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_window, use_wry_event_handler};
use dioxus::prelude::*;
use estate_core::carousel::visible_cards;
use estate_core::fetch;
use estate_core::{Content, ContentApi, FetchState, HttpContentApi, ResourceFetcher, SharedFetcher, SiteConfig};

/// Configuration and API client shared by every section.
#[derive(Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub api: Arc<dyn ContentApi>,
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Arc::ptr_eq(&self.api, &other.api)
    }
}

impl SiteContext {
    /// Build the context from the configuration stored by `main`.
    pub fn from_startup() -> Result<Self, String> {
        let config = crate::site_config().ok_or_else(|| "site configuration missing".to_string())?;
        let api = HttpContentApi::new(config.clone()).map_err(|e| e.to_string())?;
        Ok(Self {
            config,
            api: Arc::new(api),
        })
    }
}

/// Hook to access the site context.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}

/// A section's view of one content resource.
///
/// The fetcher owns the lifecycle; `state` mirrors it for rendering.
pub struct ContentHandle<C: Content> {
    pub state: Signal<FetchState<C>>,
    fetcher: SharedFetcher<C>,
    api: Arc<dyn ContentApi>,
}

impl<C: Content> Clone for ContentHandle<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            fetcher: self.fetcher.clone(),
            api: self.api.clone(),
        }
    }
}

impl<C: Content + Clone> ContentHandle<C> {
    /// Start a new load attempt. An earlier attempt still in flight
    /// becomes stale and its result is dropped.
    pub fn reload(&self) {
        let handle = self.clone();
        spawn(async move {
            let mut state = handle.state;
            if !handle.fetcher.lock().is_alive() {
                return;
            }
            state.set(FetchState::Loading);

            if fetch::load(&handle.fetcher, handle.api.as_ref()).await {
                let snapshot = handle.fetcher.lock().state().clone();
                state.set(snapshot);
            }
        });
    }
}

/// Hook that loads `C` once on mount.
///
/// The fetcher is torn down when the section unmounts, so a response that
/// arrives later never reaches the section's state.
pub fn use_content<C: Content + Clone>() -> ContentHandle<C> {
    let site = use_site();
    let fetcher: SharedFetcher<C> = use_hook(ResourceFetcher::<C>::shared);
    let state = use_signal(|| FetchState::<C>::Idle);

    let handle = ContentHandle {
        state,
        fetcher: fetcher.clone(),
        api: site.api,
    };

    use_hook({
        let handle = handle.clone();
        move || handle.reload()
    });
    use_drop(move || fetcher.lock().teardown());

    handle
}

/// Hook returning how many carousel cards fit the current window width.
pub fn use_visible_cards() -> Signal<usize> {
    let window = use_window();
    let mut visible = use_signal(|| {
        let size = window.window.inner_size();
        visible_cards(size.to_logical::<f64>(window.window.scale_factor()).width)
    });

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let width = size.to_logical::<f64>(window.window.scale_factor()).width;
            let count = visible_cards(width);
            if *visible.peek() != count {
                visible.set(count);
            }
        }
    });

    visible
}
