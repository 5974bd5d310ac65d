//! Estate Site Core Library
//!
//! Content API client and the UI-independent state machines behind the
//! property marketing site.
//!
//! ## Overview
//!
//! Every page section loads one JSON resource from the site API and renders
//! it. This crate holds everything about that which is not markup:
//!
//! - **Fetch lifecycle** ([`fetch`]): `Idle → Loading → Ready | Failed`, with
//!   late results after teardown discarded
//! - **Infinite carousel** ([`carousel`]): wrap-around slider over cards
//! - **Contact form** ([`contact`]): validation and a single JSON POST
//! - **Content models** ([`content`]): typed payloads per resource
//!
//! ## Quick Start
//!
//! ```ignore
//! use estate_core::{fetch, BanksPage, HttpContentApi, ResourceFetcher, SiteConfig};
//!
//! let config = SiteConfig::new("https://api.example.com/api", "tower-108")?;
//! let api = HttpContentApi::new(config)?;
//!
//! let banks = ResourceFetcher::<BanksPage>::shared();
//! fetch::load(&banks, &api).await;
//! ```

pub mod api;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod fetch;
pub mod html;
pub mod resource;
pub mod sections;

// Re-exports
pub use api::{fetch_content, ContentApi, HttpContentApi, RawResponse};
pub use carousel::{Carousel, Direction, SettleAction};
pub use config::SiteConfig;
pub use contact::{ContactField, ContactFields, ContactForm, FieldErrors, Submission};
pub use content::*;
pub use error::{SiteError, SiteResult};
pub use fetch::{FetchState, FetchTicket, ResourceFetcher, SharedFetcher};
pub use resource::{Content, Resource};
pub use sections::{DetailModal, FaqAccordion, FloatingAction, FloatingMenu, PropertyTab};
