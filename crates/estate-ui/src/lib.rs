//! Estate Site UI Components
//!
//! Dioxus building blocks shared by the landing page sections. Styling
//! comes from the global stylesheet in the desktop app; components here
//! only attach class names.
//!
//! ## Palette
//!
//! - **Gold (#c9a45c)**: headings, accents, call-to-action gradient
//! - **Ink (#1b1f24)**: body text and dark sections
//! - **Ivory (#faf7f0)**: page background

pub mod components;

pub use components::*;
