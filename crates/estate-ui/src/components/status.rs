//! Section Status Components
//!
//! Every content section shows the same three faces while it loads:
//! a spinner, an inline failure notice, or its content.

use dioxus::prelude::*;
use estate_core::FetchState;

/// What a section renders instead of its content.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PanelState {
    Loading,
    Failed(String),
}

impl PanelState {
    /// Panel for a fetch state, or `None` once the data is ready.
    pub fn from_fetch<T>(state: &FetchState<T>) -> Option<Self> {
        match state {
            FetchState::Idle | FetchState::Loading => Some(PanelState::Loading),
            FetchState::Failed(message) => Some(PanelState::Failed(message.clone())),
            FetchState::Ready(_) => None,
        }
    }
}

/// Properties for the StatusPanel component
#[derive(Clone, PartialEq, Props)]
pub struct StatusPanelProps {
    pub state: PanelState,
    /// Prefix for the failure notice, e.g. "Failed to load banks"
    pub context: String,
}

/// Spinner or failure notice for a content section
#[component]
pub fn StatusPanel(props: StatusPanelProps) -> Element {
    match props.state {
        PanelState::Loading => rsx! {
            div { class: "status-panel status-panel--loading",
                div { class: "loading-spinner", role: "status", "aria-label": "Loading" }
            }
        },
        PanelState::Failed(message) => rsx! {
            div { class: "status-panel status-panel--error", role: "alert",
                span { class: "status-panel__icon", "\u{26A0}" }
                p { "{props.context}: {message}" }
            }
        },
    }
}

/// Centered section title with the gold underline bar
#[component]
pub fn SectionHeading(
    title: String,
    #[props(default)] subtitle: Option<String>,
) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
            div { class: "section-bar" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_from_fetch() {
        assert_eq!(
            PanelState::from_fetch::<u8>(&FetchState::Idle),
            Some(PanelState::Loading)
        );
        assert_eq!(
            PanelState::from_fetch::<u8>(&FetchState::Loading),
            Some(PanelState::Loading)
        );
        assert_eq!(
            PanelState::from_fetch::<u8>(&FetchState::Failed("x".to_string())),
            Some(PanelState::Failed("x".to_string()))
        );
        assert_eq!(PanelState::from_fetch(&FetchState::Ready(1u8)), None);
    }
}
