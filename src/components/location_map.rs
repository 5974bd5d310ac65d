use dioxus::prelude::*;
use estate_core::LocationMap as LocationMapData;
use estate_ui::{PanelState, SectionHeading, StatusPanel};

use crate::context::use_content;

/// Embedded map with the project's location heading.
#[component]
pub fn LocationMap() -> Element {
    let content = use_content::<LocationMapData>().state;
    let state = content.read();

    let Some(location) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section location-map",
                StatusPanel { state: panel, context: "Failed to load location".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section location-map", id: "location",
            SectionHeading { title: location.heading(), subtitle: location.subheading.clone() }
            if let Some(map) = &location.map {
                div { class: "map-frame", dangerous_inner_html: "{map}" }
            }
        }
    }
}
