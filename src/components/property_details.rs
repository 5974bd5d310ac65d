//! Property overview with Info / Description / Specifications / Map tabs.

use dioxus::prelude::*;
use estate_core::{PropertyDetails as Details, PropertyDetailsPage, PropertyTab};
use estate_ui::{PanelState, StatusPanel};

use crate::context::use_content;

#[component]
pub fn PropertyDetails() -> Element {
    let content = use_content::<PropertyDetailsPage>().state;
    let mut tab = use_signal(PropertyTab::default);
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section property-details",
                StatusPanel { state: panel, context: "Failed to load property details".to_string() }
            }
        };
    };
    let details = &page.property_details;
    let current = tab();

    rsx! {
        section { class: "section property-details", id: "overview",
            div { class: "property-hero",
                if let Some(image) = &details.og_image {
                    img { class: "property-image", src: "{image}", alt: "{details.property_name}" }
                }
                div { class: "property-title",
                    h1 { "{details.property_name}" }
                    p { class: "property-type", "{details.property_type}" }
                    if let Some(location) = &details.sub_location {
                        p { class: "property-location", "{location}" }
                    }
                    if let Some(price) = &details.property_price {
                        p { class: "property-price", "\u{20B9}{price}" }
                    }
                }
            }

            div { class: "tab-bar", role: "tablist",
                for t in PropertyTab::ALL {
                    button {
                        key: "{t.label()}",
                        class: if t == current { "tab active" } else { "tab" },
                        role: "tab",
                        "aria-selected": t == current,
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            div { class: "tab-panel", {tab_body(details, current)} }
        }
    }
}

fn tab_body(details: &Details, tab: PropertyTab) -> Element {
    match tab {
        PropertyTab::Info => rsx! {
            dl { class: "info-grid",
                for (label, value) in details.info_rows() {
                    div { key: "{label}", class: "info-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        },
        PropertyTab::Description => rsx! {
            div { class: "rich-text", dangerous_inner_html: "{details.property_description}" }
        },
        PropertyTab::Specifications => rsx! {
            div { class: "rich-text", dangerous_inner_html: "{details.property_specification}" }
        },
        PropertyTab::Map => rsx! {
            div { class: "map-frame",
                if details.has_map() {
                    div { dangerous_inner_html: details.property_map.clone().unwrap_or_default() }
                }
            }
        },
    }
}
