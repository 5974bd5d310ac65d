use dioxus::prelude::*;
use estate_core::AmenitiesPage;
use estate_ui::{PanelState, SectionHeading, StatusPanel};

use crate::context::use_content;

/// Amenities grid
#[component]
pub fn Amenities() -> Element {
    let content = use_content::<AmenitiesPage>().state;
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section amenities",
                StatusPanel { state: panel, context: "Failed to load amenities".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section amenities",
            SectionHeading {
                title: page.heading(),
                subtitle: page.subheading().map(str::to_string),
            }
            div { class: "amenities-grid",
                for amenity in page.amenities.amenities.iter() {
                    div { key: "{amenity.id}", class: "amenity-card",
                        if let Some(photo) = &amenity.property_amenities_photo {
                            img { class: "amenity-photo", src: "{photo}", alt: "{amenity.amenity_name}" }
                        }
                        h3 { class: "amenity-name", "{amenity.amenity_name}" }
                        if let Some(date) = amenity.updated_on() {
                            p { class: "amenity-updated", "Updated {date}" }
                        }
                    }
                }
            }
        }
    }
}
