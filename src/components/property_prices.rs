use dioxus::prelude::*;
use estate_core::PropertyPricesPage;
use estate_ui::{Button, ButtonVariant, PanelState, SectionHeading, StatusPanel};

use crate::context::use_content;

/// Price cards, one per configuration. "Enquire" jumps to the contact form.
#[component]
pub fn PropertyPrices() -> Element {
    let content = use_content::<PropertyPricesPage>().state;
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section pricing",
                StatusPanel { state: panel, context: "Failed to load prices".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section pricing", id: "pricing",
            SectionHeading { title: page.heading() }
            div { class: "price-grid",
                for price in page.property_prices.iter() {
                    div { key: "{price.id}", class: "price-card",
                        h3 { class: "price-type", "{price.property_type}" }
                        if !price.property_tower.is_empty() {
                            p { class: "price-tower", "{price.property_tower}" }
                        }
                        p { class: "price-area", "{price.carpet_area_display()}" }
                        p { class: "price-amount", "\u{20B9} {price.price_display()}" }
                        a { href: "#contact",
                            Button { variant: ButtonVariant::Ghost, "Enquire Now" }
                        }
                    }
                }
            }
        }
    }
}
