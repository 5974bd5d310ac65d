//! Location highlights carousel.

use dioxus::prelude::*;
use estate_core::{Carousel, Direction, FetchState, LocationAdvantage, LocationAdvantagesPage};
use estate_ui::{CarouselArrow, CarouselDots, PanelState, SectionHeading, StatusPanel};

use super::carousel::{active_dot, card_style, settle, slide, track_attrs};
use crate::context::{use_content, use_visible_cards};

#[component]
pub fn LocationAdvantages() -> Element {
    let content = use_content::<LocationAdvantagesPage>().state;
    let mut carousel = use_signal(Carousel::<LocationAdvantage>::default);
    let visible = use_visible_cards();

    use_effect(move || {
        if let FetchState::Ready(page) = &*content.read() {
            carousel.write().set_items(page.location_advantages.clone());
        }
    });

    let state = content.read();
    if let Some(panel) = PanelState::from_fetch(&*state) {
        return rsx! {
            section { class: "section location-advantages",
                StatusPanel { state: panel, context: "Failed to load location data".to_string() }
            }
        };
    }
    let heading = state.data().map(|p| p.heading()).unwrap_or_default();

    let model = carousel.read();
    if model.is_empty() {
        return rsx! {};
    }
    let visible = visible();
    let (track_style, track_class) = track_attrs(&*model, visible);
    let card = card_style(visible);

    rsx! {
        section { class: "section location-advantages",
            SectionHeading { title: heading }

            div { class: "carousel",
                CarouselArrow { direction: Direction::Prev, onclick: move |d| slide(carousel, d) }

                div { class: "carousel-viewport",
                    div {
                        class: "{track_class}",
                        style: "{track_style}",
                        ontransitionend: move |_| settle(carousel),
                        for (i, item) in model.extended_items().iter().enumerate() {
                            div { key: "{i}", class: "carousel-card", style: "{card}",
                                div { class: "advantage-card",
                                    h3 { class: "advantage-location", "{item.location}" }
                                    p { class: "advantage-distance", "{item.distance}" }
                                    p { class: "advantage-description", "{item.description}" }
                                }
                            }
                        }
                    }
                }

                CarouselArrow { direction: Direction::Next, onclick: move |d| slide(carousel, d) }
            }

            CarouselDots {
                count: model.len(),
                active: active_dot(&*model),
                onselect: move |i| carousel.write().go_to(i),
            }
        }
    }
}

