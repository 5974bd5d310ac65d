//! Home loan partners slider. Autoplays and pauses under the pointer.

use dioxus::prelude::*;
use estate_core::{Bank, BanksPage, Carousel, Direction, FetchState};
use estate_ui::{CarouselArrow, CarouselDots, PanelState, SectionHeading, StatusPanel};

use super::carousel::{active_dot, card_style, settle, slide, track_attrs, use_autoplay};
use crate::context::{use_content, use_visible_cards};

#[component]
pub fn Banks() -> Element {
    let content = use_content::<BanksPage>().state;
    let mut carousel = use_signal(Carousel::<Bank>::default);
    let visible = use_visible_cards();
    use_autoplay(carousel);

    use_effect(move || {
        if let FetchState::Ready(page) = &*content.read() {
            carousel.write().set_items(page.banks().to_vec());
        }
    });

    let state = content.read();
    if let Some(panel) = PanelState::from_fetch(&*state) {
        return rsx! {
            section { class: "section banks",
                StatusPanel { state: panel, context: "Failed to load banks".to_string() }
            }
        };
    }
    let heading = state.data().map(BanksPage::heading).unwrap_or_default();

    let model = carousel.read();
    if model.is_empty() {
        return rsx! {};
    }
    let visible = visible();
    let (track_style, track_class) = track_attrs(&*model, visible);
    let card = card_style(visible);

    rsx! {
        section { class: "section banks",
            SectionHeading { title: heading }

            div {
                class: "carousel",
                onmouseenter: move |_| carousel.write().set_paused(true),
                onmouseleave: move |_| carousel.write().set_paused(false),

                CarouselArrow { direction: Direction::Prev, onclick: move |d| slide(carousel, d) }

                div { class: "carousel-viewport",
                    div {
                        class: "{track_class}",
                        style: "{track_style}",
                        ontransitionend: move |_| settle(carousel),
                        for (i, bank) in model.extended_items().iter().enumerate() {
                            div { key: "{i}", class: "carousel-card", style: "{card}",
                                BankCard { bank: bank.clone() }
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

#[component]
fn BankCard(bank: Bank) -> Element {
    let logo = rsx! {
        if let Some(photo) = &bank.property_bank_photo {
            img { class: "bank-logo", src: "{photo}", alt: "{bank.bank_name}" }
        } else {
            span { class: "bank-name", "{bank.bank_name}" }
        }
    };

    match &bank.bank_slug {
        Some(href) => rsx! {
            a { class: "bank-card", href: "{href}", target: "_blank", rel: "noopener noreferrer", {logo} }
        },
        None => rsx! {
            div { class: "bank-card", {logo} }
        },
    }
}
