use dioxus::prelude::*;
use estate_core::{FetchState, FooterData};

use crate::context::use_content;

/// Site footer: social links, phone, RERA number and disclaimer.
///
/// Falls back to a bare copyright line while loading or on failure.
#[component]
pub fn Footer() -> Element {
    let content = use_content::<FooterData>().state;
    let state = content.read();

    let data = match &*state {
        FetchState::Ready(data) => data,
        FetchState::Failed(message) => {
            return rsx! {
                footer { class: "site-footer",
                    p { class: "footer-error", "Failed to load footer: {message}" }
                }
            };
        }
        FetchState::Idle | FetchState::Loading => {
            return rsx! {
                footer { class: "site-footer site-footer--loading" }
            };
        }
    };
    let settings = &data.g_setting;

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-social",
                for icon in data.social_icons.iter() {
                    a {
                        key: "{icon.id}",
                        class: "social-link",
                        href: "{icon.social_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": icon.network().label(),
                        "{icon.network().glyph()}"
                    }
                }
            }

            if let (Some(phone), Some(href)) = (&settings.footer_phone, settings.phone_href()) {
                a { class: "footer-phone", href: "{href}", "{phone}" }
            }
            if let Some(rera) = &settings.footer_agent_rera {
                p { class: "footer-rera", "Agent RERA: {rera}" }
            }
            if let Some(disclaimer) = &settings.footer_disclamer {
                p { class: "footer-disclaimer", "{disclaimer}" }
            }
            if let Some(copyright) = &settings.footer_copyright {
                p { class: "footer-copyright", "{copyright}" }
            }
        }
    }
}
