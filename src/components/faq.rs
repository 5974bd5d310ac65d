//! FAQ accordion. One answer open at a time.

use dioxus::prelude::*;
use estate_core::{FaqAccordion, FaqPage};
use estate_ui::{PanelState, SectionHeading, StatusPanel};

use crate::context::use_content;

#[component]
pub fn Faq() -> Element {
    let content = use_content::<FaqPage>().state;
    let mut accordion = use_signal(FaqAccordion::new);
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section faq",
                StatusPanel { state: panel, context: "Failed to load FAQ".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section faq",
            SectionHeading { title: page.heading() }
            div { class: "faq-list",
                for faq in page.faqs.iter() {
                    {
                        let open = accordion.read().is_open(&faq.id);
                        let id = faq.id.clone();
                        rsx! {
                            div { key: "{faq.id}", class: if open { "faq-item open" } else { "faq-item" },
                                button {
                                    class: "faq-question",
                                    "aria-expanded": open,
                                    onclick: move |_| accordion.write().toggle(&id),
                                    span { "{faq.faq_title}" }
                                    span { class: "faq-toggle", if open { "\u{2212}" } else { "+" } }
                                }
                                if open {
                                    p { class: "faq-answer", "{faq.answer_text()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
