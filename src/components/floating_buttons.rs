use dioxus::prelude::*;
use estate_core::{FloatingAction, FloatingMenu};

use crate::context::use_site;

/// Expandable corner menu with WhatsApp, call and contact-form shortcuts.
#[component]
pub fn FloatingButtons() -> Element {
    let site = use_site();
    let mut menu = use_signal(FloatingMenu::default);
    let actions = FloatingMenu::actions(site.config.contact_phone.as_deref());
    let expanded = menu.read().is_expanded();

    rsx! {
        div { class: if expanded { "floating-menu expanded" } else { "floating-menu" },
            if expanded {
                for action in actions {
                    FloatingLink { key: "{action.id}", action: action.clone(), on_follow: move |_| menu.write().collapse() }
                }
            }
            button {
                class: "floating-toggle",
                "aria-expanded": expanded,
                "aria-label": if expanded { "Close contact options" } else { "Open contact options" },
                onclick: move |_| menu.write().toggle(),
                if expanded { "\u{00D7}" } else { "\u{260E}" }
            }
        }
    }
}

#[component]
fn FloatingLink(action: FloatingAction, on_follow: EventHandler<()>) -> Element {
    let target = if action.external { "_blank" } else { "_self" };

    rsx! {
        a {
            class: "floating-action floating-action--{action.id}",
            href: "{action.href}",
            target: "{target}",
            rel: "noopener noreferrer",
            onclick: move |_| on_follow.call(()),
            "{action.label}"
        }
    }
}
