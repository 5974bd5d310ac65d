use dioxus::prelude::*;

use crate::context::SiteContext;
use crate::pages::Landing;
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles and the site context, then renders the landing
/// page. A broken configuration renders a notice instead.
#[component]
pub fn App() -> Element {
    let site = use_hook(SiteContext::from_startup);
    let palette = use_hook(root_variables);

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        match site {
            Ok(site) => rsx! { SiteRoot { site } },
            Err(message) => {
                tracing::error!("Cannot start site: {}", message);
                rsx! {
                    main { class: "startup-error",
                        h1 { "Site unavailable" }
                        p { "{message}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteRoot(site: SiteContext) -> Element {
    use_context_provider(|| site.clone());

    rsx! {
        Landing {}
    }
}
