//! Floor plan and unit layout galleries.
//!
//! Unit layout cards open a detail modal; floor plans show their details
//! inline.

use dioxus::prelude::*;
use estate_core::{DetailModal, FloorPlansPage, Layout, UnitLayoutsPage};
use estate_ui::{CloseButton, PanelState, SectionHeading, StatusPanel};

use crate::context::use_content;

#[component]
pub fn FloorPlans() -> Element {
    let content = use_content::<FloorPlansPage>().state;
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section floor-plans",
                StatusPanel { state: panel, context: "Failed to load floor plans".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section floor-plans", id: "floor-plans",
            SectionHeading { title: page.heading() }
            div { class: "layout-grid",
                for layout in page.floor_plans.iter() {
                    div { key: "{layout.id}", class: "layout-card",
                        LayoutImage { layout: layout.clone() }
                        h3 { class: "layout-name", "{layout.layout_name}" }
                        p { class: "layout-meta", "Carpet Area: {layout.carpet_area_display()}" }
                        p { class: "layout-meta", "Price: {layout.price_display()}" }
                        if let Some(description) = &layout.unit_layout_description {
                            p { class: "layout-description", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UnitLayouts() -> Element {
    let content = use_content::<UnitLayoutsPage>().state;
    let mut modal = use_signal(DetailModal::<Layout>::default);
    let state = content.read();

    let Some(page) = state.data() else {
        let panel = PanelState::from_fetch(&*state).unwrap_or(PanelState::Loading);
        return rsx! {
            section { class: "section unit-layouts",
                StatusPanel { state: panel, context: "Failed to load unit layouts".to_string() }
            }
        };
    };

    rsx! {
        section { class: "section unit-layouts", id: "unit-layouts",
            SectionHeading { title: page.heading() }
            div { class: "layout-grid",
                for layout in page.unit_layout.iter() {
                    {
                        let selected = layout.clone();
                        rsx! {
                            button {
                                key: "{layout.id}",
                                class: "layout-card layout-card--clickable",
                                onclick: move |_| modal.write().open(selected.clone()),
                                LayoutImage { layout: layout.clone() }
                                h3 { class: "layout-name", "{layout.layout_name}" }
                            }
                        }
                    }
                }
            }

            if let Some(layout) = modal.read().selected() {
                div { class: "modal-backdrop", onclick: move |_| modal.write().close(),
                    div { class: "modal", onclick: move |e| e.stop_propagation(),
                        CloseButton { onclick: move |_| modal.write().close() }
                        LayoutImage { layout: layout.clone() }
                        h3 { class: "layout-name",
                            {layout.unit_layout_heading.clone().unwrap_or_else(|| layout.layout_name.clone())}
                        }
                        dl { class: "info-grid",
                            div { class: "info-row",
                                dt { "Carpet Area" }
                                dd { "{layout.carpet_area_display()}" }
                            }
                            div { class: "info-row",
                                dt { "Price" }
                                dd { "{layout.price_display()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LayoutImage(layout: Layout) -> Element {
    match layout.image_url() {
        Some(src) => rsx! {
            img { class: "layout-image", src: "{src}", alt: "{layout.layout_name}" }
        },
        None => rsx! {
            div { class: "layout-image layout-image--empty" }
        },
    }
}
