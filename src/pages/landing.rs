//! Landing page - every section of the property site, top to bottom.

use dioxus::prelude::*;

use crate::components::{
    Amenities, Banks, ContactUs, Faq, FloatingButtons, FloorPlans, Footer, LocationAdvantages,
    LocationMap, PropertyDetails, PropertyPrices, UnitLayouts,
};

/// Landing page component.
///
/// Sections mount together and load in parallel; each one degrades on
/// its own.
#[component]
pub fn Landing() -> Element {
    rsx! {
        main { class: "landing",
            PropertyDetails {}
            PropertyPrices {}
            Amenities {}
            FloorPlans {}
            UnitLayouts {}
            LocationMap {}
            LocationAdvantages {}
            Banks {}
            Faq {}
            ContactUs {}
        }
        Footer {}
        FloatingButtons {}
    }
}
