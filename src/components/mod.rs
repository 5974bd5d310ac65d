//! Landing page sections.
//!
//! Each section owns its content load and renders its own loading and
//! failure state, so one failing endpoint never blanks the page.

mod amenities;
mod banks;
mod carousel;
mod contact_us;
mod faq;
mod floating_buttons;
mod footer;
mod layouts;
mod location_advantages;
mod location_map;
mod property_details;
mod property_prices;

pub use amenities::Amenities;
pub use banks::Banks;
pub use contact_us::ContactUs;
pub use faq::Faq;
pub use floating_buttons::FloatingButtons;
pub use footer::Footer;
pub use layouts::{FloorPlans, UnitLayouts};
pub use location_advantages::LocationAdvantages;
pub use location_map::LocationMap;
pub use property_details::PropertyDetails;
pub use property_prices::PropertyPrices;
