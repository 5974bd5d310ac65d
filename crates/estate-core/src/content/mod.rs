//! Payload types for each content resource.
//!
//! The API is loose about types: ids and areas arrive as numbers or
//! strings, optional text arrives as `null`, `""` or not at all. Fields are
//! decoded leniently so one odd record does not fail a whole section.

mod amenities;
mod banks;
mod faq;
mod footer;
mod layouts;
mod location;
mod pricing;
mod property;

pub use amenities::{Amenity, AmenitiesBlock, AmenitiesPage};
pub use banks::{Bank, BankBlock, BanksPage};
pub use faq::{Faq, FaqPage};
pub use footer::{FooterData, GeneralSettings, SocialIcon, SocialNetwork};
pub use layouts::{FloorPlansPage, Layout, UnitLayoutsPage};
pub use location::{LocationAdvantage, LocationAdvantagesPage, LocationMap};
pub use pricing::{PropertyPrice, PropertyPricesPage};
pub use property::{PropertyDetails, PropertyDetailsPage};

use serde::{Deserialize, Deserializer};

/// Section heading block. Some resources send one, others a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageHeading {
    #[serde(default, deserialize_with = "opt_text")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub subheading: Option<String>,
}

/// Heading of the first page block, or `fallback`.
pub(crate) fn first_heading(pages: &[PageHeading], fallback: &str) -> String {
    pages
        .first()
        .and_then(|p| p.heading.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Decode a string, number or bool as text; `null` becomes `""`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Like [`text`] but blank values become `None`.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let text = match value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected text, got {}",
                other
            )))
        }
    };
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Decode a number, numeric string or `null`.
pub(crate) fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
