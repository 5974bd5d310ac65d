use serde::Deserialize;

use super::{first_heading, opt_number, text, PageHeading};
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyPricesPage {
    #[serde(default)]
    pub page: Vec<PageHeading>,
    #[serde(default)]
    pub property_prices: Vec<PropertyPrice>,
}

/// Price card for one configuration (e.g. "2 BHK").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyPrice {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub property_type: String,
    #[serde(default, deserialize_with = "text")]
    pub property_tower: String,
    #[serde(default, deserialize_with = "text")]
    pub property_carpet_sqft: String,
    #[serde(default, deserialize_with = "text")]
    pub carpet_unit_sqft: String,
    #[serde(default, deserialize_with = "opt_number")]
    pub property_carpet_sqm: Option<f64>,
    #[serde(default, deserialize_with = "text")]
    pub carpet_unit_sqm: String,
    #[serde(default, deserialize_with = "text")]
    pub property_price: String,
    #[serde(default, deserialize_with = "text")]
    pub price_unit: String,
}

impl PropertyPricesPage {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Premium Property Collection")
    }
}

impl PropertyPrice {
    /// `"<sqft> <unit> / <sqm to 2dp> <unit>"`; the metric half is omitted
    /// when the API sends no square-metre figure.
    pub fn carpet_area_display(&self) -> String {
        let imperial = join_unit(&self.property_carpet_sqft, &self.carpet_unit_sqft);
        match self.property_carpet_sqm {
            Some(sqm) => {
                let metric = join_unit(&format!("{:.2}", sqm), &self.carpet_unit_sqm);
                format!("{} / {}", imperial, metric)
            }
            None => imperial,
        }
    }

    pub fn price_display(&self) -> String {
        join_unit(&self.property_price, &self.price_unit)
    }
}

fn join_unit(value: &str, unit: &str) -> String {
    if unit.trim().is_empty() {
        value.to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

impl Content for PropertyPricesPage {
    const RESOURCE: Resource = Resource::PropertyPrices;
}
