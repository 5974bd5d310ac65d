use serde::Deserialize;

use super::{opt_text, text};
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyDetailsPage {
    #[serde(default)]
    pub property_details: PropertyDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyDetails {
    #[serde(default, deserialize_with = "text")]
    pub property_name: String,
    #[serde(default, deserialize_with = "text")]
    pub property_type: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub og_image: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub builder_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub sub_location: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_price: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_price_range: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_type_price_range: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_bedroom: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_bathroom: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_built_year: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_garage: Option<String>,
    /// HTML
    #[serde(default, deserialize_with = "text")]
    pub property_description: String,
    /// HTML
    #[serde(default, deserialize_with = "text")]
    pub property_specification: String,
    /// Map embed HTML
    #[serde(default, deserialize_with = "opt_text")]
    pub property_map: Option<String>,
}

impl PropertyDetails {
    /// Label/value rows for the info tab. Missing values read "N/A".
    pub fn info_rows(&self) -> Vec<(&'static str, String)> {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
        vec![
            ("Builder", or_na(&self.builder_name)),
            ("Size Range", or_na(&self.property_price_range)),
            ("Type", or_na(&self.property_type_price_range)),
            ("Bedrooms", or_na(&self.property_bedroom)),
            ("Bathrooms", or_na(&self.property_bathroom)),
            ("Built Year", or_na(&self.property_built_year)),
            ("Garage", or_na(&self.property_garage)),
        ]
    }

    pub fn has_map(&self) -> bool {
        self.property_map.is_some()
    }
}

impl Content for PropertyDetailsPage {
    const RESOURCE: Resource = Resource::PropertyDetails;
}
