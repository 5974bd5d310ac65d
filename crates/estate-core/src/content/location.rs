use serde::Deserialize;

use super::{first_heading, opt_text, text, PageHeading};
use crate::resource::{Content, Resource};

/// Embedded map block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationMap {
    #[serde(default, deserialize_with = "opt_text")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub subheading: Option<String>,
    /// Map embed markup (usually an iframe)
    #[serde(default, deserialize_with = "opt_text")]
    pub map: Option<String>,
}

impl LocationMap {
    pub fn heading(&self) -> String {
        self.heading
            .clone()
            .unwrap_or_else(|| "Prime Location".to_string())
    }
}

impl Content for LocationMap {
    const RESOURCE: Resource = Resource::LocationMap;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationAdvantagesPage {
    #[serde(default)]
    pub page: Vec<PageHeading>,
    #[serde(default)]
    pub location_advantages: Vec<LocationAdvantage>,
}

/// A nearby landmark card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationAdvantage {
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default, deserialize_with = "text")]
    pub distance: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
}

impl LocationAdvantagesPage {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Location Highlights")
    }
}

impl Content for LocationAdvantagesPage {
    const RESOURCE: Resource = Resource::LocationAdvantages;
}
