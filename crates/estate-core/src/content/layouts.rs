use serde::Deserialize;

use super::{first_heading, opt_text, text, PageHeading};
use crate::resource::{Content, Resource};

/// A floor plan or unit layout card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Layout {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub layout_name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub layout_image: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit_layout_heading: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit_layout_carpet_area: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit_layout_price: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub unit_layout_description: Option<String>,
}

impl Layout {
    /// Image URL with the upstream double slash in `//uploads` collapsed.
    pub fn image_url(&self) -> Option<String> {
        self.layout_image
            .as_deref()
            .map(|url| url.replacen("//uploads", "/uploads", 1))
    }

    pub fn carpet_area_display(&self) -> &str {
        self.unit_layout_carpet_area.as_deref().unwrap_or("N/A")
    }

    pub fn price_display(&self) -> String {
        match &self.unit_layout_price {
            Some(price) => format!("\u{20B9}{}", price),
            None => "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FloorPlansPage {
    #[serde(default)]
    pub page: Vec<PageHeading>,
    #[serde(default, rename = "Floor_plans", alias = "floor_plans")]
    pub floor_plans: Vec<Layout>,
}

impl FloorPlansPage {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Floor Plans")
    }
}

impl Content for FloorPlansPage {
    const RESOURCE: Resource = Resource::FloorLayout;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnitLayoutsPage {
    #[serde(default)]
    pub page: Vec<PageHeading>,
    #[serde(default)]
    pub unit_layout: Vec<Layout>,
}

impl UnitLayoutsPage {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Unit Layouts")
    }
}

impl Content for UnitLayoutsPage {
    const RESOURCE: Resource = Resource::UnitLayout;
}
