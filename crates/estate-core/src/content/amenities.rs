use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use super::{opt_text, text, PageHeading};
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AmenitiesPage {
    #[serde(default)]
    pub amenities: AmenitiesBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AmenitiesBlock {
    #[serde(default)]
    pub page: PageHeading,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Amenity {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub amenity_name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_amenities_photo: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub updated_at: Option<String>,
}

impl AmenitiesPage {
    pub fn heading(&self) -> String {
        self.amenities
            .page
            .heading
            .clone()
            .unwrap_or_else(|| "Amenities".to_string())
    }

    pub fn subheading(&self) -> Option<&str> {
        self.amenities.page.subheading.as_deref()
    }
}

impl Amenity {
    /// `updated_at` as a day/month/year date.
    ///
    /// Unparseable timestamps are returned verbatim.
    pub fn updated_on(&self) -> Option<String> {
        let raw = self.updated_at.as_deref()?.trim();
        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
        Some(match date {
            Ok(date) => date.format("%-d/%-m/%Y").to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

impl Content for AmenitiesPage {
    const RESOURCE: Resource = Resource::Amenities;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_block() {
        let json = r#"{
            "amenities": {
                "page": {"heading": "World-class Amenities", "subheading": null},
                "amenities": [
                    {"id": 1, "amenity_name": "Pool", "property_amenities_photo": "https://cdn/x.png",
                     "updated_at": "2024-03-05T10:20:30.000000Z"}
                ]
            }
        }"#;
        let page: AmenitiesPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.heading(), "World-class Amenities");
        assert_eq!(page.subheading(), None);
        assert_eq!(page.amenities.amenities[0].amenity_name, "Pool");
        assert_eq!(page.amenities.amenities[0].updated_on().as_deref(), Some("5/3/2024"));
    }

    #[test]
    fn updated_on_formats() {
        let mut amenity = Amenity {
            updated_at: Some("2023-12-31 23:59:59".to_string()),
            ..Default::default()
        };
        assert_eq!(amenity.updated_on().as_deref(), Some("31/12/2023"));

        amenity.updated_at = Some("2023-01-09".to_string());
        assert_eq!(amenity.updated_on().as_deref(), Some("9/1/2023"));

        amenity.updated_at = Some("last week".to_string());
        assert_eq!(amenity.updated_on().as_deref(), Some("last week"));

        amenity.updated_at = None;
        assert_eq!(amenity.updated_on(), None);
    }

    #[test]
    fn empty_payload_uses_fallback() {
        let page: AmenitiesPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.heading(), "Amenities");
        assert!(page.amenities.amenities.is_empty());
    }
}
