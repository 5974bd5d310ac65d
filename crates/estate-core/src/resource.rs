//! Content resources served by the site API.

use std::fmt;

use serde::de::DeserializeOwned;

/// One content endpoint of the site API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Amenities,
    Banks,
    Faq,
    Footer,
    LocationMap,
    LocationAdvantages,
    FloorLayout,
    UnitLayout,
    PropertyPrices,
    PropertyDetails,
}

impl Resource {
    /// Path segment under the API base.
    ///
    /// `propert-details` is spelled the way the API serves it.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Amenities => "amenities",
            Resource::Banks => "banks",
            Resource::Faq => "faq",
            Resource::Footer => "footer",
            Resource::LocationMap => "location-map",
            Resource::LocationAdvantages => "location-advantages",
            Resource::FloorLayout => "floor-layout",
            Resource::UnitLayout => "unit-layout",
            Resource::PropertyPrices => "property-prices",
            Resource::PropertyDetails => "propert-details",
        }
    }

    /// User-facing message for a failed load.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Resource::Amenities => "Failed to fetch amenities",
            Resource::Banks => "Failed to fetch banks data",
            Resource::Faq => "Failed to fetch FAQ data",
            Resource::Footer => "Failed to fetch footer data",
            Resource::LocationMap | Resource::LocationAdvantages => {
                "Failed to fetch location data"
            }
            Resource::FloorLayout => "Failed to fetch floor plans",
            Resource::UnitLayout => "Failed to fetch unit layouts",
            Resource::PropertyPrices => "Failed to fetch property prices",
            Resource::PropertyDetails => "Failed to fetch property details",
        }
    }

    pub fn all() -> &'static [Resource] {
        &[
            Resource::Amenities,
            Resource::Banks,
            Resource::Faq,
            Resource::Footer,
            Resource::LocationMap,
            Resource::LocationAdvantages,
            Resource::FloorLayout,
            Resource::UnitLayout,
            Resource::PropertyPrices,
            Resource::PropertyDetails,
        ]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A payload type bound to the resource that serves it.
pub trait Content: DeserializeOwned + Send + 'static {
    const RESOURCE: Resource;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<_> = Resource::all().iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Resource::all().len());
    }

    #[test]
    fn failure_messages_name_the_resource() {
        for resource in Resource::all() {
            assert!(resource.failure_message().starts_with("Failed to fetch "));
        }
        assert_eq!(Resource::Banks.failure_message(), "Failed to fetch banks data");
    }

    #[test]
    fn display_is_path() {
        assert_eq!(Resource::PropertyDetails.to_string(), "propert-details");
    }
}
