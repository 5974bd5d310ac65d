use serde::Deserialize;

use super::{first_heading, text, PageHeading};
use crate::html::strip_html;
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FaqPage {
    #[serde(default)]
    pub page: Vec<PageHeading>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Faq {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub faq_title: String,
    /// Answer as HTML
    #[serde(default, deserialize_with = "text")]
    pub faq_content: String,
}

impl FaqPage {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Frequently Asked Questions")
    }
}

impl Faq {
    /// Answer with markup removed.
    pub fn answer_text(&self) -> String {
        strip_html(&self.faq_content)
    }
}

impl Content for FaqPage {
    const RESOURCE: Resource = Resource::Faq;
}
