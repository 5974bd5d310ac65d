use serde::Deserialize;

use super::{opt_text, text, PageHeading};
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BanksPage {
    #[serde(default)]
    pub bank: BankBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BankBlock {
    #[serde(default)]
    pub page: PageHeading,
    #[serde(default)]
    pub banks: Vec<Bank>,
}

/// A home-loan partner bank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Bank {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "text")]
    pub bank_name: String,
    /// Link to the bank's home-loan page
    #[serde(default, deserialize_with = "opt_text")]
    pub bank_slug: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub property_bank_photo: Option<String>,
}

impl BanksPage {
    pub fn heading(&self) -> String {
        self.bank
            .page
            .heading
            .clone()
            .unwrap_or_else(|| "Approved Home Loan Partners".to_string())
    }

    pub fn banks(&self) -> &[Bank] {
        &self.bank.banks
    }
}

impl Content for BanksPage {
    const RESOURCE: Resource = Resource::Banks;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_banks() {
        let json = r#"{"bank": {"page": {"heading": ""}, "banks": [
            {"id": 3, "bank_name": "HDFC", "bank_slug": "https://hdfc.example", "property_bank_photo": null},
            {"id": "4", "bank_name": "SBI"}
        ]}}"#;
        let page: BanksPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.heading(), "Approved Home Loan Partners");
        assert_eq!(page.banks().len(), 2);
        assert_eq!(page.banks()[0].id, "3");
        assert_eq!(page.banks()[0].property_bank_photo, None);
        assert_eq!(page.banks()[1].bank_slug, None);
    }
}
