use serde::Deserialize;

use super::{opt_text, text};
use crate::resource::{Content, Resource};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FooterData {
    #[serde(default)]
    pub social_icons: Vec<SocialIcon>,
    #[serde(default)]
    pub g_setting: GeneralSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialIcon {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    /// Font Awesome class, e.g. `fab fa-instagram`
    #[serde(default, deserialize_with = "text")]
    pub social_icon: String,
    #[serde(default, deserialize_with = "text")]
    pub social_url: String,
}

/// Site-wide footer settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneralSettings {
    #[serde(default, deserialize_with = "opt_text")]
    pub footer_phone: Option<String>,
    #[serde(default, deserialize_with = "opt_text", alias = "footer_disclaimer")]
    pub footer_disclamer: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub footer_agent_rera: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub footer_copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Facebook,
    LinkedIn,
    Instagram,
    YouTube,
    Twitter,
    Unknown,
}

impl SocialNetwork {
    pub fn from_icon_class(class: &str) -> Self {
        match class.trim() {
            "fab fa-facebook-f" => SocialNetwork::Facebook,
            "fab fa-linkedin-in" => SocialNetwork::LinkedIn,
            "fab fa-instagram" => SocialNetwork::Instagram,
            "fab fa-youtube" => SocialNetwork::YouTube,
            "fab fa-twitter" => SocialNetwork::Twitter,
            _ => SocialNetwork::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::LinkedIn => "LinkedIn",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::YouTube => "YouTube",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Unknown => "Link",
        }
    }

    /// Short glyph shown inside the round social button.
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "f",
            SocialNetwork::LinkedIn => "in",
            SocialNetwork::Instagram => "ig",
            SocialNetwork::YouTube => "\u{25B6}",
            SocialNetwork::Twitter => "x",
            SocialNetwork::Unknown => "\u{26A0}",
        }
    }
}

impl SocialIcon {
    pub fn network(&self) -> SocialNetwork {
        SocialNetwork::from_icon_class(&self.social_icon)
    }
}

impl GeneralSettings {
    /// `tel:` link for the footer phone.
    pub fn phone_href(&self) -> Option<String> {
        self.footer_phone.as_ref().map(|p| format!("tel:{}", p.trim()))
    }
}

impl Content for FooterData {
    const RESOURCE: Resource = Resource::Footer;
}
