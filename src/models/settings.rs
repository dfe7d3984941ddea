use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site-wide settings. Every field falls back to the lab defaults when the
/// backend omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub logo_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub theme_colors: BTreeMap<String, String>,
    pub social_links: BTreeMap<String, String>,
    #[serde(with = "crate::models::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Odon Lab".to_string(),
            site_description:
                "Advancing virology and immunology research at the University of Strathclyde"
                    .to_string(),
            contact_email: "valerie.odon@strath.ac.uk".to_string(),
            contact_phone: "+44 (0)141 548 2000".to_string(),
            address: "161 Cathedral Street, Glasgow G4 0RE, Scotland, UK".to_string(),
            logo_url: None,
            hero_image_url: None,
            theme_colors: BTreeMap::from([
                ("primary".to_string(), "#3b82f6".to_string()),
                ("secondary".to_string(), "#8b5cf6".to_string()),
                ("accent".to_string(), "#10b981".to_string()),
            ]),
            social_links: BTreeMap::new(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_colors: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<BTreeMap<String, String>>,
}
