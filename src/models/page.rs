use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ContentDocument;

/// Page that is always served at `/` and can never be deleted.
pub const HOME_PAGE: &str = "home";

fn published_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Uuid,
    pub page_name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: ContentDocument,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default = "published_by_default")]
    pub is_published: bool,
    #[serde(default, with = "crate::models::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::models::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCreate {
    pub page_name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: ContentDocument,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_published: bool,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

impl Page {
    pub fn is_home(&self) -> bool {
        self.page_name == HOME_PAGE
    }

    /// Hero image url, from the reserved `background_image` key or the older `hero_image`.
    pub fn hero_image(&self) -> Option<&str> {
        self.content
            .text("background_image")
            .or_else(|| self.content.text("hero_image"))
            .filter(|url| !url.trim().is_empty())
    }
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                title: None,
                subtitle: None,
                content: None,
                meta_description: None,
                meta_keywords: None,
                is_published: None,
            }
        )
    }
}
