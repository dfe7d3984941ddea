use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn published_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub key_areas: String,
    pub icon: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "published_by_default")]
    pub is_published: bool,
    #[serde(default, with = "crate::models::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::models::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub key_areas: String,
    pub icon: String,
    pub order: i32,
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_areas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

/// Published projects by ascending `order`. Equal orders keep their input order.
pub fn visible_projects(projects: &[Project]) -> Vec<&Project> {
    let mut visible: Vec<&Project> = projects.iter().filter(|p| p.is_published).collect();
    visible.sort_by_key(|p| p.order);
    visible
}
