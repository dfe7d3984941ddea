//! Turns a schemaless page content document into display sections, picking
//! the layout from the shape of each value.

use serde_json::Value;

use crate::models::{ContentDocument, ContentValue};

/// Holds the hero image url; never rendered as a section.
pub const BACKGROUND_IMAGE_KEY: &str = "background_image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Paragraph { label: String, text: String },
    List { label: String, items: Vec<String> },
    Grid { label: String, cards: Vec<Card> },
    /// Shown in place of everything else when a page has no content.
    Placeholder,
}

impl Section {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Paragraph { label, .. } | Self::List { label, .. } | Self::Grid { label, .. } => {
                Some(label)
            }
            Self::Placeholder => None,
        }
    }
}

/// `about_dr_odon` -> `About Dr Odon`
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_sections(content: Option<&ContentDocument>) -> Vec<Section> {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return vec![Section::Placeholder];
    };

    content
        .iter()
        .filter(|(key, _)| *key != BACKGROUND_IMAGE_KEY)
        .filter_map(|(key, value)| {
            let label = humanize_key(key);

            match value {
                ContentValue::Text(text) => Some(Section::Paragraph {
                    label,
                    text: text.clone(),
                }),
                ContentValue::List(items) => Some(Section::List {
                    label,
                    items: items.clone(),
                }),
                ContentValue::Group(entries) => Some(Section::Grid {
                    label,
                    cards: entries
                        .iter()
                        .map(|(sub_key, value)| Card {
                            label: humanize_key(sub_key),
                            text: match value {
                                Value::String(text) => text.clone(),
                                other => other.to_string(),
                            },
                        })
                        .collect(),
                }),
                ContentValue::Other(_) => None,
            }
        })
        .collect()
}
