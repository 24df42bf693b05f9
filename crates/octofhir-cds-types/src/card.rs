//! Rendered advisory cards
//!
//! Cards are immutable once produced. Every card and every nested
//! suggestion entry carries a freshly generated v4 uuid; no identity
//! persists across evaluations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Urgency of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Info,
    Warning,
    Critical,
}

/// Attribution for an alert card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSource {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// A structured advisory message returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub uuid: Uuid,
    pub summary: String,
    pub detail: String,
    pub indicator: Indicator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CardSource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<CardLink>,
}

impl Card {
    /// A bare card with a fresh uuid and no source, suggestions or links.
    pub fn new(indicator: Indicator, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            summary: summary.into(),
            detail: detail.into(),
            indicator,
            source: None,
            suggestions: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// A nested action proposal on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub uuid: Uuid,
    pub actions: Vec<SuggestedAction>,
}

/// One proposed action inside a suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub description: String,
    pub resource: Value,
}

/// An external link attached to a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLink {
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: String,
    #[serde(rename = "appContext")]
    pub app_context: String,
}

/// The `{"cards": [...]}` envelope returned by hook execution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardResponse {
    pub cards: Vec<Card>,
}
