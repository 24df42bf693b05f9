//! Hook actions
//!
//! An action describes one card the hook proposes to render. Unknown action
//! types deserialize to [`ActionKind::Unknown`] and produce no card.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry in a hook definition's action sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl From<ActionKind> for HookAction {
    fn from(kind: ActionKind) -> Self {
        Self { id: None, kind }
    }
}

/// The closed set of action types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ActionKind {
    InfoCard { parameters: AlertCardParams },
    WarningCard { parameters: AlertCardParams },
    CriticalCard { parameters: AlertCardParams },
    Suggestion { parameters: SuggestionParams },
    Link { parameters: LinkParams },
    #[serde(other)]
    Unknown,
}

impl ActionKind {
    /// Wire name of the action type, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InfoCard { .. } => "info-card",
            Self::WarningCard { .. } => "warning-card",
            Self::CriticalCard { .. } => "critical-card",
            Self::Suggestion { .. } => "suggestion",
            Self::Link { .. } => "link",
            Self::Unknown => "unknown",
        }
    }
}

/// Parameters for the plain alert cards (info / warning / critical).
///
/// Missing parameters fall back to documented defaults: "Clinical Alert"
/// summary, empty detail, "Clinical Decision Support" source label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertCardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "sourceUrl", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "sourceIcon", skip_serializing_if = "Option::is_none")]
    pub source_icon: Option<String>,
}

impl AlertCardParams {
    pub fn new(
        summary: impl Into<String>,
        detail: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            summary: Some(summary.into()),
            detail: Some(detail.into()),
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// Parameters for `suggestion` actions: one nested proposed action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Proposed action type, "create" when omitted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// Proposed resource payload, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,
}

impl SuggestionParams {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

/// Parameters for `link` actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Link type, "absolute" when omitted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(rename = "appContext", skip_serializing_if = "Option::is_none")]
    pub app_context: Option<String>,
}
