//! Action execution
//!
//! Renders one action into at most one card. Unknown action types produce
//! no card. Every card and every nested suggestion entry gets a freshly
//! generated v4 uuid, so identifiers never repeat across calls or within
//! one card tree.

use crate::context::EvaluationContext;
use crate::engine::CdsEngine;
use octofhir_cds_types::{
    ActionKind, AlertCardParams, Card, CardLink, CardSource, Indicator, LinkParams, SuggestedAction,
    Suggestion, SuggestionParams,
};
use serde_json::Value;
use uuid::Uuid;

impl CdsEngine {
    /// Execute a single action. `None` means no card is produced, which
    /// never halts processing of subsequent actions.
    pub fn execute_action(&self, kind: &ActionKind, _ctx: &EvaluationContext) -> Option<Card> {
        match kind {
            ActionKind::InfoCard { parameters } => Some(alert_card(Indicator::Info, parameters)),
            ActionKind::WarningCard { parameters } => {
                Some(alert_card(Indicator::Warning, parameters))
            }
            ActionKind::CriticalCard { parameters } => {
                Some(alert_card(Indicator::Critical, parameters))
            }
            ActionKind::Suggestion { parameters } => Some(suggestion_card(parameters)),
            ActionKind::Link { parameters } => Some(link_card(parameters)),
            ActionKind::Unknown => None,
        }
    }
}

fn alert_card(indicator: Indicator, parameters: &AlertCardParams) -> Card {
    Card {
        uuid: Uuid::new_v4(),
        summary: parameters
            .summary
            .clone()
            .unwrap_or_else(|| "Clinical Alert".to_string()),
        detail: parameters.detail.clone().unwrap_or_default(),
        indicator,
        source: Some(CardSource {
            label: parameters
                .source
                .clone()
                .unwrap_or_else(|| "Clinical Decision Support".to_string()),
            url: parameters.source_url.clone().unwrap_or_default(),
            icon: parameters.source_icon.clone().unwrap_or_default(),
        }),
        suggestions: Vec::new(),
        links: Vec::new(),
    }
}

fn suggestion_card(parameters: &SuggestionParams) -> Card {
    let description = parameters.description.clone().unwrap_or_default();
    Card {
        uuid: Uuid::new_v4(),
        summary: parameters
            .label
            .clone()
            .unwrap_or_else(|| "Clinical Suggestion".to_string()),
        detail: description.clone(),
        indicator: Indicator::Info,
        source: None,
        suggestions: vec![Suggestion {
            label: parameters
                .label
                .clone()
                .unwrap_or_else(|| "Suggestion".to_string()),
            uuid: Uuid::new_v4(),
            actions: vec![SuggestedAction {
                action_type: parameters
                    .action_type
                    .clone()
                    .unwrap_or_else(|| "create".to_string()),
                description,
                resource: parameters
                    .resource
                    .clone()
                    .unwrap_or_else(|| Value::Object(Default::default())),
            }],
        }],
        links: Vec::new(),
    }
}

fn link_card(parameters: &LinkParams) -> Card {
    let url = parameters.url.clone().unwrap_or_default();
    Card {
        uuid: Uuid::new_v4(),
        summary: parameters
            .label
            .clone()
            .unwrap_or_else(|| "External Resource".to_string()),
        detail: format!("Link to: {url}"),
        indicator: Indicator::Info,
        source: None,
        suggestions: Vec::new(),
        links: vec![CardLink {
            label: parameters
                .label
                .clone()
                .unwrap_or_else(|| "Open Link".to_string()),
            url,
            link_type: parameters
                .link_type
                .clone()
                .unwrap_or_else(|| "absolute".to_string()),
            app_context: parameters.app_context.clone().unwrap_or_default(),
        }],
    }
}
