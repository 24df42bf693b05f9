//! Hook evaluation engine
//!
//! A single-pass, side-effect-free transformation: (definition, context,
//! data snapshot) → ordered card list. The engine keeps no state across
//! invocations; concurrent evaluations only share the data port handle.

use crate::context::EvaluationContext;
use crate::error::EvalResult;
use octofhir_cds_types::{Card, HookCondition, HookDefinition};
use tracing::debug;

/// The hook evaluation engine.
///
/// Orchestrates condition evaluation (AND aggregation with first-false
/// short-circuit) and ordered card collection over a hook definition.
#[derive(Debug, Default)]
pub struct CdsEngine;

impl CdsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a hook definition against the given context.
    ///
    /// Returns the cards produced by the action sequence when the
    /// condition sequence is satisfied, in definition order; otherwise an
    /// empty list. Actions that produce no card are skipped without
    /// halting the rest of the sequence.
    pub async fn evaluate_hook(
        &self,
        definition: &HookDefinition,
        ctx: &EvaluationContext,
    ) -> EvalResult<Vec<Card>> {
        if !self.evaluate_conditions(&definition.conditions, ctx).await? {
            debug!(hook = %definition.id, "conditions not satisfied");
            return Ok(Vec::new());
        }

        let mut cards = Vec::new();
        for action in &definition.actions {
            if let Some(card) = self.execute_action(&action.kind, ctx) {
                cards.push(card);
            }
        }

        debug!(hook = %definition.id, cards = cards.len(), "hook evaluated");
        Ok(cards)
    }

    /// Aggregate a condition sequence with AND semantics.
    ///
    /// An empty sequence always evaluates true ("always trigger").
    /// Evaluation short-circuits on the first false, so no data is fetched
    /// for conditions after it.
    pub async fn evaluate_conditions(
        &self,
        conditions: &[HookCondition],
        ctx: &EvaluationContext,
    ) -> EvalResult<bool> {
        for condition in conditions {
            if !self.evaluate_condition(&condition.kind, ctx).await? {
                debug!(condition = condition.kind.type_name(), "first false condition");
                return Ok(false);
            }
        }
        Ok(true)
    }
}
