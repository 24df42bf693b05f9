//! Comparison operators shared by the numeric condition types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of comparison operators accepted by numeric conditions.
///
/// Equality is tolerance-based: each condition type supplies its own
/// tolerance (one year for patient age, 0.01 for lab values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl ComparisonOp {
    /// Compare `actual` against `target`, treating values within
    /// `eq_tolerance` of each other as equal.
    pub fn compare(self, actual: Decimal, target: Decimal, eq_tolerance: Decimal) -> bool {
        match self {
            Self::Eq => (actual - target).abs() < eq_tolerance,
            Self::Gt => actual > target,
            Self::Ge => actual >= target,
            Self::Lt => actual < target,
            Self::Le => actual <= target,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
        };
        f.write_str(name)
    }
}

/// Operator for lab-value conditions: a numeric comparison, or `missing`,
/// which is satisfied exactly when no matching observation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabValueOp {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
    Missing,
}

impl LabValueOp {
    /// The underlying comparison, or `None` for `missing`.
    pub fn comparison(self) -> Option<ComparisonOp> {
        match self {
            Self::Eq => Some(ComparisonOp::Eq),
            Self::Gt => Some(ComparisonOp::Gt),
            Self::Ge => Some(ComparisonOp::Ge),
            Self::Lt => Some(ComparisonOp::Lt),
            Self::Le => Some(ComparisonOp::Le),
            Self::Missing => None,
        }
    }
}

/// Membership operator for code-list conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MembershipOp {
    #[default]
    In,
    NotIn,
}
