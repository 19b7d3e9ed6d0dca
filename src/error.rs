//! Error types for degree planning.
//!
//! Only conditions that abort a planning run are errors. An invalid
//! schedule found by the validator is reported as a
//! [`ScheduleReport`](crate::validation::ScheduleReport) instead.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationError;

/// Convenience alias used throughout the crate.
pub type PlanResult<T> = Result<T, PlanError>;

/// Fatal errors raised while building a catalog or a plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The prerequisite graph contains a cycle.
    ///
    /// `unresolved` lists every course that never reached in-degree zero,
    /// in catalog order. It includes the cycle members and everything that
    /// depends on them.
    #[error("Cycle detected in prerequisite graph among: {}", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },

    /// Remaining courses cannot be placed under the current constraints.
    #[error("Cannot schedule remaining courses within constraints ({reason}): {}", .unscheduled.join(", "))]
    SchedulingInfeasible {
        reason: InfeasibleReason,
        unscheduled: Vec<String>,
    },

    /// The catalog failed input validation.
    #[error("Malformed catalog: {}", join_messages(.errors))]
    MalformedCatalog { errors: Vec<ValidationError> },

    /// Planner configuration is out of range.
    #[error("Invalid planner configuration: {message}")]
    InvalidConfig { message: String },

    /// The catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why the planner gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Too many consecutive slots placed nothing.
    Stalled { attempts: usize },
    /// The hard cap on attempted slots was reached.
    SlotLimit { limit: usize },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled { attempts } => {
                write!(f, "no progress in {attempts} consecutive semesters")
            }
            Self::SlotLimit { limit } => write!(f, "exceeded {limit} semester slots"),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
