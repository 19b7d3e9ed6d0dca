//! Dispatching rules and rule engine for semester packing.
//!
//! When more eligible courses compete for a semester than its credit cap
//! admits, the planner walks them in the order produced here. Rules score
//! courses; the engine combines rules sequentially and sorts stably, so
//! courses tied on every rule keep their topological order.
//!
//! # Usage
//!
//! ```
//! use u_curriculum::dispatching::{rules, OptimizeMode, RuleEngine};
//!
//! let fastest = RuleEngine::for_mode(OptimizeMode::Fastest);
//! assert_eq!(fastest.rule_names(), vec!["MOST_DEPENDENTS"]);
//!
//! let custom = RuleEngine::new()
//!     .with_rule(rules::HardestFirst)
//!     .with_rule(rules::FewestCredits);
//! assert_eq!(custom.len(), 2);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::PlanningContext;
pub use engine::{OptimizeMode, RuleEngine};

use crate::models::Course;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (packed first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates course priority within a semester.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules that prefer "more of X"
/// return the negated quantity.
pub trait CourseRule: Send + Sync + Debug {
    /// Rule name (e.g., "MOST_DEPENDENTS").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a course in the current planning context.
    fn evaluate(&self, course: &Course, context: &PlanningContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
