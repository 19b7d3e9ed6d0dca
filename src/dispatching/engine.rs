//! Rule engine for multi-criteria course prioritization.
//!
//! Rules are applied in sequence: the next rule is consulted only when
//! the previous one ties. Sorting is stable, so courses tied on every
//! rule keep their input (topological) order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{rules, CourseRule, PlanningContext, RuleScore};
use crate::models::Course;

/// Optimization heuristic for choosing among eligible courses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizeMode {
    /// Critical path first: courses with the most direct dependents.
    #[default]
    Fastest,
    /// Hardest courses first, to front-load difficulty.
    Balanced,
}

impl OptimizeMode {
    /// Lowercase mode name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizeMode::Fastest => "fastest",
            OptimizeMode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for OptimizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fastest" => Ok(OptimizeMode::Fastest),
            "balanced" => Ok(OptimizeMode::Balanced),
            other => Err(format!(
                "unknown optimize mode '{other}' (expected 'fastest' or 'balanced')"
            )),
        }
    }
}

/// A composable rule engine for course prioritization.
///
/// # Example
/// ```
/// use u_curriculum::dispatching::{rules, PlanningContext, RuleEngine};
/// use u_curriculum::models::Course;
///
/// let engine = RuleEngine::new().with_rule(rules::HardestFirst);
/// let easy = Course::new("EASY", 6);
/// let hard = Course::new("HARD", 6).with_difficulty(5);
///
/// let ranked = engine.rank(&[&easy, &hard], &PlanningContext::default());
/// assert_eq!(ranked[0].id, "HARD");
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn CourseRule>>,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine. With no rules, ranking keeps input order.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// The engine for an optimization mode.
    pub fn for_mode(mode: OptimizeMode) -> Self {
        match mode {
            OptimizeMode::Fastest => Self::new().with_rule(rules::MostDependents),
            OptimizeMode::Balanced => Self::new().with_rule(rules::HardestFirst),
        }
    }

    /// Appends a rule; later rules only break ties of earlier ones.
    pub fn with_rule<R: CourseRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the engine has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the courses sorted by priority (highest priority first).
    pub fn rank<'a>(&self, courses: &[&'a Course], context: &PlanningContext) -> Vec<&'a Course> {
        let mut ranked = courses.to_vec();
        if self.rules.is_empty() {
            return ranked;
        }
        ranked.sort_by(|a, b| self.compare(a, b, context));
        ranked
    }

    /// Returns the highest-priority course.
    pub fn select_best<'a>(
        &self,
        courses: &[&'a Course],
        context: &PlanningContext,
    ) -> Option<&'a Course> {
        self.rank(courses, context).first().copied()
    }

    /// Scores from each rule for a single course.
    pub fn evaluate(&self, course: &Course, context: &PlanningContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(course, context))
            .collect()
    }

    fn compare(&self, a: &Course, b: &Course, context: &PlanningContext) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a, context);
            let score_b = rule.evaluate(b, context);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }
        Ordering::Equal
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
