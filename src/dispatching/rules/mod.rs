//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Critical path**: MOST_DEPENDENTS
//! - **Workload**: HARDEST_FIRST, FEWEST_CREDITS
//! - **Order**: CATALOG_ORDER
//!
//! # Score Convention
//! All rules return lower scores for higher priority courses.

use super::{CourseRule, PlanningContext, RuleScore};
use crate::models::Course;

// ======================== Critical-path rules ========================

/// Most Dependents.
///
/// Prioritizes courses that are a direct prerequisite of the most other
/// courses, unblocking the most future work. Used by the fastest mode.
#[derive(Debug, Clone, Copy)]
pub struct MostDependents;

impl CourseRule for MostDependents {
    fn name(&self) -> &'static str {
        "MOST_DEPENDENTS"
    }

    fn evaluate(&self, course: &Course, context: &PlanningContext) -> RuleScore {
        let count = context
            .dependent_counts
            .get(&course.id)
            .copied()
            .unwrap_or(0);
        -(count as f64)
    }

    fn description(&self) -> &'static str {
        "Most Direct Dependents"
    }
}

// ======================== Workload rules ========================

/// Hardest First.
///
/// Front-loads difficulty: harder courses are packed before easier ones
/// among those eligible. Used by the balanced mode.
#[derive(Debug, Clone, Copy)]
pub struct HardestFirst;

impl CourseRule for HardestFirst {
    fn name(&self) -> &'static str {
        "HARDEST_FIRST"
    }

    fn evaluate(&self, course: &Course, _context: &PlanningContext) -> RuleScore {
        -(course.difficulty as f64)
    }

    fn description(&self) -> &'static str {
        "Highest Difficulty First"
    }
}

/// Fewest Credits.
///
/// Prefers lighter courses, which tends to fit more courses under the cap.
#[derive(Debug, Clone, Copy)]
pub struct FewestCredits;

impl CourseRule for FewestCredits {
    fn name(&self) -> &'static str {
        "FEWEST_CREDITS"
    }

    fn evaluate(&self, course: &Course, _context: &PlanningContext) -> RuleScore {
        course.credits as f64
    }

    fn description(&self) -> &'static str {
        "Fewest Credits First"
    }
}

// ======================== Order rules ========================

/// Catalog Order.
///
/// Scores by position in the topological order. Courses missing from the
/// context sort last.
#[derive(Debug, Clone, Copy)]
pub struct CatalogOrder;

impl CourseRule for CatalogOrder {
    fn name(&self) -> &'static str {
        "CATALOG_ORDER"
    }

    fn evaluate(&self, course: &Course, context: &PlanningContext) -> RuleScore {
        context
            .topo_positions
            .get(&course.id)
            .map(|&p| p as f64)
            .unwrap_or(f64::MAX)
    }

    fn description(&self) -> &'static str {
        "Topological Order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_dependents() {
        let ctx = PlanningContext::default()
            .with_dependents("A", 3)
            .with_dependents("B", 1);
        let a = Course::new("A", 6);
        let b = Course::new("B", 6);
        let c = Course::new("C", 6);

        assert!(MostDependents.evaluate(&a, &ctx) < MostDependents.evaluate(&b, &ctx));
        assert_eq!(MostDependents.evaluate(&c, &ctx), 0.0);
    }

    #[test]
    fn test_hardest_first() {
        let ctx = PlanningContext::default();
        let hard = Course::new("H", 6).with_difficulty(5);
        let easy = Course::new("E", 6).with_difficulty(1);
        assert!(HardestFirst.evaluate(&hard, &ctx) < HardestFirst.evaluate(&easy, &ctx));
    }

    #[test]
    fn test_fewest_credits() {
        let ctx = PlanningContext::default();
        let light = Course::new("L", 3);
        let heavy = Course::new("H", 12);
        assert!(FewestCredits.evaluate(&light, &ctx) < FewestCredits.evaluate(&heavy, &ctx));
    }

    #[test]
    fn test_catalog_order() {
        let ctx = PlanningContext::default()
            .with_topo_position("A", 0)
            .with_topo_position("B", 4);
        assert_eq!(CatalogOrder.evaluate(&Course::new("A", 1), &ctx), 0.0);
        assert_eq!(CatalogOrder.evaluate(&Course::new("B", 1), &ctx), 4.0);
        assert_eq!(CatalogOrder.evaluate(&Course::new("Z", 1), &ctx), f64::MAX);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(MostDependents.name(), "MOST_DEPENDENTS");
        assert_eq!(HardestFirst.description(), "Highest Difficulty First");
        assert_eq!(FewestCredits.name(), "FEWEST_CREDITS");
        assert_eq!(CatalogOrder.description(), "Topological Order");
    }
}
