//! Greedy semester planner.
//!
//! # Algorithm
//!
//! 1. Order all courses topologically (fails on prerequisite cycles).
//! 2. For each calendar slot (fall first, alternating), collect the
//!    remaining courses whose prerequisites are all completed and that are
//!    offered in the slot's season.
//! 3. Rank them with the rule engine for the configured mode.
//! 4. Walk the ranking and add every course that still fits under the cap.
//! 5. Courses placed in a slot count as completed only from the next slot.
//!
//! Empty slots are skipped in the output but still advance the season.
//! Too many consecutive empty slots, or too many slots overall, abort the
//! run with [`PlanError::SchedulingInfeasible`].
//!
//! # Complexity
//! O(S · n · (p + log n)) where S = slots attempted, n = courses,
//! p = prerequisites per course.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dispatching::{OptimizeMode, PlanningContext, RuleEngine};
use crate::error::{InfeasibleReason, PlanError, PlanResult};
use crate::graph::DependencyGraph;
use crate::models::{
    CatalogMetadata, Course, CourseCatalog, Schedule, Season, Semester, DEFAULT_MAX_CREDITS,
};

/// Consecutive empty slots tolerated before giving up.
pub const DEFAULT_STALL_LIMIT: usize = 4;

/// Slot budget per course before the circuit breaker trips.
pub const DEFAULT_SLOT_LIMIT_FACTOR: usize = 3;

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Credit cap per semester.
    pub max_credits: u32,
    /// Heuristic for choosing among eligible courses.
    pub optimize: OptimizeMode,
    /// Consecutive empty slots tolerated while courses remain.
    pub stall_limit: usize,
    /// Total slots attempted = factor × course count (at least 1).
    pub slot_limit_factor: usize,
}

impl PlannerConfig {
    /// Creates a configuration with the given credit cap.
    pub fn new(max_credits: u32) -> Self {
        Self {
            max_credits,
            ..Default::default()
        }
    }

    /// Creates a configuration from catalog document metadata.
    pub fn from_metadata(metadata: &CatalogMetadata) -> Self {
        Self::new(metadata.max_credits_per_semester)
    }

    /// Sets the optimization mode.
    pub fn with_optimize(mut self, optimize: OptimizeMode) -> Self {
        self.optimize = optimize;
        self
    }

    /// Sets the consecutive empty-slot limit.
    pub fn with_stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    /// Sets the slot budget per course.
    pub fn with_slot_limit_factor(mut self, factor: usize) -> Self {
        self.slot_limit_factor = factor;
        self
    }

    /// Maximum slots attempted for a catalog of `course_count` courses.
    pub fn slot_limit(&self, course_count: usize) -> usize {
        self.slot_limit_factor.saturating_mul(course_count).max(1)
    }

    /// Checks that every limit is positive.
    pub fn validate(&self) -> PlanResult<()> {
        let problem = if self.max_credits == 0 {
            Some("max_credits must be positive")
        } else if self.stall_limit == 0 {
            Some("stall_limit must be positive")
        } else if self.slot_limit_factor == 0 {
            Some("slot_limit_factor must be positive")
        } else {
            None
        };

        match problem {
            Some(message) => Err(PlanError::InvalidConfig {
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_credits: DEFAULT_MAX_CREDITS,
            optimize: OptimizeMode::default(),
            stall_limit: DEFAULT_STALL_LIMIT,
            slot_limit_factor: DEFAULT_SLOT_LIMIT_FACTOR,
        }
    }
}

/// Greedy, prerequisite-aware semester planner.
///
/// # Example
///
/// ```
/// use u_curriculum::models::{Course, CourseCatalog};
/// use u_curriculum::scheduler::{PlannerConfig, SemesterPlanner};
///
/// let catalog = CourseCatalog::new(vec![
///     Course::new("A", 12),
///     Course::new("B", 12).with_prereq("A"),
///     Course::new("C", 12).with_prereq("A"),
///     Course::new("D", 12).with_prereqs(["B", "C"]),
/// ]).unwrap();
///
/// let schedule = SemesterPlanner::new(&catalog, PlannerConfig::new(24))
///     .build_schedule()
///     .unwrap();
/// assert_eq!(schedule.course_lists(), vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
/// ```
#[derive(Debug, Clone)]
pub struct SemesterPlanner<'a> {
    catalog: &'a CourseCatalog,
    config: PlannerConfig,
    rule_engine: RuleEngine,
}

impl<'a> SemesterPlanner<'a> {
    /// Creates a planner using the engine for the configured mode.
    pub fn new(catalog: &'a CourseCatalog, config: PlannerConfig) -> Self {
        let rule_engine = RuleEngine::for_mode(config.optimize);
        Self {
            catalog,
            config,
            rule_engine,
        }
    }

    /// Replaces the ranking engine (overrides the configured mode).
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Builds a schedule covering every course in the catalog.
    ///
    /// # Errors
    /// - [`PlanError::InvalidConfig`] for zero limits.
    /// - [`PlanError::CycleDetected`] if prerequisites form a cycle.
    /// - [`PlanError::SchedulingInfeasible`] if the remaining courses
    ///   cannot be placed. No partial schedule is returned.
    pub fn build_schedule(&self) -> PlanResult<Schedule> {
        self.config.validate()?;

        let graph = DependencyGraph::new(self.catalog);
        let order = graph.topological_order()?;
        let context = PlanningContext::from_graph(self.catalog, &graph, &order);

        let mut remaining: Vec<&'a Course> =
            order.iter().filter_map(|id| self.catalog.get(id)).collect();
        let mut completed: HashSet<&'a str> = HashSet::with_capacity(remaining.len());
        let mut schedule = Schedule::new();

        let slot_limit = self.config.slot_limit(self.catalog.len());
        let mut stalls = 0;
        let mut slot = 0;

        while !remaining.is_empty() {
            if slot >= slot_limit {
                return Err(infeasible(
                    InfeasibleReason::SlotLimit { limit: slot_limit },
                    &remaining,
                ));
            }

            let season = Season::for_slot(slot);

            let eligible: Vec<&'a Course> = remaining
                .iter()
                .copied()
                .filter(|c| {
                    c.is_offered_in(season)
                        && c.prereqs.iter().all(|p| completed.contains(p.as_str()))
                })
                .collect();

            let mut semester = Semester::new(slot + 1);
            let mut placed: Vec<&'a Course> = Vec::new();
            for course in self.rule_engine.rank(&eligible, &context) {
                if semester.credits.saturating_add(course.credits) <= self.config.max_credits {
                    semester.add_course(&course.id, course.credits);
                    placed.push(course);
                }
            }

            if placed.is_empty() {
                stalls += 1;
                tracing::warn!(
                    slot = slot + 1,
                    %season,
                    eligible = eligible.len(),
                    remaining = remaining.len(),
                    "no course could be placed this semester"
                );
                if stalls >= self.config.stall_limit {
                    return Err(infeasible(
                        InfeasibleReason::Stalled { attempts: stalls },
                        &remaining,
                    ));
                }
            } else {
                stalls = 0;
                remaining.retain(|c| !placed.iter().any(|p| p.id == c.id));
                completed.extend(placed.iter().map(|&c| c.id.as_str()));
                tracing::debug!(
                    semester = %semester.label(),
                    credits = semester.credits,
                    courses = placed.len(),
                    "semester planned"
                );
                schedule.add_semester(semester);
            }

            slot += 1;
        }

        tracing::info!(
            semesters = schedule.len(),
            slots = slot,
            mode = %self.config.optimize,
            "schedule complete"
        );
        Ok(schedule)
    }
}

fn infeasible(reason: InfeasibleReason, remaining: &[&Course]) -> PlanError {
    let unscheduled: Vec<String> = remaining.iter().map(|c| c.id.clone()).collect();
    tracing::warn!(%reason, unscheduled = unscheduled.len(), "planning aborted");
    PlanError::SchedulingInfeasible {
        reason,
        unscheduled,
    }
}

/// Builds a schedule with default stall and slot limits.
///
/// Shorthand for `SemesterPlanner::new(catalog, config).build_schedule()`.
pub fn build_schedule(
    catalog: &CourseCatalog,
    max_credits: u32,
    optimize: OptimizeMode,
) -> PlanResult<Schedule> {
    let config = PlannerConfig::new(max_credits).with_optimize(optimize);
    SemesterPlanner::new(catalog, config).build_schedule()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::graph::topological_order;
    use crate::validation::validate_plan;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn diamond() -> CourseCatalog {
        CourseCatalog::new(vec![
            Course::new("A", 12),
            Course::new("B", 12).with_prereq("A"),
            Course::new("C", 12).with_prereq("A"),
            Course::new("D", 12).with_prereqs(["B", "C"]),
        ])
        .unwrap()
    }

    fn lists(schedule: &Schedule) -> Vec<Vec<&str>> {
        schedule
            .iter()
            .map(|s| s.courses.iter().map(String::as_str).collect())
            .collect()
    }

    /// Random acyclic catalog in shuffled insertion order.
    fn random_catalog(rng: &mut SmallRng) -> CourseCatalog {
        let n = rng.random_range(1..=25);
        let mut courses = Vec::with_capacity(n);
        for i in 0..n {
            let credits = [3, 6, 12][rng.random_range(0..3)];
            let mut course = Course::new(format!("C{i:02}"), credits)
                .with_difficulty(rng.random_range(1..=5));
            for j in 0..i {
                if rng.random_bool(0.2) {
                    course = course.with_prereq(format!("C{j:02}"));
                }
            }
            course = match rng.random_range(0..4) {
                0 => course.only_in(Season::Fall),
                1 => course.only_in(Season::Spring),
                _ => course,
            };
            courses.push(course);
        }
        courses.shuffle(rng);
        CourseCatalog::new(courses).unwrap()
    }

    #[test]
    fn test_diamond_spans_three_semesters() {
        let catalog = diamond();
        let schedule = build_schedule(&catalog, 24, OptimizeMode::Fastest).unwrap();

        assert_eq!(lists(&schedule), vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
        assert_eq!(schedule.credits_per_semester(), vec![12, 24, 12]);
        assert!(validate_plan(&catalog, &schedule, 24).is_valid());
    }

    #[test]
    fn test_diamond_tight_cap() {
        let catalog = diamond();
        let schedule = build_schedule(&catalog, 12, OptimizeMode::Fastest).unwrap();

        assert_eq!(
            lists(&schedule),
            vec![vec!["A"], vec!["B"], vec!["C"], vec!["D"]]
        );
        assert!(validate_plan(&catalog, &schedule, 12).is_valid());
    }

    #[test]
    fn test_seasonal_chain() {
        let catalog = CourseCatalog::new(vec![
            Course::new("A", 12).only_in(Season::Fall),
            Course::new("B", 12).with_prereq("A").only_in(Season::Spring),
            Course::new("C", 12).with_prereq("B").only_in(Season::Fall),
        ])
        .unwrap();

        let schedule = build_schedule(&catalog, 24, OptimizeMode::Fastest).unwrap();
        assert_eq!(schedule.len(), 3);
        let labels: Vec<String> = schedule.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Fall 1", "Spring 1", "Fall 2"]);
        assert_eq!(lists(&schedule), vec![vec!["A"], vec!["B"], vec!["C"]]);
    }

    #[test]
    fn test_empty_slot_is_skipped() {
        let catalog = CourseCatalog::new(vec![
            Course::new("A", 12).only_in(Season::Spring),
            Course::new("B", 12).with_prereq("A").only_in(Season::Spring),
        ])
        .unwrap();

        let schedule = build_schedule(&catalog, 36, OptimizeMode::Fastest).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.semesters[0].number, 2);
        assert_eq!(schedule.semesters[0].label(), "Spring 1");
        assert_eq!(schedule.semesters[1].number, 4);
        assert_eq!(schedule.semesters[1].label(), "Spring 2");
        assert_eq!(schedule.span(), 4);
    }

    #[test]
    fn test_oversized_course_is_infeasible() {
        let catalog = CourseCatalog::new(vec![
            Course::new("SMALL", 6),
            Course::new("BIG", 48),
            Course::new("AFTER", 6).with_prereq("BIG"),
        ])
        .unwrap();

        match build_schedule(&catalog, 36, OptimizeMode::Fastest) {
            Err(PlanError::SchedulingInfeasible {
                reason,
                unscheduled,
            }) => {
                assert_eq!(reason, InfeasibleReason::Stalled { attempts: 4 });
                assert_eq!(unscheduled, vec!["BIG", "AFTER"]);
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_limit_circuit_breaker() {
        let catalog = CourseCatalog::new(vec![Course::new("BIG", 48)]).unwrap();
        let config = PlannerConfig::new(36)
            .with_stall_limit(100)
            .with_slot_limit_factor(2);

        match SemesterPlanner::new(&catalog, config).build_schedule() {
            Err(PlanError::SchedulingInfeasible { reason, .. }) => {
                assert_eq!(reason, InfeasibleReason::SlotLimit { limit: 2 });
            }
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_propagates() {
        let catalog = CourseCatalog::new(vec![
            Course::new("A", 6).with_prereq("B"),
            Course::new("B", 6).with_prereq("A"),
        ])
        .unwrap();
        assert!(matches!(
            build_schedule(&catalog, 36, OptimizeMode::Fastest),
            Err(PlanError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_invalid_config() {
        let catalog = diamond();
        for config in [
            PlannerConfig::new(0),
            PlannerConfig::new(24).with_stall_limit(0),
            PlannerConfig::new(24).with_slot_limit_factor(0),
        ] {
            assert!(matches!(
                SemesterPlanner::new(&catalog, config).build_schedule(),
                Err(PlanError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_fastest_vs_balanced() {
        // Only one 12-credit course fits per semester.
        let catalog = CourseCatalog::new(vec![
            Course::new("HARD", 12).with_difficulty(5),
            Course::new("GATE", 12).with_difficulty(1),
            Course::new("NEXT", 12).with_prereq("GATE"),
        ])
        .unwrap();

        let fastest = build_schedule(&catalog, 12, OptimizeMode::Fastest).unwrap();
        assert_eq!(fastest.semesters[0].courses, vec!["GATE"]);

        let balanced = build_schedule(&catalog, 12, OptimizeMode::Balanced).unwrap();
        assert_eq!(balanced.semesters[0].courses, vec!["HARD"]);
    }

    #[test]
    fn test_greedy_skips_course_that_does_not_fit() {
        let catalog = CourseCatalog::new(vec![
            Course::new("A", 12),
            Course::new("B", 18),
            Course::new("C", 6),
        ])
        .unwrap();

        let schedule = build_schedule(&catalog, 20, OptimizeMode::Fastest).unwrap();
        // A fits, B overflows, C still fits.
        assert_eq!(lists(&schedule), vec![vec!["A", "C"], vec!["B"]]);
    }

    #[test]
    fn test_custom_rule_engine() {
        let catalog = CourseCatalog::new(vec![Course::new("A", 12), Course::new("B", 6)]).unwrap();
        let engine = RuleEngine::new().with_rule(rules::FewestCredits);

        let schedule = SemesterPlanner::new(&catalog, PlannerConfig::new(12))
            .with_rule_engine(engine)
            .build_schedule()
            .unwrap();
        assert_eq!(lists(&schedule), vec![vec!["B"], vec!["A"]]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CourseCatalog::new(Vec::new()).unwrap();
        let schedule = build_schedule(&catalog, 36, OptimizeMode::Fastest).unwrap();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_config_defaults_and_serde() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_credits, DEFAULT_MAX_CREDITS);
        assert_eq!(config.optimize, OptimizeMode::Fastest);
        assert_eq!(config.stall_limit, DEFAULT_STALL_LIMIT);
        assert_eq!(config.slot_limit(10), 30);
        assert_eq!(config.slot_limit(0), 1);

        let parsed: PlannerConfig =
            serde_json::from_str(r#"{ "max_credits": 24, "optimize": "balanced" }"#).unwrap();
        assert_eq!(parsed.max_credits, 24);
        assert_eq!(parsed.optimize, OptimizeMode::Balanced);
        assert_eq!(parsed.slot_limit_factor, DEFAULT_SLOT_LIMIT_FACTOR);

        let meta = CatalogMetadata {
            university: "U".into(),
            max_credits_per_semester: 18,
        };
        assert_eq!(PlannerConfig::from_metadata(&meta).max_credits, 18);
    }

    #[test]
    fn test_random_catalogs_validate() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let catalog = random_catalog(&mut rng);

            let order = topological_order(&catalog).unwrap();
            assert_eq!(order.len(), catalog.len());
            for course in catalog.iter() {
                let at = order.iter().position(|c| *c == course.id).unwrap();
                for prereq in &course.prereqs {
                    let before = order.iter().position(|c| c == prereq).unwrap();
                    assert!(before < at, "{prereq} must precede {}", course.id);
                }
            }

            for mode in [OptimizeMode::Fastest, OptimizeMode::Balanced] {
                let schedule = build_schedule(&catalog, 36, mode).unwrap();
                let report = validate_plan(&catalog, &schedule, 36);
                assert!(report.is_valid(), "{}", report.message);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let catalog = random_catalog(&mut rng);
            for mode in [OptimizeMode::Fastest, OptimizeMode::Balanced] {
                let first = build_schedule(&catalog, 24, mode).unwrap();
                let second = build_schedule(&catalog, 24, mode).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}
