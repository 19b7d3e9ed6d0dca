//! Catalog and schedule validation.
//!
//! Two independent checks:
//!
//! - [`validate_catalog`] checks the structural integrity of course input
//!   before planning. Detects:
//!   - Duplicate IDs
//!   - Prerequisites that reference unknown courses
//!   - Zero-credit or zero-difficulty courses
//!   - Courses offered in no season
//! - [`validate_schedule`] re-checks a finished plan against the catalog
//!   without trusting the planner's bookkeeping: coverage, prerequisite
//!   ordering, and the credit cap.
//!
//! Prerequisite cycles are not a catalog error; the dependency graph
//! reports them when ordering courses.

use std::collections::{HashMap, HashSet};

use crate::models::{Course, CourseCatalog, Schedule};

/// Catalog validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A catalog validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A course lists a prerequisite that isn't in the catalog.
    UnknownPrerequisite,
    /// A course carries no credits.
    ZeroCredits,
    /// A course has a difficulty rating of zero.
    ZeroDifficulty,
    /// A course is offered in no season.
    NoOfferings,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates course input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for course in courses {
        if !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCredits,
                format!("Course '{}' has zero credits", course.id),
            ));
        }
        if course.difficulty == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDifficulty,
                format!("Course '{}' has zero difficulty", course.id),
            ));
        }
        if course.offered.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoOfferings,
                format!("Course '{}' is not offered in any season", course.id),
            ));
        }
    }

    for course in courses {
        for prereq in &course.prereqs {
            if !ids.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' references unknown prerequisite '{}'",
                        course.id, prereq
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Outcome of schedule validation.
///
/// An invalid schedule is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Whether every check passed.
    pub valid: bool,
    /// "Schedule is valid", or the first failure found.
    pub message: String,
}

impl ScheduleReport {
    fn pass() -> Self {
        Self {
            valid: true,
            message: "Schedule is valid".to_string(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validates a plan given as plain course lists.
///
/// Checks, in order, stopping at the first failure:
/// 1. Coverage: every catalog course appears exactly once, and nothing else does.
/// 2. Ordering: each prerequisite sits in a strictly earlier semester.
/// 3. Credit cap: no semester exceeds `max_credits`.
///
/// # Example
/// ```
/// use u_curriculum::models::{Course, CourseCatalog};
/// use u_curriculum::validation::validate_schedule;
///
/// let catalog = CourseCatalog::new(vec![
///     Course::new("A", 12),
///     Course::new("B", 12).with_prereq("A"),
/// ]).unwrap();
///
/// let a = "A".to_string();
/// let b = "B".to_string();
///
/// let ok = validate_schedule(&catalog, &[vec![a.clone()], vec![b.clone()]], 24);
/// assert!(ok.is_valid());
///
/// let bad = validate_schedule(&catalog, &[vec![a, b]], 24);
/// assert_eq!(bad.message, "Course B scheduled before prerequisite A");
/// ```
pub fn validate_schedule(
    catalog: &CourseCatalog,
    semesters: &[Vec<String>],
    max_credits: u32,
) -> ScheduleReport {
    // Coverage
    let mut placed: HashMap<&str, usize> = HashMap::new();
    for (idx, semester) in semesters.iter().enumerate() {
        for course_id in semester {
            if !catalog.contains(course_id) {
                return ScheduleReport::fail(format!(
                    "Unknown course {} in semester {}",
                    course_id,
                    idx + 1
                ));
            }
            if placed.insert(course_id.as_str(), idx).is_some() {
                return ScheduleReport::fail(format!(
                    "Course {course_id} scheduled more than once"
                ));
            }
        }
    }

    let missing: Vec<&str> = catalog.ids().filter(|id| !placed.contains_key(id)).collect();
    if !missing.is_empty() {
        return ScheduleReport::fail(format!("Missing courses: {}", missing.join(", ")));
    }

    // Ordering
    for (idx, semester) in semesters.iter().enumerate() {
        for course_id in semester {
            let Some(course) = catalog.get(course_id) else {
                continue;
            };
            for prereq in &course.prereqs {
                let earlier = placed.get(prereq.as_str()).is_some_and(|&p| p < idx);
                if !earlier {
                    return ScheduleReport::fail(format!(
                        "Course {course_id} scheduled before prerequisite {prereq}"
                    ));
                }
            }
        }
    }

    // Credit cap
    for (idx, semester) in semesters.iter().enumerate() {
        let total: u64 = semester
            .iter()
            .filter_map(|c| catalog.credits_of(c))
            .map(u64::from)
            .sum();
        if total > u64::from(max_credits) {
            return ScheduleReport::fail(format!(
                "Semester {} exceeds credit limit: {} > {}",
                idx + 1,
                total,
                max_credits
            ));
        }
    }

    ScheduleReport::pass()
}

/// Validates a planner-produced [`Schedule`].
pub fn validate_plan(
    catalog: &CourseCatalog,
    schedule: &Schedule,
    max_credits: u32,
) -> ScheduleReport {
    validate_schedule(catalog, &schedule.course_lists(), max_credits)
}
